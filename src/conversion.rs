//! 단위 변환.
//!
//! 타입이 정해진 단위끼리는 [`convert`]를 쓴다. 종류가 다르면 빌드가 실패한다.
//!
//! ```compile_fail
//! use metric_toolbox::conversion::convert;
//! use metric_toolbox::units::{METRE, RADIAN};
//!
//! let _ = convert(METRE, RADIAN, 1.0);
//! ```
//!
//! ```compile_fail
//! use metric_toolbox::conversion::convert;
//! use metric_toolbox::units::{METRE, METRE_PER_SECOND};
//!
//! let _ = convert(METRE, METRE_PER_SECOND, 1.0);
//! ```
//!
//! 설정 파일이나 CLI처럼 런타임에 정해지는 단위는 [`try_convert`]로 변환하며,
//! 종류가 맞지 않으면 계산 전에 [`ConversionError::KindMismatch`]를 반환한다.

use std::ops::{Div, Mul};

use crate::catalog::UnitTable;
use crate::quantity::{CompatibleWith, Quantity, QuantityKind};
use crate::ratio::{DefinitionError, Ratio};
use crate::units::{AnyUnit, Unit};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 알 수 없는 물리량 이름
    UnknownKind(String),
    /// 서로 변환할 수 없는 물리량
    KindMismatch {
        from: QuantityKind,
        to: QuantityKind,
    },
    /// 잘못 정의된 단위
    Definition(DefinitionError),
    /// 이미 등록된 단위 기호
    DuplicateSymbol(String),
    /// 비어 있는 단위 이름 또는 기호
    EmptySymbol,
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::UnknownKind(k) => write!(f, "알 수 없는 물리량: {k}"),
            ConversionError::KindMismatch { from, to } => {
                write!(f, "물리량 불일치: {from} 단위를 {to} 단위로 변환할 수 없습니다")
            }
            ConversionError::Definition(e) => write!(f, "단위 정의 오류: {e}"),
            ConversionError::DuplicateSymbol(s) => write!(f, "이미 등록된 단위 기호: {s}"),
            ConversionError::EmptySymbol => write!(f, "단위 이름이나 기호가 비어 있습니다"),
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<DefinitionError> for ConversionError {
    fn from(value: DefinitionError) -> Self {
        ConversionError::Definition(value)
    }
}

/// 변환 결과로 쓰이는 부동소수 타입.
pub trait Real: Copy + Mul<Output = Self> + Div<Output = Self> {
    fn from_ratio(ratio: Ratio) -> Self;
}

impl Real for f64 {
    fn from_ratio(ratio: Ratio) -> Self {
        ratio.to_f64()
    }
}

/// 변환 입력값. 결과 타입은 f64보다 좁아지지 않는다.
///
/// 정수와 `f32`는 `f64`로 승격된다. f64보다 넓은 타입은 `Output = Self`로
/// 구현하면 자기 정밀도를 유지한다.
pub trait Scalar: Copy {
    type Output: Real;

    fn promote(self) -> Self::Output;
}

macro_rules! promote_to_f64 {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                type Output = f64;

                #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
                fn promote(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

promote_to_f64!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// `from` 배율을 `to` 배율로 나눈 정확한 변환 배율. 같은 배율이면 정확히 1이다.
pub fn conversion_ratio(from: Ratio, to: Ratio) -> Result<Ratio, DefinitionError> {
    if from == to {
        return Ok(Ratio::ONE);
    }
    from.checked_divide(to)
}

fn scale<V: Scalar>(from: Ratio, to: Ratio, value: V) -> V::Output {
    let factor = match conversion_ratio(from, to) {
        Ok(r) if r == Ratio::ONE => return value.promote(),
        Ok(r) => V::Output::from_ratio(r),
        Err(_) => {
            // 약분한 몫이 i64를 넘으면 출력 타입에서 나눈다
            tracing::debug!(%from, %to, "exact ratio overflowed, dividing in output type");
            V::Output::from_ratio(from) / V::Output::from_ratio(to)
        }
    };
    value.promote() * factor
}

/// `from` 단위의 값을 `to` 단위로 변환한다.
///
/// 물리량 종류가 같거나 어느 한쪽이 [`SI`](crate::units::SI)일 때만 컴파일된다.
///
/// ```
/// use metric_toolbox::conversion::convert;
/// use metric_toolbox::units::{METRE, NAUTICAL_MILE};
///
/// let nm: f64 = convert(METRE, NAUTICAL_MILE, 1000.0);
/// assert!((nm - 0.539_956_8).abs() < 1e-6);
/// ```
pub fn convert<F, T, V>(from: Unit<F>, to: Unit<T>, value: V) -> V::Output
where
    F: CompatibleWith<T>,
    T: Quantity,
    V: Scalar,
{
    scale(from.ratio(), to.ratio(), value)
}

/// 런타임 단위 변환. 종류를 먼저 검사하고, 맞지 않으면 계산하지 않는다.
pub fn try_convert<V: Scalar>(
    from: AnyUnit,
    to: AnyUnit,
    value: V,
) -> Result<V::Output, ConversionError> {
    if !from.kind().is_compatible_with(to.kind()) {
        tracing::debug!(from = %from.kind(), to = %to.kind(), "rejected conversion");
        return Err(ConversionError::KindMismatch {
            from: from.kind(),
            to: to.kind(),
        });
    }
    Ok(scale(from.ratio(), to.ratio(), value))
}

/// 문자열로 전달된 단위명을 단위표에서 찾은 뒤 환산한다.
///
/// 단위 문자열 예시는 `m`, `NM`, `km/h`, `kn`, `deg/s`, `si` 등을 사용할 수 있다.
pub fn convert_named(
    table: &UnitTable,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let from = lookup(table, from_unit_str)?;
    let to = lookup(table, to_unit_str)?;
    try_convert(from, to, value)
}

fn lookup(table: &UnitTable, s: &str) -> Result<AnyUnit, ConversionError> {
    table
        .lookup(s)
        .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Length;
    use crate::units::*;
    use approx::assert_relative_eq;

    #[test]
    fn identical_units_return_input_exactly() {
        let v = 0.1 + 0.2;
        assert_eq!(convert(DEGREE, DEGREE, v), v);
        assert_eq!(convert(KNOT, KNOT, v), v);
        assert_eq!(convert(SI, SI, v), v);
    }

    #[test]
    fn metre_is_the_si_base() {
        assert_eq!(convert(METRE, SI, 1.0), 1.0);
        assert_eq!(convert(SI, METRE, 1.0), 1.0);
    }

    #[test]
    fn derived_speed_units_are_consistent() {
        assert_relative_eq!(convert(METRE_PER_SECOND, KNOT, 1.0), 3600.0 / 1852.0);
        assert_relative_eq!(convert(KNOT, KILOMETRE_PER_HOUR, 1.0), 1.852);
    }

    #[test]
    fn integers_promote_to_f64() {
        let cm: Unit<Length> = Unit::from_ratio(1, 100);
        let v: f64 = convert(cm, METRE, 1000_i32);
        assert_relative_eq!(v, 10.0, max_relative = 1e-12);
        let w: f64 = convert(SECOND, MINUTE, 120_u8);
        assert_relative_eq!(w, 2.0, max_relative = 1e-12);
    }

    #[test]
    fn runtime_mismatch_is_rejected() {
        let err = try_convert(METRE.erase(), RADIAN.erase(), 1.0).unwrap_err();
        assert_eq!(
            err,
            ConversionError::KindMismatch {
                from: QuantityKind::Length,
                to: QuantityKind::Angle,
            }
        );
        assert!(err.to_string().contains("length"));
    }

    #[test]
    fn runtime_wildcard_is_accepted() {
        let v = try_convert(SI.erase(), NAUTICAL_MILE.erase(), 1852.0).unwrap();
        assert_relative_eq!(v, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn overflowing_ratio_falls_back_to_float_division() {
        let huge = AnyUnit::new(QuantityKind::Length, Ratio::new(i64::MAX, 1));
        let tiny = AnyUnit::new(QuantityKind::Length, Ratio::new(1, i64::MAX - 1));
        assert!(conversion_ratio(huge.ratio(), tiny.ratio()).is_err());
        let v = try_convert(huge, tiny, 1.0).unwrap();
        assert_relative_eq!(
            v,
            (i64::MAX as f64) * ((i64::MAX - 1) as f64),
            max_relative = 1e-12
        );
    }
}
