//! 단위 정의 및 표준 단위 카탈로그.
//!
//! 단위는 (물리량 종류, SI 대비 정확한 배율) 쌍이다. 새 단위는 다음처럼 정의한다.
//!
//! ```
//! use metric_toolbox::conversion::convert;
//! use metric_toolbox::quantity::Length;
//! use metric_toolbox::units::{Unit, METRE};
//!
//! const CENTIMETRE: Unit<Length> = Unit::from_ratio(1, 100);
//! let cm: f64 = convert(CENTIMETRE, METRE, 1000);
//! assert!((cm - 10.0).abs() < 1e-12);
//! ```
//!
//! 분자나 분모가 0인 단위는 상수 평가 단계에서 빌드가 실패한다.
//!
//! ```compile_fail
//! use metric_toolbox::conversion::convert;
//! use metric_toolbox::quantity::Length;
//! use metric_toolbox::units::{Unit, METRE};
//!
//! const BROKEN: Unit<Length> = Unit::from_ratio(1, 0);
//! let _ = convert(METRE, BROKEN, 0.0);
//! ```
//!
//! ```compile_fail
//! use metric_toolbox::conversion::convert;
//! use metric_toolbox::quantity::Length;
//! use metric_toolbox::units::{Unit, METRE};
//!
//! const BROKEN: Unit<Length> = Unit::from_ratio(0, 1);
//! let _ = convert(METRE, BROKEN, 0.0);
//! ```

pub mod angle;
pub mod length;
pub mod rotation;
pub mod speed;
pub mod time;

use std::fmt;
use std::marker::PhantomData;

use crate::quantity::{Arbitrary, Quantity, QuantityKind, Quotient};
use crate::ratio::{DefinitionError, Ratio};

pub use angle::{DEGREE, RADIAN};
pub use length::{KILOMETRE, KILOYARD, METRE, NAUTICAL_MILE, YARD};
pub use rotation::{DEGREE_PER_MINUTE, DEGREE_PER_SECOND, RADIAN_PER_MINUTE, RADIAN_PER_SECOND};
pub use speed::{KILOMETRE_PER_HOUR, KNOT, METRE_PER_SECOND};
pub use time::{DAY, HOUR, MINUTE, SECOND, WEEK};

/// 종류를 가리지 않는 SI 값.
pub const SI: Unit<Arbitrary> = Unit::new(Ratio::ONE);

/// 카탈로그 항목: (이름, 기호 목록, 단위).
pub type SymbolEntry = (&'static str, &'static [&'static str], AnyUnit);

pub(crate) const SI_SYMBOLS: &[SymbolEntry] = &[("si", &["si"], SI.erase())];

/// 종류가 타입에 고정된 단위. 컴파일 타임에 정의하고 검사한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unit<Q: Quantity> {
    ratio: Ratio,
    kind: PhantomData<Q>,
}

impl<Q: Quantity> Unit<Q> {
    pub const fn new(ratio: Ratio) -> Self {
        Self {
            ratio,
            kind: PhantomData,
        }
    }

    /// `num / den` 배율로 단위를 정의한다. 0이 포함되면 패닉(상수 문맥에서는 빌드 오류).
    #[track_caller]
    pub const fn from_ratio(num: i64, den: i64) -> Self {
        Self::new(Ratio::new(num, den))
    }

    /// 배율을 곱한 같은 종류의 단위. 예: `METRE.scaled(Ratio::KILO)`.
    #[track_caller]
    pub const fn scaled(self, factor: Ratio) -> Self {
        Self::new(self.ratio.multiply(factor))
    }

    /// 두 단위의 배율을 나눠 유도 단위를 만든다. 배율을 직접 입력하지 않는다.
    #[track_caller]
    pub const fn quotient<N: Quantity, D: Quantity>(num: Unit<N>, den: Unit<D>) -> Self
    where
        Q: Quotient<N, D>,
    {
        Self::new(num.ratio.divide(den.ratio))
    }

    pub const fn ratio(self) -> Ratio {
        self.ratio
    }

    pub const fn kind(self) -> QuantityKind {
        Q::KIND
    }

    pub const fn erase(self) -> AnyUnit {
        AnyUnit {
            kind: Q::KIND,
            ratio: self.ratio,
        }
    }
}

impl<Q: Quantity> From<Unit<Q>> for AnyUnit {
    fn from(unit: Unit<Q>) -> Self {
        unit.erase()
    }
}

/// 런타임에 종류를 들고 다니는 단위. 설정 파일이나 CLI에서 정의한 단위에 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnyUnit {
    kind: QuantityKind,
    ratio: Ratio,
}

impl AnyUnit {
    pub const fn new(kind: QuantityKind, ratio: Ratio) -> Self {
        Self { kind, ratio }
    }

    pub const fn try_new(kind: QuantityKind, num: i64, den: i64) -> Result<Self, DefinitionError> {
        match Ratio::try_new(num, den) {
            Ok(ratio) => Ok(Self { kind, ratio }),
            Err(e) => Err(e),
        }
    }

    pub const fn kind(self) -> QuantityKind {
        self.kind
    }

    pub const fn ratio(self) -> Ratio {
        self.ratio
    }
}

impl fmt::Display for AnyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.kind, self.ratio)
    }
}
