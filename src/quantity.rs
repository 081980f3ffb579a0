//! 물리량 종류(quantity kind) 정의.
//!
//! 같은 종류를 두 가지 방식으로 표현한다.
//! * [`QuantityKind`]: 런타임 태그. 설정 파일/CLI에서 정의한 단위에 사용한다.
//! * [`Length`], [`Time`] 등의 마커 타입: 컴파일 타임 검사용.
//!   [`CompatibleWith`] 구현이 없는 조합은 빌드 단계에서 거부된다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::conversion::ConversionError;

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    /// 임의의 SI 값. 모든 종류와 호환된다.
    Arbitrary,
    Length,
    Time,
    Speed,
    Angle,
    RotationalRate,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 6] = [
        QuantityKind::Arbitrary,
        QuantityKind::Length,
        QuantityKind::Time,
        QuantityKind::Speed,
        QuantityKind::Angle,
        QuantityKind::RotationalRate,
    ];

    /// 같은 종류이거나 어느 한쪽이 `Arbitrary`이면 변환할 수 있다.
    pub const fn is_compatible_with(self, other: QuantityKind) -> bool {
        matches!(self, QuantityKind::Arbitrary)
            || matches!(other, QuantityKind::Arbitrary)
            || self as u8 == other as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            QuantityKind::Arbitrary => "arbitrary",
            QuantityKind::Length => "length",
            QuantityKind::Time => "time",
            QuantityKind::Speed => "speed",
            QuantityKind::Angle => "angle",
            QuantityKind::RotationalRate => "rotational_rate",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantityKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "arbitrary" | "si" => Ok(QuantityKind::Arbitrary),
            "length" => Ok(QuantityKind::Length),
            "time" => Ok(QuantityKind::Time),
            "speed" | "velocity" => Ok(QuantityKind::Speed),
            "angle" => Ok(QuantityKind::Angle),
            "rotational_rate" | "rot" => Ok(QuantityKind::RotationalRate),
            _ => Err(ConversionError::UnknownKind(s.to_string())),
        }
    }
}

/// 컴파일 타임 물리량 마커가 구현하는 트레이트.
pub trait Quantity: Copy + fmt::Debug + 'static {
    const KIND: QuantityKind;
}

/// `Self` 단위의 값을 `To` 단위로 변환할 수 있음을 나타낸다.
#[diagnostic::on_unimplemented(
    message = "kind mismatch: cannot convert `{Self}` units into `{To}` units",
    label = "quantity kinds differ and neither side is `Arbitrary`"
)]
pub trait CompatibleWith<To: Quantity>: Quantity {}

/// `Self = Num / Den` 관계. 유도 단위를 만들 때 종류를 검사한다.
#[diagnostic::on_unimplemented(message = "`{Self}` is not defined as `{Num}` per `{Den}`")]
pub trait Quotient<Num: Quantity, Den: Quantity>: Quantity {}

macro_rules! quantities {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($name), "` 물리량 마커.")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl Quantity for $name {
                const KIND: QuantityKind = QuantityKind::$name;
            }

            impl CompatibleWith<$name> for $name {}
            impl CompatibleWith<$name> for Arbitrary {}
            impl CompatibleWith<Arbitrary> for $name {}
        )*
    };
}

/// 임의 SI 값 마커. 모든 종류와 호환된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Arbitrary;

impl Quantity for Arbitrary {
    const KIND: QuantityKind = QuantityKind::Arbitrary;
}

impl CompatibleWith<Arbitrary> for Arbitrary {}

quantities!(Length, Time, Speed, Angle, RotationalRate);

impl Quotient<Length, Time> for Speed {}
impl Quotient<Angle, Time> for RotationalRate {}
