//! 각도 단위. 내부 기준은 라디안이다.

use crate::quantity::Angle;
use crate::ratio::Ratio;
use crate::units::{SymbolEntry, Unit};

/// π의 유리수 근사. 오차가 f64 해상도보다 작다.
pub const PI: Ratio = Ratio::new(245_850_922, 78_256_779);

pub const RADIAN: Unit<Angle> = Unit::from_ratio(1, 1); // SI
pub const DEGREE: Unit<Angle> = Unit::new(PI.divide(Ratio::new(180, 1)));

pub(crate) const SYMBOLS: &[SymbolEntry] = &[
    ("radian", &["rad"], RADIAN.erase()),
    ("degree", &["deg", "°"], DEGREE.erase()),
];
