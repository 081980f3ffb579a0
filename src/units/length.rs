//! 길이 단위. 내부 기준은 미터이다.

use crate::quantity::Length;
use crate::ratio::Ratio;
use crate::units::{SymbolEntry, Unit};

pub const METRE: Unit<Length> = Unit::from_ratio(1, 1); // SI
pub const NAUTICAL_MILE: Unit<Length> = Unit::from_ratio(1852, 1);
pub const YARD: Unit<Length> = Unit::from_ratio(9144, 10000);
pub const KILOMETRE: Unit<Length> = METRE.scaled(Ratio::KILO);
pub const KILOYARD: Unit<Length> = YARD.scaled(Ratio::KILO);

pub(crate) const SYMBOLS: &[SymbolEntry] = &[
    ("metre", &["m", "meter"], METRE.erase()),
    ("nautical_mile", &["nmi", "nm", "nauticalmile"], NAUTICAL_MILE.erase()),
    ("yard", &["yd"], YARD.erase()),
    ("kilometre", &["km", "kilometer"], KILOMETRE.erase()),
    ("kiloyard", &["kyd"], KILOYARD.erase()),
];
