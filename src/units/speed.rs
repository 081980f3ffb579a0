//! 속도 단위. 내부 기준은 m/s이며 모든 배율은 길이/시간 단위에서 유도한다.

use crate::quantity::Speed;
use crate::units::length::{KILOMETRE, METRE, NAUTICAL_MILE};
use crate::units::time::{HOUR, SECOND};
use crate::units::{SymbolEntry, Unit};

pub const METRE_PER_SECOND: Unit<Speed> = Unit::quotient(METRE, SECOND); // SI
pub const KILOMETRE_PER_HOUR: Unit<Speed> = Unit::quotient(KILOMETRE, HOUR);
pub const KNOT: Unit<Speed> = Unit::quotient(NAUTICAL_MILE, HOUR);

pub(crate) const SYMBOLS: &[SymbolEntry] = &[
    ("metre_per_second", &["m/s", "mps"], METRE_PER_SECOND.erase()),
    ("kilometre_per_hour", &["km/h", "kph"], KILOMETRE_PER_HOUR.erase()),
    ("knot", &["kn", "kt"], KNOT.erase()),
];
