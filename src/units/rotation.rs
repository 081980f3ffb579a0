//! 선회율(ROT) 단위. 각도/시간 단위에서 유도한다.

use crate::quantity::RotationalRate;
use crate::units::angle::{DEGREE, RADIAN};
use crate::units::time::{MINUTE, SECOND};
use crate::units::{SymbolEntry, Unit};

pub const RADIAN_PER_SECOND: Unit<RotationalRate> = Unit::quotient(RADIAN, SECOND); // SI
pub const DEGREE_PER_SECOND: Unit<RotationalRate> = Unit::quotient(DEGREE, SECOND);
pub const RADIAN_PER_MINUTE: Unit<RotationalRate> = Unit::quotient(RADIAN, MINUTE);
pub const DEGREE_PER_MINUTE: Unit<RotationalRate> = Unit::quotient(DEGREE, MINUTE);

pub(crate) const SYMBOLS: &[SymbolEntry] = &[
    ("radian_per_second", &["rad/s"], RADIAN_PER_SECOND.erase()),
    ("degree_per_second", &["deg/s", "°/s"], DEGREE_PER_SECOND.erase()),
    ("radian_per_minute", &["rad/min"], RADIAN_PER_MINUTE.erase()),
    ("degree_per_minute", &["deg/min", "°/min"], DEGREE_PER_MINUTE.erase()),
];
