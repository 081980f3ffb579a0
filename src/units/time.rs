//! 시간 단위. 내부 기준은 초이다.

use crate::quantity::Time;
use crate::units::{SymbolEntry, Unit};

pub const SECOND: Unit<Time> = Unit::from_ratio(1, 1); // SI
pub const MINUTE: Unit<Time> = Unit::from_ratio(60, 1);
pub const HOUR: Unit<Time> = Unit::from_ratio(60 * 60, 1);
pub const DAY: Unit<Time> = Unit::from_ratio(24 * 60 * 60, 1);
pub const WEEK: Unit<Time> = Unit::from_ratio(7 * 24 * 60 * 60, 1);

pub(crate) const SYMBOLS: &[SymbolEntry] = &[
    ("second", &["s", "sec"], SECOND.erase()),
    ("minute", &["min"], MINUTE.erase()),
    ("hour", &["h", "hr"], HOUR.erase()),
    ("day", &["d"], DAY.erase()),
    ("week", &["wk"], WEEK.erase()),
];
