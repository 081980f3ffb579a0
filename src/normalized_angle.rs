//! 정규화된 각도 값.
//!
//! 생성하거나 값을 바꿀 때마다 지정한 범위로 정규화한다.
//!
//! | unit   | range      | 정규화 범위       |
//! |--------|------------|-------------------|
//! | Degree | FromZero   | `[0, 360)`        |
//! | Degree | Symmetric  | `[-180, 180)`     |
//! | Radian | FromZero   | `[0, 2π)`         |
//! | Radian | Symmetric  | `[-π, π)`         |
//!
//! ```
//! use metric_toolbox::normalized_angle::NormalizedAngle;
//!
//! let mut heading = NormalizedAngle::degrees(45.0);
//! heading += 350.0;
//! assert!((heading.value() - 35.0).abs() < 1e-9);
//! ```

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::conversion::convert;
use crate::units::{DEGREE, RADIAN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Degree,
    Radian,
}

impl AngleUnit {
    fn half_turn(self) -> f64 {
        match self {
            AngleUnit::Degree => 180.0,
            AngleUnit::Radian => PI,
        }
    }
}

/// 정규화 범위. 0부터 시작하거나 0을 중심으로 대칭이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleRange {
    FromZero,
    Symmetric,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedAngle {
    value: f64,
    unit: AngleUnit,
    range: AngleRange,
}

impl NormalizedAngle {
    pub fn new(value: f64, unit: AngleUnit, range: AngleRange) -> Self {
        Self {
            value: normalize(value, unit, range),
            unit,
            range,
        }
    }

    pub fn zero(unit: AngleUnit, range: AngleRange) -> Self {
        Self::new(0.0, unit, range)
    }

    /// `[0, 360)` 범위의 도 단위 각도.
    pub fn degrees(value: f64) -> Self {
        Self::new(value, AngleUnit::Degree, AngleRange::FromZero)
    }

    /// `[0, 2π)` 범위의 라디안 각도.
    pub fn radians(value: f64) -> Self {
        Self::new(value, AngleUnit::Radian, AngleRange::FromZero)
    }

    /// 자기 단위로 표현한 값.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    pub fn range(&self) -> AngleRange {
        self.range
    }

    pub fn in_degrees(&self) -> f64 {
        match self.unit {
            AngleUnit::Degree => self.value,
            AngleUnit::Radian => convert(RADIAN, DEGREE, self.value),
        }
    }

    pub fn in_radians(&self) -> f64 {
        match self.unit {
            AngleUnit::Degree => convert(DEGREE, RADIAN, self.value),
            AngleUnit::Radian => self.value,
        }
    }

    pub fn set(&mut self, value: f64) {
        self.value = normalize(value, self.unit, self.range);
    }

    pub fn set_degrees(&mut self, degrees: f64) {
        let v = match self.unit {
            AngleUnit::Degree => degrees,
            AngleUnit::Radian => convert(DEGREE, RADIAN, degrees),
        };
        self.set(v);
    }

    pub fn set_radians(&mut self, radians: f64) {
        let v = match self.unit {
            AngleUnit::Degree => convert(RADIAN, DEGREE, radians),
            AngleUnit::Radian => radians,
        };
        self.set(v);
    }

    /// 다른 각도를 자기 단위로 표현한 값.
    fn value_of(&self, other: &NormalizedAngle) -> f64 {
        match self.unit {
            AngleUnit::Degree => other.in_degrees(),
            AngleUnit::Radian => other.in_radians(),
        }
    }
}

/// 정규화된 값끼리 비교한다. 359°는 1°로 감기는 361°보다 크다.
/// 단위나 범위가 다르면 `==`과 마찬가지로 비교하지 않고 `None`을 돌려준다.
impl PartialOrd for NormalizedAngle {
    fn partial_cmp(&self, other: &NormalizedAngle) -> Option<Ordering> {
        if self.unit != other.unit || self.range != other.range {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

fn normalize(value: f64, unit: AngleUnit, range: AngleRange) -> f64 {
    let half = unit.half_turn();
    let full = 2.0 * half;

    let mut ret = value % full;
    if ret < 0.0 {
        ret += full;
        // -1e-20 + 360 처럼 더한 결과가 한 바퀴로 반올림되는 경우
        if ret >= full {
            ret = 0.0;
        }
    } else if ret < f64::EPSILON {
        ret = 0.0;
    }

    if range == AngleRange::Symmetric && ret >= half {
        ret -= full;
    }
    ret
}

impl AddAssign for NormalizedAngle {
    fn add_assign(&mut self, rhs: NormalizedAngle) {
        let v = self.value + self.value_of(&rhs);
        self.set(v);
    }
}

impl AddAssign<f64> for NormalizedAngle {
    fn add_assign(&mut self, rhs: f64) {
        self.set(self.value + rhs);
    }
}

impl SubAssign for NormalizedAngle {
    fn sub_assign(&mut self, rhs: NormalizedAngle) {
        let v = self.value - self.value_of(&rhs);
        self.set(v);
    }
}

impl SubAssign<f64> for NormalizedAngle {
    fn sub_assign(&mut self, rhs: f64) {
        self.set(self.value - rhs);
    }
}

impl MulAssign<f64> for NormalizedAngle {
    fn mul_assign(&mut self, rhs: f64) {
        self.set(self.value * rhs);
    }
}

/// `rhs == 0.0`이면 결과는 NaN이다.
impl DivAssign<f64> for NormalizedAngle {
    fn div_assign(&mut self, rhs: f64) {
        self.set(self.value / rhs);
    }
}

macro_rules! binary_from_assign {
    ($trait:ident, $method:ident, $assign:ident, $rhs:ty) => {
        impl $trait<$rhs> for NormalizedAngle {
            type Output = NormalizedAngle;

            fn $method(mut self, rhs: $rhs) -> NormalizedAngle {
                self.$assign(rhs);
                self
            }
        }
    };
}

binary_from_assign!(Add, add, add_assign, NormalizedAngle);
binary_from_assign!(Add, add, add_assign, f64);
binary_from_assign!(Sub, sub, sub_assign, NormalizedAngle);
binary_from_assign!(Sub, sub, sub_assign, f64);
binary_from_assign!(Mul, mul, mul_assign, f64);
binary_from_assign!(Div, div, div_assign, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_zero_degrees_wraps_into_range() {
        for (input, expected) in [
            (-181.0, 179.0),
            (-180.0, 180.0),
            (-179.0, 181.0),
            (-1.0, 359.0),
            (0.0, 0.0),
            (359.0, 359.0),
            (360.0, 0.0),
            (721.0, 1.0),
        ] {
            let a = NormalizedAngle::degrees(input);
            assert_relative_eq!(a.value(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn symmetric_degrees_wraps_into_range() {
        let deg = |v| NormalizedAngle::new(v, AngleUnit::Degree, AngleRange::Symmetric).value();
        assert_relative_eq!(deg(180.0), -180.0);
        assert_relative_eq!(deg(179.0), 179.0);
        assert_relative_eq!(deg(-181.0), 179.0);
        assert_relative_eq!(deg(270.0), -90.0);
    }

    #[test]
    fn tiny_negative_residue_snaps_to_zero() {
        let a = NormalizedAngle::degrees(-1e-20);
        assert_eq!(a.value(), 0.0);
    }

    #[test]
    fn unit_views_agree() {
        let a = NormalizedAngle::radians(PI * 0.5);
        assert_relative_eq!(a.in_degrees(), 90.0, epsilon = 1e-9);
        let mut b = NormalizedAngle::degrees(0.0);
        b.set_radians(PI);
        assert_relative_eq!(b.value(), 180.0, epsilon = 1e-9);
        b.set_degrees(-90.0);
        assert_relative_eq!(b.in_radians(), PI * 1.5, epsilon = 1e-9);
    }

    #[test]
    fn arithmetic_mixes_units() {
        let a = NormalizedAngle::degrees(45.0) + NormalizedAngle::radians(PI * 0.5);
        assert_relative_eq!(a.value(), 135.0, epsilon = 1e-9);
        let b = NormalizedAngle::degrees(10.0) - 20.0;
        assert_relative_eq!(b.value(), 350.0, epsilon = 1e-9);
        let c = NormalizedAngle::degrees(100.0) * 4.0;
        assert_relative_eq!(c.value(), 40.0, epsilon = 1e-9);
        let d = NormalizedAngle::degrees(90.0) / 2.0;
        assert_relative_eq!(d.value(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn ordering_uses_normalized_value() {
        assert!(NormalizedAngle::degrees(359.0) > NormalizedAngle::degrees(361.0));
        assert!(NormalizedAngle::degrees(-10.0) > NormalizedAngle::degrees(10.0));
        assert_eq!(
            NormalizedAngle::degrees(720.0).partial_cmp(&NormalizedAngle::degrees(0.0)),
            Some(Ordering::Equal)
        );
        let sym = |v| NormalizedAngle::new(v, AngleUnit::Degree, AngleRange::Symmetric);
        assert!(sym(-10.0) < sym(10.0));
    }

    #[test]
    fn mixed_unit_or_range_is_unordered() {
        let deg = NormalizedAngle::degrees(90.0);
        let rad = NormalizedAngle::radians(PI * 0.5);
        assert_eq!(deg.partial_cmp(&rad), None);
        assert!(!(deg < rad) && !(deg > rad));
        let sym = NormalizedAngle::new(90.0, AngleUnit::Degree, AngleRange::Symmetric);
        assert_eq!(deg.partial_cmp(&sym), None);
    }
}
