//! 단위 배율을 표현하는 정확한 유리수.
//!
//! 배율은 부동소수 상수로 미리 나눠 두지 않고 분자/분모 정수쌍으로 보관한다.
//! 변환 배율(from / to)을 정수 연산으로 먼저 약분한 뒤 마지막에 한 번만
//! 부동소수로 바꾸므로 중간 반올림 오차가 쌓이지 않는다.

use std::fmt;
use std::ops::{Div, Mul};
use std::str::FromStr;

/// 단위 정의가 잘못되었을 때 발생하는 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionError {
    /// 분자가 0
    ZeroNumerator,
    /// 분모가 0
    ZeroDenominator,
    /// 약분 후에도 i64 범위를 벗어남
    Overflow,
    /// `n` 또는 `n/d` 형식이 아님
    Malformed,
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionError::ZeroNumerator => write!(f, "배율의 분자가 0입니다"),
            DefinitionError::ZeroDenominator => write!(f, "배율의 분모가 0입니다"),
            DefinitionError::Overflow => write!(f, "배율이 정수 범위를 벗어났습니다"),
            DefinitionError::Malformed => write!(f, "배율 형식이 잘못되었습니다 (예: 9144/10000)"),
        }
    }
}

impl std::error::Error for DefinitionError {}

/// SI 기준 단위 대비 배율. 항상 약분되어 있고 `den > 0`, `num != 0` 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i64,
    den: i64,
}

impl Ratio {
    pub const ONE: Ratio = Ratio::new(1, 1);
    pub const KILO: Ratio = Ratio::new(1000, 1);

    /// 배율을 만든다. 분자나 분모가 0이면 패닉한다.
    ///
    /// `const` 문맥에서 호출하면 패닉이 곧 빌드 오류가 되므로,
    /// 카탈로그 단위는 잘못 정의된 채로 사용될 수 없다.
    #[track_caller]
    pub const fn new(num: i64, den: i64) -> Self {
        match Self::try_new(num, den) {
            Ok(r) => r,
            Err(DefinitionError::ZeroNumerator) => panic!("unit ratio numerator must be non-zero"),
            Err(DefinitionError::ZeroDenominator) => {
                panic!("unit ratio denominator must be non-zero")
            }
            Err(_) => panic!("unit ratio does not fit in i64"),
        }
    }

    /// 런타임 입력(설정 파일, CLI)용 검증 생성자.
    pub const fn try_new(num: i64, den: i64) -> Result<Self, DefinitionError> {
        reduce(num as i128, den as i128)
    }

    pub const fn numerator(self) -> i64 {
        self.num
    }

    pub const fn denominator(self) -> i64 {
        self.den
    }

    #[track_caller]
    pub const fn multiply(self, rhs: Ratio) -> Ratio {
        match self.checked_multiply(rhs) {
            Ok(r) => r,
            Err(_) => panic!("unit ratio product does not fit in i64"),
        }
    }

    #[track_caller]
    pub const fn divide(self, rhs: Ratio) -> Ratio {
        match self.checked_divide(rhs) {
            Ok(r) => r,
            Err(_) => panic!("unit ratio quotient does not fit in i64"),
        }
    }

    pub const fn checked_multiply(self, rhs: Ratio) -> Result<Ratio, DefinitionError> {
        reduce(
            self.num as i128 * rhs.num as i128,
            self.den as i128 * rhs.den as i128,
        )
    }

    /// `rhs.num != 0` 이 불변식이므로 결과 분모는 0이 될 수 없다.
    pub const fn checked_divide(self, rhs: Ratio) -> Result<Ratio, DefinitionError> {
        reduce(
            self.num as i128 * rhs.den as i128,
            self.den as i128 * rhs.num as i128,
        )
    }

    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

const fn reduce(num: i128, den: i128) -> Result<Ratio, DefinitionError> {
    if den == 0 {
        return Err(DefinitionError::ZeroDenominator);
    }
    if num == 0 {
        return Err(DefinitionError::ZeroNumerator);
    }
    // 둘 다 0이 아니므로 g >= 1, i64 곱의 범위에서는 i128로 되돌려도 안전하다
    let g = gcd(num.unsigned_abs(), den.unsigned_abs()) as i128;
    let mut n = num / g;
    let mut d = den / g;
    if d < 0 {
        n = -n;
        d = -d;
    }
    if n < i64::MIN as i128 || n > i64::MAX as i128 || d > i64::MAX as i128 {
        return Err(DefinitionError::Overflow);
    }
    Ok(Ratio {
        num: n as i64,
        den: d as i64,
    })
}

/// `multiply`와 같다. 결과가 i64 범위를 넘으면 패닉하므로
/// 런타임 입력에는 [`Ratio::checked_multiply`]를 쓴다.
impl Mul for Ratio {
    type Output = Ratio;

    fn mul(self, rhs: Ratio) -> Ratio {
        self.multiply(rhs)
    }
}

/// `divide`와 같다. 결과가 i64 범위를 넘으면 패닉하므로
/// 런타임 입력에는 [`Ratio::checked_divide`]를 쓴다.
impl Div for Ratio {
    type Output = Ratio;

    fn div(self, rhs: Ratio) -> Ratio {
        self.divide(rhs)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// `"1852"` 또는 `"9144/10000"` 형식을 읽는다.
impl FromStr for Ratio {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, den) = match s.split_once('/') {
            Some((n, d)) => (n.trim(), d.trim()),
            None => (s.trim(), "1"),
        };
        let num = num.parse::<i64>().map_err(|_| DefinitionError::Malformed)?;
        let den = den.parse::<i64>().map_err(|_| DefinitionError::Malformed)?;
        Ratio::try_new(num, den)
    }
}
