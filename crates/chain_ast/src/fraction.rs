//! Exact rational numbers in lowest terms.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};

use crate::error::NumberError;

/// An exact rational number.
///
/// Invariants after every constructing or arithmetic operation:
/// `gcd(|numerator|, denominator) == 1` and `denominator > 0`.
/// Values are immutable; operations return fresh normalized fractions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    /// Build a fraction from raw parts. A zero denominator is rejected;
    /// a negative one is folded into the numerator by normalization.
    pub fn new(num: BigInt, den: BigInt) -> Result<Self, NumberError> {
        if den.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        Ok(Self { num, den }.normalized())
    }

    pub fn from_integer(n: i64) -> Self {
        Self {
            num: BigInt::from(n),
            den: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// Parse `"n"` or `"n/d"`. Both sides must be plain integers; an
    /// explicit zero denominator is division by zero, not a parse error.
    pub fn parse(text: &str) -> Result<Self, NumberError> {
        let text = text.trim();
        let (num_text, den_text) = match text.split_once('/') {
            Some((num_text, den_text)) => (num_text, den_text),
            None => (text, "1"),
        };
        let num = BigInt::from_str(num_text)
            .map_err(|_| NumberError::Parse(text.to_string()))?;
        let den = BigInt::from_str(den_text)
            .map_err(|_| NumberError::Parse(text.to_string()))?;
        Self::new(num, den)
    }

    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Integer value of this fraction, when it has one and it fits `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        if self.den.is_one() {
            self.num.to_i64()
        } else {
            None
        }
    }

    pub fn add(&self, other: &Fraction) -> Fraction {
        Fraction {
            num: &self.num * &other.den + &other.num * &self.den,
            den: &self.den * &other.den,
        }
        .normalized()
    }

    pub fn sub(&self, other: &Fraction) -> Fraction {
        Fraction {
            num: &self.num * &other.den - &other.num * &self.den,
            den: &self.den * &other.den,
        }
        .normalized()
    }

    pub fn mul(&self, other: &Fraction) -> Fraction {
        Fraction {
            num: &self.num * &other.num,
            den: &self.den * &other.den,
        }
        .normalized()
    }

    pub fn div(&self, other: &Fraction) -> Result<Fraction, NumberError> {
        if other.num.is_zero() {
            return Err(NumberError::DivisionByZero);
        }
        Ok(Fraction {
            num: &self.num * &other.den,
            den: &self.den * &other.num,
        }
        .normalized())
    }

    /// Multiplicative inverse. Fails on zero.
    pub fn recip(&self) -> Result<Fraction, NumberError> {
        Fraction::one().div(self)
    }

    /// Integer power. Exponent 0 yields `1/1` for every base, including
    /// `0/1` (the `0^0 := 1` convention). A negative exponent inverts the
    /// base first, which is undefined for zero.
    pub fn pow(&self, exponent: i64) -> Result<Fraction, NumberError> {
        if exponent == 0 {
            return Ok(Fraction::one());
        }
        let (base_num, base_den) = if exponent < 0 {
            if self.num.is_zero() {
                return Err(NumberError::DivisionByZero);
            }
            (&self.den, &self.num)
        } else {
            (&self.num, &self.den)
        };
        let exp = exponent.unsigned_abs();
        Ok(Fraction {
            num: Pow::pow(base_num, exp),
            den: Pow::pow(base_den, exp),
        }
        .normalized())
    }

    /// Reduce by the gcd and move the sign to the numerator. The
    /// denominator is known non-zero here, so the gcd is at least 1.
    fn normalized(mut self) -> Self {
        let g = self.num.gcd(&self.den);
        self.num /= &g;
        self.den /= &g;
        if self.den.is_negative() {
            self.num = -self.num;
            self.den = -self.den;
        }
        self
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl FromStr for Fraction {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fraction::parse(s)
    }
}
