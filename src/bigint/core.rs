use std::{fmt, str::FromStr};

use crate::{bigint::magnitude, error::ParseError};

/// A signed integer of arbitrary magnitude.
///
/// Digits are stored in base 10, least significant first, with a separate
/// sign flag. The representation is canonical: the digit sequence is never
/// empty, carries no redundant most-significant zeros, and zero is always the
/// single digit `0` with a positive sign. All arithmetic is pure; operations
/// take their operands by reference and return new values.
///
/// # Example
/// ```
/// use numera::bigint::BigInt;
///
/// let a: BigInt = "123456789123456789".parse().unwrap();
/// let b: BigInt = "987654321".parse().unwrap();
///
/// assert_eq!(a.add(&b).to_string(), "123456790111111110");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigInt {
    /// Decimal digits, least significant first. Each entry is in `0..=9`.
    pub(crate) digits:   Vec<u8>,
    /// Sign flag. Always `false` for zero.
    pub(crate) negative: bool,
}

impl BigInt {
    /// Returns the canonical zero value.
    #[must_use]
    pub fn zero() -> Self {
        Self { digits:   vec![0],
               negative: false, }
    }
    /// Returns the value one.
    #[must_use]
    pub fn one() -> Self {
        Self { digits:   vec![1],
               negative: false, }
    }
    /// Builds a `BigInt` from raw parts, restoring the canonical form.
    ///
    /// Strips most-significant zeros down to at least one digit and forces
    /// the sign positive when the magnitude is zero. Every constructor and
    /// arithmetic operation funnels through here, so the invariants hold
    /// everywhere else by construction.
    pub(crate) fn from_parts(mut digits: Vec<u8>, negative: bool) -> Self {
        magnitude::trim(&mut digits);
        if digits.is_empty() {
            digits.push(0);
        }
        let negative = negative && digits != [0];

        Self { digits, negative }
    }
    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }
    /// Returns `true` if the value is strictly negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }
    /// Returns `true` if the value is even.
    ///
    /// The check reduces to the parity of the least significant decimal
    /// digit, which is exactly the value modulo 2.
    pub(crate) fn is_even(&self) -> bool {
        self.digits[0] % 2 == 0
    }
}

impl From<bool> for BigInt {
    /// Converts a boolean into `1` (true) or `0` (false).
    fn from(value: bool) -> Self {
        if value {
            Self::one()
        } else {
            Self::zero()
        }
    }
}

impl FromStr for BigInt {
    type Err = ParseError;

    /// Parses an optionally `-`-prefixed run of decimal digits.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidLiteral` if the digit run is empty or
    /// contains anything other than ASCII digits.
    ///
    /// # Example
    /// ```
    /// use numera::bigint::BigInt;
    ///
    /// let n: BigInt = "-00042".parse().unwrap();
    /// assert_eq!(n.to_string(), "-42");
    ///
    /// assert!("12a".parse::<BigInt>().is_err());
    /// assert!("-".parse::<BigInt>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidLiteral { literal: s.to_string() });
        }

        let digits = rest.bytes().rev().map(|b| b - b'0').collect();
        Ok(Self::from_parts(digits, negative))
    }
}

impl fmt::Display for BigInt {
    /// Renders the sign (for negative values) followed by the digits, most
    /// significant first.
    ///
    /// # Example
    /// ```
    /// use numera::bigint::BigInt;
    ///
    /// let n: BigInt = "-0".parse().unwrap();
    /// assert_eq!(n.to_string(), "0");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        for digit in self.digits.iter().rev() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
