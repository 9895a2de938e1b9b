use std::cmp::Ordering;

use crate::bigint::{core::BigInt, magnitude};

impl BigInt {
    /// Adds two values.
    ///
    /// When the signs agree the magnitudes are added and the common sign is
    /// kept. When they differ, the smaller magnitude is subtracted from the
    /// larger one and the result takes the sign of the larger-magnitude
    /// operand. Exact cancellation yields canonical zero.
    ///
    /// # Example
    /// ```
    /// use numera::bigint::BigInt;
    ///
    /// let a: BigInt = "999".parse().unwrap();
    /// let b: BigInt = "1".parse().unwrap();
    /// assert_eq!(a.add(&b).to_string(), "1000");
    ///
    /// let c: BigInt = "-7".parse().unwrap();
    /// assert_eq!(a.add(&c).to_string(), "992");
    /// ```
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.negative == other.negative {
            return Self::from_parts(magnitude::add(&self.digits, &other.digits), self.negative);
        }

        match magnitude::compare(&self.digits, &other.digits) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => {
                Self::from_parts(magnitude::subtract(&self.digits, &other.digits), self.negative)
            },
            Ordering::Less => {
                Self::from_parts(magnitude::subtract(&other.digits, &self.digits), other.negative)
            },
        }
    }
    /// Subtracts `other` from `self`.
    ///
    /// Defined as `self + (-other)` so that every sign decision lives in
    /// [`BigInt::add`].
    ///
    /// # Example
    /// ```
    /// use numera::bigint::BigInt;
    ///
    /// let a: BigInt = "5".parse().unwrap();
    /// let b: BigInt = "12".parse().unwrap();
    /// assert_eq!(a.sub(&b).to_string(), "-7");
    /// ```
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }
    /// Returns the value with its sign flipped. Zero stays positive.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_parts(self.digits.clone(), !self.negative)
    }
    /// Multiplies two values.
    ///
    /// Magnitudes are multiplied with the grade-school digit algorithm; the
    /// result is negative exactly when the operand signs differ.
    ///
    /// # Example
    /// ```
    /// use numera::bigint::BigInt;
    ///
    /// let a: BigInt = "12345678901234567890".parse().unwrap();
    /// let b: BigInt = "-10".parse().unwrap();
    /// assert_eq!(a.mul(&b).to_string(), "-123456789012345678900");
    /// ```
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_parts(magnitude::multiply(&self.digits, &other.digits),
                         self.negative != other.negative)
    }
}
