use std::cmp::Ordering;

use crate::{
    bigint::{core::BigInt, magnitude},
    error::RuntimeError,
};

impl BigInt {
    /// Divides `self` by `other`, truncating toward zero.
    ///
    /// Long division over the dividend's digits from the most significant
    /// end: each step shifts the running remainder left by one decimal place,
    /// brings the next digit down, and counts how often the divisor can be
    /// subtracted. That count is the next quotient digit. Deliberately simple
    /// rather than fast; each quotient digit costs at most nine magnitude
    /// subtractions.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if `other` is zero.
    ///
    /// # Example
    /// ```
    /// use numera::bigint::BigInt;
    ///
    /// let a: BigInt = "100".parse().unwrap();
    /// let b: BigInt = "9".parse().unwrap();
    /// assert_eq!(a.div(&b).unwrap().to_string(), "11");
    /// assert!(a.div(&BigInt::zero()).is_err());
    /// ```
    pub fn div(&self, other: &Self) -> Result<Self, RuntimeError> {
        if other.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }

        let mut quotient = Vec::with_capacity(self.digits.len());
        let mut remainder: Vec<u8> = Vec::new();

        for &digit in self.digits.iter().rev() {
            remainder.insert(0, digit);
            magnitude::trim(&mut remainder);

            let mut count = 0;
            while magnitude::compare(&remainder, &other.digits) != Ordering::Less {
                remainder = magnitude::subtract(&remainder, &other.digits);
                count += 1;
            }
            quotient.push(count);
        }

        quotient.reverse();
        Ok(Self::from_parts(quotient, self.negative != other.negative))
    }
    /// Computes the remainder of `self` divided by `other`.
    ///
    /// Repeatedly subtracts the divisor's magnitude from the dividend's until
    /// it no longer fits. Linear in the quotient, which is acceptable for the
    /// operand sizes this calculator targets. The result carries the
    /// dividend's sign, matching truncating division.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` if `other` is zero.
    ///
    /// # Example
    /// ```
    /// use numera::bigint::BigInt;
    ///
    /// let a: BigInt = "17".parse().unwrap();
    /// let b: BigInt = "5".parse().unwrap();
    /// assert_eq!(a.rem(&b).unwrap().to_string(), "2");
    /// ```
    pub fn rem(&self, other: &Self) -> Result<Self, RuntimeError> {
        if other.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }

        let mut remainder = self.digits.clone();
        while magnitude::compare(&remainder, &other.digits) != Ordering::Less {
            remainder = magnitude::subtract(&remainder, &other.digits);
        }

        Ok(Self::from_parts(remainder, self.negative))
    }
    /// Raises `self` to the power of `exponent`.
    ///
    /// Binary exponentiation: the base is squared every round and multiplied
    /// into the accumulator whenever the current exponent is odd, while the
    /// exponent is halved with integer division by two. Terminates when the
    /// exponent reaches zero, so `pow(a, 0)` is `1` for every `a`.
    ///
    /// # Errors
    /// Returns `RuntimeError::NegativeExponent` if `exponent` is negative.
    ///
    /// # Example
    /// ```
    /// use numera::bigint::BigInt;
    ///
    /// let base: BigInt = "2".parse().unwrap();
    /// let exponent: BigInt = "10".parse().unwrap();
    /// assert_eq!(base.pow(&exponent).unwrap().to_string(), "1024");
    /// ```
    pub fn pow(&self, exponent: &Self) -> Result<Self, RuntimeError> {
        if exponent.is_negative() {
            return Err(RuntimeError::NegativeExponent);
        }

        let two = Self::from_parts(vec![2], false);
        let mut base = self.clone();
        let mut exponent = exponent.clone();
        let mut result = Self::one();

        while !exponent.is_zero() {
            if !exponent.is_even() {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exponent = exponent.div(&two)?;
        }

        Ok(result)
    }
}
