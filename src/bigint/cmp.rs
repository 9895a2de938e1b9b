use std::cmp::Ordering;

use crate::bigint::{core::BigInt, magnitude};

impl Ord for BigInt {
    /// Compares sign first, then magnitude.
    ///
    /// A negative value orders below any non-negative one. Two values of the
    /// same sign compare by magnitude, with the order reversed when both are
    /// negative. `<=` and `>=` are not separate algorithms; they fall out of
    /// this single ordering, so the relational operators can never disagree
    /// with each other.
    ///
    /// # Example
    /// ```
    /// use numera::bigint::BigInt;
    ///
    /// let a: BigInt = "-10".parse().unwrap();
    /// let b: BigInt = "-2".parse().unwrap();
    /// let c: BigInt = "2".parse().unwrap();
    ///
    /// assert!(a < b);
    /// assert!(b < c);
    /// assert!(c >= c);
    /// ```
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => magnitude::compare(&self.digits, &other.digits),
            (true, true) => magnitude::compare(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
