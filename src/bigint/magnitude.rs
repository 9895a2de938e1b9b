use std::cmp::Ordering;

/// Adds two magnitudes digit by digit with carry propagation.
pub(crate) fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut digits = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0;
    let mut i = 0;

    while i < a.len() || i < b.len() || carry != 0 {
        let sum = carry + a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0);
        digits.push(sum % 10);
        carry = sum / 10;
        i += 1;
    }

    digits
}

/// Subtracts the smaller magnitude from the larger one.
///
/// The caller must pass the operands in order; `larger` has to compare
/// greater than or equal to `smaller`. Sign handling stays with the caller.
pub(crate) fn subtract(larger: &[u8], smaller: &[u8]) -> Vec<u8> {
    let mut digits = Vec::with_capacity(larger.len());
    let mut borrow = 0;

    for i in 0..larger.len() {
        let mut diff =
            i16::from(larger[i]) - borrow - i16::from(smaller.get(i).copied().unwrap_or(0));
        if diff < 0 {
            diff += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        digits.push(diff as u8);
    }

    trim(&mut digits);
    digits
}

/// Multiplies two magnitudes with grade-school digit products.
///
/// Accumulates into a buffer of `a.len() + b.len()` cells, propagating the
/// carry out of each cell as soon as it is produced.
pub(crate) fn multiply(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut buffer = vec![0u32; a.len() + b.len()];

    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            buffer[i + j] += u32::from(x) * u32::from(y);
            buffer[i + j + 1] += buffer[i + j] / 10;
            buffer[i + j] %= 10;
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    let mut digits: Vec<u8> = buffer.into_iter().map(|cell| cell as u8).collect();
    trim(&mut digits);
    digits
}

/// Compares two magnitudes: digit count first, then digits from the most
/// significant end down.
pub(crate) fn compare(a: &[u8], b: &[u8]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.iter().rev().cmp(b.iter().rev()),
        ordering => ordering,
    }
}

/// Strips most-significant zero digits, leaving at least one digit.
pub(crate) fn trim(digits: &mut Vec<u8>) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
}
