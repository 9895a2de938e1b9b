use numera::{bigint::BigInt, error::RuntimeError};

fn big(s: &str) -> BigInt {
    s.parse().unwrap_or_else(|e| panic!("'{s}' should parse: {e}"))
}

#[test]
fn parsing_normalizes_leading_zeros_and_negative_zero() {
    assert_eq!(big("007").to_string(), "7");
    assert_eq!(big("000").to_string(), "0");
    assert_eq!(big("-0").to_string(), "0");
    assert_eq!(big("-000123").to_string(), "-123");
    assert_eq!(big("0").to_string(), "0");
}

#[test]
fn malformed_literals_are_rejected() {
    assert!("".parse::<BigInt>().is_err());
    assert!("-".parse::<BigInt>().is_err());
    assert!("12a".parse::<BigInt>().is_err());
    assert!("1.5".parse::<BigInt>().is_err());
    assert!("+7".parse::<BigInt>().is_err());
    assert!("--4".parse::<BigInt>().is_err());
}

#[test]
fn booleans_convert_to_one_and_zero() {
    assert_eq!(BigInt::from(true), big("1"));
    assert_eq!(BigInt::from(false), big("0"));
}

#[test]
fn addition_carries_across_digits() {
    assert_eq!(big("999").add(&big("1")).to_string(), "1000");
    assert_eq!(big("12").add(&big("7")).to_string(), "19");
    assert_eq!(big("99999999999999999999").add(&big("1")).to_string(),
               "100000000000000000000");
}

#[test]
fn addition_handles_mixed_signs() {
    assert_eq!(big("10").add(&big("-3")).to_string(), "7");
    assert_eq!(big("-10").add(&big("3")).to_string(), "-7");
    assert_eq!(big("-10").add(&big("-3")).to_string(), "-13");
    assert_eq!(big("5").add(&big("-5")).to_string(), "0");
}

#[test]
fn subtraction_assigns_the_sign_of_the_larger_magnitude() {
    assert_eq!(big("5").sub(&big("12")).to_string(), "-7");
    assert_eq!(big("12").sub(&big("5")).to_string(), "7");
    assert_eq!(big("-5").sub(&big("-12")).to_string(), "7");
    assert_eq!(big("100").sub(&big("100")).to_string(), "0");
    assert_eq!(big("1000").sub(&big("1")).to_string(), "999");
}

#[test]
fn multiplication_follows_the_sign_rule() {
    assert_eq!(big("12").mul(&big("13")).to_string(), "156");
    assert_eq!(big("-12").mul(&big("13")).to_string(), "-156");
    assert_eq!(big("-12").mul(&big("-13")).to_string(), "156");
    assert_eq!(big("0").mul(&big("-999")).to_string(), "0");
    assert_eq!(big("123456789").mul(&big("987654321")).to_string(),
               "121932631112635269");
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(big("100").div(&big("9")).unwrap().to_string(), "11");
    assert_eq!(big("9").div(&big("100")).unwrap().to_string(), "0");
    assert_eq!(big("-7").div(&big("2")).unwrap().to_string(), "-3");
    assert_eq!(big("7").div(&big("-2")).unwrap().to_string(), "-3");
    assert_eq!(big("-7").div(&big("-2")).unwrap().to_string(), "3");
    assert_eq!(big("1000000000000000000000").div(&big("1000000000"))
                                            .unwrap()
                                            .to_string(),
               "1000000000000");
}

#[test]
fn remainder_carries_the_dividend_sign() {
    assert_eq!(big("17").rem(&big("5")).unwrap().to_string(), "2");
    assert_eq!(big("-17").rem(&big("5")).unwrap().to_string(), "-2");
    assert_eq!(big("17").rem(&big("-5")).unwrap().to_string(), "2");
    assert_eq!(big("15").rem(&big("5")).unwrap().to_string(), "0");
}

#[test]
fn division_and_modulo_by_zero_fail() {
    assert_eq!(big("7").div(&BigInt::zero()), Err(RuntimeError::DivisionByZero));
    assert_eq!(big("7").rem(&BigInt::zero()), Err(RuntimeError::DivisionByZero));
    assert_eq!(BigInt::zero().div(&BigInt::zero()),
               Err(RuntimeError::DivisionByZero));
}

#[test]
fn exponentiation_squares_and_halves() {
    assert_eq!(big("2").pow(&big("10")).unwrap().to_string(), "1024");
    assert_eq!(big("3").pow(&big("5")).unwrap().to_string(), "243");
    assert_eq!(big("10").pow(&big("20")).unwrap().to_string(),
               "100000000000000000000");
    assert_eq!(big("-2").pow(&big("3")).unwrap().to_string(), "-8");
    assert_eq!(big("-2").pow(&big("4")).unwrap().to_string(), "16");
}

#[test]
fn exponent_edge_cases() {
    assert_eq!(big("12345").pow(&BigInt::zero()).unwrap(), BigInt::one());
    assert_eq!(BigInt::zero().pow(&BigInt::zero()).unwrap(), BigInt::one());
    assert_eq!(big("12345").pow(&BigInt::one()).unwrap(), big("12345"));
    assert_eq!(big("2").pow(&big("-1")), Err(RuntimeError::NegativeExponent));
}

#[test]
fn ordering_compares_sign_then_length_then_digits() {
    assert!(big("2") < big("10"));
    assert!(big("123") < big("124"));
    assert!(big("-1") < big("0"));
    assert!(big("-10") < big("-2"));
    assert!(big("99") > big("98"));
    assert!(big("5") >= big("5"));
    assert!(big("5") <= big("5"));
    assert_eq!(big("0042"), big("42"));
    assert_eq!(big("-0"), big("0"));
}
