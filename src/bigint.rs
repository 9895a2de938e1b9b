/// The core `BigInt` value type.
///
/// Defines the digit-sequence representation, construction from strings and
/// booleans, canonical normalization and decimal rendering.
pub mod core;

/// Pure helpers operating on raw magnitude digit sequences.
///
/// All functions here ignore sign entirely and work on least-significant-first
/// digit slices. Sign decisions are made by the callers in `arith` and
/// `divrem`, keeping magnitude arithmetic and sign logic strictly apart.
pub mod magnitude;

/// Addition, subtraction, negation and multiplication.
pub mod arith;

/// Division, modulo and exponentiation.
///
/// These are the only partial operations on `BigInt`; division and modulo
/// reject a zero divisor and exponentiation rejects negative exponents.
pub mod divrem;

/// Total ordering between `BigInt` values.
pub mod cmp;

pub use self::core::BigInt;
