/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an input line or
/// converting it to postfix order. Parse errors include unrecognized
/// characters, malformed integer literals and unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence or a relational comparison. Runtime errors include division by
/// zero, malformed expressions and invalid comparison arity.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
