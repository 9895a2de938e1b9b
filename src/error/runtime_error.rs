#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division or modulo by zero.
    DivisionByZero,
    /// The operand stack ran dry, or did not reduce to a single result.
    MalformedExpression,
    /// A comparison line did not consist of exactly three tokens.
    InvalidArity {
        /// The number of tokens actually found.
        found: usize,
    },
    /// Exponentiation was attempted with a negative exponent.
    NegativeExponent,
    /// An operator token has no arithmetic meaning in this position.
    UnknownOperator {
        /// The operator encountered.
        token: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::MalformedExpression => write!(f, "Malformed expression."),

            Self::InvalidArity { found } => {
                write!(f,
                       "A comparison takes exactly three tokens (left, operator, right), but found {found}.")
            },

            Self::NegativeExponent => {
                write!(f, "Exponent must be non-negative.")
            },

            Self::UnknownOperator { token } => {
                write!(f, "Unknown operator '{token}' in expression.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
