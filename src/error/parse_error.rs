#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur before an expression is evaluated.
pub enum ParseError {
    /// A literal could not be read as an optionally signed decimal integer.
    InvalidLiteral {
        /// The offending literal text.
        literal: String,
    },
    /// Found a character sequence that is not part of the calculator language.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The byte column in the input line where the token starts.
        column: usize,
    },
    /// The parentheses in the expression do not pair up.
    UnbalancedParentheses,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLiteral { literal } => {
                write!(f, "Invalid integer literal: '{literal}'.")
            },

            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },

            Self::UnbalancedParentheses => {
                write!(f, "Unbalanced parentheses in expression.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
