use std::fmt;

use logos::Logos;

use crate::{bigint::BigInt, error::ParseError};

/// Represents a lexical token in an input line.
/// A token is either an integer operand or one of the calculator's operator
/// and punctuation symbols.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Integer literal tokens, such as `42`. The literal is parsed into a
    /// `BigInt` while lexing.
    #[regex(r"[0-9]+", parse_literal)]
    Number(BigInt),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// Spaces and tabs.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Percent => f.write_str("%"),
            Self::Caret => f.write_str("^"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::EqualEqual => f.write_str("=="),
            Self::LessEqual => f.write_str("<="),
            Self::GreaterEqual => f.write_str(">="),
            Self::Less => f.write_str("<"),
            Self::Greater => f.write_str(">"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(BigInt)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid integer.
fn parse_literal(lex: &logos::Lexer<Token>) -> Option<BigInt> {
    lex.slice().parse().ok()
}

/// Splits an input line into its token sequence.
///
/// Stateless and restartable; each call lexes the line from the start.
/// Whitespace separates tokens without producing one of its own. Signed
/// literals are folded before the sequence is returned, so a leading `-` on
/// a number in operand position becomes part of the operand.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the line contains a character
/// sequence that is not part of the calculator language.
///
/// # Example
/// ```
/// use numera::interpreter::lexer::{tokenize, Token};
///
/// let tokens = tokenize("(3 + 4) * 2").unwrap();
/// assert_eq!(tokens.len(), 7);
/// assert_eq!(tokens[2], Token::Plus);
///
/// assert!(tokenize("3 $ 4").is_err());
/// ```
pub fn tokenize(line: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token:  lexer.slice().to_string(),
                                                         column: lexer.span().start, })
            },
        }
    }

    Ok(fold_signed_literals(tokens))
}

/// Folds a unary minus into the number literal it prefixes.
///
/// A `-` is unary only when nothing has been emitted yet or the previous
/// token is an operator, a relation or `(`, and the next token is a number.
/// After a number or `)` a `-` always means binary subtraction, so
/// `5 -3` subtracts rather than producing two operands.
fn fold_signed_literals(tokens: Vec<Token>) -> Vec<Token> {
    let mut folded: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let unary = token == Token::Minus
                    && !matches!(folded.last(), Some(Token::Number(_) | Token::RParen))
                    && matches!(iter.peek(), Some(Token::Number(_)));

        if unary {
            if let Some(Token::Number(value)) = iter.next() {
                folded.push(Token::Number(value.neg()));
            }
        } else {
            folded.push(token);
        }
    }

    folded
}
