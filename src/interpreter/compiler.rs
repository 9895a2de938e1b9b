use crate::{error::ParseError, interpreter::lexer::Token};

/// Returns the binding strength of an operator token.
///
/// `^` binds tightest, then the multiplicative group `* / %`, then the
/// additive group `+ -`. Parentheses carry no precedence of their own and
/// any other token ranks below every operator.
const fn precedence(token: &Token) -> u8 {
    match token {
        Token::Caret => 3,
        Token::Star | Token::Slash | Token::Percent => 2,
        Token::Plus | Token::Minus => 1,
        _ => 0,
    }
}

/// Reorders an infix token sequence into postfix (Reverse Polish) order.
///
/// Shunting-yard with an auxiliary operator stack: operands go straight to
/// the output; an incoming operator first pops every stacked operator of
/// greater or equal precedence, making all operators left-associative. That
/// tie-break applies to `^` as well, so exponentiation chains evaluate left
/// to right rather than following the mathematical right-associative
/// convention. `(` always pushes and `)` pops to the matching `(`, with both
/// parentheses discarded.
///
/// # Errors
/// Returns `ParseError::UnbalancedParentheses` when a `)` has no matching
/// `(` or an unmatched `(` is left on the stack at the end of input.
///
/// # Example
/// ```
/// use numera::interpreter::{compiler::to_postfix, lexer::tokenize};
///
/// let postfix = to_postfix(tokenize("1 + 2 * 3").unwrap()).unwrap();
/// let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
///
/// assert_eq!(rendered, ["1", "2", "3", "*", "+"]);
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),

            Token::LParen => stack.push(token),

            Token::RParen => loop {
                match stack.pop() {
                    Some(Token::LParen) => break,
                    Some(operator) => output.push(operator),
                    None => return Err(ParseError::UnbalancedParentheses),
                }
            },

            operator => {
                while stack.last()
                           .is_some_and(|top| *top != Token::LParen
                                              && precedence(top) >= precedence(&operator))
                {
                    if let Some(top) = stack.pop() {
                        output.push(top);
                    }
                }
                stack.push(operator);
            },
        }
    }

    while let Some(operator) = stack.pop() {
        if operator == Token::LParen {
            return Err(ParseError::UnbalancedParentheses);
        }
        output.push(operator);
    }

    Ok(output)
}
