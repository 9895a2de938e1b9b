use crate::{bigint::BigInt, error::RuntimeError, interpreter::lexer::Token};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix token sequence to a single value.
///
/// Maintains an operand stack: numbers push, operators pop the right-hand
/// operand first and then the left, apply, and push the result. After all
/// tokens are consumed exactly one value must remain; that value is the
/// result of the expression.
///
/// # Errors
/// - `RuntimeError::MalformedExpression` when an operator finds fewer than
///   two operands, or the stack does not reduce to a single value.
/// - `RuntimeError::UnknownOperator` when a token with no arithmetic meaning
///   (such as a relational operator) appears in operator position. The
///   reference behavior of silently skipping such tokens is deliberately not
///   kept.
/// - Any error raised by the applied operation, such as
///   `RuntimeError::DivisionByZero`.
///
/// # Example
/// ```
/// use numera::interpreter::{compiler::to_postfix, evaluator::evaluate_postfix, lexer::tokenize};
///
/// let postfix = to_postfix(tokenize("2 ^ 10").unwrap()).unwrap();
/// let value = evaluate_postfix(&postfix).unwrap();
///
/// assert_eq!(value.to_string(), "1024");
/// ```
pub fn evaluate_postfix(postfix: &[Token]) -> EvalResult<BigInt> {
    let mut stack: Vec<BigInt> = Vec::new();

    for token in postfix {
        if let Token::Number(value) = token {
            stack.push(value.clone());
            continue;
        }

        let right = stack.pop().ok_or(RuntimeError::MalformedExpression)?;
        let left = stack.pop().ok_or(RuntimeError::MalformedExpression)?;
        stack.push(apply(token, &left, &right)?);
    }

    let result = stack.pop().ok_or(RuntimeError::MalformedExpression)?;
    if stack.is_empty() {
        Ok(result)
    } else {
        Err(RuntimeError::MalformedExpression)
    }
}

/// Applies an arithmetic operator to two operands.
fn apply(operator: &Token, left: &BigInt, right: &BigInt) -> EvalResult<BigInt> {
    match operator {
        Token::Plus => Ok(left.add(right)),
        Token::Minus => Ok(left.sub(right)),
        Token::Star => Ok(left.mul(right)),
        Token::Slash => left.div(right),
        Token::Percent => left.rem(right),
        Token::Caret => left.pow(right),
        other => Err(RuntimeError::UnknownOperator { token: other.to_string() }),
    }
}

/// Evaluates a relational comparison of the form `left op right`.
///
/// Expects exactly three tokens: an operand, one of `> < >= <= ==`, and a
/// second operand. The relation is decided by the total ordering on
/// `BigInt`, so the derived forms can never disagree with `<`, `>` and `==`.
///
/// # Errors
/// - `RuntimeError::InvalidArity` when the sequence is not exactly three
///   tokens long.
/// - `RuntimeError::UnknownOperator` when the middle token is not a
///   relational operator.
/// - `RuntimeError::MalformedExpression` when either side is not an operand.
///
/// # Example
/// ```
/// use numera::interpreter::{evaluator::evaluate_relation, lexer::tokenize};
///
/// let tokens = tokenize("5 >= 10").unwrap();
/// assert_eq!(evaluate_relation(&tokens).unwrap(), false);
/// ```
pub fn evaluate_relation(tokens: &[Token]) -> EvalResult<bool> {
    if tokens.len() != 3 {
        return Err(RuntimeError::InvalidArity { found: tokens.len() });
    }

    match tokens {
        [Token::Number(left), operator, Token::Number(right)] => match operator {
            Token::Less => Ok(left < right),
            Token::Greater => Ok(left > right),
            Token::LessEqual => Ok(left <= right),
            Token::GreaterEqual => Ok(left >= right),
            Token::EqualEqual => Ok(left == right),
            other => Err(RuntimeError::UnknownOperator { token: other.to_string() }),
        },
        _ => Err(RuntimeError::MalformedExpression),
    }
}
