use numera::{
    error::{ParseError, RuntimeError},
    evaluate_line, Evaluation,
};

fn eval(line: &str) -> String {
    evaluate_line(line).unwrap_or_else(|e| panic!("'{line}' should evaluate: {e}"))
                       .to_string()
}

fn eval_err(line: &str) -> Box<dyn std::error::Error> {
    match evaluate_line(line) {
        Ok(result) => panic!("'{line}' should fail but evaluated to {result}"),
        Err(e) => e,
    }
}

#[test]
fn arithmetic_lines_produce_values() {
    assert_eq!(eval("12 + 7"), "19");
    assert_eq!(eval("100 / 9"), "11");
    assert_eq!(eval("2 ^ 10"), "1024");
    assert_eq!(eval("(3 + 4) * 2"), "14");
    assert_eq!(eval("7 % 3"), "1");
}

#[test]
fn precedence_orders_the_operators() {
    assert_eq!(eval("1 + 2 * 3"), "7");
    assert_eq!(eval("2 * 3 + 1"), "7");
    assert_eq!(eval("10 - 4 / 2"), "8");
    assert_eq!(eval("2 * 3 ^ 2"), "18");
    assert_eq!(eval("100 % 7 * 2"), "4");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval("(1 + 2) * 3"), "9");
    assert_eq!(eval("((1 + 2)) * (3)"), "9");
    assert_eq!(eval("2 ^ (1 + 1)"), "4");
}

#[test]
fn exponentiation_is_left_associative() {
    // Chained ^ evaluates left to right, so this is (2 ^ 3) ^ 2 and not
    // 2 ^ (3 ^ 2).
    assert_eq!(eval("2 ^ 3 ^ 2"), "64");
}

#[test]
fn subtraction_chains_are_left_associative() {
    assert_eq!(eval("10 - 3 - 2"), "5");
    assert_eq!(eval("100 / 10 / 5"), "2");
}

#[test]
fn minus_after_an_operand_is_subtraction() {
    // Without a disambiguation rule "5 -3" would tokenize as two operands.
    assert_eq!(eval("5 -3"), "2");
    assert_eq!(eval("5 - 3"), "2");
    assert_eq!(eval("5-3"), "2");
}

#[test]
fn minus_in_operand_position_is_a_sign() {
    assert_eq!(eval("-5"), "-5");
    assert_eq!(eval("-5 + 3"), "-2");
    assert_eq!(eval("(-3 + 4) * 2"), "2");
    assert_eq!(eval("2 * -3"), "-6");
}

#[test]
fn unbounded_magnitudes_survive_the_pipeline() {
    assert_eq!(eval("2 ^ 128"), "340282366920938463463374607431768211456");
    assert_eq!(eval("99999999999999999999 + 1"), "100000000000000000000");
    assert_eq!(eval("123456789123456789 * 1000000000"),
               "123456789123456789000000000");
}

#[test]
fn comparison_lines_produce_booleans() {
    assert_eq!(evaluate_line("5 >= 10").unwrap(), Evaluation::Truth(false));
    assert_eq!(evaluate_line("10 >= 10").unwrap(), Evaluation::Truth(true));
    assert_eq!(evaluate_line("3 < 4").unwrap(), Evaluation::Truth(true));
    assert_eq!(evaluate_line("4 > 4").unwrap(), Evaluation::Truth(false));
    assert_eq!(evaluate_line("2 == 2").unwrap(), Evaluation::Truth(true));
    assert_eq!(evaluate_line("-5 >= -10").unwrap(), Evaluation::Truth(true));
    assert_eq!(eval("5 <= 10"), "true");
}

#[test]
fn division_by_zero_is_reported() {
    let err = eval_err("7 % 0");
    assert_eq!(err.downcast_ref::<RuntimeError>(),
               Some(&RuntimeError::DivisionByZero));

    let err = eval_err("1 / (2 - 2)");
    assert_eq!(err.downcast_ref::<RuntimeError>(),
               Some(&RuntimeError::DivisionByZero));
}

#[test]
fn unbalanced_parentheses_are_reported() {
    let err = eval_err("(1 + 2");
    assert_eq!(err.downcast_ref::<ParseError>(),
               Some(&ParseError::UnbalancedParentheses));

    let err = eval_err("1 + 2)");
    assert_eq!(err.downcast_ref::<ParseError>(),
               Some(&ParseError::UnbalancedParentheses));
}

#[test]
fn malformed_expressions_are_reported() {
    let err = eval_err("1 +");
    assert_eq!(err.downcast_ref::<RuntimeError>(),
               Some(&RuntimeError::MalformedExpression));

    let err = eval_err("* 2");
    assert_eq!(err.downcast_ref::<RuntimeError>(),
               Some(&RuntimeError::MalformedExpression));

    let err = eval_err("1 2");
    assert_eq!(err.downcast_ref::<RuntimeError>(),
               Some(&RuntimeError::MalformedExpression));
}

#[test]
fn comparison_arity_is_enforced() {
    let err = eval_err("1 + 2 == 3");
    assert_eq!(err.downcast_ref::<RuntimeError>(),
               Some(&RuntimeError::InvalidArity { found: 5 }));

    let err = eval_err("== 3");
    assert_eq!(err.downcast_ref::<RuntimeError>(),
               Some(&RuntimeError::InvalidArity { found: 2 }));
}

#[test]
fn unknown_characters_are_reported_with_position() {
    let err = eval_err("3 $ 4");
    assert_eq!(err.downcast_ref::<ParseError>(),
               Some(&ParseError::UnexpectedToken { token:  "$".to_string(),
                                                   column: 2, }));

    // A lone '=' is not a token; only '==' compares.
    let err = eval_err("1 = 1");
    assert!(matches!(err.downcast_ref::<ParseError>(),
                     Some(ParseError::UnexpectedToken { .. })));
}

#[test]
fn negative_exponents_are_rejected() {
    let err = eval_err("2 ^ -1");
    assert_eq!(err.downcast_ref::<RuntimeError>(),
               Some(&RuntimeError::NegativeExponent));
}
