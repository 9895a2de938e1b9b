//! # numera
//!
//! numera is an interactive calculator for signed integers of unbounded
//! magnitude. It tokenizes a line of input, reorders it into postfix with
//! the shunting-yard algorithm, and evaluates the result with an
//! arbitrary-precision integer engine. Lines containing a relational
//! operator are evaluated as comparisons instead.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::fmt;

use crate::{
    bigint::BigInt,
    interpreter::{
        compiler::to_postfix,
        evaluator::{evaluate_postfix, evaluate_relation},
        lexer::tokenize,
    },
};

/// Defines the arbitrary-precision integer engine.
///
/// This module declares the `BigInt` value type and all arithmetic on it.
/// Digits are stored in base 10, least significant first, with an explicit
/// sign flag, and every operation is pure.
///
/// # Responsibilities
/// - Construction from decimal strings and booleans; decimal rendering.
/// - Addition, subtraction, multiplication, division, modulo and
///   exponentiation.
/// - A single total ordering that all comparisons derive from.
pub mod bigint;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// compiling or evaluating a line. It standardizes error reporting and
/// carries detailed information about failures.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, compiler, evaluator).
/// - Attaches offending tokens and positions where useful.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together the lexer, the infix-to-postfix compiler and
/// the postfix evaluator that turn a raw line into a value or a boolean.
///
/// # Responsibilities
/// - Coordinates the pipeline stages: lexer, compiler, evaluator.
/// - Manages the flow of tokens and errors between phases.
pub mod interpreter;

/// The outcome of evaluating one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// An arithmetic line produced an integer value.
    Value(BigInt),
    /// A comparison line produced a truth value.
    Truth(bool),
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Truth(truth) => write!(f, "{truth}"),
        }
    }
}

/// Evaluates an arithmetic expression line to a `BigInt`.
///
/// Pipelines the line through the tokenizer, the shunting-yard compiler and
/// the postfix evaluator. Each call is independent; no state survives
/// between lines.
///
/// # Errors
/// Returns an error if tokenization, compilation or evaluation fails.
///
/// # Examples
/// ```
/// use numera::evaluate_expression;
///
/// let value = evaluate_expression("(3 + 4) * 2").unwrap();
/// assert_eq!(value.to_string(), "14");
///
/// assert!(evaluate_expression("7 % 0").is_err());
/// ```
pub fn evaluate_expression(line: &str) -> Result<BigInt, Box<dyn std::error::Error>> {
    let tokens = tokenize(line)?;
    let postfix = to_postfix(tokens)?;

    Ok(evaluate_postfix(&postfix)?)
}

/// Evaluates a relational comparison line to a boolean.
///
/// The line must tokenize to exactly three tokens: left operand, one of
/// `> < >= <= ==`, right operand.
///
/// # Errors
/// Returns an error if tokenization fails or the token sequence is not a
/// valid three-token comparison.
///
/// # Examples
/// ```
/// use numera::evaluate_comparison;
///
/// assert!(!evaluate_comparison("5 >= 10").unwrap());
/// assert!(evaluate_comparison("-3 < 2").unwrap());
/// ```
pub fn evaluate_comparison(line: &str) -> Result<bool, Box<dyn std::error::Error>> {
    let tokens = tokenize(line)?;

    Ok(evaluate_relation(&tokens)?)
}

/// Evaluates one input line, dispatching on its shape.
///
/// Lines containing any of `<`, `>` or `=` take the comparison path; every
/// other line is evaluated as an arithmetic expression.
///
/// # Errors
/// Returns an error if the chosen path fails. Failures are terminal for the
/// current line only.
///
/// # Examples
/// ```
/// use numera::{evaluate_line, Evaluation};
///
/// let result = evaluate_line("100 / 9").unwrap();
/// assert_eq!(result.to_string(), "11");
///
/// let result = evaluate_line("2 == 2").unwrap();
/// assert_eq!(result, Evaluation::Truth(true));
/// ```
pub fn evaluate_line(line: &str) -> Result<Evaluation, Box<dyn std::error::Error>> {
    if line.contains(['<', '>', '=']) {
        Ok(Evaluation::Truth(evaluate_comparison(line)?))
    } else {
        Ok(Evaluation::Value(evaluate_expression(line)?))
    }
}
