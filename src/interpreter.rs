/// The lexer module tokenizes an input line.
///
/// The lexer (tokenizer) reads a raw line of text and produces the sequence
/// of operand and operator tokens it contains. Integer literals are parsed
/// into `BigInt` values while tokenizing, and a unary minus is folded into
/// the literal it prefixes. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Parses integer literals into `BigInt` operands.
/// - Disambiguates unary minus from binary subtraction.
/// - Reports unrecognized characters with their position.
pub mod lexer;
/// The compiler module reorders infix tokens into postfix.
///
/// The compiler applies the shunting-yard algorithm to the token sequence
/// produced by the lexer, honoring operator precedence and parenthesized
/// grouping. Its output is a Reverse-Polish sequence that the evaluator can
/// process with a plain operand stack.
///
/// # Responsibilities
/// - Maintains the operator stack and the fixed precedence table.
/// - Resolves parenthesized grouping, rejecting unbalanced parentheses.
/// - Emits tokens in postfix order.
pub mod compiler;
/// The evaluator module reduces postfix sequences to results.
///
/// The evaluator consumes postfix tokens while maintaining a stack of
/// `BigInt` operands, applying each operator to the two topmost values. It
/// also evaluates the three-token relational form used by comparison lines.
///
/// # Responsibilities
/// - Evaluates postfix sequences to a single `BigInt`.
/// - Evaluates relational comparisons to a boolean.
/// - Reports runtime errors such as division by zero or stack underflow.
pub mod evaluator;
