/// The converter module reorders infix tokens into postfix order.
///
/// It implements the shunting-yard algorithm over the lexer's tokens, using
/// operator precedence to decide the order of evaluation and consuming
/// parentheses as pure grouping.
///
/// # Responsibilities
/// - Emits operands in source order and operators once their operands are
///   complete.
/// - Resolves equal precedence left to right.
/// - Reports unbalanced parentheses.
pub mod converter;
/// The evaluator module computes results from postfix tokens.
///
/// The evaluator walks a postfix sequence with an operand stack, applying each
/// operator with its type rules. It also hosts the `Evaluator` type that owns
/// the variables and runs the whole pipeline.
///
/// # Responsibilities
/// - Applies the six binary operators with strict operand type checks.
/// - Reports malformed postfix sequences.
/// - Chains tokenizing, conversion and evaluation for a whole expression.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw expression and produces typed tokens: operators,
/// parentheses, and operands whose values are already known. Quoted text,
/// numbers, big integers, booleans and variables are all resolved here.
///
/// # Responsibilities
/// - Tracks whether the scan is inside a quoted literal.
/// - Interprets operand text as a literal or a variable reference.
/// - Reports unterminated quotes, malformed numbers and unknown variables.
pub mod lexer;
/// Token and operator definitions shared by every stage.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the closed `Value` enum: number, big integer, text and boolean.
/// - Names value types for error messages and renders values for display.
pub mod value;
/// Named values that expressions can refer to.
pub mod variables;
