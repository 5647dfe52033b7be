/// Binary operator evaluation logic.
///
/// Applies the six arithmetic operators to a pair of values, checking that the
/// operand types fit the operator before computing anything.
pub mod binary;

/// Core evaluation logic and variable ownership.
///
/// Contains the `Evaluator`, which owns the variable store and chains the
/// lexer, converter and postfix evaluator into a single call.
pub mod core;

/// Stack machine over postfix token sequences.
pub mod postfix;
