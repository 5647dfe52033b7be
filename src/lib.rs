//! # shunt
//!
//! shunt evaluates string expressions written in infix notation, such as
//! `5 + 7*2 + (85^2 + 1)` or `"foo" + "bar"`. Expressions may use numbers,
//! big integers (`10n`), quoted text, booleans and registered variables, the
//! operators `^ * / % + -`, and parentheses. Every operator checks that its
//! operands have matching, supported types.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error type shared by every stage.
///
/// This module defines all errors that can be raised while registering
/// variables, tokenizing, converting or evaluating an expression, together
/// with the category each error belongs to.
///
/// # Responsibilities
/// - Defines one error enum covering every failure mode.
/// - Carries the offending values and their types in each message.
/// - Groups variants into categories that callers can match on.
pub mod error;
/// Orchestrates the evaluation of an expression.
///
/// This module ties together the lexer, the infix-to-postfix converter, the
/// postfix evaluator, the value types and the variable store.
///
/// # Responsibilities
/// - Coordinates all stages of evaluation.
/// - Exposes each stage for independent use.
/// - Owns the user-defined variables of an evaluator.
pub mod interpreter;
/// General numeric helpers.
///
/// Formatting of floating-point results and safe narrowing of big integer
/// exponents.
pub mod util;

pub use crate::{
    error::{ErrorKind, EvalError, EvalResult},
    interpreter::{
        converter::convert,
        evaluator::{core::Evaluator, postfix::evaluate_postfix},
        lexer::tokenize,
        token::{Operator, Token},
        value::Value,
    },
};

/// Evaluates an expression that uses no variables.
///
/// This is a shorthand for evaluating with a fresh [`Evaluator`]; any
/// identifier in `expr` is therefore undefined.
///
/// # Errors
/// Returns the error of whichever stage failed.
///
/// # Examples
/// ```
/// use shunt::{Value, evaluate};
///
/// // `*` ranks above `/`, so this is (2 * 6) / 3.
/// assert_eq!(evaluate("2*6/3").unwrap(), Value::Number(4.0));
///
/// // Text can only be added to text.
/// assert!(evaluate("'foo' + 2").is_err());
/// ```
pub fn evaluate(expr: &str) -> EvalResult<Value> {
    Evaluator::new().evaluate(expr)
}
