use num_bigint::BigInt;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{value::Value, variables::VariableStore},
};

/// Suffix marking an arbitrary-precision integer literal, as in `10n`.
pub const BIG_INTEGER_SUFFIX: char = 'n';

/// Returns `true` for the characters that open and close text literals.
#[must_use]
pub const fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"' | '`')
}

/// Interprets one operand's source text as a value.
///
/// The first character decides the reading:
/// - `.` or a digit: a number. A trailing digit makes it a `Number`, a
///   trailing `n` makes the rest an `Integer`.
/// - a quote: `Text` with the delimiters stripped. Both ends must carry the
///   same delimiter.
/// - exactly `true` or `false`: a `Boolean`.
/// - anything else: the value of the variable with that name.
///
/// # Errors
/// - `EvalError::InvalidNumber` if a numeric literal does not parse.
/// - `EvalError::UnterminatedString` if the quotes do not match.
/// - `EvalError::UndefinedVariable` if the variable is not registered.
///
/// # Example
/// ```
/// use shunt::interpreter::{lexer::interpret_literal, value::Value, variables::VariableStore};
///
/// let vars = VariableStore::new();
/// assert_eq!(interpret_literal(".5", &vars).unwrap(), Value::Number(0.5));
/// assert_eq!(interpret_literal("'hi'", &vars).unwrap(), Value::from("hi"));
/// assert_eq!(interpret_literal("true", &vars).unwrap(), Value::Boolean(true));
/// assert!(interpret_literal("'hi\"", &vars).is_err());
/// ```
pub fn interpret_literal(text: &str, variables: &VariableStore) -> EvalResult<Value> {
    match text.chars().next() {
        Some(c) if c == '.' || c.is_ascii_digit() => parse_numeric(text),
        Some(c) if is_quote(c) => parse_text(text, c),
        _ => match text {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            name => variables.resolve(name).cloned(),
        },
    }
}

fn parse_numeric(text: &str) -> EvalResult<Value> {
    let invalid = || EvalError::InvalidNumber { literal: text.to_string() };

    match text.chars().next_back() {
        Some(c) if c.is_ascii_digit() => text.parse::<f64>().map(Value::Number).map_err(|_| invalid()),
        Some(BIG_INTEGER_SUFFIX) => {
            let digits = &text[..text.len() - BIG_INTEGER_SUFFIX.len_utf8()];
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            digits.parse::<BigInt>().map(Value::Integer).map_err(|_| invalid())
        },
        _ => Err(invalid()),
    }
}

fn parse_text(text: &str, open: char) -> EvalResult<Value> {
    // Delimiters are ASCII, so byte offsets of one are char boundaries.
    if text.len() >= 2 && text.ends_with(open) {
        Ok(Value::Text(text[1..text.len() - 1].to_string()))
    } else {
        Err(EvalError::UnterminatedString { text: text.to_string() })
    }
}
