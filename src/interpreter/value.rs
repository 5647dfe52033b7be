use num_bigint::BigInt;

use crate::util::num::format_number;

/// Represents a runtime value in the evaluator.
///
/// Every operand token and every result of an operator is a `Value`. The four
/// variants are closed: operators match on them explicitly and never convert
/// one variant into another.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision floating-point number, written `3`, `2.5` or `.5`.
    Number(f64),
    /// An arbitrary-precision integer, written with an `n` suffix like `10n`.
    Integer(BigInt),
    /// A text value, written between matching `'`, `"` or `` ` `` quotes.
    Text(String),
    /// A boolean value (`true` or `false`).
    /// No operator accepts booleans, so they only appear as whole results or
    /// as variable values.
    Boolean(bool),
}

impl Value {
    /// Returns the name of this value's type as used in error messages.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(1.0).type_name(), "number");
    /// assert_eq!(Value::from("a").type_name(), "string");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Integer(_) => "bigint",
            Self::Text(_) => "string",
            Self::Boolean(_) => "boolean",
        }
    }

    /// Returns the floating-point payload if this is a `Number`.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the integer payload if this is an `Integer`.
    #[must_use]
    pub const fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Self::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the text payload if this is a `Text`.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean payload if this is a `Boolean`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::Integer(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(BigInt::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_only_their_variant() {
        let values = [Value::Number(1.5),
                      Value::from(7_i64),
                      Value::from("seven"),
                      Value::Boolean(false)];

        assert_eq!(values.iter().filter_map(Value::as_number).collect::<Vec<_>>(), [1.5]);
        assert_eq!(values.iter().filter_map(Value::as_integer).collect::<Vec<_>>(),
                   [&BigInt::from(7)]);
        assert_eq!(values.iter().filter_map(Value::as_text).collect::<Vec<_>>(), ["seven"]);
        assert_eq!(values.iter().filter_map(Value::as_bool).collect::<Vec<_>>(), [false]);
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Number(1e21).to_string(), "1e+21");
        assert_eq!(Value::from(-3_i64).to_string(), "-3");
        assert_eq!(Value::from("a b").to_string(), "a b");
        assert_eq!(Value::Boolean(true).to_string(), "true");
    }
}
