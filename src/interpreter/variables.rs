use std::collections::HashMap;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::value::Value,
};

/// Stores the user-defined variables an expression may refer to.
///
/// Entries live as long as the store. There is no removal; registering an
/// existing name replaces its value.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    entries: HashMap<String, Value>,
}

/// Checks that `name` starts with an ASCII letter, `_` or `$`.
///
/// Only the first character is constrained.
///
/// # Example
/// ```
/// use shunt::interpreter::variables::is_valid_name;
///
/// assert!(is_valid_name("$total"));
/// assert!(is_valid_name("_x1"));
/// assert!(!is_valid_name("1x"));
/// assert!(!is_valid_name(""));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the variable `name`.
    ///
    /// `value` is optional so that callers forwarding untrusted input can hand
    /// over a missing value and get the matching error back.
    ///
    /// # Errors
    /// - `EvalError::InvalidVariableName` if `name` is empty or starts with
    ///   anything other than a letter, `_` or `$`.
    /// - `EvalError::MissingVariableValue` if `value` is `None`.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::{value::Value, variables::VariableStore};
    ///
    /// let mut store = VariableStore::new();
    /// store.register("x", Some(Value::Number(10.0))).unwrap();
    /// assert_eq!(store.resolve("x").unwrap(), &Value::Number(10.0));
    ///
    /// assert!(store.register("9lives", Some(Value::Boolean(true))).is_err());
    /// assert!(store.register("y", None).is_err());
    /// ```
    pub fn register(&mut self, name: &str, value: Option<Value>) -> EvalResult<()> {
        if !is_valid_name(name) {
            return Err(EvalError::InvalidVariableName { name: name.to_string() });
        }
        let value = value.ok_or_else(|| EvalError::MissingVariableValue { name: name.to_string() })?;
        self.entries.insert(name.to_string(), value);
        Ok(())
    }

    /// Looks up the value registered under `name`.
    ///
    /// # Errors
    /// Returns `EvalError::UndefinedVariable` if `name` was never registered.
    pub fn resolve(&self, name: &str) -> EvalResult<&Value> {
        self.entries
            .get(name)
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
    }

    /// Returns `true` if `name` has a registered value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the number of registered variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no variables are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_replaces_existing_values() {
        let mut store = VariableStore::new();
        store.register("rate", Some(Value::Number(0.5))).unwrap();
        store.register("rate", Some(Value::Number(0.25))).unwrap();
        store.register("$label", Some(Value::from("total"))).unwrap();

        assert!(store.contains("rate"));
        assert!(!store.contains("missing"));
        assert_eq!(store.resolve("rate").unwrap(), &Value::Number(0.25));

        let mut entries: Vec<_> = store.iter().collect();
        entries.sort_by_key(|(name, _)| *name);
        assert_eq!(entries,
                   [("$label", &Value::from("total")), ("rate", &Value::Number(0.25))]);
    }

    #[test]
    fn failed_registration_leaves_store_unchanged() {
        let mut store = VariableStore::new();
        assert!(store.register("9lives", Some(Value::Boolean(true))).is_err());
        assert!(store.register("cat", None).is_err());
        assert!(!store.contains("cat"));
        assert_eq!(store.len(), 0);
    }
}
