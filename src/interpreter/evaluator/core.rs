use tracing::debug;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        converter::convert,
        evaluator::postfix::evaluate_postfix,
        lexer::tokenize,
        token::Token,
        value::Value,
        variables::VariableStore,
    },
};

/// Evaluates infix expressions against a set of user-defined variables.
///
/// ## Usage
///
/// An `Evaluator` is created once, variables are registered on it, and it is
/// then reused for any number of expressions. Every expression runs through
/// three stages: [`tokenize`], [`convert`] and [`evaluate_postfix`]. Each
/// stage is public and can be invoked on its own.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    variables: VariableStore,
}

impl Evaluator {
    /// Creates an evaluator with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator seeded with `(name, value)` pairs.
    ///
    /// # Errors
    /// Returns the first registration error, see
    /// [`Evaluator::register_variable`].
    ///
    /// # Example
    /// ```
    /// use shunt::{Evaluator, Value};
    ///
    /// let evaluator = Evaluator::with_variables([("w", Value::Number(3.0)),
    ///                                            ("h", Value::Number(4.0))]).unwrap();
    /// assert_eq!(evaluator.evaluate("w * h").unwrap(), Value::Number(12.0));
    /// ```
    pub fn with_variables<I, N, V>(variables: I) -> EvalResult<Self>
        where I: IntoIterator<Item = (N, V)>,
              N: AsRef<str>,
              V: Into<Value>
    {
        let mut evaluator = Self::new();
        for (name, value) in variables {
            let value: Value = value.into();
            evaluator.register_variable(name.as_ref(), value)?;
        }
        Ok(evaluator)
    }

    /// Registers or overwrites a variable.
    ///
    /// `value` may be a [`Value`] or an `Option<Value>`; passing `None`
    /// reports the missing value instead of registering anything.
    ///
    /// # Errors
    /// - `EvalError::InvalidVariableName` if `name` is empty or does not start
    ///   with a letter, `_` or `$`.
    /// - `EvalError::MissingVariableValue` if `value` is `None`.
    ///
    /// # Example
    /// ```
    /// use shunt::{Evaluator, Value};
    ///
    /// let mut evaluator = Evaluator::new();
    /// evaluator.register_variable("x", Value::Number(10.0)).unwrap();
    /// assert_eq!(evaluator.evaluate("x*x").unwrap(), Value::Number(100.0));
    ///
    /// assert!(evaluator.register_variable("y", None::<Value>).is_err());
    /// ```
    pub fn register_variable(&mut self,
                             name: &str,
                             value: impl Into<Option<Value>>)
                             -> EvalResult<()> {
        self.variables.register(name, value.into())?;
        debug!(name, "registered variable");
        Ok(())
    }

    /// Returns the variables registered so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// Tokenizes `expr`, resolving identifiers against this evaluator's
    /// variables.
    ///
    /// # Errors
    /// See [`tokenize`].
    pub fn tokenize(&self, expr: &str) -> EvalResult<Vec<Token>> {
        tokenize(expr, &self.variables)
    }

    /// Evaluates an infix expression.
    ///
    /// Errors from any stage are returned as they were raised.
    ///
    /// # Errors
    /// Any error from [`tokenize`], [`convert`] or [`evaluate_postfix`].
    ///
    /// # Example
    /// ```
    /// use shunt::{Evaluator, Value};
    ///
    /// let evaluator = Evaluator::new();
    /// assert_eq!(evaluator.evaluate("5 + 7*2+(85^2+1)").unwrap(), Value::Number(7246.0));
    /// assert_eq!(evaluator.evaluate("10n + 5n").unwrap(), Value::from(15_i64));
    /// assert!(evaluator.evaluate("\"foo\" + 2").is_err());
    /// ```
    #[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
    pub fn evaluate(&self, expr: &str) -> EvalResult<Value> {
        let tokens = self.tokenize(expr)?;
        let postfix = convert(tokens)?;
        evaluate_postfix(postfix)
    }

    /// Evaluates an expression given as raw bytes.
    ///
    /// # Errors
    /// - `EvalError::NonTextExpression` if `bytes` are not valid UTF-8.
    /// - Otherwise the errors of [`Evaluator::evaluate`].
    ///
    /// # Example
    /// ```
    /// use shunt::{Evaluator, Value, error::ErrorKind};
    ///
    /// let evaluator = Evaluator::new();
    /// assert_eq!(evaluator.evaluate_bytes(b"1 + 1").unwrap(), Value::Number(2.0));
    /// let err = evaluator.evaluate_bytes(&[0xff, 0xfe]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Type);
    /// ```
    pub fn evaluate_bytes(&self, bytes: &[u8]) -> EvalResult<Value> {
        let expr = std::str::from_utf8(bytes).map_err(|_| EvalError::NonTextExpression)?;
        self.evaluate(expr)
    }
}
