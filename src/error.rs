use thiserror::Error;

use crate::interpreter::{
    token::{Operator, Token},
    value::Value,
};

/// Result type used by every stage of the pipeline.
///
/// All stage functions return either a value of type `T` or an [`EvalError`]
/// describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// The category an [`EvalError`] belongs to.
///
/// Several variants share a category (for example every malformed token
/// sequence is a [`ErrorKind::Structural`] error), which lets callers react to
/// the kind of failure without matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A variable name was empty or did not start with a letter, `_` or `$`.
    Name,
    /// A variable was registered without a value.
    Value,
    /// An identifier in the expression is not a registered variable.
    UndefinedVariable,
    /// A quoted text literal was opened but never closed.
    UnterminatedString,
    /// Operand types did not fit an operator, or the input was not text.
    Type,
    /// A numeric literal could not be parsed.
    Literal,
    /// Integer arithmetic was asked for something outside its domain.
    Range,
    /// Parentheses or the postfix sequence were malformed.
    Structural,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Name => "NameError",
            Self::Value => "ValueError",
            Self::UndefinedVariable => "UndefinedVariableError",
            Self::UnterminatedString => "UnterminatedStringError",
            Self::Type => "TypeError",
            Self::Literal => "LiteralError",
            Self::Range => "RangeError",
            Self::Structural => "StructuralError",
        };
        f.write_str(name)
    }
}

/// Represents all errors that can occur while registering variables or
/// evaluating an expression.
///
/// Errors are fatal to the call that raised them. They are returned unchanged
/// from [`crate::Evaluator::evaluate`], whichever stage produced them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Tried to register a variable under an empty or malformed name.
    #[error("Variable name error: '{name}' is not a valid variable name. Names must start with a \
             letter, '_' or '$'.")]
    InvalidVariableName {
        /// The rejected name.
        name: String,
    },
    /// Tried to register a variable without a value.
    #[error("Variable value error: a value for variable '{name}' is required.")]
    MissingVariableValue {
        /// The name that was being registered.
        name: String,
    },
    /// An identifier in the expression has no registered value.
    #[error("'{name}' is not defined. Register it with register_variable(\"{name}\", value) \
             before using it.")]
    UndefinedVariable {
        /// The unresolved identifier.
        name: String,
    },
    /// A quoted literal does not start and end with the same delimiter.
    #[error("Unmatched or missing quotes: {text} is not properly enclosed.")]
    UnterminatedString {
        /// The offending literal, including its delimiters.
        text: String,
    },
    /// The expression ended while a quoted literal was still open.
    #[error("Unclosed quoted text: {expression} contains unclosed quoted text.")]
    UnclosedQuote {
        /// The full expression being tokenized.
        expression: String,
    },
    /// A numeric-looking literal could not be parsed.
    #[error("Invalid number literal: '{literal}'.")]
    InvalidNumber {
        /// The literal as it appeared in the expression.
        literal: String,
    },
    /// The two operands of an operator have unsupported or differing types.
    #[error("Data type error: {} Received: {left} of type {} and {right} of type {}.",
            .operator.operand_requirement(),
            .left.type_name(),
            .right.type_name())]
    OperandTypeMismatch {
        /// The operator being applied.
        operator: Operator,
        /// The left operand.
        left:     Value,
        /// The right operand.
        right:    Value,
    },
    /// The expression handed to the evaluator was not valid text.
    #[error("Expression must be a string: input is not valid UTF-8.")]
    NonTextExpression,
    /// An integer division or remainder with a zero divisor.
    #[error("Range error: {operator} by zero is undefined for bigint operands.")]
    DivisionByZero {
        /// Either `/` or `%`.
        operator: Operator,
    },
    /// An integer power with a negative exponent.
    #[error("Range error: bigint exponent {exponent} must be non-negative.")]
    NegativeExponent {
        /// The rejected exponent.
        exponent: Value,
    },
    /// An integer power whose result would exceed the maximum integer size.
    #[error("Range error: bigint exponent {exponent} would make the result exceed {} bits.",
            crate::util::num::MAX_INTEGER_BITS)]
    ExponentTooLarge {
        /// The rejected exponent.
        exponent: Value,
    },
    /// A `)` with no matching `(` before it.
    #[error("Structural error: ')' has no matching '('.")]
    UnmatchedRightParen,
    /// A `(` that was never closed.
    #[error("Structural error: '(' is never closed.")]
    UnclosedLeftParen,
    /// An operator found fewer than two operands on the stack.
    #[error("Structural error: operator {operator} is missing an operand.")]
    MissingOperand {
        /// The operator that was short of operands.
        operator: Operator,
    },
    /// A parenthesis reached the postfix evaluator.
    #[error("Structural error: unexpected {paren} in a postfix sequence.")]
    UnexpectedParen {
        /// The parenthesis token.
        paren: Token,
    },
    /// Evaluation finished without exactly one value on the stack.
    #[error("Structural error: expected exactly one result, found {count}.")]
    DanglingOperands {
        /// Number of values left on the stack.
        count: usize,
    },
}

impl EvalError {
    /// Returns the category this error belongs to.
    ///
    /// # Example
    /// ```
    /// use shunt::{Evaluator, error::ErrorKind};
    ///
    /// let err = Evaluator::new().evaluate("y").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::UndefinedVariable);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidVariableName { .. } => ErrorKind::Name,
            Self::MissingVariableValue { .. } => ErrorKind::Value,
            Self::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
            Self::UnterminatedString { .. } | Self::UnclosedQuote { .. } => {
                ErrorKind::UnterminatedString
            },
            Self::OperandTypeMismatch { .. } | Self::NonTextExpression => ErrorKind::Type,
            Self::InvalidNumber { .. } => ErrorKind::Literal,
            Self::DivisionByZero { .. }
            | Self::NegativeExponent { .. }
            | Self::ExponentTooLarge { .. } => ErrorKind::Range,
            Self::UnmatchedRightParen
            | Self::UnclosedLeftParen
            | Self::MissingOperand { .. }
            | Self::UnexpectedParen { .. }
            | Self::DanglingOperands { .. } => ErrorKind::Structural,
        }
    }
}
