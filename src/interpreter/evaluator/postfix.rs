use tracing::trace;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{token::Token, value::Value},
};

/// Evaluates a postfix token sequence to a single value.
///
/// Operands are pushed onto a stack. An operator pops its right operand, then
/// its left one, and pushes the result of [`Operator::apply`].
///
/// [`Operator::apply`]: crate::interpreter::token::Operator::apply
///
/// # Errors
/// - `EvalError::MissingOperand` if an operator finds fewer than two values.
/// - `EvalError::UnexpectedParen` if the sequence contains a parenthesis.
/// - `EvalError::DanglingOperands` unless exactly one value remains.
/// - Any error raised by an operator.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     evaluator::postfix::evaluate_postfix,
///     token::{Operator, Token},
///     value::Value,
/// };
///
/// // 8 2 -  =>  6
/// let tokens = vec![Token::Operand(Value::Number(8.0)),
///                   Token::Operand(Value::Number(2.0)),
///                   Token::Operator(Operator::Subtract)];
/// assert_eq!(evaluate_postfix(tokens).unwrap(), Value::Number(6.0));
/// ```
pub fn evaluate_postfix(tokens: Vec<Token>) -> EvalResult<Value> {
    let mut stack: Vec<Value> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Operand(value) => stack.push(value),
            Token::Operator(operator) => {
                let (Some(second), Some(first)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::MissingOperand { operator });
                };
                stack.push(operator.apply(first, second)?);
            },
            paren @ (Token::LParen | Token::RParen) => {
                return Err(EvalError::UnexpectedParen { paren });
            },
        }
    }

    trace!(remaining = stack.len(), "postfix evaluation finished");
    match (stack.pop(), stack.is_empty()) {
        (Some(result), true) => Ok(result),
        (None, _) => Err(EvalError::DanglingOperands { count: 0 }),
        (Some(_), false) => Err(EvalError::DanglingOperands { count: stack.len() + 1 }),
    }
}
