use num_bigint::BigInt;
use num_traits::Zero;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{evaluator::binary::power::eval_pow, token::Operator},
};

/// Evaluates an operator on two floating-point numbers.
///
/// IEEE-754 rules apply throughout: dividing by zero gives an infinity,
/// `0 / 0` and `x % 0` give NaN, and `%` keeps the sign of the dividend.
/// A NaN exponent, or an infinite exponent on a base of magnitude one,
/// gives NaN.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::binary::scalar::eval_scalar_op, token::Operator};
///
/// assert_eq!(eval_scalar_op(Operator::Remainder, -7.0, 3.0), -1.0);
/// assert!(eval_scalar_op(Operator::Divide, 1.0, 0.0).is_infinite());
/// assert!(eval_scalar_op(Operator::Power, 1.0, f64::NAN).is_nan());
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn eval_scalar_op(op: Operator, a: f64, b: f64) -> f64 {
    match op {
        Operator::Power if b.is_nan() || (b.is_infinite() && a.abs() == 1.0) => f64::NAN,
        Operator::Power => a.powf(b),
        Operator::Multiply => a * b,
        Operator::Divide => a / b,
        Operator::Remainder => a % b,
        Operator::Add => a + b,
        Operator::Subtract => a - b,
    }
}

/// Evaluates an operator on two big integers.
///
/// Division truncates toward zero and the remainder takes the sign of the
/// dividend.
///
/// # Errors
/// - `EvalError::DivisionByZero` for `/` or `%` with a zero divisor.
/// - The errors of [`eval_pow`] for `^`.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use shunt::interpreter::{evaluator::binary::scalar::eval_integer_op, token::Operator};
///
/// let q = eval_integer_op(Operator::Divide, BigInt::from(-7), &BigInt::from(2)).unwrap();
/// assert_eq!(q, BigInt::from(-3));
/// assert!(eval_integer_op(Operator::Remainder, BigInt::from(1), &BigInt::from(0)).is_err());
/// ```
pub fn eval_integer_op(op: Operator, a: BigInt, b: &BigInt) -> EvalResult<BigInt> {
    match op {
        Operator::Power => eval_pow(&a, b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide | Operator::Remainder if b.is_zero() => {
            Err(EvalError::DivisionByZero { operator: op })
        },
        Operator::Divide => Ok(a / b),
        Operator::Remainder => Ok(a % b),
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
    }
}
