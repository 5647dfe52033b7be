use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::{
    error::{EvalError, EvalResult},
    interpreter::value::Value,
    util::num::checked_exponent,
};

/// Evaluates an exact big integer exponentiation.
///
/// Bases `0`, `1` and `-1` are answered directly for any non-negative
/// exponent. Other bases are limited by the size of the result; there is no
/// fallback to floating point since integers never turn into numbers.
///
/// # Errors
/// - `EvalError::NegativeExponent` if `exponent` is below zero.
/// - `EvalError::ExponentTooLarge` if the result would exceed
///   [`MAX_INTEGER_BITS`](crate::util::num::MAX_INTEGER_BITS).
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use shunt::interpreter::evaluator::binary::power::eval_pow;
///
/// let result = eval_pow(&BigInt::from(2), &BigInt::from(100)).unwrap();
/// assert_eq!(result.to_string(), "1267650600228229401496703205376");
///
/// let huge = BigInt::from(5_000_000_000u64);
/// assert_eq!(eval_pow(&BigInt::from(1), &huge).unwrap(), BigInt::from(1));
/// assert!(eval_pow(&BigInt::from(7), &huge).is_err());
/// ```
pub fn eval_pow(base: &BigInt, exponent: &BigInt) -> EvalResult<BigInt> {
    if exponent.is_negative() {
        return Err(EvalError::NegativeExponent { exponent: Value::Integer(exponent.clone()) });
    }
    if exponent.is_zero() {
        return Ok(BigInt::one());
    }
    if base.is_zero() || base.is_one() {
        return Ok(base.clone());
    }
    if base.abs().is_one() {
        let odd = !(exponent % 2u32).is_zero();
        return Ok(if odd { base.clone() } else { BigInt::one() });
    }

    Ok(base.pow(checked_exponent(base.bits(), exponent)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn trivial_bases_ignore_exponent_size() {
        let huge = int(5_000_000_000);
        assert_eq!(eval_pow(&int(0), &huge).unwrap(), int(0));
        assert_eq!(eval_pow(&int(1), &huge).unwrap(), int(1));
        assert_eq!(eval_pow(&int(-1), &huge).unwrap(), int(1));
        assert_eq!(eval_pow(&int(-1), &(huge + 1)).unwrap(), int(-1));
        assert_eq!(eval_pow(&int(0), &int(0)).unwrap(), int(1));
    }

    #[test]
    fn oversized_results_are_rejected() {
        for exponent in [30_000_000, 4_000_000_000] {
            let err = eval_pow(&int(7), &int(exponent)).unwrap_err();
            assert_eq!(err, EvalError::ExponentTooLarge { exponent: Value::from(exponent) });
        }
    }

    #[test]
    fn negative_exponent_is_checked_first() {
        assert!(matches!(eval_pow(&int(1), &int(-1)),
                         Err(EvalError::NegativeExponent { .. })));
    }
}
