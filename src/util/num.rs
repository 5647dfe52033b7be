use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

use crate::{
    error::{EvalError, EvalResult},
    interpreter::value::Value,
};

/// Largest bit length a big integer power may produce.
pub const MAX_INTEGER_BITS: u64 = 1 << 20;

/// Renders a floating-point number the way expression results are shown.
///
/// Integral values print without a fractional part, infinities print as
/// `Infinity` / `-Infinity`, and negative zero prints as `0`. Magnitudes of
/// at least `1e21` or below `1e-6` use exponent form with an explicit sign,
/// as in `1e+21` and `1.5e-7`.
///
/// ## Example
/// ```
/// use shunt::util::num::format_number;
///
/// assert_eq!(format_number(7246.0), "7246");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(-1.5e-7), "-1.5e-7");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        String::from(if value.is_sign_positive() { "Infinity" } else { "-Infinity" })
    } else if value == 0.0 {
        "0".to_string()
    } else if (1e-6..1e21).contains(&value.abs()) {
        value.to_string()
    } else {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            },
            _ => formatted,
        }
    }
}

/// Converts a big integer exponent to `u32` for `BigInt::pow`, given the bit
/// length of the base.
///
/// The result of the power is bounded by `base_bits * exponent` bits, which
/// must not exceed [`MAX_INTEGER_BITS`].
///
/// ## Errors
/// - `EvalError::NegativeExponent` if the exponent is below zero.
/// - `EvalError::ExponentTooLarge` if the result could exceed the size limit.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use shunt::util::num::checked_exponent;
///
/// assert_eq!(checked_exponent(2, &BigInt::from(10)).unwrap(), 10);
/// assert!(checked_exponent(2, &BigInt::from(-1)).is_err());
/// assert!(checked_exponent(3, &BigInt::from(1u64 << 30)).is_err());
/// ```
pub fn checked_exponent(base_bits: u64, exponent: &BigInt) -> EvalResult<u32> {
    if exponent.is_negative() {
        return Err(EvalError::NegativeExponent { exponent: Value::Integer(exponent.clone()) });
    }
    let too_large = || EvalError::ExponentTooLarge { exponent: Value::Integer(exponent.clone()) };

    let exp = exponent.to_u64().ok_or_else(too_large)?;
    match base_bits.checked_mul(exp) {
        Some(bits) if bits <= MAX_INTEGER_BITS => u32::try_from(exp).map_err(|_| too_large()),
        _ => Err(too_large()),
    }
}
