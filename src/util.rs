/// Numeric helpers shared by the value and evaluator modules.
///
/// This module renders floating-point results in their display form and
/// narrows big integer exponents to the machine width accepted by
/// `BigInt::pow`, reporting a range error instead of silently truncating.
pub mod num;
