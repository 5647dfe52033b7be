/// Dispatch from an operator to its typed implementation.
pub mod core;
/// Exponentiation for numbers and big integers.
pub mod power;
/// Sums, differences, products, quotients, remainders and text
/// concatenation.
pub mod scalar;
