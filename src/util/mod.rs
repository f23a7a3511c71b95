/// Panic helpers for internal inconsistencies.
pub mod exceptions;
/// Generation of random formulas.
pub mod formula_randomizer;

#[cfg(test)]
pub mod test_util;
