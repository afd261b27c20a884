//! Input validation at the boundary of the solver

mod errors;
mod validation;

pub use errors::UtilsError;
pub use validation::{validate_numbers, validate_operands, validate_pool, validate_target};

#[cfg(test)]
mod tests;
