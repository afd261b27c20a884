mod core;
mod errors;
mod search;

pub use core::NumbersSolver;
pub use errors::SolverError;
