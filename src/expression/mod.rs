//! Expression values, the pairwise combiner and text re-evaluation

mod ast;
mod combine;
mod display;
mod errors;
mod eval;

pub use ast::{Expression, Operator};
pub use combine::{Merge, combine, merges};
pub use errors::ExpressionError;
pub use eval::{Evaluation, evaluate};
