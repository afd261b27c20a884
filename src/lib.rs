//! Countdown - a solver for the numbers round of the Countdown game show
//!
//! Given up to six source numbers and a target, the solver searches for an
//! arithmetic expression over a subset of the numbers, each used at most once,
//! combined with addition, subtraction, multiplication and exact division,
//! that hits the target. No step may go negative or leave a remainder.

pub mod expression;
pub mod round;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use round::Round;
pub use solver::{NumbersSolver, SolverError};
pub use utils::{UtilsError, validate_numbers};

/// Find an expression over `numbers` that evaluates to `target`
///
/// This is a convenience function that validates the input, creates a default
/// solver and runs an exhaustive search.
///
/// # Returns
///
/// * `Ok(Some(Expression))` - If a matching expression is found
/// * `Ok(None)` - If no subset of the numbers reaches the target
/// * `Err(SolverError)` - If the input is rejected before searching
///
/// # Errors
///
/// This function will return an error if `numbers` is empty or holds more than
/// six numbers.
///
/// # Examples
///
/// ```
/// use countdown::solve;
///
/// match solve(&[3, 4, 5, 6, 7, 75], 955) {
///     Ok(Some(expr)) => println!("{} = {}", expr, expr.value()),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(numbers: &[u32], target: u32) -> Result<Option<Expression>, SolverError> {
    validate_numbers(numbers)?;

    let solver = NumbersSolver::new();
    Ok(solver.find_expression(numbers, target))
}

/// Like [`solve`], but settle for the closest reachable value
///
/// # Errors
///
/// Same input checks as [`solve`].
pub fn closest(numbers: &[u32], target: u32) -> Result<Option<Expression>, SolverError> {
    validate_numbers(numbers)?;

    let solver = NumbersSolver::new();
    Ok(solver.find_closest(numbers, target))
}
