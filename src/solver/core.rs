use log::info;

use crate::expression::Expression;
use crate::solver::search::Search;

/// Exhaustive solver for the numbers round
pub struct NumbersSolver {}

impl NumbersSolver {
    /// Create a new numbers solver
    pub fn new() -> Self {
        Self {}
    }

    /// Find an expression over a subset of `numbers` that evaluates to `target`.
    ///
    /// The result is the first hit in a fixed enumeration order, so repeated
    /// calls with the same input return the same expression.
    pub fn find_expression(&self, numbers: &[u32], target: u32) -> Option<Expression> {
        info!("Searching {:?} for {}", numbers, target);

        let mut search = Search::new(target);
        let found = search.run(numbers);

        match &found {
            Some(expr) => info!(
                "Found exact match after {} candidates: {}",
                search.visited(),
                expr
            ),
            None => info!("No exact match after {} candidates", search.visited()),
        }
        found
    }

    /// Like [`find_expression`](Self::find_expression), but fall back to the
    /// expression closest to `target` when it cannot be reached exactly.
    ///
    /// Returns `None` only when `numbers` is empty.
    pub fn find_closest(&self, numbers: &[u32], target: u32) -> Option<Expression> {
        info!("Searching {:?} for {} or the closest value", numbers, target);

        let mut search = Search::tracking_closest(target);
        if let Some(exact) = search.run(numbers) {
            info!("Found exact match after {} candidates: {}", search.visited(), exact);
            return Some(exact);
        }

        info!("No exact match after {} candidates", search.visited());
        search.into_best()
    }
}

impl Default for NumbersSolver {
    fn default() -> Self {
        Self::new()
    }
}
