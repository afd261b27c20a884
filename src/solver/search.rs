use log::{debug, trace};

use crate::expression::{Expression, merges};

/// Depth-first state for one solve call.
///
/// Every value is checked against the target the moment it exists: the
/// source numbers up front, then each merge as it is produced. A hit on an
/// intermediate value means the numbers still active are simply left unused,
/// which is how smaller subsets of the input are covered.
pub(crate) struct Search {
    target: u32,
    track_closest: bool,
    best: Option<Expression>,
    visited: u64,
}

impl Search {
    /// Search for an exact hit only
    pub(crate) fn new(target: u32) -> Self {
        Self {
            target,
            track_closest: false,
            best: None,
            visited: 0,
        }
    }

    /// Search for an exact hit, remembering the closest value along the way
    pub(crate) fn tracking_closest(target: u32) -> Self {
        Self {
            track_closest: true,
            ..Self::new(target)
        }
    }

    /// Number of candidate values checked so far
    pub(crate) fn visited(&self) -> u64 {
        self.visited
    }

    /// Closest value seen; the first one wins a tie. Always `None` unless
    /// built with [`tracking_closest`](Self::tracking_closest).
    pub(crate) fn into_best(self) -> Option<Expression> {
        self.best
    }

    /// Return the first expression equal to the target in enumeration order
    pub(crate) fn run(&mut self, numbers: &[u32]) -> Option<Expression> {
        let active: Vec<Expression> = numbers.iter().map(|&n| Expression::number(n)).collect();

        for leaf in &active {
            if self.check(leaf) {
                return Some(leaf.clone());
            }
        }

        self.explore(&active)
    }

    fn check(&mut self, candidate: &Expression) -> bool {
        self.visited += 1;

        let distance = candidate.distance_to(self.target);
        if !self.track_closest {
            return distance == 0;
        }

        let improves = self
            .best
            .as_ref()
            .is_none_or(|best| distance < best.distance_to(self.target));
        if improves {
            debug!("New closest value {} = {} (off by {})", candidate, candidate.value(), distance);
            self.best = Some(candidate.clone());
        }

        distance == 0
    }

    fn explore(&mut self, active: &[Expression]) -> Option<Expression> {
        trace!("Exploring {} active values", active.len());

        // Pairs with the same two values leave the same multiset behind
        let mut tried: Vec<(u32, u32)> = Vec::new();

        for (i, a) in active.iter().enumerate() {
            for (j, b) in active.iter().enumerate().skip(i + 1) {
                let key = (a.value().min(b.value()), a.value().max(b.value()));
                if tried.contains(&key) {
                    continue;
                }
                tried.push(key);

                for merge in merges(a, b) {
                    // Checked before the trivial prune so `x - x` can still hit a zero target
                    if self.check(&merge.expression) {
                        return Some(merge.expression);
                    }
                    if merge.trivial || active.len() == 2 {
                        continue;
                    }

                    let next: Vec<Expression> = active
                        .iter()
                        .enumerate()
                        .filter(|&(k, _)| k != i && k != j)
                        .map(|(_, e)| e.clone())
                        .chain(std::iter::once(merge.expression))
                        .collect();

                    if let Some(found) = self.explore(&next) {
                        return Some(found);
                    }
                }
            }
        }

        None
    }
}
