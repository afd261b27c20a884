use crate::expression::ast::{Expression, Operator};

/// Outcome of applying one operator to a pair of expressions.
///
/// A trivial merge (times one, times zero, `x - x`, divide by one) is still a
/// legal value and may hit the target, but it never needs to be merged any
/// further: its result is one of the operands or a zero. `x / x` is not
/// trivial, since it is the only way to make a 1 out of two equal numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merge {
    pub expression: Expression,
    pub trivial: bool,
}

impl Operator {
    /// Apply the operator with the game's integer-only rules.
    ///
    /// Subtraction and division only ever run as `larger op smaller`, so the
    /// result is non-negative and at most one ordering is produced.
    pub fn apply(self, a: &Expression, b: &Expression) -> Option<Merge> {
        let (left, right) = if self.is_commutative() || a.value >= b.value {
            (a, b)
        } else {
            (b, a)
        };

        let (value, trivial) = match self {
            Operator::Add => (left.value.checked_add(right.value)?, false),
            Operator::Mul => (
                left.value.checked_mul(right.value)?,
                left.value <= 1 || right.value <= 1,
            ),
            Operator::Sub => {
                let value = left.value - right.value;
                (value, value == 0)
            }
            Operator::Div => {
                if right.value == 0 || left.value % right.value != 0 {
                    return None;
                }
                (left.value / right.value, right.value == 1)
            }
        };

        Some(Merge {
            expression: Expression::compose(self, left, right, value),
            trivial,
        })
    }
}

/// Every legal merge of `a` and `b`, in operator order, one per distinct value.
///
/// A later merge with an already seen value is dropped, unless it is useful and
/// the earlier one was trivial.
pub fn merges(a: &Expression, b: &Expression) -> Vec<Merge> {
    let mut out: Vec<Merge> = Vec::with_capacity(Operator::ALL.len());

    for merge in Operator::ALL.iter().filter_map(|op| op.apply(a, b)) {
        match out
            .iter_mut()
            .find(|seen| seen.expression.value == merge.expression.value)
        {
            Some(seen) if seen.trivial && !merge.trivial => *seen = merge,
            Some(_) => {}
            None => out.push(merge),
        }
    }

    out
}

/// The values worth carrying forward in a search: legal, distinct and not trivial.
pub fn combine(a: &Expression, b: &Expression) -> Vec<Expression> {
    merges(a, b)
        .into_iter()
        .filter(|merge| !merge.trivial)
        .map(|merge| merge.expression)
        .collect()
}
