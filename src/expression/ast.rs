use std::fmt;

/// The four pairwise operations allowed in a numbers round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition, always legal
    Add,
    /// Subtraction, larger operand first
    Sub,
    /// Multiplication, always legal
    Mul,
    /// Exact division, larger operand first
    Div,
}

impl Operator {
    /// Enumeration order used by the search
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// ASCII symbol used in expression text
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Whether operand order is irrelevant (Add and Mul)
    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A value reachable from the source numbers, paired with the text that derives it.
///
/// Composites are built by concatenating the operands' text, so no tree of
/// child nodes is kept around: `(L op R)` is all that survives of a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub(crate) value: u32,
    pub(crate) text: String,
    pub(crate) operations: usize,
}

impl Expression {
    /// A source number, used as-is
    pub fn number(value: u32) -> Self {
        Self {
            value,
            text: value.to_string(),
            operations: 0,
        }
    }

    /// Compose two expressions under `op`. The caller has already computed `value`.
    pub(crate) fn compose(op: Operator, left: &Expression, right: &Expression, value: u32) -> Self {
        Self {
            value,
            text: format!("({} {} {})", left.text, op, right.text),
            operations: left.operations + right.operations + 1,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of pairwise operations; zero for a source number
    pub fn operations(&self) -> usize {
        self.operations
    }

    pub fn distance_to(&self, target: u32) -> u32 {
        self.value.abs_diff(target)
    }
}
