use thiserror::Error;

/// Errors raised while validating round input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Expected between 1 and {max} numbers, got {count}")]
    InvalidCount { count: usize, max: usize },
    #[error("Target must have three digits (100-999), got {0}")]
    TargetOutOfRange(u32),
    #[error("{0} is neither a big number (25, 50, 75, 100) nor a small one (0-10)")]
    NotInPool(u32),
    #[error("Big number {0} appears more than once")]
    DuplicateBigNumber(u32),
    #[error("Number {0} is not available or used too often")]
    UnavailableNumber(u32),
}
