use log::{debug, warn};

use crate::round::{BIG_NUMBERS, NUMBER_COUNT, SMALL_NUMBERS, TARGETS};
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if there are no numbers or more than a round allows.
pub fn validate_numbers(numbers: &[u32]) -> Result<(), UtilsError> {
    debug!("Validating numbers: {:?}", numbers);

    if numbers.is_empty() || numbers.len() > NUMBER_COUNT {
        warn!("Wrong number count: {}", numbers.len());
        return Err(UtilsError::InvalidCount {
            count: numbers.len(),
            max: NUMBER_COUNT,
        });
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if the target is not a three-digit number.
pub fn validate_target(target: u32) -> Result<(), UtilsError> {
    if !TARGETS.contains(&target) {
        warn!("Target out of range: {}", target);
        return Err(UtilsError::TargetOutOfRange(target));
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if a number is outside the big and small pools, or a big
/// number is drawn twice.
pub fn validate_pool(numbers: &[u32]) -> Result<(), UtilsError> {
    for (i, &n) in numbers.iter().enumerate() {
        if BIG_NUMBERS.contains(&n) {
            if numbers.iter().take(i).any(|&m| m == n) {
                warn!("Duplicate big number: {}", n);
                return Err(UtilsError::DuplicateBigNumber(n));
            }
        } else if !SMALL_NUMBERS.contains(&n) {
            warn!("Number not in pool: {}", n);
            return Err(UtilsError::NotInPool(n));
        }
    }

    debug!("Pool validation successful");
    Ok(())
}

/// Check that `used` draws from `available` without reusing any number.
///
/// # Errors
///
/// Returns the first number that is missing or used once too often.
pub fn validate_operands(available: &[u32], used: &[u32]) -> Result<(), UtilsError> {
    let mut remaining = available.to_vec();

    for &n in used {
        match remaining.iter().position(|&m| m == n) {
            Some(idx) => {
                remaining.swap_remove(idx);
            }
            None => {
                warn!("Number {} is not available in {:?}", n, available);
                return Err(UtilsError::UnavailableNumber(n));
            }
        }
    }

    Ok(())
}
