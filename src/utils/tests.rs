use crate::utils::{
    UtilsError, validate_numbers, validate_operands, validate_pool, validate_target,
};

#[test]
fn test_validate_numbers_count() {
    assert!(validate_numbers(&[100]).is_ok());
    assert!(validate_numbers(&[3, 4, 5, 6, 7, 75]).is_ok());
    assert_eq!(
        validate_numbers(&[]),
        Err(UtilsError::InvalidCount { count: 0, max: 6 })
    );
    assert_eq!(
        validate_numbers(&[1, 2, 3, 4, 5, 6, 7]),
        Err(UtilsError::InvalidCount { count: 7, max: 6 })
    );
}

#[test]
fn test_validate_target() {
    assert!(validate_target(100).is_ok());
    assert!(validate_target(999).is_ok());
    assert_eq!(validate_target(99), Err(UtilsError::TargetOutOfRange(99)));
    assert_eq!(validate_target(1000), Err(UtilsError::TargetOutOfRange(1000)));
}

#[test]
fn test_validate_pool() {
    assert!(validate_pool(&[25, 50, 75, 100, 0, 10]).is_ok());
    assert!(validate_pool(&[1, 1, 2, 2, 3, 3]).is_ok());
    assert_eq!(validate_pool(&[11, 2]), Err(UtilsError::NotInPool(11)));
    assert_eq!(
        validate_pool(&[25, 3, 25]),
        Err(UtilsError::DuplicateBigNumber(25))
    );
}

#[test]
fn test_validate_operands() {
    assert!(validate_operands(&[3, 4, 5, 6, 7, 75], &[75, 6, 7, 4, 5]).is_ok());
    assert!(validate_operands(&[2, 2], &[2, 2]).is_ok());
    assert!(validate_operands(&[2, 2], &[]).is_ok());
    assert_eq!(
        validate_operands(&[2, 3], &[2, 2]),
        Err(UtilsError::UnavailableNumber(2))
    );
    assert_eq!(
        validate_operands(&[2, 3], &[9]),
        Err(UtilsError::UnavailableNumber(9))
    );
}
