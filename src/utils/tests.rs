use crate::utils::{
    UtilsError, checked_count, count_expressions, validate_budget, validate_precision,
    validate_target,
};

#[test]
fn test_count_budget_zero() {
    assert_eq!(count_expressions(2, 5, 0), Some(0));
    assert_eq!(count_expressions(0, 0, 0), Some(0));
}

#[test]
fn test_count_budget_one_is_leaf_count() {
    assert_eq!(count_expressions(2, 5, 1), Some(2));
    assert_eq!(count_expressions(7, 1, 1), Some(7));
}

#[test]
fn test_count_default_sets() {
    let counts: Vec<Option<u128>> = (1..=5).map(|b| count_expressions(2, 5, b)).collect();
    assert_eq!(
        counts,
        vec![
            Some(2),
            Some(22),
            Some(422),
            Some(50_422),
            Some(106_890_422)
        ]
    );
}

#[test]
fn test_count_single_operator() {
    assert_eq!(count_expressions(2, 1, 2), Some(6));
    assert_eq!(count_expressions(2, 1, 3), Some(22));
}

#[test]
fn test_count_overflow() {
    assert_eq!(count_expressions(2, 5, 12), None);
}

#[test]
fn test_validate_budget_accepts_small_budgets() {
    assert_eq!(validate_budget(2, 5, 3, 1_000), Ok(422));
    assert_eq!(validate_budget(2, 5, 0, 0), Ok(0));
}

#[test]
fn test_validate_budget_rejects_large_budgets() {
    let result = validate_budget(2, 5, 5, 10_000_000);
    assert_eq!(
        result,
        Err(UtilsError::BudgetTooLarge {
            budget: 5,
            count: 106_890_422,
            limit: 10_000_000
        })
    );
}

#[test]
fn test_validate_budget_rejects_overflow() {
    let result = validate_budget(2, 5, 40, u128::MAX);
    assert_eq!(result, Err(UtilsError::CountOverflow { budget: 40 }));
}

#[test]
fn test_validate_budget_rejects_empty_sets() {
    assert_eq!(validate_budget(0, 5, 3, 1_000), Err(UtilsError::EmptyLeafSet));
    assert_eq!(
        validate_budget(2, 0, 3, 1_000),
        Err(UtilsError::EmptyOperatorSet)
    );
}

#[test]
fn test_validate_precision() {
    assert!(validate_precision(6, 17).is_ok());
    assert!(validate_precision(17, 17).is_ok());
    assert_eq!(
        validate_precision(18, 17),
        Err(UtilsError::PrecisionTooLarge {
            precision: 18,
            max: 17
        })
    );
}

#[test]
fn test_count_huge_budget_overflows_without_allocating() {
    assert_eq!(count_expressions(2, 5, usize::MAX), None);
    assert_eq!(count_expressions(1, 1, usize::MAX), None);
}

#[test]
fn test_count_degenerate_sets_are_constant() {
    assert_eq!(count_expressions(2, 0, usize::MAX), Some(2));
    assert_eq!(count_expressions(0, 5, usize::MAX), Some(0));
    assert_eq!(count_expressions(0, 0, 7), Some(0));
}

#[test]
fn test_validate_budget_max_budget_overflows() {
    let result = validate_budget(2, 5, usize::MAX, u128::MAX);
    assert_eq!(
        result,
        Err(UtilsError::CountOverflow {
            budget: usize::MAX
        })
    );
}

#[test]
fn test_checked_count_ignores_limit() {
    assert_eq!(checked_count(2, 5, 5), Ok(106_890_422));
    assert_eq!(checked_count(0, 5, 5), Err(UtilsError::EmptyLeafSet));
    assert_eq!(
        checked_count(2, 5, 9),
        Err(UtilsError::CountOverflow { budget: 9 })
    );
}

#[test]
fn test_validate_target() {
    let max = 1_i64 << 53;
    assert!(validate_target(0, max).is_ok());
    assert!(validate_target(max, max).is_ok());
    assert!(validate_target(-max, max).is_ok());
    assert_eq!(
        validate_target(max + 1, max),
        Err(UtilsError::TargetOutOfRange {
            target: max + 1,
            max
        })
    );
    assert!(validate_target(i64::MIN, max).is_err());
}
