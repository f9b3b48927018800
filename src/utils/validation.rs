use log::{debug, warn};

use crate::utils::count::count_expressions;
use crate::utils::errors::UtilsError;

/// Enumeration size with no upper limit applied
///
/// # Errors
///
/// Returns an error if either set is empty or the size overflows `u128`.
pub fn checked_count(leaves: usize, operators: usize, budget: usize) -> Result<u128, UtilsError> {
    if leaves == 0 {
        warn!("Leaf set is empty");
        return Err(UtilsError::EmptyLeafSet);
    }
    if operators == 0 {
        warn!("Operator set is empty");
        return Err(UtilsError::EmptyOperatorSet);
    }

    count_expressions(leaves, operators, budget).ok_or_else(|| {
        warn!("Expression count for budget {} overflows", budget);
        UtilsError::CountOverflow { budget }
    })
}

/// # Errors
///
/// Returns an error if either set is empty, if the enumeration size overflows,
/// or if the budget would generate more than `limit` expressions.
pub fn validate_budget(
    leaves: usize,
    operators: usize,
    budget: usize,
    limit: u128,
) -> Result<u128, UtilsError> {
    debug!(
        "Validating budget {} over {} leaves and {} operators",
        budget, leaves, operators
    );

    let count = checked_count(leaves, operators, budget)?;
    if count > limit {
        warn!(
            "Budget {} would generate {} expressions (limit {})",
            budget, count, limit
        );
        return Err(UtilsError::BudgetTooLarge {
            budget,
            count,
            limit,
        });
    }

    debug!("Budget validation successful: {} expressions", count);
    Ok(count)
}

/// # Errors
///
/// Returns an error if `target` lies outside `-max..=max`, where every integer
/// is still exactly representable as an `f64`.
pub fn validate_target(target: i64, max: i64) -> Result<(), UtilsError> {
    if target.unsigned_abs() > max.unsigned_abs() {
        warn!("Target {} is not exactly representable as f64", target);
        return Err(UtilsError::TargetOutOfRange { target, max });
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if more decimal places are requested than an `f64` carries.
pub fn validate_precision(precision: usize, max: usize) -> Result<(), UtilsError> {
    if precision > max {
        warn!("Precision {} exceeds maximum {}", precision, max);
        return Err(UtilsError::PrecisionTooLarge { precision, max });
    }
    Ok(())
}
