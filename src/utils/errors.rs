use thiserror::Error;

/// Errors raised while validating a search configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Leaf set cannot be empty")]
    EmptyLeafSet,
    #[error("Operator set cannot be empty")]
    EmptyOperatorSet,
    #[error("Budget {budget} would generate {count} expressions, above the limit of {limit}")]
    BudgetTooLarge {
        budget: usize,
        count: u128,
        limit: u128,
    },
    #[error("Expression count for budget {budget} does not fit in 128 bits")]
    CountOverflow { budget: usize },
    #[error("Target {target} is outside the exactly representable range of +/-{max}")]
    TargetOutOfRange { target: i64, max: i64 },
    #[error("Precision {precision} exceeds the maximum of {max} decimal places")]
    PrecisionTooLarge { precision: usize, max: usize },
}
