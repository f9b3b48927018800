//! Floorhunt - enumerate expression trees over `e` and `pi` and find those whose
//! value floors to a target integer
//!
//! The generator builds every tree reachable under a structural budget, the
//! evaluator folds each tree to an `f64`, and the formatter renders matches in
//! fully parenthesized infix notation.

pub mod expression;
pub mod generator;
pub mod search;
pub mod utils;

// Re-export the main public API
pub use expression::{DEFAULT_LEAVES, Expression, NamedConstant, Operator};
pub use generator::{ExpressionCollection, ExpressionGenerator, generate};
pub use search::{ExpressionSearch, Match, SearchError, floor_matches};
pub use utils::{UtilsError, count_expressions};

/// Find every expression over `e`, `pi` and `+ - * / ^` whose value floors to
/// `target`
///
/// This is a convenience function that runs a default [`ExpressionSearch`].
///
/// # Arguments
///
/// * `budget` - Structural budget passed to the generator
/// * `target` - Integer the floor of each value is compared against
///
/// # Errors
///
/// Returns an error if the budget would generate more expressions than the
/// default limit allows.
///
/// # Examples
///
/// ```
/// use floorhunt::find_matches;
///
/// // e * pi = 8.5397...
/// let matches = find_matches(2, 8).unwrap_or_default();
/// let lines: Vec<String> = matches.iter().map(|m| m.to_string()).collect();
/// assert_eq!(lines, vec!["(e * pi) = 8.539734", "(pi * e) = 8.539734"]);
/// ```
pub fn find_matches(budget: usize, target: i64) -> Result<Vec<Match>, SearchError> {
    ExpressionSearch::new(budget).find_matches(target)
}
