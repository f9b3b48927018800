//! Enumeration sizing and configuration checks

mod count;
mod errors;
mod validation;

pub use count::count_expressions;
pub use errors::UtilsError;
pub use validation::{checked_count, validate_budget, validate_precision, validate_target};

#[cfg(test)]
mod tests;
