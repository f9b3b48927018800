//! Budgeted enumeration of expression trees

mod collection;
pub mod constants;
mod core;

pub use collection::ExpressionCollection;
pub use self::core::{ExpressionGenerator, generate};
