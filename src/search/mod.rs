pub mod constants;
mod core;
mod errors;

pub use self::core::{ExpressionSearch, Match, floor_matches};
pub use errors::SearchError;
