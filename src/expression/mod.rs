//! Expression trees: node model, evaluation and infix rendering

mod ast;
mod display;
mod eval;

pub use ast::{DEFAULT_LEAVES, Expression, NamedConstant, Operator};
