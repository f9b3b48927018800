use std::fmt;

use crate::expression::ast::{Expression, NamedConstant};

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn fmt_leaf(f: &mut fmt::Formatter, value: f64) -> fmt::Result {
            match NamedConstant::from_value(value) {
                Some(constant) => write!(f, "{}", constant.name()),
                // Constants without a name print as their shortest decimal form
                None => write!(f, "{}", value),
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Leaf(value) => fmt_leaf(f, *value),
                Expression::Binary { op, left, right } => {
                    write!(f, "(")?;
                    fmt_expression(f, left)?;
                    write!(f, " {} ", op.symbol())?;
                    fmt_expression(f, right)?;
                    write!(f, ")")
                }
            }
        }

        fmt_expression(f, self)
    }
}
