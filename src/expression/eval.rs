use crate::expression::ast::Expression;

impl Expression {
    /// Fold the tree into a single value, left operand first.
    ///
    /// Division by zero, overflow and fractional powers of negative bases are
    /// not errors; they come back as `inf` or `NaN` per IEEE-754.
    pub fn evaluate(&self) -> f64 {
        match self {
            Expression::Leaf(value) => *value,
            Expression::Binary { op, left, right } => {
                let left = left.evaluate();
                let right = right.evaluate();
                op.apply(left, right)
            }
        }
    }
}
