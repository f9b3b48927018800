use log::trace;

use crate::expression::{Expression, Operator};
use crate::generator::collection::ExpressionCollection;

/// Enumerates every expression tree reachable under a budget.
///
/// The operator and leaf slices are walked in order, and that order fixes the
/// order of the generated collection.
#[derive(Debug, Clone, Copy)]
pub struct ExpressionGenerator<'a> {
    operators: &'a [Operator],
    leaves: &'a [f64],
}

impl<'a> ExpressionGenerator<'a> {
    pub fn new(operators: &'a [Operator], leaves: &'a [f64]) -> Self {
        Self { operators, leaves }
    }

    /// Generate every tree whose cost fits within `budget`.
    ///
    /// Budget 0 yields nothing; budget 1 yields only the leaves. Above that,
    /// each operator pairs every tree of budget `budget - 1` (the left operand)
    /// with every tree the right operand can afford: the same `budget - 1` when
    /// the left operand is a leaf, one unit less when it is compound.
    pub fn generate(&self, budget: usize) -> ExpressionCollection {
        let mut result = ExpressionCollection::new();
        if budget == 0 {
            return result;
        }

        trace!("Generating expressions for budget {}", budget);

        result.extend(self.leaves.iter().copied().map(Expression::leaf));

        let left_budget = budget - 1;
        for &op in self.operators {
            let left_candidates = self.generate(left_budget);
            for left in left_candidates {
                let right_budget = if left.is_binary() {
                    left_budget.saturating_sub(1)
                } else {
                    left_budget
                };
                let right_candidates = self.generate(right_budget);
                Self::pair_into(&mut result, op, left, right_candidates);
            }
        }

        trace!("Budget {} produced {} expressions", budget, result.len());
        result
    }

    /// Append `op(left, right)` for every right candidate, in order.
    ///
    /// Each right tree is moved into exactly one new node. The left tree is
    /// deep-copied for every pairing except the last, which takes it by move.
    fn pair_into(
        result: &mut ExpressionCollection,
        op: Operator,
        left: Expression,
        right_candidates: ExpressionCollection,
    ) {
        let last = right_candidates.len().saturating_sub(1);
        let mut left = Some(left);
        for (idx, right) in right_candidates.into_iter().enumerate() {
            let operand = if idx == last { left.take() } else { left.clone() };
            if let Some(operand) = operand {
                result.push(Expression::binary(op, operand, right));
            }
        }
    }
}

/// Generate every tree over `operators` and `leaves` within `budget`
pub fn generate(operators: &[Operator], leaves: &[f64], budget: usize) -> ExpressionCollection {
    ExpressionGenerator::new(operators, leaves).generate(budget)
}
