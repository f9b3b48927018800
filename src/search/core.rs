use std::fmt;

use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{DEFAULT_LEAVES, Expression, Operator};
use crate::generator::{ExpressionCollection, ExpressionGenerator};
use crate::search::constants::{DEFAULT_MAX_EXPRESSIONS, DEFAULT_PRECISION};
use crate::search::errors::SearchError;
use crate::utils::{checked_count, validate_budget};

/// Whether `value` floors to `target`. `NaN` and infinities never match.
///
/// The target is compared as an `f64`, so it is only exact for
/// `|target| <= 2^53` (see `MAX_EXACT_TARGET`).
#[inline]
pub fn floor_matches(value: f64, target: i64) -> bool {
    value.floor() == target as f64
}

/// A generated expression whose value floors to the target
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub expression: Expression,
    pub value: f64,
}

impl Match {
    /// Render as `<infix> = <value>` with `precision` decimal places
    pub fn render(&self, precision: usize) -> String {
        format!("{} = {:.*}", self.expression, precision, self.value)
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(DEFAULT_PRECISION))
    }
}

/// Drives generation, evaluation and filtering for one budget
#[derive(Debug, Clone)]
pub struct ExpressionSearch {
    operators: Vec<Operator>,
    leaves: Vec<f64>,
    budget: usize,
    max_expressions: u128,
}

impl ExpressionSearch {
    /// Search over `e`, `pi` and all five operators
    pub fn new(budget: usize) -> Self {
        Self {
            operators: Operator::ALL.to_vec(),
            leaves: DEFAULT_LEAVES.to_vec(),
            budget,
            max_expressions: u128::from(DEFAULT_MAX_EXPRESSIONS),
        }
    }

    pub fn with_operators(mut self, operators: Vec<Operator>) -> Self {
        self.operators = operators;
        self
    }

    pub fn with_leaves(mut self, leaves: Vec<f64>) -> Self {
        self.leaves = leaves;
        self
    }

    pub fn with_max_expressions(mut self, max_expressions: u128) -> Self {
        self.max_expressions = max_expressions;
        self
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Number of trees the search would generate, with no limit applied
    ///
    /// # Errors
    ///
    /// Returns an error if a set is empty or the size overflows `u128`.
    pub fn count(&self) -> Result<u128, SearchError> {
        Ok(checked_count(self.leaves.len(), self.operators.len(), self.budget)?)
    }

    /// Number of trees the search would generate, checked against the limit
    ///
    /// # Errors
    ///
    /// Returns an error if a set is empty or the enumeration exceeds the limit.
    pub fn expected_count(&self) -> Result<u128, SearchError> {
        Ok(validate_budget(
            self.leaves.len(),
            self.operators.len(),
            self.budget,
            self.max_expressions,
        )?)
    }

    /// Validate the configuration and generate every tree for the budget
    ///
    /// # Errors
    ///
    /// Same conditions as [`ExpressionSearch::expected_count`].
    pub fn generate(&self) -> Result<ExpressionCollection, SearchError> {
        let expected = self.expected_count()?;
        debug!("Generating {} expressions at budget {}", expected, self.budget);

        let collection =
            ExpressionGenerator::new(&self.operators, &self.leaves).generate(self.budget);
        debug!("Generated {} expressions", collection.len());
        Ok(collection)
    }

    /// Every generated tree whose value floors to `target`, in enumeration order
    ///
    /// # Errors
    ///
    /// Same conditions as [`ExpressionSearch::expected_count`].
    pub fn find_matches(&self, target: i64) -> Result<Vec<Match>, SearchError> {
        info!(
            "Searching budget {} for expressions flooring to {}",
            self.budget, target
        );

        let collection = self.generate()?;

        // Indexed parallel iteration keeps enumeration order in the output
        let matches: Vec<Match> = collection
            .into_par_iter()
            .filter_map(|expression| {
                let value = expression.evaluate();
                if floor_matches(value, target) {
                    debug!(
                        "Match: {} = {} ({} nodes, depth {})",
                        expression,
                        value,
                        expression.node_count(),
                        expression.depth()
                    );
                    Some(Match { expression, value })
                } else {
                    None
                }
            })
            .collect();

        info!("Found {} matching expressions", matches.len());
        Ok(matches)
    }
}
