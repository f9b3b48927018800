use std::slice;
use std::vec;

use rayon::prelude::*;

use crate::expression::Expression;
use crate::generator::constants::INITIAL_CAPACITY;

/// Ordered, owning container of generated expression trees.
///
/// Insertion order is enumeration order. Dropping the collection frees every
/// tree still inside it; trees that were drained out belong to their new owner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionCollection {
    expressions: Vec<Expression>,
}

impl ExpressionCollection {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            expressions: Vec::with_capacity(capacity),
        }
    }

    /// Append a tree, taking ownership of it
    pub fn push(&mut self, expression: Expression) {
        self.expressions.push(expression);
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.expressions.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&Expression> {
        self.expressions.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Expression> {
        self.expressions.iter()
    }

    /// Move every tree out in insertion order, leaving the collection empty
    pub fn drain(&mut self) -> vec::Drain<'_, Expression> {
        self.expressions.drain(..)
    }
}

impl IntoIterator for ExpressionCollection {
    type Item = Expression;
    type IntoIter = vec::IntoIter<Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.expressions.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExpressionCollection {
    type Item = &'a Expression;
    type IntoIter = slice::Iter<'a, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.expressions.iter()
    }
}

impl FromIterator<Expression> for ExpressionCollection {
    fn from_iter<I: IntoIterator<Item = Expression>>(iter: I) -> Self {
        Self {
            expressions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Expression> for ExpressionCollection {
    fn extend<I: IntoIterator<Item = Expression>>(&mut self, iter: I) {
        self.expressions.extend(iter);
    }
}

impl IntoParallelIterator for ExpressionCollection {
    type Iter = rayon::vec::IntoIter<Expression>;
    type Item = Expression;

    fn into_par_iter(self) -> Self::Iter {
        self.expressions.into_par_iter()
    }
}

impl<'a> IntoParallelIterator for &'a ExpressionCollection {
    type Iter = rayon::slice::Iter<'a, Expression>;
    type Item = &'a Expression;

    fn into_par_iter(self) -> Self::Iter {
        self.expressions.par_iter()
    }
}
