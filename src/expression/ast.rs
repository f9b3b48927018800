use std::f64::consts;

/// Binary operators available to the generator, in enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// Every operator, in the order the generator walks them
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    /// Apply the operator to two already evaluated operands
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
            Operator::Pow => left.powf(right),
        }
    }

    /// Single-character infix symbol
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }
}

/// Leaf constants that have a canonical printed name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedConstant {
    E,
    Pi,
}

impl NamedConstant {
    pub const ALL: [NamedConstant; 2] = [NamedConstant::E, NamedConstant::Pi];

    pub fn value(self) -> f64 {
        match self {
            NamedConstant::E => consts::E,
            NamedConstant::Pi => consts::PI,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NamedConstant::E => "e",
            NamedConstant::Pi => "pi",
        }
    }

    /// Look up a constant by exact value; no tolerance is applied.
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

/// Leaf set used when the caller does not supply one: `e`, then `pi`
pub const DEFAULT_LEAVES: [f64; 2] = [consts::E, consts::PI];

/// An expression tree. Every `Binary` node owns its children outright, so a
/// tree never shares nodes with another tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Leaf(f64),
    Binary {
        op: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn leaf(value: f64) -> Self {
        Expression::Leaf(value)
    }

    /// Build a binary node, taking ownership of both operands
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Leaf(_))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Expression::Binary { .. })
    }

    /// Number of nodes in the tree, leaves included
    pub fn node_count(&self) -> usize {
        match self {
            Expression::Leaf(_) => 1,
            Expression::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Height of the tree; a lone leaf has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Expression::Leaf(_) => 1,
            Expression::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Smallest budget at which the generator emits this tree.
    ///
    /// A right operand paired with a compound left operand is charged one
    /// extra unit, mirroring the generator's budget rule.
    pub fn budget_cost(&self) -> usize {
        match self {
            Expression::Leaf(_) => 1,
            Expression::Binary { left, right, .. } => {
                let right_surcharge = if left.is_leaf() { 1 } else { 2 };
                (left.budget_cost() + 1).max(right.budget_cost() + right_surcharge)
            }
        }
    }
}
