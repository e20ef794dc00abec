/*! Defines the syntax of propositional formulae. */
use super::{BinaryOp, Formula, Operator, OperatorTable, UnaryOp, V};
use crate::semantics::Assignment;
use itertools::Itertools;
use std::fmt;

/// Represents the application of a unary connective on a formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unary {
    op: UnaryOp,
    operand: Statement,
}

impl Unary {
    /// Applies `op` on `operand`.
    pub fn new(op: UnaryOp, operand: Statement) -> Self {
        Self { op, operand }
    }

    /// Returns the connective of the receiver.
    #[inline(always)]
    pub fn op(&self) -> UnaryOp {
        self.op
    }

    /// Returns the formula that the connective of the receiver applies on.
    #[inline(always)]
    pub fn operand(&self) -> &Statement {
        &self.operand
    }
}

impl Formula for Unary {
    fn atoms(&self) -> Vec<&V> {
        self.operand.atoms()
    }

    fn evaluate(&self, assignment: &Assignment) -> bool {
        self.op.apply(self.operand.evaluate(assignment))
    }
}

/// Represents the application of a binary connective on two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Binary {
    op: BinaryOp,
    left: Statement,
    right: Statement,
}

impl Binary {
    /// Applies `op` on `left` and `right`.
    pub fn new(op: BinaryOp, left: Statement, right: Statement) -> Self {
        Self { op, left, right }
    }

    /// Returns the connective of the receiver.
    #[inline(always)]
    pub fn op(&self) -> BinaryOp {
        self.op
    }

    /// Returns the formula on the left of the receiver.
    #[inline(always)]
    pub fn left(&self) -> &Statement {
        &self.left
    }

    /// Returns the formula on the right of the receiver.
    #[inline(always)]
    pub fn right(&self) -> &Statement {
        &self.right
    }
}

impl Formula for Binary {
    fn atoms(&self) -> Vec<&V> {
        let mut vs = self.left.atoms();
        vs.extend(self.right.atoms());
        vs.into_iter().unique().collect()
    }

    fn evaluate(&self, assignment: &Assignment) -> bool {
        self.op.apply(
            self.left.evaluate(assignment),
            self.right.evaluate(assignment),
        )
    }
}

/// Is an abstract syntax tree (AST) for propositional formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Statement {
    /// Is an atomic variable.
    Var(V),

    /// Is a unary connective applied on a formula, wrapping a [`Unary`].
    Unary(Box<Unary>),

    /// Is a binary connective applied on two formulae, wrapping a [`Binary`].
    Binary(Box<Binary>),
}

impl From<V> for Statement {
    fn from(value: V) -> Self {
        Self::Var(value)
    }
}

impl From<Unary> for Statement {
    fn from(value: Unary) -> Self {
        Self::Unary(Box::new(value))
    }
}

impl From<Binary> for Statement {
    fn from(value: Binary) -> Self {
        Self::Binary(Box::new(value))
    }
}

impl Statement {
    /// Returns the negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    // Disallow `formula.not()` intentionally:
    #[inline(always)]
    pub fn not(formula: Self) -> Self {
        Unary::new(UnaryOp::Not, formula).into()
    }

    /// Returns a conjunction of the receiver and `formula`.
    #[inline(always)]
    pub fn and(self, formula: Self) -> Self {
        Binary::new(BinaryOp::And, self, formula).into()
    }

    /// Returns a disjunction of the receiver and `formula`.
    #[inline(always)]
    pub fn or(self, formula: Self) -> Self {
        Binary::new(BinaryOp::Or, self, formula).into()
    }

    /// Returns an implication between the receiver and `formula`.
    #[inline(always)]
    pub fn implies(self, formula: Self) -> Self {
        Binary::new(BinaryOp::Implies, self, formula).into()
    }

    /// Returns an equivalence between the receiver and `formula`.
    #[inline(always)]
    pub fn iff(self, formula: Self) -> Self {
        Binary::new(BinaryOp::Iff, self, formula).into()
    }

    /// Returns the operator at the root of the receiver.
    pub fn operator(&self) -> Operator {
        match self {
            Self::Var(_) => Operator::Var,
            Self::Unary(this) => Operator::Unary(this.op),
            Self::Binary(this) => Operator::Binary(this.op),
        }
    }
}

impl Formula for Statement {
    fn atoms(&self) -> Vec<&V> {
        match self {
            Self::Var(this) => vec![this],
            Self::Unary(this) => this.atoms(),
            Self::Binary(this) => this.atoms(),
        }
    }

    fn evaluate(&self, assignment: &Assignment) -> bool {
        match self {
            Self::Var(this) => assignment[this],
            Self::Unary(this) => this.evaluate(assignment),
            Self::Binary(this) => this.evaluate(assignment),
        }
    }
}

// used for pretty printing a formula
impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fn parens(formula: &Statement) -> String {
            match formula {
                Statement::Var(_) => formula.to_string(),
                _ => format!("({})", formula),
            }
        }
        match self {
            Self::Var(this) => write!(f, "{}", this),
            Self::Unary(this) => match this.op {
                UnaryOp::Not => write!(f, "¬{}", parens(&this.operand)),
            },
            Self::Binary(this) => {
                let symbol = match this.op {
                    BinaryOp::And => "∧",
                    BinaryOp::Or => "∨",
                    BinaryOp::Implies => "→",
                    BinaryOp::Iff => "⇔",
                };
                write!(
                    f,
                    "{} {} {}",
                    parens(&this.left),
                    symbol,
                    parens(&this.right)
                )
            }
        }
    }
}

// in the standard symbols; the output is accepted by the parser
impl fmt::Debug for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fn operand(formula: &Statement, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
            match formula {
                Statement::Var(this) => write!(f, "{}", this),
                _ => write!(f, "({:?})", formula),
            }
        }

        let table = OperatorTable::STANDARD;
        match self {
            Self::Var(this) => write!(f, "{}", this),
            Self::Unary(this) => {
                write!(f, "{}", table.symbol(Operator::Unary(this.op)))?;
                operand(&this.operand, f)
            }
            Self::Binary(this) => {
                operand(&this.left, f)?;
                write!(f, " {} ", table.symbol(Operator::Binary(this.op)))?;
                operand(&this.right, f)
            }
        }
    }
}
