/*! Defines arguments, made of a list of premises and a conclusion. */
use super::{Formula, Statement, V};
use crate::semantics::{self, Assignment, Verdict};
use itertools::Itertools;
use std::fmt;

/// Is an argument, claiming that its conclusion follows from its premises.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Argument {
    premises: Vec<Statement>,
    conclusion: Statement,
}

impl Argument {
    /// Creates a new argument with `premises` and `conclusion`.
    pub fn new(premises: Vec<Statement>, conclusion: Statement) -> Self {
        Self {
            premises,
            conclusion,
        }
    }

    /// Returns the premises of the receiver.
    #[inline(always)]
    pub fn premises(&self) -> &[Statement] {
        &self.premises
    }

    /// Returns the conclusion of the receiver.
    #[inline(always)]
    pub fn conclusion(&self) -> &Statement {
        &self.conclusion
    }

    /// Decides whether the receiver is valid. See [`semantics::check`].
    pub fn check(&self) -> Verdict {
        semantics::check(self)
    }
}

impl Formula for Argument {
    fn atoms(&self) -> Vec<&V> {
        self.premises
            .iter()
            .chain(std::iter::once(&self.conclusion))
            .flat_map(|s| s.atoms())
            .unique()
            .collect()
    }

    /// Returns false exactly when `assignment` satisfies every premise of the receiver but
    /// falsifies its conclusion.
    fn evaluate(&self, assignment: &Assignment) -> bool {
        self.conclusion.evaluate(assignment)
            || self.premises.iter().any(|p| !p.evaluate(assignment))
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        for premise in &self.premises {
            writeln!(f, "{}", premise)?;
        }
        write!(f, "∴ {}", self.conclusion)
    }
}
