/*! Defines an abstract syntax tree (AST) for propositional formulae and arguments. */
mod argument;
mod macros;
mod operator;
mod statement;
mod symbol;

pub use argument::Argument;
pub use operator::{BinaryOp, Operator, OperatorTable, Symbols, UnaryOp, CLOSE, OPEN};
pub use statement::{Binary, Statement, Unary};
pub use symbol::V;

use crate::semantics::Assignment;
use thiserror::Error;

/// Is the type of errors arising from an inconsistent table of operator symbols.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when two operators are assigned the same symbol.
    #[error("symbol `{symbol}` is assigned to both {first} and {second}")]
    DuplicateSymbol {
        symbol: char,
        first: &'static str,
        second: &'static str,
    },

    /// Is returned when an operator symbol collides with a variable, a parenthesis or whitespace.
    #[error("symbol `{symbol}` cannot be used for {operator}: {reason}")]
    ReservedSymbol {
        symbol: char,
        operator: &'static str,
        reason: &'static str,
    },
}

/// Is the trait of propositional formulae and collections of formulae.
pub trait Formula {
    /// Returns the list of atomic variables in the receiver.
    ///
    /// **Note**: each variable appears only once in the list, even if it occurs at multiple
    /// positions of the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// use validity_prop::syntax::{Formula, Statement, V};
    ///
    /// let formula: Statement = "(P & Q) > ~P".parse().unwrap();
    /// assert_eq!(vec![&V::from('P'), &V::from('Q')], formula.atoms());
    /// ```
    fn atoms(&self) -> Vec<&V>;

    /// Evaluates the receiver under `assignment`.
    ///
    /// **Note**: every atom of the receiver must be assigned by `assignment`.
    fn evaluate(&self, assignment: &Assignment) -> bool;
}
