/*! Defines the logical connectives and the table that maps symbol characters to them. */
use super::{Error, V};

/// Is the symbol that opens a group.
pub const OPEN: char = '(';

/// Is the symbol that closes a group.
pub const CLOSE: char = ')';

/// Is the unary connective of propositional logic.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum UnaryOp {
    /// Is negation.
    Not,
}

impl UnaryOp {
    /// Applies the truth function of the receiver on `value`.
    #[inline(always)]
    pub fn apply(self, value: bool) -> bool {
        match self {
            Self::Not => !value,
        }
    }

    /// Returns a human readable name of the receiver.
    pub fn name(self) -> &'static str {
        match self {
            Self::Not => "negation",
        }
    }
}

/// Is a binary connective of propositional logic.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum BinaryOp {
    /// Is conjunction.
    And,

    /// Is disjunction.
    Or,

    /// Is (material) implication.
    Implies,

    /// Is equivalence (bi-implication).
    Iff,
}

impl BinaryOp {
    /// Applies the truth function of the receiver on `left` and `right`.
    #[inline(always)]
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left && right,
            Self::Or => left || right,
            Self::Implies => !left || right,
            Self::Iff => left == right,
        }
    }

    /// Returns a human readable name of the receiver.
    pub fn name(self) -> &'static str {
        match self {
            Self::And => "conjunction",
            Self::Or => "disjunction",
            Self::Implies => "implication",
            Self::Iff => "equivalence",
        }
    }
}

/// Is an entry of the [`OperatorTable`].
///
/// [`Operator::Var`] marks variables: it holds a name instead of computing a truth value and
/// is evaluated by looking the name up in an assignment.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Operator {
    Var,
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl Operator {
    /// Returns the number of operands that the receiver takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::Var | Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Returns a human readable name of the receiver.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Var => "variable",
            Self::Unary(op) => op.name(),
            Self::Binary(op) => op.name(),
        }
    }
}

/// Assigns a character to every operator.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Symbols {
    pub not: char,
    pub and: char,
    pub or: char,
    pub implies: char,
    pub iff: char,
    pub var: char,
}

impl Symbols {
    /// The default symbols: `~`, `&`, `|`, `>`, `=` and `#` for the variable marker.
    pub const STANDARD: Symbols = Symbols {
        not: '~',
        and: '&',
        or: '|',
        implies: '>',
        iff: '=',
        var: '#',
    };

    fn entries(&self) -> [(char, Operator); 6] {
        [
            (self.not, Operator::Unary(UnaryOp::Not)),
            (self.and, Operator::Binary(BinaryOp::And)),
            (self.or, Operator::Binary(BinaryOp::Or)),
            (self.implies, Operator::Binary(BinaryOp::Implies)),
            (self.iff, Operator::Binary(BinaryOp::Iff)),
            (self.var, Operator::Var),
        ]
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Is the read-only registry of operators, mapping symbol characters to [`Operator`]s.
///
/// The table is built once and is shared by reference with the parser. A table can only be
/// constructed from a consistent set of [`Symbols`].
///
/// **Example**:
/// ```rust
/// use validity_prop::syntax::{BinaryOp, Operator, OperatorTable, Symbols};
///
/// let table = OperatorTable::new(Symbols {
///     implies: '$',
///     ..Symbols::STANDARD
/// }).unwrap();
///
/// assert_eq!(Some(Operator::Binary(BinaryOp::Implies)), table.operator('$'));
/// assert_eq!(None, table.operator('>'));
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OperatorTable {
    symbols: Symbols,
}

impl OperatorTable {
    /// The table of the standard [`Symbols`].
    pub const STANDARD: OperatorTable = OperatorTable {
        symbols: Symbols::STANDARD,
    };

    /// Creates a new table for `symbols`. It fails if two operators share a symbol or if a
    /// symbol is a letter, a parenthesis or whitespace.
    pub fn new(symbols: Symbols) -> Result<Self, Error> {
        let entries = symbols.entries();
        for (i, &(symbol, op)) in entries.iter().enumerate() {
            let reason = if V::is_name(symbol) {
                Some("letters are variable names")
            } else if symbol == OPEN || symbol == CLOSE {
                Some("parentheses are reserved for grouping")
            } else if symbol.is_whitespace() {
                Some("whitespace is ignored")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(Error::ReservedSymbol {
                    symbol,
                    operator: op.name(),
                    reason,
                });
            }

            if let Some(&(_, other)) = entries[..i].iter().find(|(s, _)| *s == symbol) {
                return Err(Error::DuplicateSymbol {
                    symbol,
                    first: other.name(),
                    second: op.name(),
                });
            }
        }
        Ok(Self { symbols })
    }

    /// Returns the operator for `symbol` or `None` if `symbol` is not an operator.
    pub fn operator(&self, symbol: char) -> Option<Operator> {
        self.symbols
            .entries()
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|&(_, op)| op)
    }

    /// Returns the symbol of `operator` in the receiver.
    pub fn symbol(&self, operator: Operator) -> char {
        match operator {
            Operator::Var => self.symbols.var,
            Operator::Unary(UnaryOp::Not) => self.symbols.not,
            Operator::Binary(BinaryOp::And) => self.symbols.and,
            Operator::Binary(BinaryOp::Or) => self.symbols.or,
            Operator::Binary(BinaryOp::Implies) => self.symbols.implies,
            Operator::Binary(BinaryOp::Iff) => self.symbols.iff,
        }
    }

    /// Returns the symbol of negation.
    #[inline(always)]
    pub fn not(&self) -> char {
        self.symbols.not
    }

    /// Returns the symbols of the receiver.
    #[inline(always)]
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        assert_eq!(1, Operator::Var.arity());
        assert_eq!(1, Operator::Unary(UnaryOp::Not).arity());
        assert_eq!(2, Operator::Binary(BinaryOp::And).arity());
        assert_eq!(2, Operator::Binary(BinaryOp::Or).arity());
        assert_eq!(2, Operator::Binary(BinaryOp::Implies).arity());
        assert_eq!(2, Operator::Binary(BinaryOp::Iff).arity());
    }

    #[test]
    fn test_apply() {
        assert!(UnaryOp::Not.apply(false));
        assert!(!UnaryOp::Not.apply(true));

        let table = |op: BinaryOp| {
            vec![
                op.apply(true, true),
                op.apply(true, false),
                op.apply(false, true),
                op.apply(false, false),
            ]
        };
        assert_eq!(vec![true, false, false, false], table(BinaryOp::And));
        assert_eq!(vec![true, true, true, false], table(BinaryOp::Or));
        assert_eq!(vec![true, false, true, true], table(BinaryOp::Implies));
        assert_eq!(vec![true, false, false, true], table(BinaryOp::Iff));
    }

    #[test]
    fn test_standard_table() {
        let table = OperatorTable::STANDARD;
        assert_eq!(Some(Operator::Unary(UnaryOp::Not)), table.operator('~'));
        assert_eq!(Some(Operator::Binary(BinaryOp::And)), table.operator('&'));
        assert_eq!(Some(Operator::Binary(BinaryOp::Or)), table.operator('|'));
        assert_eq!(
            Some(Operator::Binary(BinaryOp::Implies)),
            table.operator('>')
        );
        assert_eq!(Some(Operator::Binary(BinaryOp::Iff)), table.operator('='));
        assert_eq!(Some(Operator::Var), table.operator('#'));
        assert_eq!(None, table.operator('P'));
        assert_eq!(None, table.operator('('));
        assert_eq!(None, table.operator('^'));
        assert_eq!(Ok(table.clone()), OperatorTable::new(Symbols::default()));
    }

    #[test]
    fn test_symbol() {
        let table = OperatorTable::STANDARD;
        for &(symbol, op) in table.symbols().entries().iter() {
            assert_eq!(symbol, table.symbol(op));
        }
        assert_eq!('~', table.not());
    }

    #[test]
    fn test_custom_table() {
        let table = OperatorTable::new(Symbols {
            not: '!',
            and: '*',
            or: '+',
            implies: '$',
            iff: '%',
            var: '@',
        })
        .unwrap();
        assert_eq!(Some(Operator::Unary(UnaryOp::Not)), table.operator('!'));
        assert_eq!(Some(Operator::Binary(BinaryOp::Or)), table.operator('+'));
        assert_eq!(None, table.operator('~'));
        assert_eq!('!', table.not());
    }

    #[test]
    fn test_inconsistent_table() {
        assert_eq!(
            Err(Error::DuplicateSymbol {
                symbol: '&',
                first: "conjunction",
                second: "disjunction",
            }),
            OperatorTable::new(Symbols {
                or: '&',
                ..Symbols::STANDARD
            })
        );
        assert_eq!(
            Err(Error::ReservedSymbol {
                symbol: 'v',
                operator: "disjunction",
                reason: "letters are variable names",
            }),
            OperatorTable::new(Symbols {
                or: 'v',
                ..Symbols::STANDARD
            })
        );
        assert!(OperatorTable::new(Symbols {
            not: '(',
            ..Symbols::STANDARD
        })
        .is_err());
        assert!(OperatorTable::new(Symbols {
            iff: ' ',
            ..Symbols::STANDARD
        })
        .is_err());
    }
}
