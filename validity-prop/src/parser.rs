//! Implements a recursive-descent parser for propositional formulae and arguments.
//!
//! A formula is a string of single-letter variables, the operator symbols of an
//! [`OperatorTable`] and parentheses. Negation binds tighter than the binary connectives and
//! applies to the following variable or parenthesized group. There is no precedence among
//! the binary connectives: `P & Q | R` is rejected and must be written as `(P & Q) | R` or
//! `P & (Q | R)`.
//!
//! The parser is often used implicitly through [`parse`] with the standard symbols:
//! ```rust
//! use validity_prop::syntax::Statement;
//!
//! // parse a string into `Statement`:
//! let formula: Statement = "~(P & Q) > (~P | ~Q)".parse().unwrap();
//!
//! assert_eq!("(¬(P ∧ Q)) → ((¬P) ∨ (¬Q))", formula.to_string());
//! ```
//!
//! Arguments are written one formula per line, with the conclusion marked by `∴` (or `:.`):
//! ```rust
//! use validity_prop::syntax::Argument;
//!
//! let argument: Argument = r#"
//!    // modus tollens
//!    P > Q
//!    ~Q
//!    ∴ ~P
//! "#.parse().unwrap();
//!
//! assert_eq!(2, argument.premises().len());
//! assert!(argument.check().is_valid());
//! ```
//!
//! [`OperatorTable`]: crate::syntax::OperatorTable
//! [`parse`]: ::std::str#parse
use crate::syntax::{
    Argument, Binary, Operator, OperatorTable, Statement, Unary, UnaryOp, V, CLOSE, OPEN,
};
use std::str::FromStr;
use thiserror::Error;

/// The ASCII spelling of the conclusion marker `∴` in arguments.
pub const THEREFORE: &str = ":.";

/// Is the type of errors returned by the parser.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    /// Is returned when a formula (or a parenthesized group) has no content.
    #[error("empty formula `{formula}`")]
    Empty { formula: String },

    /// Is returned for an unclosed group or a closing parenthesis without a group.
    #[error("mismatched parenthesis in `{formula}`")]
    ParenMismatch { formula: String },

    /// Is returned when a character is neither a variable, an operator nor a parenthesis.
    #[error("invalid symbol `{symbol}` in `{formula}`")]
    InvalidSymbol { symbol: char, formula: String },

    /// Is returned when an operator has too many or too few operands.
    #[error("wrong number of operands for {operator} in `{formula}`: expecting {expected}, found {found}")]
    WrongOperandCount {
        operator: &'static str,
        expected: usize,
        found: usize,
        formula: String,
    },

    /// Is returned when more than one operator appears at the same level of grouping.
    #[error("multiple operators at the same level in `{formula}`; use parentheses to group them")]
    MultipleOperators { formula: String },

    /// Is returned when negation follows its operand.
    #[error("negation after an operand in `{formula}`")]
    NegationAfterOperand { formula: String },

    /// Is returned when an argument has no conclusion.
    #[error("missing conclusion; mark the conclusion with `∴` or `{}`", THEREFORE)]
    MissingConclusion,

    /// Is returned when an argument has more than one conclusion.
    #[error("multiple conclusions at lines {first} and {second}")]
    MultipleConclusions { first: usize, second: usize },

    /// Is returned when a premise appears after the conclusion of an argument.
    #[error("premise at line {line} follows the conclusion")]
    PremiseAfterConclusion { line: usize },

    /// Locates an error at a line of an argument.
    #[error("at line {line}: {source}")]
    Line { line: usize, source: Box<Error> },

    #[error("{}", .source.to_string())]
    Syntax {
        #[from]
        source: crate::syntax::Error,
    },
}

fn text(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Returns the characters of `formula` without whitespace.
pub fn remove_whitespace(formula: &str) -> Vec<char> {
    formula.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Wraps every negation in `chars` together with its operand in parentheses, so that the
/// scope of negations is explicit: `~(P | Q) & ~R` becomes `(~(P | Q)) & (~R)`.
///
/// The operand of a negation is the following parenthesized group, the following negation
/// (with its own operand) or otherwise the single following character. Negations that already
/// have parentheses around them are wrapped again.
pub fn add_negation_parens(chars: &[char], table: &OperatorTable) -> Result<Vec<char>, Error> {
    let mut output = Vec::with_capacity(chars.len() * 2);
    wrap_negations(chars, table.not(), &mut output)?;
    Ok(output)
}

fn wrap_negations(chars: &[char], not: char, output: &mut Vec<char>) -> Result<(), Error> {
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == not {
            let end = negation_end(chars, i, not)?;
            output.push(OPEN);
            output.push(not);
            wrap_negations(&chars[i + 1..end], not, output)?;
            output.push(CLOSE);
            i = end;
        } else {
            output.push(chars[i]);
            i += 1;
        }
    }
    Ok(())
}

// Returns the index right after the operand of the negation at `start`.
fn negation_end(chars: &[char], start: usize, not: char) -> Result<usize, Error> {
    let mut i = start + 1;
    while chars.get(i) == Some(&not) {
        i += 1;
    }

    match chars.get(i) {
        None => Err(Error::WrongOperandCount {
            operator: Operator::Unary(UnaryOp::Not).name(),
            expected: 1,
            found: 0,
            formula: text(chars),
        }),
        Some(&OPEN) => {
            let mut depth = 0;
            for (j, &c) in chars.iter().enumerate().skip(i) {
                if c == OPEN {
                    depth += 1;
                } else if c == CLOSE {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(j + 1);
                    }
                }
            }
            Err(Error::ParenMismatch {
                formula: text(chars),
            })
        }
        Some(_) => Ok(i + 1),
    }
}

/// Removes the outermost pairs of parentheses of `chars` while they enclose all of `chars`.
///
/// A pair is only removed if its opening parenthesis is closed at the very last character:
/// `((P & Q))` becomes `P & Q`, but `(P) & (Q)` is returned unchanged.
pub fn strip_outer_parens(mut chars: &[char]) -> &[char] {
    fn encloses(chars: &[char]) -> bool {
        let last = chars.len() - 1;
        let mut depth = 0;
        for (i, &c) in chars.iter().enumerate() {
            if c == OPEN {
                depth += 1;
            } else if c == CLOSE {
                depth -= 1;
                if depth == 0 && i != last {
                    return false;
                }
            }
        }
        true
    }

    while chars.len() >= 2
        && chars[0] == OPEN
        && chars[chars.len() - 1] == CLOSE
        && encloses(chars)
    {
        chars = &chars[1..chars.len() - 1];
    }
    chars
}

// Operands collected while scanning a level of a formula.
#[derive(Clone, Copy)]
enum Operand<'c> {
    Var(char),
    Group(&'c [char]),
}

/// Parses formulae written in the symbols of an [`OperatorTable`].
///
/// [`OperatorTable`]: crate::syntax::OperatorTable
#[derive(Clone, Copy, Debug)]
pub struct Parser<'t> {
    table: &'t OperatorTable,
}

impl<'t> Parser<'t> {
    /// Creates a new parser for the symbols of `table`.
    pub fn new(table: &'t OperatorTable) -> Self {
        Self { table }
    }

    /// Returns the operator table of the receiver.
    pub fn table(&self) -> &'t OperatorTable {
        self.table
    }

    /// Parses `formula` after removing its whitespace and making the scope of its negations
    /// explicit (see [`add_negation_parens`]).
    ///
    /// **Example**:
    /// ```rust
    /// use validity_prop::parser::{Error, Parser};
    ///
    /// let parser = Parser::default();
    /// assert_eq!("P → (¬Q)", parser.parse("P > ~Q").unwrap().to_string());
    /// assert!(matches!(
    ///     parser.parse("P & Q & R"),
    ///     Err(Error::MultipleOperators { .. })
    /// ));
    /// ```
    pub fn parse(&self, formula: &str) -> Result<Statement, Error> {
        let chars = remove_whitespace(formula);
        if chars.is_empty() {
            return Err(Error::Empty {
                formula: formula.to_owned(),
            });
        }
        let chars = add_negation_parens(&chars, self.table)?;
        self.parse_chars(&chars)
    }

    /// Parses `chars` into a [`Statement`] without any preprocessing.
    ///
    /// The scope of every negation in `chars` is expected to be explicit: a negation must be the
    /// only operator at its level of grouping.
    ///
    /// [`Statement`]: crate::syntax::Statement
    pub fn parse_chars(&self, chars: &[char]) -> Result<Statement, Error> {
        let formula = strip_outer_parens(chars);
        if formula.is_empty() {
            return Err(Error::Empty {
                formula: text(chars),
            });
        }

        let mut op: Option<Operator> = None;
        let mut operands: Vec<Operand> = Vec::new();
        let mut depth = 0;
        let mut group_start = 0;
        for (i, &c) in formula.iter().enumerate() {
            if depth > 0 {
                if c == OPEN {
                    depth += 1;
                } else if c == CLOSE {
                    depth -= 1;
                    if depth == 0 {
                        operands.push(Operand::Group(&formula[group_start..=i]));
                    }
                }
                continue;
            }

            if c == OPEN {
                depth = 1;
                group_start = i;
            } else if c == CLOSE {
                return Err(Error::ParenMismatch {
                    formula: text(formula),
                });
            } else if V::is_name(c) {
                operands.push(Operand::Var(c));
            } else {
                let found = match self.table.operator(c) {
                    Some(Operator::Var) | None => {
                        return Err(Error::InvalidSymbol {
                            symbol: c,
                            formula: text(formula),
                        })
                    }
                    Some(found) => found,
                };

                if op.is_some() {
                    return Err(Error::MultipleOperators {
                        formula: text(formula),
                    });
                }
                match found {
                    Operator::Unary(_) if !operands.is_empty() => {
                        return Err(Error::NegationAfterOperand {
                            formula: text(formula),
                        });
                    }
                    Operator::Binary(_) if operands.len() != 1 => {
                        return Err(Error::WrongOperandCount {
                            operator: found.name(),
                            expected: 1,
                            found: operands.len(),
                            formula: text(formula),
                        });
                    }
                    _ => {}
                }
                op = Some(found);
            }
        }

        if depth != 0 {
            return Err(Error::ParenMismatch {
                formula: text(formula),
            });
        }

        let op = op.unwrap_or(Operator::Var);
        match (op, operands.as_slice()) {
            (Operator::Var, &[Operand::Var(c)]) => Ok(V::from(c).into()),
            (Operator::Var, &[Operand::Group(group)]) => self.parse_chars(group),
            (Operator::Unary(op), &[operand]) => {
                Ok(Unary::new(op, self.parse_operand(operand)?).into())
            }
            (Operator::Binary(op), &[left, right]) => Ok(Binary::new(
                op,
                self.parse_operand(left)?,
                self.parse_operand(right)?,
            )
            .into()),
            (op, operands) => Err(Error::WrongOperandCount {
                operator: op.name(),
                expected: op.arity(),
                found: operands.len(),
                formula: text(formula),
            }),
        }
    }

    fn parse_operand(&self, operand: Operand) -> Result<Statement, Error> {
        match operand {
            Operand::Var(c) => Ok(V::from(c).into()),
            Operand::Group(group) => self.parse_chars(group),
        }
    }

    /// Parses a list of `premises` and a `conclusion` into an [`Argument`].
    ///
    /// [`Argument`]: crate::syntax::Argument
    pub fn parse_argument<S: AsRef<str>>(
        &self,
        premises: &[S],
        conclusion: &str,
    ) -> Result<Argument, Error> {
        let premises = premises
            .iter()
            .map(|p| self.parse(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Argument::new(premises, self.parse(conclusion)?))
    }

    /// Parses the text of an argument: one formula on each line, the conclusion last and marked
    /// with `∴` or `:.`. Empty lines and lines starting with `//` are ignored.
    pub fn parse_argument_text(&self, source: &str) -> Result<Argument, Error> {
        let mut premises = Vec::new();
        let mut conclusion: Option<(usize, Statement)> = None;

        for (index, line) in source.lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            let at_line = |e| Error::Line {
                line: line_no,
                source: Box::new(e),
            };

            let marked = line
                .strip_prefix('∴')
                .or_else(|| line.strip_prefix(THEREFORE));
            if let Some(formula) = marked {
                if let Some((first, _)) = conclusion {
                    return Err(Error::MultipleConclusions {
                        first,
                        second: line_no,
                    });
                }
                conclusion = Some((line_no, self.parse(formula).map_err(at_line)?));
            } else {
                if conclusion.is_some() {
                    return Err(Error::PremiseAfterConclusion { line: line_no });
                }
                premises.push(self.parse(line).map_err(at_line)?);
            }
        }

        conclusion
            .map(|(_, c)| Argument::new(premises, c))
            .ok_or(Error::MissingConclusion)
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new(&OperatorTable::STANDARD)
    }
}

impl FromStr for Statement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::default().parse(s)
    }
}

impl FromStr for Argument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::default().parse_argument_text(s)
    }
}
