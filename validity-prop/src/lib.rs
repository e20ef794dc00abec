/*! Provides a set of tools for parsing propositional formulae and deciding the validity of
arguments by exhaustively checking their truth tables. */
#[macro_use]
extern crate tracing;

pub mod parser;
pub mod semantics;
pub mod syntax;
#[cfg(test)]
pub mod test_macros;
pub mod trace;
