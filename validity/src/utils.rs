use crate::{
    constants::*,
    terminal::{Style, Stylus},
};
use anyhow::{anyhow, Error};
use itertools::Itertools;
use std::{
    fs,
    io::{stdin, Read},
};
use validity_prop::{
    parser::Parser,
    semantics::Verdict,
    syntax::{Argument, Formula},
};

pub(crate) fn stylus(color: bool) -> Stylus {
    let mut stylus = Stylus::new();
    if color {
        stylus.insert_style(
            STYLE_LOGO,
            Style::new().foreground(59).attribute(term::Attr::Dim),
        );
        stylus.insert_style(
            STYLE_INFO,
            Style::new().foreground(59).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_ARGUMENT, Style::new().foreground(252));
        stylus.insert_style(
            STYLE_VALID,
            Style::new()
                .foreground(term::color::GREEN)
                .attribute(term::Attr::Bold),
        );
        stylus.insert_style(
            STYLE_INVALID,
            Style::new()
                .foreground(term::color::RED)
                .attribute(term::Attr::Bold),
        );
    }

    stylus
}

pub(crate) fn read_argument_from_file(filename: &str, parser: &Parser) -> Result<Argument, Error> {
    let mut f = fs::File::open(filename)
        .map_err(|e| Error::new(e).context("failed to find the input file"))?;

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .map_err(|e| Error::new(e).context("failed to read the input file"))?;

    parser
        .parse_argument_text(&contents)
        .map_err(|e| Error::new(e).context("failed to parse the input argument"))
}

pub(crate) fn read_argument_from_stdin(parser: &Parser) -> Result<Argument, Error> {
    let mut buf: Vec<u8> = Vec::new();
    stdin().read_to_end(&mut buf)?;
    let s = String::from_utf8(buf)?;
    let argument = parser.parse_argument_text(&s)?;
    Ok(argument)
}

/// Swaps the only premise of `argument` with its conclusion.
pub(crate) fn swap(argument: Argument) -> Result<Argument, Error> {
    let premises = argument.premises();
    if premises.len() != 1 {
        return Err(anyhow!(
            "cannot swap the conclusion with {} premises; exactly one premise is required",
            premises.len()
        ));
    }
    Ok(Argument::new(
        vec![argument.conclusion().clone()],
        premises[0].clone(),
    ))
}

pub(crate) fn print_argument(argument: &Argument, stylus: &Stylus) {
    stylus.set(STYLE_INFO);
    println!("Checking argument:");

    stylus.set(STYLE_ARGUMENT);
    println!("{}", argument);
    println!();

    let atoms = argument.atoms();
    if atoms.len() > ATOMS_WARNING_THRESHOLD {
        stylus.set(STYLE_INFO);
        println!(
            "Warning: {} atoms ({}) yield {} assignments to check.",
            atoms.len(),
            atoms.iter().join(", "),
            assignment_count(atoms.len()),
        );
        println!();
    }
}

fn assignment_count(atoms: usize) -> String {
    if atoms < 64 {
        (1u64 << atoms).to_string()
    } else {
        format!("2^{}", atoms)
    }
}

pub(crate) fn verdict_message(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Valid => "This argument is valid.".to_owned(),
        Verdict::Invalid { counterexample } => format!(
            "This argument is INVALID. Consider the case: {}",
            counterexample
        ),
    }
}

pub(crate) fn print_verdict(verdict: &Verdict, stylus: &Stylus) {
    if verdict.is_valid() {
        stylus.set(STYLE_VALID);
    } else {
        stylus.set(STYLE_INVALID);
    }
    println!("{}", verdict_message(verdict));
    stylus.set(STYLE_INFO);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argument(premises: &[&str], conclusion: &str) -> Argument {
        Parser::default()
            .parse_argument(premises, conclusion)
            .unwrap()
    }

    #[test]
    fn test_swap() {
        assert_eq!(argument(&["Q>P"], "P>Q"), swap(argument(&["P>Q"], "Q>P")).unwrap());
        assert_eq!(argument(&["P"], "P"), swap(argument(&["P"], "P")).unwrap());
    }

    #[test]
    fn test_swap_failure() {
        assert!(swap(argument(&[], "P")).is_err());
        assert!(swap(argument(&["P", "Q"], "P")).is_err());
        assert_eq!(
            "cannot swap the conclusion with 2 premises; exactly one premise is required",
            swap(argument(&["P", "Q"], "P")).unwrap_err().to_string()
        );
    }

    #[test]
    fn test_verdict_message() {
        assert_eq!(
            "This argument is valid.",
            verdict_message(&argument(&["P>Q", "P"], "Q").check())
        );
        assert_eq!(
            "This argument is INVALID. Consider the case: {P: false, Q: true}",
            verdict_message(&argument(&["P>Q"], "Q>P").check())
        );
    }

    #[test]
    fn test_swap_changes_verdict() {
        let argument = argument(&["P&Q"], "P");
        assert!(argument.check().is_valid());
        assert!(!swap(argument).unwrap().check().is_valid());
    }

    #[test]
    fn test_assignment_count() {
        assert_eq!("1", assignment_count(0));
        assert_eq!("2097152", assignment_count(21));
        assert_eq!("2^64", assignment_count(64));
    }
}
