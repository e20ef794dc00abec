use crate::terminal::Stylus;
use crate::{constants::*, utils::*};
use anyhow::Error;
use std::fs;
use structopt::StructOpt;
use validity_prop::{
    parser::Parser,
    syntax::{Formula, OperatorTable, Symbols},
    trace::{subscriber::JsonLogger, DEFAULT_JSON_LOG_FILE},
};

#[derive(StructOpt)]
enum ProcessCommand {
    #[structopt(name = "check", about = "Decide whether the input argument is valid")]
    Check {
        #[structopt(
            short = "p",
            long = "premise",
            help = "A premise of the argument (repeat for more premises)"
        )]
        premises: Vec<String>,
        #[structopt(
            short = "c",
            long = "conclusion",
            help = "The conclusion of the argument; when missing, the argument is read from the input"
        )]
        conclusion: Option<String>,
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input argument file"
        )]
        input: Option<std::path::PathBuf>,
        #[structopt(
            long = "swap",
            help = "Swap the only premise with the conclusion before checking."
        )]
        swap: bool,
        #[structopt(long = "not", default_value = "~", help = "Symbol for negation")]
        not: char,
        #[structopt(long = "and", default_value = "&", help = "Symbol for conjunction")]
        and: char,
        #[structopt(long = "or", default_value = "|", help = "Symbol for disjunction")]
        or: char,
        #[structopt(long = "implies", default_value = ">", help = "Symbol for implication")]
        implies: char,
        #[structopt(long = "iff", default_value = "=", help = "Symbol for equivalence")]
        iff: char,
    },
}

impl ProcessCommand {
    fn run(self, stylus: &Stylus) -> Result<(), Error> {
        match self {
            ProcessCommand::Check {
                premises,
                conclusion,
                input,
                swap: swapped,
                not,
                and,
                or,
                implies,
                iff,
            } => {
                let table = OperatorTable::new(Symbols {
                    not,
                    and,
                    or,
                    implies,
                    iff,
                    ..Symbols::STANDARD
                })
                .map_err(|e| Error::new(e).context("invalid operator symbols"))?;
                let parser = Parser::new(&table);

                let argument = if let Some(conclusion) = conclusion {
                    parser
                        .parse_argument(&premises[..], &conclusion)
                        .map_err(|e| Error::new(e).context("failed to parse the argument"))?
                } else if let Some(input) = input {
                    read_argument_from_file(input.to_str().unwrap_or("."), &parser)?
                } else {
                    read_argument_from_stdin(&parser)?
                };
                let argument = if swapped { swap(argument)? } else { argument };

                let atoms = argument.atoms().len();
                if atoms > ATOMS_WARNING_THRESHOLD {
                    warn!(atoms = atoms as u64, "checking an argument with too many atoms");
                }

                print_argument(&argument, stylus);
                print_verdict(&argument.check(), stylus);
                Ok(())
            }
        }
    }
}

#[derive(StructOpt)]
#[structopt(
    name = "validity",
    about = "A tool for deciding the validity of propositional arguments"
)]
#[structopt(raw(setting = "structopt::clap::AppSettings::ColoredHelp"))]
pub(super) struct Command {
    #[structopt(subcommand, name = "command")]
    command: ProcessCommand,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file."
    )]
    log: Option<std::path::PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let process = self.command;
        let stylus = stylus(!self.no_color);

        let log = self
            .log
            .map(|l| l.to_str().unwrap_or(DEFAULT_JSON_LOG_FILE).to_owned());

        if !self.no_color {
            stylus.set(STYLE_LOGO);
            println!("{}", ASCII_ART);
        }

        let run = || process.run(&stylus);

        if let Some(log) = log {
            let log = fs::File::create(log)
                .map_err(|e| Error::new(e).context("failed to create the log file"))?;
            let logger = JsonLogger::new(log);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }
}
