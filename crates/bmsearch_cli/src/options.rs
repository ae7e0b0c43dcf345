//! Parsing Options.
//! With no subcommand the interactive menu is shown.

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

use crate::error::CliResult;
use crate::generator::GeneratorOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Banner plus a numbered choice read from stdin.
    Menu,
    /// Fixed example followed by generated cases.
    Example,
    /// Prompt for a text and a pattern.
    Interactive,
    /// Search once; text from the argument or, when absent, all of stdin.
    Find {
        pattern: String,
        text: Option<String>,
        chars: bool,
        json: bool,
    },
}

#[derive(Debug, Clone)]
pub struct Options {
    pub mode: Mode,
    /// Generator seed; the wall clock is used when absent.
    pub seed: Option<u64>,
    pub generator: GeneratorOptions,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            mode: Mode::Menu,
            seed: None,
            generator: GeneratorOptions::default(),
        }
    }
}

fn make_options_parser() -> Command {
    Command::new("bmsearch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Boyer-Moore substring search")
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .help("Seed for generated example cases")
                .value_parser(value_parser!(u64))
                .global(true),
        )
        .arg(
            Arg::new("rounds")
                .long("rounds")
                .value_name("R")
                .help("Number of generated example cases")
                .value_parser(value_parser!(usize))
                .global(true),
        )
        .arg(
            Arg::new("alphabet")
                .long("alphabet")
                .value_name("SYMBOLS")
                .help("Symbols used for generated example cases")
                .global(true),
        )
        .subcommand(Command::new("example").about("Run the fixed example and generated cases"))
        .subcommand(Command::new("interactive").about("Prompt for a text and a pattern"))
        .subcommand(
            Command::new("find")
                .about("Search for a pattern in a text or in stdin")
                .arg(Arg::new("pattern").required(true).help("Pattern to search for"))
                .arg(Arg::new("text").help("Text to search; stdin when omitted"))
                .arg(
                    Arg::new("chars")
                        .long("chars")
                        .action(ArgAction::SetTrue)
                        .help("Match by character instead of by byte"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print a JSON report"),
                ),
        )
}

impl Options {
    pub fn parse_from_args<I, T>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let mut options = Options::default();

        let mode = match matches.subcommand() {
            Some(("example", _)) => Mode::Example,
            Some(("interactive", _)) => Mode::Interactive,
            Some(("find", sub)) => Mode::Find {
                pattern: sub.get_one::<String>("pattern").cloned().unwrap_or_default(),
                text: sub.get_one::<String>("text").cloned(),
                chars: sub.get_flag("chars"),
                json: sub.get_flag("json"),
            },
            _ => Mode::Menu,
        };
        options.mode = mode;

        // Global args are propagated to whichever subcommand ran.
        let scope = matches.subcommand().map(|(_, sub)| sub).unwrap_or(matches);
        options.seed = scope.get_one::<u64>("seed").copied();
        if let Some(&rounds) = scope.get_one::<usize>("rounds") {
            options.generator.rounds = rounds;
        }
        if let Some(alphabet) = scope.get_one::<String>("alphabet") {
            options.generator.alphabet = alphabet.clone();
        }

        options
    }
}
