// Drives one run of the front end over an input and an output stream.
//
// All console interaction goes through the generic reader/writer so the
// whole flow can be exercised in tests with in-memory buffers.

use std::io::{BufRead, Read, Write};

use bmsearch::{search_chars, search_str};
use log::{debug, info};

use crate::error::{CliError, CliResult};
use crate::generator::{Generator, default_seed};
use crate::options::{Mode, Options};
use crate::report::{self, OffsetUnit, SearchReport};

pub const EXAMPLE_TEXT: &str = "CABCABABBABCABACBCBABBABCAABBC";
pub const EXAMPLE_PATTERN: &str = "ABABBAB";

pub struct Session<R, W> {
    input: R,
    output: W,
    options: Options,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: Options) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> CliResult<()> {
        match self.options.mode.clone() {
            Mode::Menu => self.run_menu(),
            Mode::Example => self.run_example(),
            Mode::Interactive => self.run_interactive(),
            Mode::Find {
                pattern,
                text,
                chars,
                json,
            } => self.run_find(&pattern, text, chars, json),
        }
    }

    pub fn run_menu(&mut self) -> CliResult<()> {
        report::write_banner(&mut self.output)?;
        let choice = self.read_line("menu choice")?;
        debug!("menu choice {:?}", choice.trim());
        match choice.trim() {
            "1" => self.run_example(),
            "2" => self.run_interactive(),
            _ => {
                writeln!(self.output, "Invalid choice! Exiting...")?;
                Ok(())
            }
        }
    }

    pub fn run_example(&mut self) -> CliResult<()> {
        let offsets = search_str(EXAMPLE_TEXT, EXAMPLE_PATTERN);
        report::write_example(&mut self.output, EXAMPLE_TEXT, EXAMPLE_PATTERN, &offsets)?;

        let seed = self.options.seed.unwrap_or_else(default_seed);
        info!("generating example cases with seed {}", seed);
        let mut generator = Generator::new(seed, self.options.generator.clone())?;
        for round in 1..=generator.options().rounds {
            let case = generator.next_case();
            let offsets = search_str(&case.text, &case.pattern);
            report::write_round(&mut self.output, round, &case.text, &case.pattern, &offsets)?;
        }
        Ok(())
    }

    pub fn run_interactive(&mut self) -> CliResult<()> {
        write!(self.output, "Enter the text: ")?;
        self.output.flush()?;
        let text = self.read_line("text")?;
        write!(self.output, "Enter the pattern to search: ")?;
        self.output.flush()?;
        let pattern = self.read_line("pattern")?;

        let offsets = search_str(&text, &pattern);
        report::write_matches(&mut self.output, &offsets)?;
        Ok(())
    }

    pub fn run_find(
        &mut self,
        pattern: &str,
        text: Option<String>,
        chars: bool,
        json: bool,
    ) -> CliResult<()> {
        let text = match text {
            Some(text) => text,
            None => {
                let mut buf = String::new();
                self.input.read_to_string(&mut buf)?;
                buf
            }
        };

        let (offsets, unit, text_len) = if chars {
            (search_chars(&text, pattern), OffsetUnit::Char, text.chars().count())
        } else {
            (search_str(&text, pattern), OffsetUnit::Byte, text.len())
        };
        debug!("find: {} match(es) over {} symbols", offsets.len(), text_len);

        if json {
            let report = SearchReport {
                pattern,
                text_len,
                unit,
                matches: &offsets,
            };
            report::write_json(&mut self.output, &report)?;
        } else {
            report::write_matches(&mut self.output, &offsets)?;
        }
        Ok(())
    }

    /// One line without its terminator. End of input is an error.
    fn read_line(&mut self, what: &'static str) -> CliResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::UnexpectedEof(what));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorOptions;

    fn run_with(mode: Mode, input: &str, seed: Option<u64>) -> CliResult<String> {
        let options = Options {
            mode,
            seed,
            generator: GeneratorOptions::default(),
        };
        let mut session = Session::new(input.as_bytes(), Vec::new(), options);
        session.run()?;
        Ok(String::from_utf8(session.into_output()).unwrap())
    }

    #[test]
    fn test_menu_invalid_choice() {
        let out = run_with(Mode::Menu, "9\n", None).unwrap();
        assert!(out.contains("Enter your choice: "));
        assert!(out.ends_with("Invalid choice! Exiting...\n"));
    }

    #[test]
    fn test_menu_interactive() {
        let out = run_with(Mode::Menu, "2\nAAAAAAA\nAAA\n", None).unwrap();
        assert!(out.contains("Enter the text: Enter the pattern to search: "));
        for i in 0..5 {
            assert!(out.contains(&format!("Pattern occurs at index = {}\n", i)));
        }
    }

    #[test]
    fn test_interactive_not_found() {
        let out = run_with(Mode::Interactive, "ABCDEFG\r\nXYZ\r\n", None).unwrap();
        assert!(out.ends_with("Pattern not found!\n"));
    }

    #[test]
    fn test_interactive_keeps_spaces() {
        let out = run_with(Mode::Interactive, "a b a b\nb a\n", None).unwrap();
        assert!(out.ends_with("Pattern occurs at index = 2\n"));
    }

    #[test]
    fn test_interactive_eof() {
        let err = run_with(Mode::Interactive, "only text\n", None).unwrap_err();
        assert!(matches!(err, CliError::UnexpectedEof("pattern")));
    }

    #[test]
    fn test_example_is_reproducible() {
        let a = run_with(Mode::Example, "", Some(11)).unwrap();
        let b = run_with(Mode::Example, "", Some(11)).unwrap();
        assert_eq!(a, b);
        assert!(a.contains("Text: CABCABABBABCABACBCBABBABCAABBC\n"));
        assert!(a.contains("Pattern: ABABBAB\nPattern occurs at index = 4\n"));
        assert!(a.contains("Pattern Searching #5"));
        assert!(!a.contains("Pattern Searching #6"));
    }

    #[test]
    fn test_find_from_stdin() {
        let mode = Mode::Find {
            pattern: "aa".to_string(),
            text: None,
            chars: false,
            json: false,
        };
        let out = run_with(mode, "aaaa", None).unwrap();
        assert_eq!(
            out,
            "Pattern occurs at index = 0\nPattern occurs at index = 1\nPattern occurs at index = 2\n"
        );
    }

    #[test]
    fn test_find_chars_json() {
        let mode = Mode::Find {
            pattern: "é".to_string(),
            text: Some("éaé".to_string()),
            chars: true,
            json: true,
        };
        let out = run_with(mode, "", None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["matches"], serde_json::json!([0, 2]));
        assert_eq!(value["text_len"], 3);
        assert_eq!(value["unit"], "char");
    }
}
