//! Seeded random test data for the example mode.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CliError, CliResult};

/// Shape of generated demo cases.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Symbols drawn from, for both text and pattern.
    pub alphabet: String,
    pub text_len: usize,
    pub pattern_len_min: usize,
    pub pattern_len_max: usize,
    /// Number of generated cases shown after the fixed example.
    pub rounds: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            alphabet: "AB".to_string(),
            text_len: 30,
            pattern_len_min: 3,
            pattern_len_max: 4,
            rounds: 5,
        }
    }
}

impl GeneratorOptions {
    pub fn validate(&self) -> CliResult<()> {
        if self.alphabet.is_empty() {
            return Err(CliError::Generator("alphabet is empty".to_string()));
        }
        if self.pattern_len_min > self.pattern_len_max {
            return Err(CliError::Generator(format!(
                "pattern length range {}..={} is empty",
                self.pattern_len_min, self.pattern_len_max
            )));
        }
        Ok(())
    }
}

/// One generated text/pattern pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub text: String,
    pub pattern: String,
}

pub struct Generator {
    rng: StdRng,
    alphabet: Vec<char>,
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(seed: u64, options: GeneratorOptions) -> CliResult<Self> {
        options.validate()?;
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            alphabet: options.alphabet.chars().collect(),
            options,
        })
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// `len` symbols drawn uniformly from the alphabet.
    pub fn random_string(&mut self, len: usize) -> String {
        let alphabet = &self.alphabet;
        let rng = &mut self.rng;
        (0..len)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect()
    }

    /// Next case. The pattern is drawn before the text.
    pub fn next_case(&mut self) -> TestCase {
        let pattern_len = self
            .rng
            .gen_range(self.options.pattern_len_min..=self.options.pattern_len_max);
        let pattern = self.random_string(pattern_len);
        let text = self.random_string(self.options.text_len);
        TestCase { text, pattern }
    }
}

/// Seed taken from the wall clock, for runs where none was given.
pub fn default_seed() -> u64 {
    chrono::Utc::now().timestamp() as u64
}
