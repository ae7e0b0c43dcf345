// Front end for the bmsearch matcher
// Menu, demo data generation and result reporting

pub mod error;
pub mod generator;
pub mod options;
pub mod report;
pub mod session;

pub use error::{CliError, CliResult};
pub use generator::{Generator, GeneratorOptions, TestCase};
pub use options::{Mode, Options};
pub use session::Session;
