use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Args(#[from] clap::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected end of input while reading the {0}")]
    UnexpectedEof(&'static str),
    #[error("invalid generator options: {0}")]
    Generator(String),
}

pub type CliResult<T> = Result<T, CliError>;
