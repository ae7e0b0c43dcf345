use std::io::{self, BufWriter, Write};

use bmsearch_cli::{CliError, Options, Session};

fn run() -> Result<(), CliError> {
    let options = Options::parse_from_args(std::env::args_os())?;
    log::debug!("bmsearch options: {:?}", options);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), BufWriter::new(stdout.lock()), options);
    session.run()?;
    session.into_output().flush()?;
    Ok(())
}

fn main() {
    let env = env_logger::Env::new()
        .filter("BMSEARCH_LOG")
        .write_style("BMSEARCH_LOG_STYLE");
    env_logger::init_from_env(env);

    match run() {
        Ok(()) => {}
        Err(CliError::Args(e)) => e.exit(),
        Err(e) => {
            eprintln!("bmsearch: {}", e);
            std::process::exit(1);
        }
    }
}
