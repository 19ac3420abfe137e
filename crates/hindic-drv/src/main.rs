//! hindic binary entry point.
//!
//! Keeps process-level concerns (logging setup, argument errors, exit
//! codes) out of the library: every failure exits 1, help and version
//! exit 0.

use clap::error::ErrorKind;
use clap::Parser;
use hindic_drv::Cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            // Help goes to stdout, usage errors to stderr.
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = hindic_drv::run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
