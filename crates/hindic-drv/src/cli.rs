//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// hindic - Devanagari-to-C source translator
///
/// Translates a program written with Devanagari keywords and identifiers
/// into equivalent C source, ready for a C compiler.
#[derive(Parser, Debug)]
#[command(name = "hindic")]
#[command(version)]
#[command(about = "Translates Devanagari source programs to C", long_about = None)]
pub struct Cli {
    /// Input source file
    pub input: PathBuf,

    /// Output file (default: input file with a .c extension)
    #[arg(short = 'o', value_name = "output")]
    pub output: Option<PathBuf>,

    /// Tokenize only (print tokens to stdout)
    #[arg(short = 't')]
    pub tokenize_only: bool,

    /// Parse only (no code generation)
    #[arg(short = 'p')]
    pub parse_only: bool,
}

impl Cli {
    /// The output path: `-o` if given, otherwise the input path with its
    /// extension replaced by `.c`.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("c"))
    }
}
