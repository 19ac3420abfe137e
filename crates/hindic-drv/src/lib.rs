//! hindic-drv - Translator driver.
//!
//! The driver owns everything outside the core pipeline: argument
//! handling, file I/O, stage orchestration, and diagnostic printing.
//! Stages run strictly in order and a stage that reports errors stops the
//! pipeline; later stages never see a broken input.
//!
//! Diagnostics are flushed to stderr after each stage in the order they
//! were produced, using the `Line L, Column C: Error: <message>` format,
//! and the final stderr line names the stage that failed.

pub mod cli;

pub use cli::Cli;

use hindic_gen::CodeGenerator;
use hindic_lex::{Lexer, Token};
use hindic_par::Parser;
use hindic_sem::SemanticAnalyzer;
use hindic_util::Handler;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Driver-level failure. The `Display` strings match the messages the
/// translator prints on stderr (prefixed with `Error: ` by the binary).
#[derive(Debug, Error)]
pub enum CompileError {
    /// The input file could not be read.
    #[error("Could not open file '{}'.", .path.display())]
    ReadInput { path: PathBuf },

    /// The output file could not be written.
    #[error("Could not open output file '{}'.", .path.display())]
    WriteOutput { path: PathBuf },

    /// One or more syntax (or lexical) errors.
    #[error("Parsing failed.")]
    ParseFailed,

    /// One or more semantic errors.
    #[error("Semantic analysis failed with {count} errors.")]
    SemanticFailed { count: usize },
}

/// Run a full translator invocation.
pub fn run(cli: Cli) -> Result<(), CompileError> {
    Session::new(cli).compile()
}

/// One translator invocation: configuration plus the diagnostic handler
/// shared by every stage.
pub struct Session {
    cli: Cli,
    handler: Handler,
}

impl Session {
    /// Create a session for the given command line.
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            handler: Handler::new(),
        }
    }

    /// Run the pipeline: read, lex/parse, analyze, emit.
    ///
    /// `-t` stops after lexing, `-p` after parsing. Exit status is the
    /// caller's concern; this returns the stage failure if any.
    pub fn compile(self) -> Result<(), CompileError> {
        let source = fs::read_to_string(&self.cli.input).map_err(|_| CompileError::ReadInput {
            path: self.cli.input.clone(),
        })?;
        debug!(bytes = source.len(), path = %self.cli.input.display(), "read source");

        if self.cli.tokenize_only {
            dump_tokens(&source);
            return Ok(());
        }

        // Parsing (pulls the lexer along).
        debug!("parsing");
        let mut parser = Parser::new(Lexer::new(&source), &self.handler);
        let program = parser.parse();
        let parse_failed = parser.had_error();
        self.flush_diagnostics();
        if parse_failed {
            return Err(CompileError::ParseFailed);
        }

        if self.cli.parse_only {
            println!("Parsing successful!");
            return Ok(());
        }

        // Semantic analysis.
        debug!("semantic analysis");
        let mut analyzer = SemanticAnalyzer::new(&self.handler);
        let semantic_ok = analyzer.analyze(&program);
        self.flush_diagnostics();
        if !semantic_ok {
            return Err(CompileError::SemanticFailed {
                count: analyzer.error_count(),
            });
        }

        // Code generation; nothing is written on earlier failure.
        debug!("code generation");
        let mut generator = CodeGenerator::new();
        generator.generate(&program);

        let output_path = self.cli.output_path();
        fs::write(&output_path, generator.output()).map_err(|_| CompileError::WriteOutput {
            path: output_path.clone(),
        })?;

        println!(
            "Code generation successful! Output written to '{}'.",
            output_path.display()
        );

        Ok(())
    }

    /// Print and drain collected diagnostics, in emission order.
    fn flush_diagnostics(&self) {
        for diagnostic in self.handler.take() {
            eprintln!("{}", diagnostic);
        }
    }
}

/// Print one line per token for the `-t` mode, EOF included.
///
/// Error tokens print their diagnostic message as their text; every other
/// token prints its raw source bytes.
fn dump_tokens(source: &str) {
    let mut lexer = Lexer::new(source);

    loop {
        let t = lexer.next_token();

        let text = match t.token {
            Token::Invalid(message) => message,
            Token::Eof => "",
            _ => &source[t.span.start..t.span.end],
        };

        println!(
            "Token: {}, Line: {}, Column: {}, Text: '{}'",
            t.token.name(),
            t.span.line,
            t.span.column,
            text
        );

        if t.token == Token::Eof {
            break;
        }
    }
}
