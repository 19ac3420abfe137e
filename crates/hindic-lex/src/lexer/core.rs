//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use hindic_util::Span;

use crate::cursor::Cursor;
use crate::token::{Token, TokenWithSpan};
use crate::unicode::is_ident_start;

/// Lexer for Devanagari source text.
///
/// The lexer transforms source code into a pull-based stream of tokens:
/// each call to [`Lexer::next_token`] returns the next token and never
/// returns the same token twice. Lexical errors come back as
/// [`Token::Invalid`] with a message payload; the parser turns those into
/// diagnostics, so the lexer itself reports nothing.
pub struct Lexer<'a> {
    /// Byte cursor over the source.
    pub cursor: Cursor<'a>,

    /// Starting byte offset of the current token.
    token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based, in bytes).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    ///
    /// The source buffer must outlive the lexer and every token derived
    /// from it; token spans index into it.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// This is the main entry point for tokenization. It skips whitespace
    /// and comments, then dispatches on the first byte of the token. At
    /// end of input it returns `Token::Eof` (and keeps returning it if
    /// called again).
    pub fn next_token(&mut self) -> TokenWithSpan {
        self.skip_whitespace_and_comments();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.finish(Token::Eof);
        }

        let b = self.cursor.current();

        let token = if is_ident_start(b) {
            self.lex_identifier()
        } else if b.is_ascii_digit() {
            self.lex_number()
        } else if b == b'"' {
            self.lex_string()
        } else {
            self.lex_operator()
        };

        self.finish(token)
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Starting byte offset of the token being scanned.
    pub(super) fn token_start(&self) -> usize {
        self.token_start
    }

    /// Attach the current token's span to a finished token.
    fn finish(&self, token: Token) -> TokenWithSpan {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        TokenWithSpan::new(token, span)
    }
}
