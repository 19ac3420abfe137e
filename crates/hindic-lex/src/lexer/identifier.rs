//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Token};
use crate::unicode::is_ident_continue;
use crate::Lexer;
use hindic_util::Symbol;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes identifier-continue bytes, which includes the continuation
    /// bytes of multi-byte Devanagari sequences, then compares the byte
    /// sequence against the keyword table.
    ///
    /// # Returns
    ///
    /// A keyword token (e.g., `Token::If`) or `Token::Ident(symbol)`.
    pub(super) fn lex_identifier(&mut self) -> Token {
        while !self.cursor.is_at_end() && is_ident_continue(self.cursor.current()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start());

        keyword_from_ident(text).unwrap_or_else(|| Token::Ident(Symbol::intern(text)))
    }
}
