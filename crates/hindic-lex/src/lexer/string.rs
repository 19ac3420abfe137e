//! String literal lexing.

use crate::token::Token;
use crate::Lexer;
use hindic_util::Symbol;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Opened and closed by `"`. No escape processing is performed; the
    /// token carries the raw bytes between the quotes. Embedded newlines
    /// are permitted and advance the line counter. An unterminated string
    /// consumes the rest of the input and produces an error token.
    pub(super) fn lex_string(&mut self) -> Token {
        self.cursor.advance(); // opening quote

        loop {
            if self.cursor.is_at_end() {
                return Token::Invalid("Unterminated string.");
            }
            if self.cursor.current() == b'"' {
                self.cursor.advance();
                break;
            }
            self.cursor.advance();
        }

        // Strip the surrounding quotes.
        let lexeme = self.cursor.slice_from(self.token_start());
        let contents = &lexeme[1..lexeme.len() - 1];

        Token::Str(Symbol::intern(contents))
    }
}
