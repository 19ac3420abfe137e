//! Number literal lexing.

use crate::token::{NumberValue, Token};
use crate::Lexer;
use hindic_util::Symbol;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// One or more decimal digits, optionally followed by `.` and one or
    /// more decimal digits. A trailing `.` not followed by a digit is not
    /// part of the literal. Integer and floating-point literals share the
    /// `Number` token; the presence of `.` picks the decoded value.
    pub(super) fn lex_number(&mut self) -> Token {
        while self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }

        let mut is_float = false;
        if self.cursor.current() == b'.' && self.cursor.peek(1).is_ascii_digit() {
            is_float = true;
            self.cursor.advance();
            while self.cursor.current().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        let text = self.cursor.slice_from(self.token_start());
        let value = if is_float {
            NumberValue::Float(text.parse().unwrap_or(0.0))
        } else {
            NumberValue::Int(text.parse().unwrap_or(0))
        };

        Token::Number {
            text: Symbol::intern(text),
            value,
        }
    }
}
