//! Operator and punctuation lexing.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator or punctuation token.
    ///
    /// The single-character tokens are immediate. `= ! < >` become their
    /// two-character forms when followed by `=`. `&&` and `||` are the only
    /// uses of `&` and `|`; a lone `&` or `|`, like any other unrecognized
    /// byte, yields an error token and scanning continues from the next
    /// byte.
    pub(super) fn lex_operator(&mut self) -> Token {
        let b = self.cursor.current();
        self.cursor.advance();

        match b {
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b'{' => Token::LBrace,
            b'}' => Token::RBrace,
            b';' => Token::Semicolon,
            b',' => Token::Comma,

            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' => Token::Star,
            b'/' => Token::Slash,
            b'%' => Token::Percent,

            b'=' => {
                if self.cursor.match_byte(b'=') {
                    Token::EqEq
                } else {
                    Token::Eq
                }
            }
            b'!' => {
                if self.cursor.match_byte(b'=') {
                    Token::NotEq
                } else {
                    Token::Not
                }
            }
            b'<' => {
                if self.cursor.match_byte(b'=') {
                    Token::LtEq
                } else {
                    Token::Lt
                }
            }
            b'>' => {
                if self.cursor.match_byte(b'=') {
                    Token::GtEq
                } else {
                    Token::Gt
                }
            }

            b'&' => {
                if self.cursor.match_byte(b'&') {
                    Token::AndAnd
                } else {
                    Token::Invalid("Unexpected character.")
                }
            }
            b'|' => {
                if self.cursor.match_byte(b'|') {
                    Token::OrOr
                } else {
                    Token::Invalid("Unexpected character.")
                }
            }

            _ => Token::Invalid("Unexpected character."),
        }
    }
}
