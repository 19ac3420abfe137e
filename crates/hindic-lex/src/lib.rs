//! hindic-lex - Lexical analyzer for Devanagari source.
//!
//! This crate turns UTF-8 source text into a pull-based stream of tokens.
//! Keywords and identifiers are written in Devanagari; the scanner never
//! decodes code points, relying instead on two facts about valid UTF-8:
//!
//! - any byte >= 0xE0 starts a three-byte sequence, which covers the
//!   Devanagari block U+0900..U+097F, and
//! - continuation bytes (0x80..0xBF) can never start a token, so combining
//!   marks and vowel signs are swallowed as part of the identifier.
//!
//! The lexer is total: every byte sequence eventually produces `Token::Eof`.
//! Unknown bytes and unterminated strings become `Token::Invalid` carrying a
//! diagnostic message, and (except at end of input) scanning continues from
//! the next byte.
//!
//! # Example
//!
//! ```
//! use hindic_lex::{Lexer, Token};
//!
//! let mut lexer = Lexer::new("पूर्णांक x = 5;");
//!
//! assert_eq!(lexer.next_token().token, Token::Int);
//! ```

pub mod cursor;
mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{NumberValue, Token, TokenWithSpan};
