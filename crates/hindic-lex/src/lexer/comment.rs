//! Whitespace and comment skipping.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and line comments.
    ///
    /// Space, horizontal tab, carriage return, and newline are whitespace;
    /// newlines advance the line counter through the cursor. `//` starts a
    /// comment that extends to (but does not include) the next newline.
    /// There are no block comments. A `/` not followed by `/` is left for
    /// the operator scanner.
    pub(super) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\r' | b'\t' | b'\n' => self.cursor.advance(),
                b'/' if self.cursor.peek(1) == b'/' => {
                    while self.cursor.current() != b'\n' && !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                }
                _ => return,
            }
        }
    }
}
