//! Byte classification for identifier scanning.
//!
//! The scanner never decodes UTF-8. Devanagari (U+0900..U+097F) encodes as
//! three-byte sequences whose lead byte is 0xE0, and continuation bytes fall
//! in 0x80..0xBF, which can never begin a token. Treating every byte >= 0xE0
//! as an identifier-start and every byte >= 0x80 as an identifier-continue
//! is therefore sound for valid UTF-8 input and keeps the hot loop branch-
//! free of decoding. Combining marks and vowel signs arrive as continuation
//! bytes inside a sequence and ride along naturally.

/// Returns true if `b` can begin an identifier.
///
/// ASCII letters, underscore, or the lead byte of a three-byte UTF-8
/// sequence (which covers the Devanagari block).
///
/// # Examples
///
/// ```
/// use hindic_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start(b'a'));
/// assert!(is_ident_start(b'_'));
/// assert!(is_ident_start(0xE0)); // first byte of "अ"
/// assert!(!is_ident_start(b'5'));
/// assert!(!is_ident_start(b'('));
/// ```
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0xE0
}

/// Returns true if `b` can continue an identifier.
///
/// Identifier-start bytes, ASCII digits, and UTF-8 continuation bytes
/// (0x80..=0xBF), so the tail of a multi-byte sequence is consumed as part
/// of the identifier it started.
///
/// # Examples
///
/// ```
/// use hindic_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue(b'z'));
/// assert!(is_ident_continue(b'7'));
/// assert!(is_ident_continue(0xA4)); // continuation byte inside "अ"
/// assert!(!is_ident_continue(b';'));
/// ```
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit() || (0x80..0xC0).contains(&b)
}

/// Returns true if `text` begins with a code point from the Devanagari
/// block (U+0900..U+097F).
///
/// The block encodes as `E0 A4 80` through `E0 A5 BF`, so checking the
/// first two bytes suffices.
///
/// # Examples
///
/// ```
/// use hindic_lex::unicode::starts_with_devanagari;
///
/// assert!(starts_with_devanagari("अगर"));
/// assert!(!starts_with_devanagari("agar"));
/// ```
#[inline]
pub fn starts_with_devanagari(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 2 && bytes[0] == 0xE0 && (bytes[1] == 0xA4 || bytes[1] == 0xA5)
}
