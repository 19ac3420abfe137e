//! Edge case tests for hindic-lex

use crate::token::NumberValue;
use crate::{Lexer, Token, TokenWithSpan};
use hindic_util::Symbol;
use proptest::prelude::*;

fn lex_all(source: &str) -> Vec<TokenWithSpan> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let t = lexer.next_token();
        let done = t.token == Token::Eof;
        tokens.push(t);
        if done {
            break;
        }
    }
    tokens
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    let tokens = lex_all("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token, Token::Eof);
    assert_eq!(tokens[0].span.line, 1);
    assert_eq!(tokens[0].span.column, 1);
}

#[test]
fn test_edge_whitespace_and_comments_only() {
    let tokens = lex_all("  // कुछ नहीं\n\t\r\n// और कुछ नहीं");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token, Token::Eof);
}

#[test]
fn test_edge_long_identifier() {
    let name: String = "क".repeat(500);
    let tokens = lex_all(&name);
    assert_eq!(tokens[0].token, Token::Ident(Symbol::intern(&name)));
    // 500 three-byte characters.
    assert_eq!(tokens[0].span.len(), 1500);
}

#[test]
fn test_edge_ident_at_buffer_end_without_newline() {
    let tokens = lex_all("पूर्णांक अंत");
    assert_eq!(tokens[0].token, Token::Int);
    assert_eq!(tokens[1].token, Token::Ident(Symbol::intern("अंत")));
    assert_eq!(tokens[2].token, Token::Eof);
}

#[test]
fn test_edge_number_glued_to_identifier() {
    // Digits cannot start an identifier, so "1x" is NUMBER then IDENT.
    let tokens = lex_all("1x");
    assert!(matches!(tokens[0].token, Token::Number { .. }));
    assert_eq!(tokens[1].token, Token::Ident(Symbol::intern("x")));
}

#[test]
fn test_edge_digits_inside_identifier() {
    let tokens = lex_all("x1y2");
    assert_eq!(tokens[0].token, Token::Ident(Symbol::intern("x1y2")));
}

#[test]
fn test_edge_multiline_string_line_counter() {
    let tokens = lex_all("\"a\nb\nc\" अगर");
    assert_eq!(tokens[0].token, Token::Str(Symbol::intern("a\nb\nc")));
    assert_eq!(tokens[1].token, Token::If);
    assert_eq!(tokens[1].span.line, 3);
}

#[test]
fn test_edge_unterminated_string_consumes_rest() {
    let tokens = lex_all("लिखो(\"hi");
    assert_eq!(tokens[0].token, Token::Ident(Symbol::intern("लिखो")));
    assert_eq!(tokens[1].token, Token::LParen);
    assert_eq!(tokens[2].token, Token::Invalid("Unterminated string."));
    assert_eq!(tokens[3].token, Token::Eof);
}

#[test]
fn test_edge_error_token_then_progress() {
    // Lexing continues from the byte after the bad one.
    let tokens = lex_all("@#$ x");
    let errors = tokens
        .iter()
        .filter(|t| matches!(t.token, Token::Invalid(_)))
        .count();
    assert_eq!(errors, 3);
    assert_eq!(
        tokens[3].token,
        Token::Ident(Symbol::intern("x"))
    );
}

#[test]
fn test_edge_column_length_invariant() {
    // column + byte length fits within the line.
    let source = "अगर (x == 10) { वापस; }";
    for t in lex_all(source) {
        if t.token == Token::Eof {
            continue;
        }
        let line_len = source.lines().nth(t.span.line as usize - 1).map_or(0, str::len);
        assert!(
            t.span.column as usize + t.span.len() <= line_len + 1,
            "token {:?} overruns its line",
            t
        );
    }
}

#[test]
fn test_edge_float_vs_int_disambiguation() {
    let tokens = lex_all("1 1.0 10.25 0.5");
    let values: Vec<_> = tokens
        .iter()
        .filter_map(|t| match t.token {
            Token::Number { value, .. } => Some(value),
            _ => None,
        })
        .collect();
    assert_eq!(
        values,
        vec![
            NumberValue::Int(1),
            NumberValue::Float(1.0),
            NumberValue::Float(10.25),
            NumberValue::Float(0.5),
        ]
    );
}

#[test]
fn test_edge_crlf_treated_as_whitespace() {
    let tokens = lex_all("x\r\ny");
    assert_eq!(tokens[1].token, Token::Ident(Symbol::intern("y")));
    assert_eq!(tokens[1].span.line, 2);
    assert_eq!(tokens[1].span.column, 1);
}

// ==================== PROPERTIES ====================

proptest! {
    /// Lexer totality: every input reaches EOF in a bounded number of
    /// steps, and every step makes progress or ends the stream.
    #[test]
    fn prop_lexer_terminates(source in "\\PC*") {
        let mut lexer = Lexer::new(&source);
        // Worst case one token per byte, plus EOF.
        let max_steps = source.len() + 2;
        let mut steps = 0;
        loop {
            let t = lexer.next_token();
            steps += 1;
            prop_assert!(steps <= max_steps, "lexer failed to make progress");
            if t.token == Token::Eof {
                break;
            }
        }
    }

    /// Spans never run past the source buffer.
    #[test]
    fn prop_spans_in_bounds(source in "\\PC*") {
        let mut lexer = Lexer::new(&source);
        loop {
            let t = lexer.next_token();
            prop_assert!(t.span.start <= t.span.end);
            prop_assert!(t.span.end <= source.len());
            if t.token == Token::Eof {
                break;
            }
        }
    }

    /// ASCII-only inputs: lexing then rejoining token slices skips only
    /// whitespace and comments.
    #[test]
    fn prop_ascii_token_slices_match_source(source in "[ -~\\n]{0,80}") {
        let mut lexer = Lexer::new(&source);
        loop {
            let t = lexer.next_token();
            if t.token == Token::Eof {
                break;
            }
            if !matches!(t.token, Token::Invalid(_)) {
                let slice = &source[t.span.start..t.span.end];
                prop_assert!(!slice.is_empty());
            }
        }
    }
}
