//! Edge case tests for hindic-par

use crate::{Expr, Literal, Parser, Program, Stmt};
use hindic_lex::Lexer;
use hindic_util::Handler;

fn parse(source: &str) -> (Program, bool, Vec<String>) {
    let handler = Handler::new();
    let mut parser = Parser::new(Lexer::new(source), &handler);
    let program = parser.parse();
    let had_error = parser.had_error();
    let messages = handler
        .diagnostics()
        .into_iter()
        .map(|d| d.message)
        .collect();
    (program, had_error, messages)
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source_is_empty_program() {
    let (program, had_error, _) = parse("");
    assert!(!had_error);
    assert_eq!(program.decls.len(), 0);
}

#[test]
fn test_edge_comments_only() {
    let (program, had_error, _) = parse("// पहली पंक्ति\n// दूसरी पंक्ति\n");
    assert!(!had_error);
    assert_eq!(program.decls.len(), 0);
}

#[test]
fn test_edge_top_level_statement() {
    // Statements are allowed at top level alongside declarations.
    let (program, had_error, _) = parse("x = 1;");
    assert!(!had_error);
    assert!(matches!(program.decls[0], Stmt::Expr(_)));
}

#[test]
fn test_edge_deeply_nested_grouping() {
    let depth = 64;
    let source = format!("{}x{};", "(".repeat(depth), ")".repeat(depth));
    let (program, had_error, _) = parse(&source);
    assert!(!had_error);
    assert_eq!(program.decls.len(), 1);
}

#[test]
fn test_edge_string_literal_statement() {
    let (program, had_error, _) = parse("लिखो(\"अ, आ; इ = ई\");");
    assert!(!had_error);
    match &program.decls[0] {
        Stmt::Expr(stmt) => match &stmt.expr {
            Expr::Call(call) => match &call.args[0] {
                Expr::Literal(lit) => match lit.value {
                    Literal::Str(s) => assert_eq!(s.as_str(), "अ, आ; इ = ई"),
                    ref other => panic!("expected string, got {:?}", other),
                },
                other => panic!("expected literal, got {:?}", other),
            },
            other => panic!("expected call, got {:?}", other),
        },
        other => panic!("expected expr stmt, got {:?}", other),
    }
}

#[test]
fn test_edge_recovery_keeps_later_declarations() {
    let source = "\
पूर्णांक ठीक1 = 1;
पूर्णांक ) = 2;
पूर्णांक ठीक2 = 3;
";
    let (program, had_error, messages) = parse(source);
    assert!(had_error);
    assert_eq!(messages, vec!["Expect variable name.".to_string()]);
    // First and last declarations survive.
    assert_eq!(program.decls.len(), 2);
}

#[test]
fn test_edge_error_positions_point_at_offender() {
    let handler = Handler::new();
    let mut parser = Parser::new(Lexer::new("पूर्णांक x = ;"), &handler);
    let _ = parser.parse();
    assert!(parser.had_error());
    let diags = handler.diagnostics();
    assert_eq!(diags[0].message, "Expect expression.");
    assert_eq!(diags[0].span.line, 1);
    // "पूर्णांक x = " is 24 + 1 + 1 + 1 + 1 + 1 bytes; the ';' starts at
    // byte column 30.
    assert_eq!(diags[0].span.column, 30);
}

#[test]
fn test_edge_eof_inside_function() {
    let (_, had_error, messages) = parse("पूर्णांक f() { वापस 1;");
    assert!(had_error);
    assert!(messages.contains(&"Expect '}' after block.".to_string()));
}

#[test]
fn test_edge_semicolon_only_statements_error() {
    let (_, had_error, messages) = parse(";;;");
    assert!(had_error);
    assert!(messages.contains(&"Expect expression.".to_string()));
}

#[test]
fn test_edge_void_parameter_rejected() {
    let (_, had_error, messages) = parse("पूर्णांक f(शून्य x) { }");
    assert!(had_error);
    assert!(messages.contains(&"Expect parameter type.".to_string()));
}

#[test]
fn test_edge_call_argument_count_unbounded_by_parser() {
    // The parser accepts any number of call arguments; arity is checked
    // by semantic analysis.
    let (program, had_error, _) = parse("f(1, 2, 3, 4, 5, 6, 7, 8, 9, 10);");
    assert!(!had_error);
    match &program.decls[0] {
        Stmt::Expr(stmt) => match &stmt.expr {
            Expr::Call(call) => assert_eq!(call.args.len(), 10),
            other => panic!("expected call, got {:?}", other),
        },
        other => panic!("expected expr stmt, got {:?}", other),
    }
}

#[test]
fn test_edge_program_spans_survive_into_ast() {
    let (program, _, _) = parse("पूर्णांक चर = 7;");
    match &program.decls[0] {
        Stmt::VarDecl(decl) => {
            assert_eq!(decl.span.line, 1);
            // "पूर्णांक " is 24 bytes + space; the name starts at column 26.
            assert_eq!(decl.span.column, 26);
        }
        other => panic!("expected var decl, got {:?}", other),
    }
}
