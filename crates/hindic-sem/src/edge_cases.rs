//! Edge case tests for hindic-sem

use crate::SemanticAnalyzer;
use hindic_lex::Lexer;
use hindic_par::Parser;
use hindic_util::Handler;

fn analyze(source: &str) -> (bool, usize, Vec<String>) {
    let handler = Handler::new();
    let mut parser = Parser::new(Lexer::new(source), &handler);
    let program = parser.parse();
    assert!(
        !parser.had_error(),
        "parse errors: {:?}",
        handler.diagnostics()
    );

    let mut analyzer = SemanticAnalyzer::new(&handler);
    let ok = analyzer.analyze(&program);
    let messages = handler
        .diagnostics()
        .into_iter()
        .map(|d| d.message)
        .collect();
    (ok, analyzer.error_count(), messages)
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_program_passes() {
    let (ok, count, _) = analyze("");
    assert!(ok);
    assert_eq!(count, 0);
}

#[test]
fn test_edge_mutual_recursion() {
    let (ok, _, messages) = analyze(
        "पूर्णांक सम(पूर्णांक n) { वापस विषम(n - 1); }\n\
         पूर्णांक विषम(पूर्णांक n) { वापस सम(n - 1); }",
    );
    assert!(ok, "errors: {:?}", messages);
}

#[test]
fn test_edge_self_recursion() {
    let (ok, _, messages) = analyze(
        "पूर्णांक भाज्य(पूर्णांक n) { अगर (n < 2) वापस 1; वापस n * भाज्य(n - 1); }",
    );
    assert!(ok, "errors: {:?}", messages);
}

#[test]
fn test_edge_variables_not_hoisted() {
    // A global declared after its use is undefined at the use site.
    let (ok, _, messages) = analyze("शून्य f() { g = 1; } पूर्णांक g;");
    assert!(!ok);
    assert!(messages.contains(&"Undefined variable in assignment.".to_string()));
}

#[test]
fn test_edge_param_shadows_global() {
    let (ok, _, messages) = analyze(
        "पूर्णांक x;\nशून्य f(दशमलव x) { दशमलव y = x; }",
    );
    assert!(ok, "errors: {:?}", messages);
}

#[test]
fn test_edge_duplicate_parameters() {
    let (ok, _, messages) = analyze("शून्य f(पूर्णांक a, पूर्णांक a) { }");
    assert!(!ok);
    assert!(messages.contains(&"Variable 'a' already defined in this scope.".to_string()));
}

#[test]
fn test_edge_body_variable_may_shadow_param() {
    // Parameters sit in their own scope; the body block is nested.
    let (ok, _, messages) = analyze("शून्य f(पूर्णांक a) { दशमलव a; }");
    assert!(ok, "errors: {:?}", messages);
}

#[test]
fn test_edge_sibling_scopes_do_not_collide() {
    let (ok, _, messages) = analyze(
        "शून्य f() { { पूर्णांक x; } { पूर्णांक x; } }",
    );
    assert!(ok, "errors: {:?}", messages);
}

#[test]
fn test_edge_arity_mismatch_skips_argument_analysis() {
    // The undefined name inside the argument list goes unreported when
    // the arity is already wrong.
    let (ok, _, messages) = analyze(
        "पूर्णांक f(पूर्णांक a, पूर्णांक b) { वापस a; } शून्य g() { f(अनजान); }",
    );
    assert!(!ok);
    assert_eq!(messages, vec!["Wrong number of arguments.".to_string()]);
}

#[test]
fn test_edge_error_count_matches_messages() {
    let (ok, count, messages) = analyze(
        "शून्य f() { a = 1; b = 2; अगर (1.5) वापस; }",
    );
    assert!(!ok);
    assert_eq!(count, 3);
    assert_eq!(messages.len(), 3);
}

#[test]
fn test_edge_missing_terminal_return_not_diagnosed() {
    // A non-void function without a return is accepted (known
    // limitation).
    let (ok, _, messages) = analyze("पूर्णांक f() { पूर्णांक x = 1; }");
    assert!(ok, "errors: {:?}", messages);
}

#[test]
fn test_edge_top_level_bare_return_allowed() {
    // Top level behaves like a void context.
    let (ok, _, messages) = analyze("वापस;");
    assert!(ok, "errors: {:?}", messages);
}

#[test]
fn test_edge_top_level_return_value_rejected() {
    let (ok, _, messages) = analyze("वापस 1;");
    assert!(!ok);
    assert!(messages.contains(&"Cannot return a value from a void function.".to_string()));
}

#[test]
fn test_edge_return_type_restored_after_function() {
    // g's int context must not leak into the top level.
    let (ok, _, messages) = analyze("पूर्णांक g() { वापस 1; } वापस;");
    assert!(ok, "errors: {:?}", messages);
}

#[test]
fn test_edge_call_result_type_flows() {
    let (ok, _, messages) = analyze(
        "दशमलव आधा(दशमलव x) { वापस x / 2.0; }\n\
         दशमलव y = आधा(3.0);",
    );
    assert!(ok, "errors: {:?}", messages);
}

#[test]
fn test_edge_call_result_type_mismatch_detected() {
    let (ok, _, messages) = analyze(
        "दशमलव आधा(दशमलव x) { वापस x; }\n\
         पूर्णांक y = आधा(3.0);",
    );
    assert!(!ok);
    assert!(messages.contains(&"Type mismatch in variable initialization.".to_string()));
}

#[test]
fn test_edge_global_variable_redeclaration() {
    let (ok, _, messages) = analyze("पूर्णांक x; दशमलव x;");
    assert!(!ok);
    assert!(messages.contains(&"Variable 'x' already defined in this scope.".to_string()));
}
