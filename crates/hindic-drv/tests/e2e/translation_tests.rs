//! Translation E2E tests: full pipeline runs over the fixture programs.

use crate::{fixtures_dir, hindic_bin};
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn translate(fixture: &str) -> (assert_cmd::assert::Assert, std::path::PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let output = dir.path().join("out.c");

    let mut cmd = Command::new(hindic_bin());
    cmd.arg(fixtures_dir().join(fixture)).arg("-o").arg(&output);
    let assert = cmd.assert();

    // Keep the TempDir alive by leaking it into the path's lifetime; the
    // OS cleans the files up with the temp directory tree.
    let dir = dir.into_path();
    (assert, dir.join("out.c"))
}

/// The addition function translates to parenthesized C.
#[test]
fn test_addition_function() {
    let (assert, output) = translate("addition.hin");
    assert.success();

    let c = std::fs::read_to_string(output).expect("read output");
    assert!(c.starts_with("#include <stdio.h>\n#include <stdlib.h>\n\n"));
    assert!(c.contains("int जोड़(int a, int b) "));
    assert!(c.contains("    return (a + b);\n"));
}

/// If/else with standard-library print translates to printf.
#[test]
fn test_if_else_with_print() {
    let (assert, output) = translate("greet.hin");
    assert.success();

    let c = std::fs::read_to_string(output).expect("read output");
    assert!(c.contains("void जाँच(int x) "));
    assert!(c.contains("if ((x == 0)) "));
    assert!(c.contains("printf(\"zero\");"));
    assert!(c.contains("else "));
    assert!(c.contains("printf(\"nonzero\");"));
}

/// The for loop keeps its header shape and binary parenthesization.
#[test]
fn test_for_loop() {
    let (assert, output) = translate("loop.hin");
    assert.success();

    let c = std::fs::read_to_string(output).expect("read output");
    assert!(c.contains("for (int i = 0; (i < 10); i = (i + 1)) "));
    assert!(c.contains("योग = (योग + i);"));
    assert!(c.contains("printf(\"%d\", योग);"));
}

/// An undefined variable fails semantic analysis; no output is written.
#[test]
fn test_undefined_variable() {
    let (assert, output) = translate("undefined_variable.hin");
    assert
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("Error: Undefined variable.")
                .and(predicate::str::contains("Semantic analysis failed with 1 errors.")),
        );

    assert!(!output.exists(), "no output file on semantic failure");
}

/// A float initializer for an int variable is a type mismatch at the
/// declaration's position.
#[test]
fn test_type_mismatch_in_initializer() {
    let (assert, output) = translate("type_mismatch.hin");
    assert.failure().code(1).stderr(predicate::str::contains(
        "Error: Type mismatch in variable initialization.",
    ));

    assert!(!output.exists(), "no output file on semantic failure");
}

/// An unterminated string surfaces through the parser and stops the
/// pipeline.
#[test]
fn test_unterminated_string() {
    let (assert, output) = translate("unterminated.hin");
    assert
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("Unterminated string.")
                .and(predicate::str::contains("Error: Parsing failed.")),
        );

    assert!(!output.exists(), "no output file on parse failure");
}

/// Diagnostics appear in source order.
#[test]
fn test_diagnostics_in_source_order() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("two_errors.hin");
    std::fs::write(
        &input,
        "शून्य f() {\n    a = 1;\n}\nशून्य g() {\n    b = 2;\n}\n",
    )
    .expect("write fixture");

    let mut cmd = Command::new(hindic_bin());
    cmd.arg(&input);

    let assert = cmd.assert().failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();

    let first = stderr.find("Line 2").expect("first diagnostic");
    let second = stderr.find("Line 5").expect("second diagnostic");
    assert!(first < second, "diagnostics out of order: {stderr}");
}

/// Translating the same input twice produces byte-identical output.
#[test]
fn test_translation_deterministic() {
    let (assert1, output1) = translate("loop.hin");
    assert1.success();
    let (assert2, output2) = translate("loop.hin");
    assert2.success();

    let c1 = std::fs::read_to_string(output1).expect("read first");
    let c2 = std::fs::read_to_string(output2).expect("read second");
    assert_eq!(c1, c2);
}
