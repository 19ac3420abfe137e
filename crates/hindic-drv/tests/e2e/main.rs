//! End-to-end tests for the `hindic` binary.

mod translation_tests;

use std::path::PathBuf;

/// Get the path to the fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("e2e")
        .join("fixtures")
}

/// Get the path to the hindic binary.
pub fn hindic_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_hindic"))
}
