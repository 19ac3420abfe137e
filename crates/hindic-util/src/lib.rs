//! hindic-util - Foundation types shared by every translator phase.
//!
//! This crate provides the small set of building blocks the rest of the
//! pipeline is written against:
//!
//! - [`Span`] - source locations (byte range plus 1-based line/column)
//! - [`Symbol`] - interned string handles for identifiers and literals
//! - [`Diagnostic`], [`Handler`], [`Level`] - error collection and the
//!   `Line L, Column C: Error: ...` wire format printed to stderr
//!
//! Every token, AST node, and symbol-table entry in the translator refers
//! back to these types, so they live in their own crate at the bottom of
//! the dependency graph.

pub mod diagnostic;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::Span;
pub use symbol::Symbol;
