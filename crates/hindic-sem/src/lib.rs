//! hindic-sem - Semantic analysis.
//!
//! Validates a parsed program: names must resolve, types must line up,
//! and scope discipline must hold. The analyzer runs two passes:
//!
//! 1. *Hoisting*: every top-level function is registered in the global
//!    scope first, so functions may call each other regardless of
//!    declaration order. Variables are not hoisted.
//! 2. *Checking*: every declaration is visited in order. Expression types
//!    are computed on demand and used for checking only; nothing is
//!    stored back into the tree.
//!
//! Failed sub-expressions produce [`Type::Error`], and every rule with an
//! `Error` operand stays silent, so one mistake yields one diagnostic.
//! All errors are accumulated; analysis succeeds iff none were reported.
//!
//! # Example
//!
//! ```
//! use hindic_lex::Lexer;
//! use hindic_par::Parser;
//! use hindic_sem::SemanticAnalyzer;
//! use hindic_util::Handler;
//!
//! let handler = Handler::new();
//! let mut parser = Parser::new(Lexer::new("पूर्णांक x = 5;"), &handler);
//! let program = parser.parse();
//!
//! let mut analyzer = SemanticAnalyzer::new(&handler);
//! assert!(analyzer.analyze(&program));
//! ```

mod analyzer;
pub mod scope;
pub mod types;

#[cfg(test)]
mod edge_cases;

pub use analyzer::SemanticAnalyzer;
pub use scope::{DefineError, ScopeStack, SymbolInfo, SymbolKind};
pub use types::Type;
