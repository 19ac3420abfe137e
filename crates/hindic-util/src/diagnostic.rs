//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Every translator phase reports problems through a shared [`Handler`],
//! which collects [`Diagnostic`]s in the order they are produced. The
//! driver drains the handler after each phase and prints each diagnostic
//! to stderr in the translator's wire format:
//!
//! ```text
//! Line 3, Column 14: Error: Undefined variable.
//! ```
//!
//! # Examples
//!
//! ```
//! use hindic_util::diagnostic::Handler;
//! use hindic_util::span::Span;
//!
//! let handler = Handler::new();
//! handler.error("Unexpected character.", Span::point(1, 5));
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use hindic_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "Error");
/// assert!(Level::Error.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents translation
    Error,
    /// A warning that doesn't prevent translation
    Warning,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "Error"),
            Level::Warning => write!(f, "Warning"),
        }
    }
}

/// A diagnostic message with severity and location
///
/// # Examples
///
/// ```
/// use hindic_util::diagnostic::{Diagnostic, Level};
/// use hindic_util::span::Span;
///
/// let diag = Diagnostic::error("Expect expression.", Span::point(2, 9));
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(format!("{}", diag), "Line 2, Column 9: Error: Expect expression.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }
}

impl fmt::Display for Diagnostic {
    /// Renders the wire format the driver prints to stderr.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}, Column {}: {}: {}",
            self.span.line, self.span.column, self.level, self.message
        )
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics in emission order and provides
/// methods for querying their counts. Interior mutability lets phases
/// share one handler without threading `&mut` through every visitor.
///
/// # Examples
///
/// ```
/// use hindic_util::diagnostic::Handler;
/// use hindic_util::span::Span;
///
/// let handler = Handler::new();
/// handler.error("Unterminated string.", Span::point(4, 1));
///
/// if handler.has_errors() {
///     for diag in handler.diagnostics() {
///         eprintln!("{}", diag);
///     }
/// }
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Report an error
    pub fn error(&self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::error(message, span));
    }

    /// Report a warning
    pub fn warning(&self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::warning(message, span));
    }

    /// Emit a pre-built diagnostic
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all diagnostics in emission order
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
