//! The translator's type model.

use hindic_par::ast;
use std::fmt;

/// A type in the type system.
///
/// `Error` is the recovery type: an expression that failed to type
/// produces `Error`, and every rule involving an `Error` operand stays
/// silent so one mistake yields one diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// Error type (for recovery)
    Error,
    /// Integer type ("पूर्णांक")
    Int,
    /// Floating-point type ("दशमलव")
    Float,
    /// Character type ("वर्ण"); string literals type as char
    Char,
    /// Void type ("शून्य"), only usable as a return type
    Void,
}

impl Type {
    /// True for the arithmetic-capable types.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    /// True for the recovery type.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error)
    }
}

impl From<ast::Type> for Type {
    fn from(ty: ast::Type) -> Self {
        match ty {
            ast::Type::Int => Type::Int,
            ast::Type::Float => Type::Float,
            ast::Type::Char => Type::Char,
            ast::Type::Void => Type::Void,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Error => "<error>",
            Type::Int => "int",
            Type::Float => "float",
            Type::Char => "char",
            Type::Void => "void",
        };
        f.write_str(name)
    }
}
