//! Scope stack for name resolution.
//!
//! Scopes form a stack of ordered name-to-symbol maps. `begin_scope`
//! pushes an empty scope, `end_scope` pops it (dropping every symbol
//! declared at that depth), and `resolve` walks from the innermost scope
//! outward, which gives nested declarations shadowing semantics. The
//! global scope sits at depth zero and is never popped; functions are
//! only ever declared there.

use crate::types::Type;
use hindic_util::Symbol;
use indexmap::IndexMap;

/// What kind of entity a symbol names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolKind {
    /// A variable (or parameter)
    Variable,
    /// A function with its ordered parameter types
    Function { params: Vec<Type> },
}

/// A named entity in the symbol table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInfo {
    /// Variable or function, with function parameter types
    pub kind: SymbolKind,
    /// The variable's data type, or the function's return type
    pub ty: Type,
    /// Scope depth the symbol was declared at
    pub depth: usize,
}

impl SymbolInfo {
    /// True if the symbol names a variable.
    pub fn is_variable(&self) -> bool {
        matches!(self.kind, SymbolKind::Variable)
    }

    /// True if the symbol names a function.
    pub fn is_function(&self) -> bool {
        matches!(self.kind, SymbolKind::Function { .. })
    }
}

/// Outcome of a failed definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefineError {
    /// The name is already bound at the target depth.
    AlreadyDefined,
}

/// A stack of scopes, innermost last.
///
/// Each scope preserves declaration order (`IndexMap`), which keeps
/// iteration and diagnostics deterministic.
pub struct ScopeStack {
    scopes: Vec<IndexMap<Symbol, SymbolInfo>>,
}

impl ScopeStack {
    /// Create a scope stack holding only the global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![IndexMap::new()],
        }
    }

    /// Current scope depth; zero at top level.
    pub fn depth(&self) -> usize {
        self.scopes.len() - 1
    }

    /// Open a nested scope.
    pub fn begin_scope(&mut self) {
        self.scopes.push(IndexMap::new());
    }

    /// Close the innermost scope, removing every symbol declared in it.
    ///
    /// The global scope is never popped.
    pub fn end_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Define a variable in the current scope.
    ///
    /// Fails if the name is already bound at this depth; an outer binding
    /// of the same name is shadowed instead.
    pub fn define_variable(&mut self, name: Symbol, ty: Type) -> Result<(), DefineError> {
        let depth = self.depth();
        // The stack always holds at least the global scope.
        let scope = &mut self.scopes[depth];

        if scope.contains_key(&name) {
            return Err(DefineError::AlreadyDefined);
        }

        scope.insert(
            name,
            SymbolInfo {
                kind: SymbolKind::Variable,
                ty,
                depth,
            },
        );
        Ok(())
    }

    /// Define a function in the global scope.
    ///
    /// Functions always live at depth zero regardless of the current
    /// depth. Fails on redefinition.
    pub fn define_function(
        &mut self,
        name: Symbol,
        ret_type: Type,
        params: Vec<Type>,
    ) -> Result<(), DefineError> {
        let global = &mut self.scopes[0];

        if global.contains_key(&name) {
            return Err(DefineError::AlreadyDefined);
        }

        global.insert(
            name,
            SymbolInfo {
                kind: SymbolKind::Function { params },
                ty: ret_type,
                depth: 0,
            },
        );
        Ok(())
    }

    /// Resolve a name, walking scopes from innermost to outermost.
    pub fn resolve(&self, name: Symbol) -> Option<&SymbolInfo> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(&name))
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}
