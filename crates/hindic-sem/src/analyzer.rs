//! The semantic analyzer proper.

use crate::scope::{ScopeStack, SymbolInfo, SymbolKind};
use crate::types::Type;
use hindic_lex::token::NumberValue;
use hindic_par::ast::{
    BinaryExpr, Block, CallExpr, Expr, ForStmt, FunctionDecl, IfStmt, Literal, Program,
    ReturnStmt, Stmt, UnOp, UnaryExpr, VarDecl, WhileStmt,
};
use hindic_util::{Handler, Span};

/// Scoped, two-pass semantic analyzer.
///
/// Holds the scope stack, the enclosing function's return type (saved and
/// restored around each function visit), and the running error count.
pub struct SemanticAnalyzer<'a> {
    /// Diagnostic sink shared with the other stages.
    handler: &'a Handler,

    /// Scope stack; global scope at depth zero.
    scopes: ScopeStack,

    /// Return type of the function being analyzed. `Void` at top level,
    /// where a bare `return;` is the only legal form.
    current_return: Type,

    /// Number of semantic errors reported.
    error_count: usize,
}

impl<'a> SemanticAnalyzer<'a> {
    /// Create a new analyzer reporting into `handler`.
    pub fn new(handler: &'a Handler) -> Self {
        Self {
            handler,
            scopes: ScopeStack::new(),
            current_return: Type::Void,
            error_count: 0,
        }
    }

    /// Analyze a program. Returns true iff no errors were reported.
    pub fn analyze(&mut self, program: &Program) -> bool {
        // First pass: register all top-level functions so forward and
        // mutual references resolve.
        for decl in &program.decls {
            if let Stmt::Function(func) = decl {
                self.declare_function(func);
            }
        }

        // Second pass: check every declaration in order.
        for decl in &program.decls {
            self.check_stmt(decl);
        }

        self.error_count == 0
    }

    /// Number of semantic errors reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Current scope depth (exposed for tests).
    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    fn error(&mut self, span: Span, message: impl Into<String>) {
        self.error_count += 1;
        self.handler.error(message, span);
    }

    // =========================================================================
    // DECLARATIONS AND STATEMENTS
    // =========================================================================

    fn declare_function(&mut self, func: &FunctionDecl) {
        let params = func.params.iter().map(|p| Type::from(p.ty)).collect();
        if self
            .scopes
            .define_function(func.name.name, Type::from(func.ret_type), params)
            .is_err()
        {
            self.error(
                func.span,
                format!("Function '{}' already defined.", func.name.name),
            );
        }
    }

    fn check_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl(decl) => self.check_var_decl(decl),
            Stmt::Function(func) => self.check_function(func),
            Stmt::Block(block) => self.check_block(block),
            Stmt::If(stmt) => self.check_if(stmt),
            Stmt::While(stmt) => self.check_while(stmt),
            Stmt::For(stmt) => self.check_for(stmt),
            Stmt::Return(stmt) => self.check_return(stmt),
            Stmt::Expr(stmt) => {
                self.check_expr(&stmt.expr);
            }
        }
    }

    fn check_var_decl(&mut self, decl: &VarDecl) {
        let declared = Type::from(decl.ty);

        if let Some(initializer) = &decl.initializer {
            let init_ty = self.check_expr(initializer);
            // No implicit conversions, int and float included.
            if init_ty != declared && !init_ty.is_error() {
                self.error(decl.span, "Type mismatch in variable initialization.");
            }
        }

        if self
            .scopes
            .define_variable(decl.name.name, declared)
            .is_err()
        {
            self.error(
                decl.span,
                format!(
                    "Variable '{}' already defined in this scope.",
                    decl.name.name
                ),
            );
        }
    }

    fn check_function(&mut self, func: &FunctionDecl) {
        // Registration happened in the hoisting pass; here the body is
        // checked with the parameters in their own scope.
        let previous_return = self.current_return;
        self.current_return = Type::from(func.ret_type);

        self.scopes.begin_scope();
        for param in &func.params {
            if self
                .scopes
                .define_variable(param.name.name, Type::from(param.ty))
                .is_err()
            {
                self.error(
                    param.name.span,
                    format!(
                        "Variable '{}' already defined in this scope.",
                        param.name.name
                    ),
                );
            }
        }

        self.check_block(&func.body);

        self.scopes.end_scope();
        self.current_return = previous_return;
    }

    fn check_block(&mut self, block: &Block) {
        self.scopes.begin_scope();
        for stmt in &block.stmts {
            self.check_stmt(stmt);
        }
        self.scopes.end_scope();
    }

    fn check_condition(&mut self, condition: &Expr) {
        let ty = self.check_expr(condition);
        // Conditions are integers; there is no dedicated boolean type.
        if !ty.is_error() && ty != Type::Int {
            self.error(condition.span(), "Condition must be a boolean expression.");
        }
    }

    fn check_if(&mut self, stmt: &IfStmt) {
        self.check_condition(&stmt.condition);
        self.check_stmt(&stmt.then_branch);
        if let Some(else_branch) = &stmt.else_branch {
            self.check_stmt(else_branch);
        }
    }

    fn check_while(&mut self, stmt: &WhileStmt) {
        self.check_condition(&stmt.condition);
        self.check_stmt(&stmt.body);
    }

    fn check_for(&mut self, stmt: &ForStmt) {
        // The initializer's declaration (if any) is scoped to the loop.
        self.scopes.begin_scope();

        if let Some(initializer) = &stmt.initializer {
            self.check_stmt(initializer);
        }
        if let Some(condition) = &stmt.condition {
            self.check_condition(condition);
        }
        if let Some(increment) = &stmt.increment {
            self.check_expr(increment);
        }

        self.check_stmt(&stmt.body);

        self.scopes.end_scope();
    }

    fn check_return(&mut self, stmt: &ReturnStmt) {
        if self.current_return == Type::Void && stmt.value.is_some() {
            self.error(stmt.span, "Cannot return a value from a void function.");
            return;
        }

        if self.current_return != Type::Void && stmt.value.is_none() {
            self.error(stmt.span, "Missing return value in non-void function.");
            return;
        }

        if let Some(value) = &stmt.value {
            let ty = self.check_expr(value);
            if !ty.is_error() && ty != self.current_return {
                self.error(value.span(), "Return type mismatch.");
            }
        }
    }

    // =========================================================================
    // EXPRESSIONS
    // =========================================================================

    /// Compute an expression's type, reporting any rule violations.
    fn check_expr(&mut self, expr: &Expr) -> Type {
        match expr {
            Expr::Binary(e) => self.check_binary(e),
            Expr::Unary(e) => self.check_unary(e),
            Expr::Literal(e) => match e.value {
                Literal::Number { value, .. } => match value {
                    NumberValue::Int(_) => Type::Int,
                    NumberValue::Float(_) => Type::Float,
                },
                // Strings are treated as the character type.
                Literal::Str(_) => Type::Char,
            },
            Expr::Variable(e) => {
                let info = self.scopes.resolve(e.name).cloned();
                match info {
                    None => {
                        self.error(e.span, "Undefined variable.");
                        Type::Error
                    }
                    Some(info) if !info.is_variable() => {
                        self.error(e.span, "Expected a variable name.");
                        Type::Error
                    }
                    Some(info) => info.ty,
                }
            }
            Expr::Assign(e) => {
                // The value is analyzed before the target resolves, so
                // its diagnostics come first.
                let value_ty = self.check_expr(&e.value);

                let info = self.scopes.resolve(e.name).cloned();
                match info {
                    None => {
                        self.error(e.span, "Undefined variable in assignment.");
                        Type::Error
                    }
                    Some(info) if !info.is_variable() => {
                        self.error(e.span, "Cannot assign to a function.");
                        Type::Error
                    }
                    Some(info) => {
                        if !value_ty.is_error() && value_ty != info.ty {
                            self.error(e.span, "Type mismatch in assignment.");
                            Type::Error
                        } else {
                            value_ty
                        }
                    }
                }
            }
            Expr::Call(e) => self.check_call(e),
        }
    }

    fn check_binary(&mut self, expr: &BinaryExpr) -> Type {
        let left = self.check_expr(&expr.left);
        let right = self.check_expr(&expr.right);

        // Suppress cascades from operands that already failed.
        if left.is_error() || right.is_error() {
            return Type::Error;
        }

        if expr.op.is_arithmetic() {
            if !left.is_numeric() || !right.is_numeric() {
                self.error(expr.span, "Arithmetic operators require numeric operands.");
                return Type::Error;
            }
            if left == Type::Float || right == Type::Float {
                return Type::Float;
            }
            return Type::Int;
        }

        if expr.op.is_comparison() {
            if left != right {
                self.error(
                    expr.span,
                    "Comparison operators require compatible operands.",
                );
                return Type::Error;
            }
            return Type::Int;
        }

        // Logical && and ||.
        if left != Type::Int || right != Type::Int {
            self.error(expr.span, "Logical operators require boolean operands.");
            return Type::Error;
        }
        Type::Int
    }

    fn check_unary(&mut self, expr: &UnaryExpr) -> Type {
        let operand = self.check_expr(&expr.operand);

        if operand.is_error() {
            return Type::Error;
        }

        match expr.op {
            UnOp::Neg => {
                if !operand.is_numeric() {
                    self.error(expr.span, "Unary negation requires a numeric operand.");
                    return Type::Error;
                }
                operand
            }
            UnOp::Not => {
                if operand != Type::Int {
                    self.error(expr.span, "Logical NOT requires a boolean operand.");
                    return Type::Error;
                }
                Type::Int
            }
        }
    }

    fn check_call(&mut self, expr: &CallExpr) -> Type {
        let info: Option<SymbolInfo> = self.scopes.resolve(expr.callee).cloned();

        let info = match info {
            None => {
                self.error(expr.span, "Undefined function.");
                return Type::Error;
            }
            Some(info) => info,
        };

        let params = match &info.kind {
            SymbolKind::Function { params } => params.clone(),
            SymbolKind::Variable => {
                self.error(expr.span, "Cannot call a variable.");
                return Type::Error;
            }
        };

        if expr.args.len() != params.len() {
            // Arguments are not analyzed on an arity mismatch.
            self.error(expr.span, "Wrong number of arguments.");
            return Type::Error;
        }

        for (arg, param_ty) in expr.args.iter().zip(params.iter()) {
            let arg_ty = self.check_expr(arg);
            if !arg_ty.is_error() && arg_ty != *param_ty {
                self.error(arg.span(), "Argument type mismatch.");
            }
        }

        info.ty
    }
}
