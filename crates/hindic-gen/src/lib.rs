//! hindic-gen - C code emission.
//!
//! The emitter walks the analyzed AST depth-first and produces the target
//! C translation unit as text. Emission is a pure function of the AST and
//! the keyword tables: equivalent trees produce byte-identical output.
//!
//! Translation rules:
//! - the four primitive types map one-to-one onto `int`, `float`, `char`,
//!   and `void`;
//! - identifiers keep their Devanagari bytes verbatim;
//! - calls to "लिखो" and "पढ़ो" become `printf` and `scanf`, every other
//!   callee is preserved;
//! - every binary expression is parenthesized, unary `-` is parenthesized,
//!   unary `!` is not;
//! - numbers are emitted from their source text, strings are re-quoted
//!   around their unprocessed contents.
//!
//! # Example
//!
//! ```
//! use hindic_gen::CodeGenerator;
//! use hindic_lex::Lexer;
//! use hindic_par::Parser;
//! use hindic_util::Handler;
//!
//! let handler = Handler::new();
//! let mut parser = Parser::new(Lexer::new("पूर्णांक x = 5;"), &handler);
//! let program = parser.parse();
//!
//! let mut gen = CodeGenerator::new();
//! gen.generate(&program);
//! assert!(gen.output().contains("int x = 5;"));
//! ```

use hindic_par::ast::{
    Block, Expr, ForStmt, FunctionDecl, IfStmt, Literal, Program, ReturnStmt, Stmt, Type, UnOp,
    VarDecl, WhileStmt,
};
use hindic_util::symbol::{Symbol, STD_LIKHO, STD_PADHO};
use rustc_hash::FxHashMap;


/// Spaces per indentation level.
const INDENT: &str = "    ";

/// Maps a source type keyword to its C spelling.
fn type_str(ty: Type) -> &'static str {
    match ty {
        Type::Int => "int",
        Type::Float => "float",
        Type::Char => "char",
        Type::Void => "void",
    }
}

/// C code generator.
///
/// Accumulates the translation unit into an owned buffer; the driver
/// writes the buffer to the output file in one step.
pub struct CodeGenerator {
    /// Emitted C source.
    output: String,

    /// Current indentation level.
    indent: usize,

    /// Standard-library call translation table, keyed by exact identifier
    /// byte sequence.
    stdlib: FxHashMap<Symbol, &'static str>,
}

impl CodeGenerator {
    /// Create a generator with the standard-library call table.
    pub fn new() -> Self {
        let mut stdlib = FxHashMap::default();
        stdlib.insert(STD_LIKHO, "printf");
        stdlib.insert(STD_PADHO, "scanf");

        Self {
            output: String::new(),
            indent: 0,
            stdlib,
        }
    }

    /// Generate the translation unit for `program`.
    pub fn generate(&mut self, program: &Program) {
        // Prelude: I/O and allocation headers.
        self.output.push_str("#include <stdio.h>\n");
        self.output.push_str("#include <stdlib.h>\n\n");

        for decl in &program.decls {
            self.gen_declaration(decl);
            self.output.push('\n');
        }
    }

    /// The emitted C source.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consume the generator, returning the emitted C source.
    pub fn into_output(self) -> String {
        self.output
    }

    fn emit_indentation(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
    }

    // =========================================================================
    // DECLARATIONS AND STATEMENTS
    // =========================================================================

    fn gen_declaration(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl(decl) => self.gen_var_decl(decl),
            Stmt::Function(func) => self.gen_function(func),
            other => self.gen_statement(other),
        }
    }

    fn gen_var_decl(&mut self, decl: &VarDecl) {
        self.emit_indentation();
        self.output.push_str(type_str(decl.ty));
        self.output.push(' ');
        self.output.push_str(decl.name.name.as_str());

        if let Some(initializer) = &decl.initializer {
            self.output.push_str(" = ");
            self.gen_expression(initializer);
        }

        self.output.push_str(";\n");
    }

    fn gen_function(&mut self, func: &FunctionDecl) {
        self.output.push_str(type_str(func.ret_type));
        self.output.push(' ');
        self.output.push_str(func.name.name.as_str());
        self.output.push('(');

        for (i, param) in func.params.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.output.push_str(type_str(param.ty));
            self.output.push(' ');
            self.output.push_str(param.name.name.as_str());
        }

        self.output.push_str(") ");
        self.gen_block(&func.body);
    }

    fn gen_statement(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(block) => self.gen_block(block),
            Stmt::If(stmt) => self.gen_if(stmt),
            Stmt::While(stmt) => self.gen_while(stmt),
            Stmt::For(stmt) => self.gen_for(stmt),
            Stmt::Return(stmt) => self.gen_return(stmt),
            Stmt::Expr(stmt) => {
                self.emit_indentation();
                self.gen_expression(&stmt.expr);
                self.output.push_str(";\n");
            }
            decl => self.gen_declaration(decl),
        }
    }

    fn gen_block(&mut self, block: &Block) {
        self.emit_indentation();
        self.output.push_str("{\n");

        self.indent += 1;
        for stmt in &block.stmts {
            self.gen_declaration(stmt);
        }
        self.indent -= 1;

        self.emit_indentation();
        self.output.push_str("}\n");
    }

    fn gen_if(&mut self, stmt: &IfStmt) {
        self.emit_indentation();
        self.output.push_str("if (");
        self.gen_expression(&stmt.condition);
        self.output.push_str(") ");

        self.gen_statement(&stmt.then_branch);

        if let Some(else_branch) = &stmt.else_branch {
            self.emit_indentation();
            self.output.push_str("else ");
            self.gen_statement(else_branch);
        }
    }

    fn gen_while(&mut self, stmt: &WhileStmt) {
        self.emit_indentation();
        self.output.push_str("while (");
        self.gen_expression(&stmt.condition);
        self.output.push_str(") ");

        self.gen_statement(&stmt.body);
    }

    fn gen_for(&mut self, stmt: &ForStmt) {
        self.emit_indentation();
        self.output.push_str("for (");

        // The initializer is printed inline, without its own line.
        match stmt.initializer.as_deref() {
            Some(Stmt::VarDecl(decl)) => {
                self.output.push_str(type_str(decl.ty));
                self.output.push(' ');
                self.output.push_str(decl.name.name.as_str());
                if let Some(initializer) = &decl.initializer {
                    self.output.push_str(" = ");
                    self.gen_expression(initializer);
                }
            }
            Some(Stmt::Expr(init)) => self.gen_expression(&init.expr),
            _ => {}
        }
        self.output.push_str("; ");

        if let Some(condition) = &stmt.condition {
            self.gen_expression(condition);
        }
        self.output.push_str("; ");

        if let Some(increment) = &stmt.increment {
            self.gen_expression(increment);
        }
        self.output.push_str(") ");

        self.gen_statement(&stmt.body);
    }

    fn gen_return(&mut self, stmt: &ReturnStmt) {
        self.emit_indentation();
        self.output.push_str("return");

        if let Some(value) = &stmt.value {
            self.output.push(' ');
            self.gen_expression(value);
        }

        self.output.push_str(";\n");
    }

    // =========================================================================
    // EXPRESSIONS
    // =========================================================================

    fn gen_expression(&mut self, expr: &Expr) {
        match expr {
            Expr::Binary(e) => {
                self.output.push('(');
                self.gen_expression(&e.left);
                self.output.push(' ');
                self.output.push_str(e.op.as_str());
                self.output.push(' ');
                self.gen_expression(&e.right);
                self.output.push(')');
            }
            Expr::Unary(e) => match e.op {
                UnOp::Neg => {
                    self.output.push_str("(-");
                    self.gen_expression(&e.operand);
                    self.output.push(')');
                }
                UnOp::Not => {
                    self.output.push('!');
                    self.gen_expression(&e.operand);
                }
            },
            Expr::Literal(e) => match &e.value {
                Literal::Number { text, .. } => self.output.push_str(text.as_str()),
                Literal::Str(contents) => {
                    self.output.push('"');
                    self.output.push_str(contents.as_str());
                    self.output.push('"');
                }
            },
            Expr::Variable(e) => self.output.push_str(e.name.as_str()),
            Expr::Assign(e) => {
                self.output.push_str(e.name.as_str());
                self.output.push_str(" = ");
                self.gen_expression(&e.value);
            }
            Expr::Call(e) => {
                let callee = self
                    .stdlib
                    .get(&e.callee)
                    .copied()
                    .unwrap_or_else(|| e.callee.as_str());
                self.output.push_str(callee);
                self.output.push('(');

                for (i, arg) in e.args.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.gen_expression(arg);
                }

                self.output.push(')');
            }
        }
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
