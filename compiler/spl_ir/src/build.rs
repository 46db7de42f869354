//! Convenience constructors for syntax trees.
//!
//! Front ends and tests use [`TreeBuilder`] to assemble trees without
//! spelling out every location by hand. The builder hands out positions as if
//! the nodes were written left to right on the current line; call
//! [`TreeBuilder::newline`] to move on.
//!
//! ```text
//! let b = TreeBuilder::new("demo.spl");
//! let block = Block::default()
//!     .with_vars(vec![b.var_decl(&["x"])])
//!     .with_stmts(vec![b.assign("x", b.number(2))]);
//! let program = b.program(block);
//! ```

use std::cell::Cell;
use std::sync::Arc;

use crate::{
    BinaryOp, Block, Condition, ConstDecl, ConstDef, Expr, Ident, ProcDecl, Program, RelOp,
    SourceLocation, Stmt, Stmts, VarDecl,
};

/// Hands out source locations and builds tree nodes.
///
/// Methods take `&self` so calls can be nested freely.
pub struct TreeBuilder {
    file: Arc<str>,
    line: Cell<u32>,
    column: Cell<u32>,
}

impl TreeBuilder {
    pub fn new(file: impl Into<Arc<str>>) -> Self {
        TreeBuilder {
            file: file.into(),
            line: Cell::new(1),
            column: Cell::new(1),
        }
    }

    /// Move to the start of the next line.
    pub fn newline(&self) -> &Self {
        self.line.set(self.line.get() + 1);
        self.column.set(1);
        self
    }

    /// The location the next node will receive.
    pub fn peek_location(&self) -> SourceLocation {
        SourceLocation::in_file(&self.file, self.line.get(), self.column.get())
    }

    /// Claim a location for a token `width` characters wide.
    fn advance(&self, width: usize) -> SourceLocation {
        let location = self.peek_location();
        let width = u32::try_from(width).unwrap_or(u32::MAX);
        self.column
            .set(self.column.get().saturating_add(width).saturating_add(1));
        location
    }

    pub fn ident(&self, name: &str) -> Ident {
        Ident::new(name, self.advance(name.len()))
    }

    // Expressions

    /// An identifier used as an expression.
    pub fn var(&self, name: &str) -> Expr {
        Expr::Ident(self.ident(name))
    }

    pub fn number(&self, value: i32) -> Expr {
        let width = value.to_string().len();
        Expr::Number {
            value,
            location: self.advance(width),
        }
    }

    pub fn binary(&self, op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        let location = lhs.location().clone();
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            location,
        }
    }

    pub fn neg(&self, expr: Expr) -> Expr {
        Expr::Negated {
            expr: Box::new(expr),
            location: self.advance(1),
        }
    }

    // Conditions

    pub fn relational(&self, op: RelOp, lhs: Expr, rhs: Expr) -> Condition {
        let location = lhs.location().clone();
        Condition::Relational {
            op,
            lhs,
            rhs,
            location,
        }
    }

    pub fn divisible(&self, dividend: Expr, divisor: Expr) -> Condition {
        let location = dividend.location().clone();
        Condition::Divisible {
            dividend,
            divisor,
            location,
        }
    }

    // Declarations

    pub fn var_decl(&self, names: &[&str]) -> VarDecl {
        self.advance("var".len());
        VarDecl {
            idents: names.iter().map(|name| self.ident(name)).collect(),
        }
    }

    pub fn const_decl(&self, defs: &[(&str, i32)]) -> ConstDecl {
        self.advance("const".len());
        ConstDecl {
            defs: defs
                .iter()
                .map(|&(name, value)| ConstDef {
                    name: self.ident(name),
                    value,
                })
                .collect(),
        }
    }

    /// A procedure declaration.
    ///
    /// The body is built before this call, so its nodes sit at earlier
    /// columns than the procedure name.
    pub fn proc_decl(&self, name: &str, block: Block) -> ProcDecl {
        self.advance("procedure".len());
        ProcDecl {
            name: self.ident(name),
            block,
        }
    }

    // Statements

    pub fn assign(&self, target: &str, expr: Expr) -> Stmt {
        Stmt::Assign {
            target: self.ident(target),
            expr: Box::new(expr),
        }
    }

    pub fn call(&self, callee: &str) -> Stmt {
        self.advance("call".len());
        Stmt::Call {
            callee: self.ident(callee),
        }
    }

    pub fn read(&self, target: &str) -> Stmt {
        self.advance("read".len());
        Stmt::Read {
            target: self.ident(target),
        }
    }

    pub fn print(&self, expr: Expr) -> Stmt {
        Stmt::Print {
            expr: Box::new(expr),
        }
    }

    pub fn if_then(&self, condition: Condition, then_stmts: Vec<Stmt>) -> Stmt {
        let location = condition.location().clone();
        Stmt::If {
            condition,
            then_stmts: Stmts::new(then_stmts),
            else_stmts: None,
            location,
        }
    }

    pub fn if_then_else(
        &self,
        condition: Condition,
        then_stmts: Vec<Stmt>,
        else_stmts: Vec<Stmt>,
    ) -> Stmt {
        let location = condition.location().clone();
        Stmt::If {
            condition,
            then_stmts: Stmts::new(then_stmts),
            else_stmts: Some(Stmts::new(else_stmts)),
            location,
        }
    }

    pub fn while_do(&self, condition: Condition, body: Vec<Stmt>) -> Stmt {
        let location = condition.location().clone();
        Stmt::While {
            condition,
            body: Stmts::new(body),
            location,
        }
    }

    pub fn block_stmt(&self, block: Block) -> Stmt {
        Stmt::Block {
            block: Box::new(block),
            location: self.advance("begin".len()),
        }
    }

    pub fn program(&self, block: Block) -> Program {
        Program { block }
    }
}

impl Block {
    #[must_use]
    pub fn with_consts(mut self, const_decls: Vec<ConstDecl>) -> Self {
        self.const_decls = const_decls;
        self
    }

    #[must_use]
    pub fn with_vars(mut self, var_decls: Vec<VarDecl>) -> Self {
        self.var_decls = var_decls;
        self
    }

    #[must_use]
    pub fn with_procs(mut self, proc_decls: Vec<ProcDecl>) -> Self {
        self.proc_decls = proc_decls;
        self
    }

    #[must_use]
    pub fn with_stmts(mut self, stmts: Vec<Stmt>) -> Self {
        self.stmts = Stmts::new(stmts);
        self
    }
}
