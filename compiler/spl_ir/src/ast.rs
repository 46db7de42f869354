//! Syntax tree for SPL programs.
//!
//! The parser builds these nodes; the scope checker walks them and fills in
//! [`Ident::resolution`] and [`Block::frame_size`]. Statement and expression
//! children are boxed, declarations and statement lists are plain vectors in
//! source order.

use std::fmt;

use crate::{Ident, SourceLocation};

/// A whole compilation unit: one outermost block, terminated by `.`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Program {
    pub block: Block,
}

/// A lexical block: declarations followed by statements.
///
/// Declarations are checked constants first, then variables, then
/// procedures, matching the order the grammar allows them in.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Block {
    pub const_decls: Vec<ConstDecl>,
    pub var_decls: Vec<VarDecl>,
    pub proc_decls: Vec<ProcDecl>,
    pub stmts: Stmts,
    /// Number of frame slots the block's scope allocated (set by the checker).
    pub frame_size: Option<u32>,
}

/// `const a = 1, b = 2;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstDecl {
    pub defs: Vec<ConstDef>,
}

/// One `name = value` pair inside a constant declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstDef {
    pub name: Ident,
    pub value: i32,
}

/// `var x, y;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarDecl {
    pub idents: Vec<Ident>,
}

/// `procedure p; <block>;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ProcDecl {
    pub name: Ident,
    pub block: Block,
}

/// A (possibly empty) statement sequence.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Stmts {
    pub list: Vec<Stmt>,
}

impl Stmts {
    pub fn new(list: Vec<Stmt>) -> Self {
        Stmts { list }
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.list.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Stmt> {
        self.list.iter_mut()
    }
}

impl FromIterator<Stmt> for Stmts {
    fn from_iter<I: IntoIterator<Item = Stmt>>(iter: I) -> Self {
        Stmts {
            list: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stmt {
    /// `x := expr`
    Assign { target: Ident, expr: Box<Expr> },
    /// `call p`
    Call { callee: Ident },
    /// `if cond then stmts [else stmts]`
    If {
        condition: Condition,
        then_stmts: Stmts,
        else_stmts: Option<Stmts>,
        location: SourceLocation,
    },
    /// `while cond do stmts`
    While {
        condition: Condition,
        body: Stmts,
        location: SourceLocation,
    },
    /// `read x`
    Read { target: Ident },
    /// `print expr`
    Print { expr: Box<Expr> },
    /// `begin <block> end`, opening a nested scope.
    Block {
        block: Box<Block>,
        location: SourceLocation,
    },
}

impl Stmt {
    pub fn location(&self) -> &SourceLocation {
        match self {
            Stmt::Assign { target, .. } | Stmt::Read { target } => &target.location,
            Stmt::Call { callee } => &callee.location,
            Stmt::If { location, .. }
            | Stmt::While { location, .. }
            | Stmt::Block { location, .. } => location,
            Stmt::Print { expr } => expr.location(),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RelOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl RelOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            RelOp::Eq => "==",
            RelOp::NotEq => "!=",
            RelOp::Lt => "<",
            RelOp::LtEq => "<=",
            RelOp::Gt => ">",
            RelOp::GtEq => ">=",
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        location: SourceLocation,
    },
    Negated {
        expr: Box<Expr>,
        location: SourceLocation,
    },
    Ident(Ident),
    Number {
        value: i32,
        location: SourceLocation,
    },
}

impl Expr {
    pub fn location(&self) -> &SourceLocation {
        match self {
            Expr::Binary { location, .. }
            | Expr::Negated { location, .. }
            | Expr::Number { location, .. } => location,
            Expr::Ident(ident) => &ident.location,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Condition {
    /// `divisible dividend by divisor`
    Divisible {
        dividend: Expr,
        divisor: Expr,
        location: SourceLocation,
    },
    /// `lhs <op> rhs`
    Relational {
        op: RelOp,
        lhs: Expr,
        rhs: Expr,
        location: SourceLocation,
    },
}

impl Condition {
    pub fn location(&self) -> &SourceLocation {
        match self {
            Condition::Divisible { location, .. } | Condition::Relational { location, .. } => {
                location
            }
        }
    }
}
