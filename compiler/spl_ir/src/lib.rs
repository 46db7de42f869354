//! SPL IR - shared syntax tree and identifier types
//!
//! This crate contains the data structures passed between the SPL front-end
//! phases:
//! - Source locations attached to every identifier-bearing node
//! - The syntax tree (blocks, declarations, statements, expressions)
//! - Identifier attributes and resolved references produced by scope checking
//! - A tree builder for front ends and tests
//!
//! The parser owns tree construction; the scope checker annotates the tree in
//! place (`Ident::resolution`, `Block::frame_size`) and code generation reads
//! those annotations.

pub mod ast;
pub mod build;
mod ident;
mod location;

pub use ast::{
    BinaryOp, Block, Condition, ConstDecl, ConstDef, Expr, ProcDecl, Program, RelOp, Stmt, Stmts,
    VarDecl,
};
pub use build::TreeBuilder;
pub use ident::{IdAttrs, IdKind, IdUse, Ident};
pub use location::SourceLocation;
