//! Declaration checking.
//!
//! [`DeclarationChecker`] walks a syntax tree depth-first, one case per node
//! kind. Each block runs the same phases in order:
//!
//! 1. enter a scope;
//! 2. declare constants, then variables;
//! 3. declare each procedure, then check its body in a nested scope;
//! 4. resolve every identifier used by the block's statements;
//! 5. record the frame size and exit the scope.
//!
//! Declarations insert, uses only look up. A name is therefore visible from
//! its declaration onward, and a procedure is visible inside its own body.
//!
//! Results are written back into the tree: each [`Ident::resolution`] holds
//! the resolved [`IdUse`] (or `None` at an error site) and each
//! [`Block::frame_size`] the number of slots its scope allocated.

mod scope_guard;

pub use scope_guard::ScopedChecker;

use spl_ir::{Block, Condition, Expr, IdAttrs, IdKind, IdUse, Ident, Program, Stmt, Stmts};
use spl_stack::ensure_sufficient_stack;

use crate::{
    CheckConfig, CheckError, ErrorMode, InsertError, ProgramError, Resource, ScopeError,
    SymbolTable,
};

/// Counters gathered during one pass.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct CheckStats {
    /// Identifiers successfully declared.
    pub declarations: u32,
    /// Identifier uses successfully resolved.
    pub resolutions: u32,
}

/// A program that passed scope checking, annotated in place.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckedProgram {
    pub program: Program,
    pub stats: CheckStats,
}

/// Syntax-directed walk that declares and resolves identifiers.
///
/// The checker borrows a [`SymbolTable`] for the duration of the walk. Every
/// scope it enters is exited again before [`check_block`](Self::check_block)
/// returns, whatever the outcome.
pub struct DeclarationChecker<'t> {
    table: &'t mut SymbolTable,
    mode: ErrorMode,
    errors: Vec<ProgramError>,
    stats: CheckStats,
}

impl<'t> DeclarationChecker<'t> {
    pub fn new(table: &'t mut SymbolTable, mode: ErrorMode) -> Self {
        DeclarationChecker {
            table,
            mode,
            errors: Vec::new(),
            stats: CheckStats::default(),
        }
    }

    /// Program errors collected so far.
    pub fn errors(&self) -> &[ProgramError] {
        &self.errors
    }

    pub fn stats(&self) -> CheckStats {
        self.stats
    }

    /// Check `block` in a fresh scope nested inside the current one.
    ///
    /// In fail-fast mode the first program error is returned immediately;
    /// otherwise program errors are collected and only fatal errors return
    /// early.
    pub fn check_block(&mut self, block: &mut Block) -> Result<(), CheckError> {
        ensure_sufficient_stack(|| self.check_block_inner(block))
    }

    fn check_block_inner(&mut self, block: &mut Block) -> Result<(), CheckError> {
        let mut scoped = self.scoped()?;
        tracing::trace!(level = scoped.level(), "checking block");

        for decl in &mut block.const_decls {
            for def in &mut decl.defs {
                scoped.declare(&mut def.name, IdKind::Constant)?;
            }
        }
        for decl in &mut block.var_decls {
            for ident in &mut decl.idents {
                scoped.declare(ident, IdKind::Variable)?;
            }
        }
        for decl in &mut block.proc_decls {
            // A duplicate name is reported, but the body still gets checked.
            scoped.declare(&mut decl.name, IdKind::Procedure)?;
            scoped.check_block(&mut decl.block)?;
        }

        scoped.check_stmts(&mut block.stmts)?;
        block.frame_size = Some(scoped.table.scope_loc_count()?);
        Ok(())
    }

    /// Consume the checker, returning its statistics or the collected errors.
    pub fn finish(self) -> Result<CheckStats, CheckError> {
        if self.errors.is_empty() {
            Ok(self.stats)
        } else {
            Err(CheckError::Program(self.errors))
        }
    }

    /// Declare `ident` in the current scope.
    fn declare(&mut self, ident: &mut Ident, kind: IdKind) -> Result<(), CheckError> {
        ident.resolution = None;

        if let Some(previous) = self.table.lookup_current(&ident.name)? {
            let err = ProgramError::DuplicateDeclaration {
                name: ident.name.clone(),
                kind,
                previous_kind: previous.kind(),
                location: ident.location.clone(),
                previous_location: previous.location().clone(),
            };
            return self.report(err);
        }
        if self.table.scope_is_full()? {
            return Err(ScopeError::CapacityExceeded {
                resource: Resource::ScopeEntries,
                limit: self.table.limits().max_scope_size,
            }
            .into());
        }

        let offset = self.table.scope_loc_count()?;
        let attrs = IdAttrs::new(ident.location.clone(), kind, offset);
        let stored = match self.table.insert(&ident.name, attrs) {
            Ok(stored) => stored.clone(),
            Err(InsertError::Program(err)) => return self.report(err),
            Err(InsertError::Internal(err)) => return Err(err.into()),
        };
        tracing::trace!(name = %ident.name, %kind, offset = stored.offset(), "declared");
        ident.resolution = Some(IdUse::new(stored, 0));
        self.stats.declarations += 1;
        Ok(())
    }

    /// Resolve a use of `ident` through the enclosing scopes.
    fn resolve(&mut self, ident: &mut Ident) -> Result<(), CheckError> {
        ident.resolution = None;

        match self.table.lookup(&ident.name)? {
            Some(resolved) => {
                tracing::trace!(
                    name = %ident.name,
                    levels_out = resolved.levels_out(),
                    offset = resolved.offset(),
                    "resolved"
                );
                ident.resolution = Some(resolved);
                self.stats.resolutions += 1;
                Ok(())
            }
            None => self.report(ProgramError::UndeclaredIdentifier {
                name: ident.name.clone(),
                location: ident.location.clone(),
            }),
        }
    }

    /// Record a program error, or stop here in fail-fast mode.
    fn report(&mut self, err: ProgramError) -> Result<(), CheckError> {
        tracing::debug!(location = %err.location(), %err, "program error");
        match self.mode {
            ErrorMode::CollectAll => {
                self.errors.push(err);
                Ok(())
            }
            ErrorMode::FailFast => Err(CheckError::Program(vec![err])),
        }
    }

    fn check_stmts(&mut self, stmts: &mut Stmts) -> Result<(), CheckError> {
        for stmt in stmts.iter_mut() {
            self.check_stmt(stmt)?;
        }
        Ok(())
    }

    fn check_stmt(&mut self, stmt: &mut Stmt) -> Result<(), CheckError> {
        ensure_sufficient_stack(|| self.check_stmt_inner(stmt))
    }

    fn check_stmt_inner(&mut self, stmt: &mut Stmt) -> Result<(), CheckError> {
        match stmt {
            Stmt::Assign { target, expr } => {
                self.resolve(target)?;
                self.check_expr(expr)
            }
            Stmt::Call { callee } => self.resolve(callee),
            Stmt::Read { target } => self.resolve(target),
            Stmt::Print { expr } => self.check_expr(expr),
            Stmt::If {
                condition,
                then_stmts,
                else_stmts,
                ..
            } => {
                self.check_condition(condition)?;
                self.check_stmts(then_stmts)?;
                match else_stmts {
                    Some(else_stmts) => self.check_stmts(else_stmts),
                    None => Ok(()),
                }
            }
            Stmt::While {
                condition, body, ..
            } => {
                self.check_condition(condition)?;
                self.check_stmts(body)
            }
            Stmt::Block { block, .. } => self.check_block(block),
        }
    }

    fn check_condition(&mut self, condition: &mut Condition) -> Result<(), CheckError> {
        match condition {
            Condition::Divisible {
                dividend, divisor, ..
            } => {
                self.check_expr(dividend)?;
                self.check_expr(divisor)
            }
            Condition::Relational { lhs, rhs, .. } => {
                self.check_expr(lhs)?;
                self.check_expr(rhs)
            }
        }
    }

    fn check_expr(&mut self, expr: &mut Expr) -> Result<(), CheckError> {
        ensure_sufficient_stack(|| self.check_expr_inner(expr))
    }

    fn check_expr_inner(&mut self, expr: &mut Expr) -> Result<(), CheckError> {
        match expr {
            Expr::Binary { lhs, rhs, .. } => {
                self.check_expr(lhs)?;
                self.check_expr(rhs)
            }
            Expr::Negated { expr, .. } => self.check_expr(expr),
            Expr::Ident(ident) => self.resolve(ident),
            Expr::Number { .. } => Ok(()),
        }
    }
}

/// Check a whole program with a fresh symbol table.
///
/// On success the returned tree carries a resolution for every identifier
/// and a frame size for every block. The table is discarded afterwards, so
/// nothing leaks between calls.
#[tracing::instrument(level = "debug", skip_all)]
pub fn check_program(
    mut program: Program,
    config: &CheckConfig,
) -> Result<CheckedProgram, CheckError> {
    let mut table = SymbolTable::new(config.limits.clone());
    let mut checker = DeclarationChecker::new(&mut table, config.mode);
    checker.check_block(&mut program.block)?;
    let stats = checker.finish()?;
    tracing::debug!(
        declarations = stats.declarations,
        resolutions = stats.resolutions,
        "scope check passed"
    );
    Ok(CheckedProgram { program, stats })
}
