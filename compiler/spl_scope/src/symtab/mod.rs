//! The stack of open scopes.
//!
//! [`SymbolTable`] owns one [`Scope`] per lexical block currently being
//! checked, innermost on top. Scopes leave strictly LIFO: only the top scope
//! can be exited, and exiting releases it immediately.
//!
//! Lookup walks from the top outward. The first scope holding the name wins,
//! which gives shadowing, and the number of scopes skipped becomes
//! [`IdUse::levels_out`], the static distance code generation needs for
//! non-local access.
//!
//! One table serves one compilation unit. It is an ordinary value passed to
//! the checker, so separate units and test runs never share state.

use spl_ir::{IdAttrs, IdUse};

use crate::{Invariant, ProgramError, Resource, Scope, ScopeError, ScopeLimits};

/// Why [`SymbolTable::insert`] refused a declaration.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum InsertError {
    /// The name is already declared in the current scope.
    #[error(transparent)]
    Program(ProgramError),
    #[error(transparent)]
    Internal(#[from] ScopeError),
}

/// Bounded stack of open scopes.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    /// Open scopes, current scope last.
    scopes: Vec<Scope>,
    limits: ScopeLimits,
}

impl SymbolTable {
    /// Create an empty table (no open scope) with the given limits.
    pub fn new(limits: ScopeLimits) -> Self {
        SymbolTable {
            scopes: Vec::new(),
            limits,
        }
    }

    /// Release every open scope, returning the table to its initial state.
    pub fn reset(&mut self) {
        while let Some(scope) = self.scopes.pop() {
            scope.destroy();
        }
    }

    pub fn limits(&self) -> &ScopeLimits {
        &self.limits
    }

    /// Number of open scopes.
    #[inline]
    pub fn size(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Whether another scope would exceed the nesting limit.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.scopes.len() >= self.limits.max_nesting
    }

    /// Nesting level of the current scope (0 for the outermost).
    pub fn current_level(&self) -> Result<u32, ScopeError> {
        match self.scopes.len() {
            0 => Err(Invariant::NoOpenScope.into()),
            len => Ok(level_of(len - 1)),
        }
    }

    /// Push a fresh scope; returns its nesting level.
    pub fn enter_scope(&mut self) -> Result<u32, ScopeError> {
        if self.is_full() {
            return Err(ScopeError::CapacityExceeded {
                resource: Resource::NestingDepth,
                limit: self.limits.max_nesting,
            });
        }
        self.scopes.push(Scope::new(self.limits.max_scope_size));
        let level = level_of(self.scopes.len() - 1);
        tracing::trace!(level, "entered scope");
        Ok(level)
    }

    /// Pop and release the current scope.
    pub fn exit_scope(&mut self) -> Result<(), ScopeError> {
        let level = self.current_level()?;
        if let Some(scope) = self.scopes.pop() {
            let released = scope.destroy();
            tracing::trace!(level, released, "exited scope");
        }
        Ok(())
    }

    /// The current scope.
    pub fn current_scope(&self) -> Result<&Scope, ScopeError> {
        self.scopes
            .last()
            .ok_or(ScopeError::InvariantViolation(Invariant::NoOpenScope))
    }

    fn current_scope_mut(&mut self) -> Result<&mut Scope, ScopeError> {
        self.scopes
            .last_mut()
            .ok_or(ScopeError::InvariantViolation(Invariant::NoOpenScope))
    }

    /// Associations ever inserted into the current scope.
    pub fn scope_loc_count(&self) -> Result<u32, ScopeError> {
        Ok(self.current_scope()?.loc_count())
    }

    /// Associations held by the current scope.
    pub fn scope_size(&self) -> Result<usize, ScopeError> {
        Ok(self.current_scope()?.size())
    }

    pub fn scope_is_full(&self) -> Result<bool, ScopeError> {
        Ok(self.current_scope()?.is_full())
    }

    /// Declare `name` in the current scope.
    ///
    /// A name already declared in the current scope is a program error that
    /// reports both declarations; declarations in enclosing scopes are simply
    /// shadowed.
    pub fn insert(&mut self, name: &str, attrs: IdAttrs) -> Result<&IdAttrs, InsertError> {
        if let Some(previous) = self.lookup_current(name)? {
            return Err(InsertError::Program(ProgramError::DuplicateDeclaration {
                name: name.to_string(),
                kind: attrs.kind(),
                previous_kind: previous.kind(),
                location: attrs.location().clone(),
                previous_location: previous.location().clone(),
            }));
        }
        Ok(self.current_scope_mut()?.insert(name, attrs)?)
    }

    /// Resolve `name` from the current scope outward.
    ///
    /// Returns `None` when no open scope declares it, including when no
    /// scope is open at all.
    pub fn lookup(&self, name: &str) -> Result<Option<IdUse>, ScopeError> {
        if name.is_empty() {
            return Err(Invariant::EmptyName.into());
        }
        for (levels_out, scope) in self.scopes.iter().rev().enumerate() {
            if let Some(attrs) = scope.lookup(name)? {
                return Ok(Some(IdUse::new(attrs.clone(), level_of(levels_out))));
            }
        }
        Ok(None)
    }

    /// Attributes of `name` if the current scope itself declares it.
    pub fn lookup_current(&self, name: &str) -> Result<Option<&IdAttrs>, ScopeError> {
        self.current_scope()?.lookup(name)
    }

    /// Whether any open scope declares `name`.
    pub fn name_declared(&self, name: &str) -> Result<bool, ScopeError> {
        Ok(self.lookup(name)?.is_some())
    }

    /// Whether the current scope declares `name`, ignoring enclosing scopes.
    pub fn name_declared_currently(&self, name: &str) -> Result<bool, ScopeError> {
        Ok(self.lookup_current(name)?.is_some())
    }
}

/// Stack positions are bounded by the nesting limit; anything past `u32`
/// saturates.
#[inline]
fn level_of(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}
