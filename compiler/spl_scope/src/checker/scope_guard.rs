//! RAII scope guard for the declaration checker.
//!
//! [`ScopedChecker`] enters a scope when created and exits it when dropped,
//! so every return path out of a block check, including `?` in fail-fast
//! mode, leaves the symbol table balanced.
//!
//! The guard holds `&mut DeclarationChecker` and implements `Deref`/`DerefMut`,
//! so checking code uses it exactly like the checker itself.

use std::ops::{Deref, DerefMut};

use super::DeclarationChecker;
use crate::ScopeError;

/// Guard that exits the current scope on drop.
pub struct ScopedChecker<'guard, 't> {
    checker: &'guard mut DeclarationChecker<'t>,
    level: u32,
}

impl ScopedChecker<'_, '_> {
    /// Nesting level of the scope this guard owns.
    pub fn level(&self) -> u32 {
        self.level
    }
}

impl Drop for ScopedChecker<'_, '_> {
    fn drop(&mut self) {
        if let Err(err) = self.checker.table.exit_scope() {
            tracing::error!(level = self.level, %err, "failed to exit scope");
        }
    }
}

impl<'t> Deref for ScopedChecker<'_, 't> {
    type Target = DeclarationChecker<'t>;

    fn deref(&self) -> &Self::Target {
        self.checker
    }
}

impl DerefMut for ScopedChecker<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.checker
    }
}

impl<'t> DeclarationChecker<'t> {
    /// Enter a fresh scope, returning a guard that exits it on drop.
    ///
    /// Fails without entering anything when the nesting limit is reached.
    pub fn scoped(&mut self) -> Result<ScopedChecker<'_, 't>, ScopeError> {
        let level = self.table.enter_scope()?;
        Ok(ScopedChecker {
            checker: self,
            level,
        })
    }
}
