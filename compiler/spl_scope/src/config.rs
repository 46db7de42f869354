//! Checker configuration.
//!
//! Limits are fixed when a [`SymbolTable`](crate::SymbolTable) is built and
//! checked before every mutation, so exceeding one is a reported error rather
//! than a crash.

/// Resource bounds for one symbol table.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScopeLimits {
    /// Maximum number of declarations in a single scope.
    pub max_scope_size: usize,
    /// Maximum number of simultaneously open scopes.
    pub max_nesting: usize,
}

impl ScopeLimits {
    /// Default declarations per scope (one frame's worth of slots).
    pub const DEFAULT_MAX_SCOPE_SIZE: usize = 4096;

    /// Default nesting depth.
    pub const DEFAULT_MAX_NESTING: usize = 100;

    /// Limits that only the offset width can exhaust.
    pub fn unbounded() -> Self {
        ScopeLimits {
            max_scope_size: usize::MAX,
            max_nesting: usize::MAX,
        }
    }
}

impl Default for ScopeLimits {
    fn default() -> Self {
        ScopeLimits {
            max_scope_size: Self::DEFAULT_MAX_SCOPE_SIZE,
            max_nesting: Self::DEFAULT_MAX_NESTING,
        }
    }
}

/// What the checker does after a program error.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ErrorMode {
    /// Record the error and keep checking, so one run reports everything.
    #[default]
    CollectAll,
    /// Stop at the first program error.
    FailFast,
}

/// Everything `check_program` needs besides the tree.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct CheckConfig {
    pub limits: ScopeLimits,
    pub mode: ErrorMode,
}

impl CheckConfig {
    /// Default limits, stopping at the first program error.
    pub fn fail_fast() -> Self {
        CheckConfig {
            limits: ScopeLimits::default(),
            mode: ErrorMode::FailFast,
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: ScopeLimits) -> Self {
        self.limits = limits;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ErrorMode) -> Self {
        self.mode = mode;
        self
    }
}
