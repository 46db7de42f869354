//! Error types for scope checking.
//!
//! Two families:
//! - [`ScopeError`]: the checker broke its own contract, or a configured
//!   resource limit was hit. Always aborts the pass.
//! - [`ProgramError`]: the input program is wrong (duplicate declaration,
//!   undeclared identifier). Carries a location and renders as a
//!   [`Diagnostic`].

use std::fmt;

use spl_diagnostic::{duplicate_declaration, internal_error, undeclared_identifier, Diagnostic};
use spl_ir::{IdKind, SourceLocation};

/// A fatal error inside the scope machinery.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ScopeError {
    /// A precondition the caller was responsible for did not hold.
    #[error("scope invariant violated: {0}")]
    InvariantViolation(Invariant),
    /// A configured bound would be exceeded.
    #[error("{resource} limit of {limit} exceeded")]
    CapacityExceeded { resource: Resource, limit: usize },
}

/// Which precondition was broken.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Invariant {
    #[error("identifier name is empty")]
    EmptyName,
    #[error("\"{name}\" is already declared in this scope")]
    DuplicateInsert { name: String },
    #[error("no scope is open")]
    NoOpenScope,
}

impl From<Invariant> for ScopeError {
    fn from(invariant: Invariant) -> Self {
        ScopeError::InvariantViolation(invariant)
    }
}

/// A bounded resource of the symbol table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Resource {
    /// Declarations in one scope.
    ScopeEntries,
    /// Open scopes.
    NestingDepth,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::ScopeEntries => write!(f, "declarations-per-scope"),
            Resource::NestingDepth => write!(f, "scope nesting"),
        }
    }
}

/// A defect in the program being checked.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ProgramError {
    /// `name` was declared again in a scope that already holds it.
    #[error("{kind} \"{name}\" is already declared as a {previous_kind}")]
    DuplicateDeclaration {
        name: String,
        /// What the rejected declaration tried to introduce.
        kind: IdKind,
        /// What the name already denotes in the scope.
        previous_kind: IdKind,
        location: SourceLocation,
        previous_location: SourceLocation,
    },
    /// `name` was used with no enclosing declaration.
    #[error("identifier \"{name}\" is not declared")]
    UndeclaredIdentifier {
        name: String,
        location: SourceLocation,
    },
}

impl ProgramError {
    /// Where the error was detected.
    pub fn location(&self) -> &SourceLocation {
        match self {
            ProgramError::DuplicateDeclaration { location, .. }
            | ProgramError::UndeclaredIdentifier { location, .. } => location,
        }
    }

    /// The offending identifier.
    pub fn name(&self) -> &str {
        match self {
            ProgramError::DuplicateDeclaration { name, .. }
            | ProgramError::UndeclaredIdentifier { name, .. } => name,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            ProgramError::DuplicateDeclaration {
                name,
                kind,
                previous_kind,
                location,
                previous_location,
            } => duplicate_declaration(
                location,
                &name,
                kind.as_str(),
                previous_kind.as_str(),
                previous_location,
            ),
            ProgramError::UndeclaredIdentifier { name, location } => {
                undeclared_identifier(location, &name)
            }
        }
    }
}

/// Why a checking pass did not produce a checked tree.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CheckError {
    /// The program has errors. In fail-fast mode this holds exactly one.
    #[error("scope checking found {} error(s)", .0.len())]
    Program(Vec<ProgramError>),
    /// The pass aborted on a fatal error.
    #[error(transparent)]
    Internal(#[from] ScopeError),
}

impl CheckError {
    /// Program errors, in the order they were found (empty for internal errors).
    pub fn program_errors(&self) -> &[ProgramError] {
        match self {
            CheckError::Program(errors) => errors,
            CheckError::Internal(_) => &[],
        }
    }

    /// Convert into diagnostics for the error printer.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        match self {
            CheckError::Program(errors) => errors
                .into_iter()
                .map(ProgramError::into_diagnostic)
                .collect(),
            CheckError::Internal(err) => vec![internal_error(err)],
        }
    }
}
