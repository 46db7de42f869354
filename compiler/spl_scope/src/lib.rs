//! Lexical scope resolution for SPL.
//!
//! This crate sits between the parser and code generation. It checks that
//! every identifier is declared exactly once per block and used only where a
//! declaration is visible, and it computes the addressing information code
//! generation needs.
//!
//! # Architecture
//!
//! - [`Scope`]: one block's declarations, in insertion order. A declaration's
//!   offset is its rank among the scope's insertions.
//! - [`SymbolTable`]: the stack of open scopes. Lookup walks outward and
//!   reports how many scopes it crossed (`levels_out`).
//! - [`DeclarationChecker`]: the tree walk that declares names, resolves uses
//!   and writes the results back into the tree.
//!
//! # Errors
//!
//! Defects in the input program are [`ProgramError`]s and are either
//! collected or returned at the first one, per [`ErrorMode`]. Broken internal
//! contracts and exhausted [`ScopeLimits`] are [`ScopeError`]s and always end
//! the pass. Either way every scope opened during the pass has been released
//! when [`check_program`] returns.

mod checker;
mod config;
mod error;
mod scope;
mod symtab;

pub use checker::{check_program, CheckStats, CheckedProgram, DeclarationChecker, ScopedChecker};
pub use config::{CheckConfig, ErrorMode, ScopeLimits};
pub use error::{CheckError, Invariant, ProgramError, Resource, ScopeError};
pub use scope::{Association, Scope};
pub use symtab::{InsertError, SymbolTable};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber for debug output.
///
/// Safe to call more than once; only the first call has an effect. Nothing is
/// installed unless `RUST_LOG` is set, e.g. `RUST_LOG=spl_scope=trace` to see
/// every scope entry, insertion and resolution.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
