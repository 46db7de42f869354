//! Diagnostic system for SPL front-end errors.
//!
//! A [`Diagnostic`] carries everything a printer needs:
//! - an error code for searchability
//! - a message saying what went wrong
//! - labelled source locations saying where
//! - notes giving context
//!
//! Phases build diagnostics from their own structured problem types and push
//! them into a [`DiagnosticQueue`], which enforces the error limit and sorts
//! output by location. Printing is left to the driver.

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{
    duplicate_declaration, internal_error, undeclared_identifier, Diagnostic, Label, Severity,
};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
