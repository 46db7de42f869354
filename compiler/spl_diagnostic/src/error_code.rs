use std::fmt;

/// Error codes for front-end diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E2xxx: Scope (declaration) errors
/// - E9xxx: Internal compiler errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scope Errors (E2xxx)
    /// Identifier used without an enclosing declaration
    E2001,
    /// Identifier declared twice in one scope
    E2002,

    // Internal Errors (E9xxx)
    /// Internal compiler error
    E9001,
    /// Too many errors
    E9002,
}

impl ErrorCode {
    /// Get the numeric code as a string (e.g., "E2001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// One-line explanation for `--explain`-style output.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "identifier is not declared in any enclosing scope",
            ErrorCode::E2002 => "identifier is already declared in this scope",
            ErrorCode::E9001 => "internal compiler error",
            ErrorCode::E9002 => "too many errors",
        }
    }

    /// Check if this reports a bug in the compiler rather than the program.
    pub fn is_internal(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
