//! Source locations.
//!
//! Every identifier-bearing tree node carries a [`SourceLocation`] that the
//! front end attaches while parsing. The scope checker never inspects it
//! beyond copying it into attributes and diagnostics.

use std::fmt;
use std::sync::Arc;

/// Where a token starts in the source text.
///
/// The file name is shared (`Arc<str>`), so cloning a location is a
/// reference-count bump plus two integers.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct SourceLocation {
    file: Arc<str>,
    /// Line number (1-based).
    line: u32,
    /// Column number (1-based).
    column: u32,
}

impl SourceLocation {
    /// Create a location in `file` at `line:column`.
    pub fn new(file: impl Into<Arc<str>>, line: u32, column: u32) -> Self {
        SourceLocation {
            file: file.into(),
            line,
            column,
        }
    }

    /// Create a location that reuses an already shared file name.
    #[inline]
    pub fn in_file(file: &Arc<str>, line: u32, column: u32) -> Self {
        SourceLocation {
            file: Arc::clone(file),
            line,
            column,
        }
    }

    /// Placeholder location for synthesized nodes.
    pub fn dummy() -> Self {
        SourceLocation::new("<generated>", 0, 0)
    }

    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Ordering key used to sort diagnostics (file, then line, then column).
    pub fn sort_key(&self) -> (&str, u32, u32) {
        (&self.file, self.line, self.column)
    }
}

impl fmt::Debug for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
