//! Identifier attributes and resolved references.
//!
//! These are the values the scope checker produces for code generation:
//! [`IdAttrs`] describes a declaration (where, what kind, which frame slot),
//! and [`IdUse`] pairs a declaration with the lexical distance from a use site.

use std::fmt;

use crate::SourceLocation;

/// What a declared identifier names.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IdKind {
    Variable,
    Constant,
    Procedure,
}

impl IdKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IdKind::Variable => "variable",
            IdKind::Constant => "constant",
            IdKind::Procedure => "procedure",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes of one declared identifier.
///
/// Immutable once created. The offset is the declaration's position among
/// the names inserted into its scope, and doubles as its frame slot.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IdAttrs {
    location: SourceLocation,
    kind: IdKind,
    offset: u32,
}

impl IdAttrs {
    pub fn new(location: SourceLocation, kind: IdKind, offset: u32) -> Self {
        IdAttrs {
            location,
            kind,
            offset,
        }
    }

    /// The same attributes placed at a different frame slot.
    #[must_use]
    pub fn with_offset(self, offset: u32) -> Self {
        IdAttrs { offset, ..self }
    }

    #[inline]
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    #[inline]
    pub fn kind(&self) -> IdKind {
        self.kind
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }
}

/// A reference resolved through the symbol table.
///
/// `levels_out` counts the scope boundaries crossed between the use site and
/// the declaring scope; 0 means the declaration is local.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IdUse {
    attrs: IdAttrs,
    levels_out: u32,
}

impl IdUse {
    pub fn new(attrs: IdAttrs, levels_out: u32) -> Self {
        IdUse { attrs, levels_out }
    }

    #[inline]
    pub fn attrs(&self) -> &IdAttrs {
        &self.attrs
    }

    #[inline]
    pub fn levels_out(&self) -> u32 {
        self.levels_out
    }

    #[inline]
    pub fn kind(&self) -> IdKind {
        self.attrs.kind
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        self.attrs.offset
    }

    /// Whether the declaration lives in the scope of the use site.
    #[inline]
    pub fn is_local(&self) -> bool {
        self.levels_out == 0
    }
}

/// One occurrence of an identifier in the tree.
///
/// `resolution` starts out empty and is filled by the scope checker: at a
/// declaration it holds the new attributes with `levels_out == 0`, at a use
/// it holds the declaration the name resolved to. It stays `None` wherever a
/// program error was reported.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ident {
    pub name: String,
    pub location: SourceLocation,
    pub resolution: Option<IdUse>,
}

impl Ident {
    pub fn new(name: impl Into<String>, location: SourceLocation) -> Self {
        Ident {
            name: name.into(),
            location,
            resolution: None,
        }
    }

    /// Declared or resolved kind, once the checker has run.
    pub fn kind(&self) -> Option<IdKind> {
        self.resolution.as_ref().map(IdUse::kind)
    }
}

#[cfg(test)]
mod tests;
