//! One lexical block's declarations.
//!
//! A [`Scope`] is an insertion-ordered sequence of name/attribute
//! associations. Order matters because a declaration's offset (its frame
//! slot) is its rank among the scope's insertions, so a plain sequence with a
//! linear scan replaces a hash map: block-local declaration counts are small
//! and the order has to be kept anyway.
//!
//! Name uniqueness is enforced by [`Scope::insert`], not by the container.

use smallvec::SmallVec;

use spl_ir::IdAttrs;

use crate::{Invariant, Resource, ScopeError};

/// Associations stored inline before spilling to the heap.
const INLINE_ASSOCIATIONS: usize = 8;

/// A name bound to its attributes, owned by exactly one scope.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Association {
    name: Box<str>,
    attrs: IdAttrs,
}

impl Association {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn attrs(&self) -> &IdAttrs {
        &self.attrs
    }
}

/// Declarations of one open block.
///
/// Every association's offset equals its insertion rank: dense, strictly
/// increasing, never reused. Nothing is removed while the scope is open, so
/// `size()` and `loc_count()` stay equal.
#[derive(Clone, Debug)]
pub struct Scope {
    associations: SmallVec<[Association; INLINE_ASSOCIATIONS]>,
    /// Number of associations ever inserted; the next offset.
    loc_count: u32,
    capacity: usize,
}

impl Scope {
    /// Create an empty scope holding at most `capacity` associations.
    pub fn new(capacity: usize) -> Self {
        Scope {
            associations: SmallVec::new(),
            loc_count: 0,
            capacity,
        }
    }

    /// Number of associations currently held.
    #[inline]
    pub fn size(&self) -> usize {
        self.associations.len()
    }

    /// Number of associations ever inserted (the next free offset).
    #[inline]
    pub fn loc_count(&self) -> u32 {
        self.loc_count
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.size() >= self.capacity
    }

    /// Whether `name` has an association here.
    pub fn declared(&self, name: &str) -> Result<bool, ScopeError> {
        Ok(self.lookup(name)?.is_some())
    }

    /// Attributes bound to `name`, scanning in insertion order.
    ///
    /// An empty name is a contract violation: callers only pass identifier
    /// text taken from the tree.
    pub fn lookup(&self, name: &str) -> Result<Option<&IdAttrs>, ScopeError> {
        if name.is_empty() {
            return Err(Invariant::EmptyName.into());
        }
        Ok(self
            .associations
            .iter()
            .find(|assoc| &*assoc.name == name)
            .map(|assoc| &assoc.attrs))
    }

    /// Bind `name` to `attrs` at the next offset.
    ///
    /// The caller must have checked that `name` is not yet declared and that
    /// the scope is not full; either violation is an internal error and
    /// leaves the scope untouched. Returns the stored attributes with their
    /// assigned offset.
    pub fn insert(&mut self, name: &str, attrs: IdAttrs) -> Result<&IdAttrs, ScopeError> {
        if self.declared(name)? {
            return Err(Invariant::DuplicateInsert {
                name: name.to_string(),
            }
            .into());
        }
        if self.is_full() {
            return Err(ScopeError::CapacityExceeded {
                resource: Resource::ScopeEntries,
                limit: self.capacity,
            });
        }
        let offset = self.loc_count;
        let next = offset
            .checked_add(1)
            .ok_or(ScopeError::CapacityExceeded {
                resource: Resource::ScopeEntries,
                limit: u32::MAX as usize,
            })?;

        self.associations.push(Association {
            name: name.into(),
            attrs: attrs.with_offset(offset),
        });
        self.loc_count = next;
        tracing::trace!(name, offset, "inserted association");

        let index = self.associations.len() - 1;
        Ok(&self.associations[index].attrs)
    }

    /// Associations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Association> {
        self.associations.iter()
    }

    /// Release the scope and every association it owns.
    ///
    /// Returns how many associations were released. Dropping a scope has the
    /// same effect; this form exists so the symbol table can log the release.
    pub fn destroy(self) -> usize {
        let released = self.associations.len();
        drop(self);
        released
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
