//! Stack growth for recursive tree walks.
//!
//! Block statements, `if`/`while` bodies and expressions nest without a
//! grammar-imposed limit, and the scope checker walks them recursively.
//! Wrapping each recursive step in [`ensure_sufficient_stack`] keeps a
//! pathological program from overflowing the native stack.
//!
//! On native targets this grows the stack with `stacker`; on wasm it is a
//! plain call.

/// Grow when less than this much stack remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
///
/// ```text
/// fn check_stmt(&mut self, stmt: &mut Stmt) -> Result<(), ScopeError> {
///     ensure_sufficient_stack(|| match stmt { /* ... recurse ... */ })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
