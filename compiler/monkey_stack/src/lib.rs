//! Stack growth for the recursive descent paths.
//!
//! Both the Pratt parser and the tree-walking evaluator recurse once per
//! nesting level of the source program. Deeply nested input (long operator
//! chains, nested calls, recursive user functions) would overflow the native
//! stack long before any heap limit is reached, so every recursive entry
//! point wraps itself in [`ensure_sufficient_stack`].
//!
//! On native targets the stack is grown on demand by `stacker`. On wasm the
//! closure is called directly.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
