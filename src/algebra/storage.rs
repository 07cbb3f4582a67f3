//! Element storage conventions.
//!
//! Slots are reserved without initialisation, initialised once through the
//! owning context, mutated in place by dispatch operations and finalised
//! exactly once when dropped.  The caller who reserved a slot owns it for
//! its whole life; no dispatch operation takes ownership.

use super::Ring;

/// Reserve room for `n` elements without initialising any of them.
pub fn reserve<R: Ring>(_ring: &R, n: usize) -> Vec<R::Element> {
    Vec::with_capacity(n)
}

/// Reserve and initialise `n` elements.  Every element is the additive
/// identity of the context.
pub fn init_elements<R: Ring>(ring: &R, n: usize) -> Vec<R::Element> {
    let mut v = reserve(ring, n);
    v.extend((0..n).map(|_| ring.init()));
    v
}

/// Number of bytes occupied by `n` element slots.
pub fn storage_bytes<R: Ring>(ring: &R, n: usize) -> usize {
    n * ring.element_size()
}
