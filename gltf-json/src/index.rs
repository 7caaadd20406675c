// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Typed, checked cross-entity references.
//!
//! The original C implementation this design is drawn from stores an
//! unresolved reference by casting `(index + 1)` into a pointer-sized
//! slot, with `0` meaning "unset" — a trick to avoid a parallel index
//! table. Rust has no equivalent need: [`Index<T>`] is a plain
//! newtype-wrapped `u32` from the moment the deserializer reads it out
//! of the JSON integer literal. "Resolving" a reference (spec §4.4)
//! becomes a bounds check against the owning table rather than a
//! pointer rewrite; [`crate::Root::resolve`] performs exactly that
//! check for every reference in the document in one pass.

use std::fmt;
use std::marker::PhantomData;

/// A checked, 0-based index into one of [`crate::Root`]'s per-kind
/// tables. `T` pins the index to the table it indexes into, so e.g. a
/// `Index<Material>` cannot be confused with a `Index<Mesh>` at compile
/// time.
pub struct Index<T>(u32, PhantomData<fn() -> T>);

impl<T> Index<T> {
    /// Creates an index from a raw, 0-based JSON integer value.
    pub fn new(value: u32) -> Self {
        Index(value, PhantomData)
    }

    /// The raw 0-based value.
    pub fn value(&self) -> usize {
        self.0 as usize
    }
}

impl<T> Default for Index<T> {
    fn default() -> Self {
        Index::new(0)
    }
}

impl<T> fmt::Debug for Index<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index({})", self.0)
    }
}

impl<T> Clone for Index<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Index<T> {}

impl<T> PartialEq for Index<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Index<T> {}

impl<T> std::hash::Hash for Index<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}
