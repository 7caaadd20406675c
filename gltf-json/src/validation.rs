// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Post-resolution semantic validation (spec §4.5).
//!
//! [`Validate`] is derived (`#[derive(Validate)]`, see `gltf-derive`) for
//! the bulk of the schema: deriving it simply recurses into every named
//! field, in order, which is enough for types with no invariants of
//! their own. The handful of entities that do carry real invariants —
//! [`crate::Accessor`], [`crate::accessor::Sparse`], [`crate::buffer::View`],
//! [`crate::Mesh`], [`crate::mesh::Primitive`] — implement it by hand.

use crate::{Error, Path, Root};

/// Trait for validating a resolved document against the glTF 2.0
/// specification's semantic invariants.
pub trait Validate {
    /// Recurses into `self`, reporting every violation found via
    /// `report`. `path` lazily builds the JSON path to `self` for the
    /// reported error's context; it is only evaluated when a violation
    /// is actually found.
    fn validate<R>(&self, _root: &Root, _path: impl Fn() -> Path, _report: &mut R)
    where
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        // Leaf types and most entities have nothing further to check.
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate<R>(&self, root: &Root, path: impl Fn() -> Path, report: &mut R)
    where
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        if let Some(value) = self.as_ref() {
            value.validate(root, path, report);
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate<R>(&self, root: &Root, path: impl Fn() -> Path, report: &mut R)
    where
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        for (index, value) in self.iter().enumerate() {
            value.validate(root, || path().index(index), report);
        }
    }
}

impl<T> Validate for crate::Index<T> {}

macro_rules! impl_trivial_validate {
    ($($ty:ty),* $(,)?) => {
        $(impl Validate for $ty {})*
    };
}

impl_trivial_validate!(
    bool, u8, u32, i32, u64, f32, String, (), [f32; 2], [f32; 3], [f32; 4], [f32; 16]
);

/// Runs [`Validate::validate`] over the whole document, collecting every
/// violation found rather than stopping at the first one, then
/// summarizing them as a single [`Error`].
///
/// Returns `Ok(())` when the document has no violations. This is
/// idempotent and side-effect-free: calling it twice on the same
/// [`Root`] reports the same violations both times.
pub fn validate_root(root: &Root) -> Result<(), Error> {
    let mut messages: Vec<String> = Vec::new();
    let mut saw_data_too_short = false;
    {
        let mut report = |path: &dyn Fn() -> Path, error: Error| {
            if matches!(error, Error::DataTooShort(_)) {
                saw_data_too_short = true;
            }
            messages.push(format!("{}: {error}", path()));
        };
        root.validate(root, Path::new, &mut report);
    }
    if messages.is_empty() {
        return Ok(());
    }
    let joined = messages.join("; ");
    if saw_data_too_short {
        Err(Error::DataTooShort(joined))
    } else {
        Err(Error::InvalidGltf(joined))
    }
}
