// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use gltf_derive::Validate;

use crate::extras::Extras;
use crate::index::Index;
use crate::validation::Validate;
use crate::{Error, Path, Root};

/// A contiguous byte payload, either embedded (the binary container's
/// second chunk) or referenced by URI. `data` is filled in later by the
/// external buffer-loading collaborator (spec §6 `load_buffers`); the
/// core never performs I/O itself.
#[derive(Clone, Debug, Default, Validate)]
pub struct Buffer {
    pub name: Option<String>,
    pub byte_length: usize,
    pub uri: Option<String>,
    pub extras: Option<Extras>,

    /// Populated by `gltf::load_buffers`, or already present for the
    /// binary container's first buffer (backed by the GLB's BIN chunk).
    pub data: Option<Vec<u8>>,
}

/// What a [`View`] is used for, decoded from the optional `target`
/// member (`34962` → vertex attributes, `34963` → element indices).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Target {
    #[default]
    Unknown,
    Vertices,
    Indices,
}

impl Target {
    pub fn from_gl_enum(value: u32) -> Option<Self> {
        match value {
            34962 => Some(Target::Vertices),
            34963 => Some(Target::Indices),
            _ => None,
        }
    }
}

/// A byte-range slice of a [`Buffer`].
///
/// `stride` is `0` until [`Root::resolve`] defaults it: a nonzero
/// `byte_stride` member wins, otherwise it is computed per-accessor from
/// the element's unpacked size (spec §3, stride-defaulting invariant).
#[derive(Clone, Debug, Default)]
pub struct View {
    pub name: Option<String>,
    pub buffer: Index<Buffer>,
    pub byte_offset: usize,
    pub byte_length: usize,
    pub byte_stride: usize,
    pub target: Target,
    pub extras: Option<Extras>,
}

impl Validate for View {
    fn validate<R>(&self, root: &Root, path: impl Fn() -> Path, report: &mut R)
    where
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        self.buffer.validate(root, || path().field("buffer"), report);
        if let Some(buffer) = root.buffers.get(self.buffer.value()) {
            if self.byte_offset + self.byte_length > buffer.byte_length {
                report(
                    &path,
                    Error::InvalidGltf(format!(
                        "buffer view range [{}, {}) exceeds buffer length {}",
                        self.byte_offset,
                        self.byte_offset + self.byte_length,
                        buffer.byte_length
                    )),
                );
            }
        }
    }
}
