// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A glTF 2.0 asset loader.
//!
//! This crate is the binary-container and I/O layer above `gltf-json`,
//! which owns the schema itself (tokenizing, deserializing, resolving,
//! and validating a document's JSON). Loading a `.gltf`/`.glb` file end
//! to end is:
//!
//! 1. [`import`] (or [`import_slice`] for an in-memory buffer) splits a
//!    `.glb`'s binary container into its JSON and optional BIN chunks —
//!    or passes plain `.gltf` text straight through — then runs it
//!    through the `gltf-json` pipeline.
//! 2. [`load_buffers`] resolves every [`gltf_json::Buffer::uri`] (a
//!    `data:` URI or a relative file path) into loaded bytes; `import`
//!    does this automatically, `import_slice` leaves it to the caller.
//! 3. [`Document`]'s accessor methods (`nodes()`, `meshes()`, ...) and
//!    [`accessor::read_float`]/[`accessor::read_index`] give typed
//!    access to the resolved document and its vertex data.
//!
//! Decoding image pixel data is out of scope; [`Document::images`]
//! exposes only where an image's encoded bytes live.

pub mod accessor;
pub mod container;
pub mod document;
pub mod extras;
pub mod import;
pub mod transform;

pub use gltf_json as json;
pub use gltf_json::{Error, Result};

pub use crate::accessor::{read_float, read_index};
pub use crate::container::FormatHint;
pub use crate::document::{Document, Gltf, Node, Scene};
pub use crate::extras::copy_extras_json;
pub use crate::import::{import, load_buffer_base64, load_buffers, import_slice, import_slice_with_options, validate, Options};
