// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The glTF 2.0 JSON schema: tokenizing, deserializing, resolving and
//! validating a document's `.gltf`/GLB-embedded JSON text.
//!
//! This crate has no knowledge of the binary container format or of
//! loading referenced buffers/images from disk — that lives in the
//! `gltf` crate, which uses this one as its schema layer. The pipeline
//! here is always the same four steps, run in order by
//! [`deserialize::deserialize`] and [`Root::resolve`]:
//!
//! 1. [`token::tokenize`] scans the raw JSON bytes into a flat, bounded
//!    token array with no heap allocation per token and no numeric
//!    parsing or string unescaping.
//! 2. [`deserialize::deserialize`] walks that token stream once,
//!    building every [`Root`] table directly, applying schema defaults,
//!    and recognizing the handful of extensions this crate understands.
//! 3. [`Root::resolve`] checks every cross-entity [`Index`] is in range,
//!    fixes up node parent back-links, and defaults accessor strides.
//! 4. [`validation::validate_root`] walks the resolved document,
//!    checking the semantic invariants deriving `Validate` alone cannot
//!    express (buffer ranges, attribute count consistency, and so on).

pub mod accessor;
pub mod animation;
pub mod asset;
pub mod buffer;
pub mod camera;
pub mod deserialize;
pub mod error;
pub mod extensions;
pub mod extras;
pub mod image;
pub mod index;
pub mod material;
pub mod mesh;
pub mod path;
pub mod root;
pub mod scene;
pub mod skin;
pub mod texture;
pub mod token;
pub mod validation;

pub use crate::accessor::Accessor;
pub use crate::animation::Animation;
pub use crate::asset::Asset;
pub use crate::buffer::Buffer;
pub use crate::camera::Camera;
pub use crate::error::{Error, Result};
pub use crate::extras::Extras;
pub use crate::image::Image;
pub use crate::index::Index;
pub use crate::material::Material;
pub use crate::mesh::Mesh;
pub use crate::path::Path;
pub use crate::root::Root;
pub use crate::scene::{Node, Scene};
pub use crate::skin::Skin;
pub use crate::texture::Texture;

/// Runs the full pipeline: tokenize, deserialize, resolve, and validate
/// `src`, returning a [`Root`] whose cross-entity references are
/// guaranteed to be in range.
pub fn from_slice(src: &[u8]) -> Result<Root> {
    let root = deserialize::deserialize(src)?.resolve()?;
    validation::validate_root(&root)?;
    Ok(root)
}
