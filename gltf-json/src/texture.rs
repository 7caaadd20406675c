// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use gltf_derive::Validate;

use crate::extras::Extras;
use crate::image::Image;
use crate::index::Index;

pub const REPEAT: u32 = 10497;

/// Texture wrapping / filtering parameters. `wrap_s`/`wrap_t` default to
/// `REPEAT` (`10497`) when the deserializer does not see the member,
/// per spec §4.3's Sampler defaults.
#[derive(Clone, Debug, Validate)]
pub struct Sampler {
    pub name: Option<String>,
    pub mag_filter: Option<u32>,
    pub min_filter: Option<u32>,
    pub wrap_s: u32,
    pub wrap_t: u32,
    pub extras: Option<Extras>,
}

impl Default for Sampler {
    fn default() -> Self {
        Sampler {
            name: None,
            mag_filter: None,
            min_filter: None,
            wrap_s: REPEAT,
            wrap_t: REPEAT,
            extras: None,
        }
    }
}

#[derive(Clone, Debug, Validate)]
pub struct Texture {
    pub name: Option<String>,
    pub sampler: Option<Index<Sampler>>,
    pub source: Index<Image>,
    pub extras: Option<Extras>,
}

/// `KHR_texture_transform`: an additional offset/rotation/scale applied
/// to a texture coordinate before sampling, plus an optional overriding
/// `texCoord` set index.
#[derive(Clone, Copy, Debug, Validate)]
pub struct TextureTransform {
    pub offset: [f32; 2],
    pub rotation: f32,
    pub scale: [f32; 2],
    pub tex_coord: Option<u32>,
}

impl Default for TextureTransform {
    fn default() -> Self {
        TextureTransform {
            offset: [0.0, 0.0],
            rotation: 0.0,
            scale: [1.0, 1.0],
            tex_coord: None,
        }
    }
}

impl crate::validation::Validate for [f32; 2] {}

/// A reference to a [`Texture`] from a material slot, plus the
/// UV-channel selector and strength/scale factor every texture
/// reference carries (spec §3 `TextureView`).
#[derive(Clone, Debug, Validate)]
pub struct Info {
    pub index: Index<Texture>,
    pub tex_coord: u32,
    pub scale: f32,
    pub has_transform: bool,
    pub transform: TextureTransform,
    pub extras: Option<Extras>,
}

impl Default for Info {
    fn default() -> Self {
        Info {
            index: Index::new(0),
            tex_coord: 0,
            scale: 1.0,
            has_transform: false,
            transform: TextureTransform::default(),
            extras: None,
        }
    }
}
