// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The subset of the glTF extension ecosystem this crate interprets:
//! `KHR_texture_transform` (see [`crate::texture::TextureTransform`]),
//! `KHR_materials_pbrSpecularGlossiness` and `KHR_materials_unlit` (both
//! folded directly into [`crate::material::Material`] as flags/optional
//! blocks), and `KHR_lights_punctual`'s [`Light`] table, owned here.
//!
//! Every other extension name encountered is preserved verbatim in
//! [`crate::Root::extensions_used`]/`extensions_required` but its data
//! is skipped by the deserializer (spec §4.3).

use gltf_derive::Validate;

use crate::extras::Extras;

/// `KHR_lights_punctual`'s light kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LightKind {
    Directional,
    Point,
    Spot,
}

impl LightKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "directional" => Some(LightKind::Directional),
            "point" => Some(LightKind::Point),
            "spot" => Some(LightKind::Spot),
            _ => None,
        }
    }
}

impl crate::validation::Validate for LightKind {}

/// A punctual light source, added to [`crate::Root::lights`] by the
/// `KHR_lights_punctual` extension object on the document root; bound to
/// individual nodes via the same extension on each node (spec §4.3).
#[derive(Clone, Debug, Validate)]
pub struct Light {
    pub name: Option<String>,
    pub color: [f32; 3],
    pub intensity: f32,
    pub kind: LightKind,
    pub range: Option<f32>,
    pub inner_cone_angle: f32,
    pub outer_cone_angle: f32,
    pub extras: Option<Extras>,
}

impl Default for Light {
    fn default() -> Self {
        Light {
            name: None,
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
            kind: LightKind::Directional,
            range: None,
            inner_cone_angle: 0.0,
            outer_cone_angle: std::f32::consts::FRAC_PI_4,
            extras: None,
        }
    }
}

pub const KHR_TEXTURE_TRANSFORM: &str = "KHR_texture_transform";
pub const KHR_MATERIALS_PBR_SPECULAR_GLOSSINESS: &str = "KHR_materials_pbrSpecularGlossiness";
pub const KHR_MATERIALS_UNLIT: &str = "KHR_materials_unlit";
pub const KHR_LIGHTS_PUNCTUAL: &str = "KHR_lights_punctual";
