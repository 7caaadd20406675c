// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use gltf_derive::Validate;

use crate::extras::Extras;
use crate::texture::Info;

/// `baseColorFactor`/`metallicFactor`/`roughnessFactor` plus the two
/// textures that modulate them. Defaults applied before parsing (spec
/// §4.3): base color `(1,1,1,1)`, metallic and roughness `1.0`.
#[derive(Clone, Debug, Validate)]
pub struct PbrMetallicRoughness {
    pub base_color_factor: [f32; 4],
    pub base_color_texture: Option<Info>,
    pub metallic_factor: f32,
    pub roughness_factor: f32,
    pub metallic_roughness_texture: Option<Info>,
    pub extras: Option<Extras>,
}

impl Default for PbrMetallicRoughness {
    fn default() -> Self {
        PbrMetallicRoughness {
            base_color_factor: [1.0, 1.0, 1.0, 1.0],
            base_color_texture: None,
            metallic_factor: 1.0,
            roughness_factor: 1.0,
            metallic_roughness_texture: None,
            extras: None,
        }
    }
}

/// `KHR_materials_pbrSpecularGlossiness`: an alternative PBR workflow.
/// Defaults (spec §4.3): diffuse `(1,1,1,1)`, specular `(1,1,1)`,
/// glossiness `1.0`.
#[derive(Clone, Debug, Validate)]
pub struct PbrSpecularGlossiness {
    pub diffuse_factor: [f32; 4],
    pub diffuse_texture: Option<Info>,
    pub specular_factor: [f32; 3],
    pub glossiness_factor: f32,
    pub specular_glossiness_texture: Option<Info>,
    pub extras: Option<Extras>,
}

impl Default for PbrSpecularGlossiness {
    fn default() -> Self {
        PbrSpecularGlossiness {
            diffuse_factor: [1.0, 1.0, 1.0, 1.0],
            diffuse_texture: None,
            specular_factor: [1.0, 1.0, 1.0],
            glossiness_factor: 1.0,
            specular_glossiness_texture: None,
            extras: None,
        }
    }
}

/// A normal-map texture reference; carries `scale` instead of the
/// generic `Info::scale`'s strength semantics, but reuses the same
/// `index`/`texCoord`/transform shape.
#[derive(Clone, Debug, Validate)]
pub struct NormalTexture {
    pub info: Info,
    pub scale: f32,
}

impl Default for NormalTexture {
    fn default() -> Self {
        NormalTexture {
            info: Info::default(),
            scale: 1.0,
        }
    }
}

/// An occlusion-map texture reference; carries `strength` instead of a
/// generic scale factor.
#[derive(Clone, Debug, Validate)]
pub struct OcclusionTexture {
    pub info: Info,
    pub strength: f32,
}

impl Default for OcclusionTexture {
    fn default() -> Self {
        OcclusionTexture {
            info: Info::default(),
            strength: 1.0,
        }
    }
}

/// How a material's `alphaMode` is interpreted at render time. Decoding
/// only; the core never evaluates blending itself.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AlphaMode {
    #[default]
    Opaque,
    Mask,
    Blend,
}

impl AlphaMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "OPAQUE" => Some(AlphaMode::Opaque),
            "MASK" => Some(AlphaMode::Mask),
            "BLEND" => Some(AlphaMode::Blend),
            _ => None,
        }
    }
}

impl crate::validation::Validate for AlphaMode {}

/// A PBR material. `pbr_specular_glossiness` and `unlit` are populated
/// only when the corresponding extension object is present and
/// recognized (spec §4.3 extensions list).
#[derive(Clone, Debug, Validate)]
pub struct Material {
    pub name: Option<String>,
    pub pbr_metallic_roughness: PbrMetallicRoughness,
    pub has_pbr_specular_glossiness: bool,
    pub pbr_specular_glossiness: Option<PbrSpecularGlossiness>,
    pub normal_texture: Option<NormalTexture>,
    pub occlusion_texture: Option<OcclusionTexture>,
    pub emissive_texture: Option<Info>,
    pub emissive_factor: [f32; 3],
    pub alpha_mode: AlphaMode,
    pub alpha_cutoff: f32,
    pub double_sided: bool,
    pub unlit: bool,
    pub extras: Option<Extras>,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            name: None,
            pbr_metallic_roughness: PbrMetallicRoughness::default(),
            has_pbr_specular_glossiness: false,
            pbr_specular_glossiness: None,
            normal_texture: None,
            occlusion_texture: None,
            emissive_texture: None,
            emissive_factor: [0.0, 0.0, 0.0],
            alpha_mode: AlphaMode::Opaque,
            alpha_cutoff: 0.5,
            double_sided: false,
            unlit: false,
            extras: None,
        }
    }
}
