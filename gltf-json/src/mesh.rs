// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use gltf_derive::Validate;

use crate::accessor::Accessor;
use crate::extras::Extras;
use crate::index::Index;
use crate::material::Material;
use crate::validation::Validate;
use crate::{Error, Path, Root};

/// The recognized prefix of an attribute name (`POSITION_0` → semantic
/// `Position`, set index `0`). An unrecognized prefix is kept verbatim
/// in `Extension` (spec §6 supplemented feature, mirroring the
/// real-world `gltf::mesh::Semantic::Extras` pattern) rather than
/// discarded; it is still treated as `unknown` for every consistency
/// check (spec §4.3).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Semantic {
    Position,
    Normal,
    Tangent,
    TexCoord,
    Color,
    Joints,
    Weights,
    Extension(String),
}

impl Semantic {
    /// Splits `name` at the last `_`, mapping the prefix to a
    /// [`Semantic`] and the suffix to a 0-based set index (`0` if no
    /// suffix is present), per spec §4.3's attribute semantic parsing
    /// rule.
    pub fn parse(name: &str) -> (Self, u32) {
        let (prefix, index) = match name.rsplit_once('_') {
            Some((prefix, suffix)) if suffix.chars().all(|c| c.is_ascii_digit()) && !suffix.is_empty() => {
                (prefix, suffix.parse().unwrap_or(0))
            }
            _ => (name, 0),
        };
        let semantic = match prefix {
            "POSITION" => Semantic::Position,
            "NORMAL" => Semantic::Normal,
            "TANGENT" => Semantic::Tangent,
            "TEXCOORD" => Semantic::TexCoord,
            "COLOR" => Semantic::Color,
            "JOINTS" => Semantic::Joints,
            "WEIGHTS" => Semantic::Weights,
            _ => return (Semantic::Extension(prefix.to_string()), 0),
        };
        (semantic, index)
    }
}

impl Validate for Semantic {}

/// One vertex attribute binding: the raw JSON key, its parsed semantic
/// and set index, and the accessor supplying the data.
#[derive(Clone, Debug, Validate)]
pub struct Attribute {
    pub name: String,
    pub semantic: Semantic,
    pub set_index: u32,
    pub accessor: Index<Accessor>,
}

/// A per-primitive set of attribute deltas applied by weighted blending
/// (spec glossary: Morph target). Evaluating the blend is out of scope;
/// only the attribute bindings are retained.
#[derive(Clone, Debug, Default, Validate)]
pub struct MorphTarget {
    pub attributes: Vec<Attribute>,
}

/// Primitive draw topology, decoded from the `mode` integer (`0..=6`
/// maps directly, spec §4.3).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    #[default]
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl Mode {
    pub fn from_gl_enum(value: u32) -> Option<Self> {
        match value {
            0 => Some(Mode::Points),
            1 => Some(Mode::Lines),
            2 => Some(Mode::LineLoop),
            3 => Some(Mode::LineStrip),
            4 => Some(Mode::Triangles),
            5 => Some(Mode::TriangleStrip),
            6 => Some(Mode::TriangleFan),
            _ => None,
        }
    }
}

impl Validate for Mode {}

/// One drawable unit of a [`Mesh`]: a topology, an optional index
/// accessor, the vertex attribute bindings, an optional material, and
/// zero or more morph targets.
#[derive(Clone, Debug, Default)]
pub struct Primitive {
    pub attributes: Vec<Attribute>,
    pub indices: Option<Index<Accessor>>,
    pub material: Option<Index<Material>>,
    pub mode: Mode,
    pub targets: Vec<MorphTarget>,
    pub extras: Option<Extras>,
}

impl Validate for Primitive {
    fn validate<R>(&self, root: &Root, path: impl Fn() -> Path, report: &mut R)
    where
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        self.attributes
            .validate(root, || path().field("attributes"), report);
        self.indices.validate(root, || path().field("indices"), report);
        self.material
            .validate(root, || path().field("material"), report);
        self.targets.validate(root, || path().field("targets"), report);

        let mut attribute_count: Option<usize> = None;
        for attribute in &self.attributes {
            if let Some(accessor) = root.accessors.get(attribute.accessor.value()) {
                match attribute_count {
                    None => attribute_count = Some(accessor.count),
                    Some(expected) if expected != accessor.count => {
                        report(
                            &path,
                            Error::InvalidGltf(format!(
                                "attribute '{}' has count {} but primitive expects {}",
                                attribute.name, accessor.count, expected
                            )),
                        );
                    }
                    _ => {}
                }
            }
        }

        for (target_index, target) in self.targets.iter().enumerate() {
            for attribute in &target.attributes {
                if let (Some(expected), Some(accessor)) =
                    (attribute_count, root.accessors.get(attribute.accessor.value()))
                {
                    if accessor.count != expected {
                        report(
                            &path,
                            Error::InvalidGltf(format!(
                                "target {target_index} attribute '{}' has count {} but primitive expects {}",
                                attribute.name, accessor.count, expected
                            )),
                        );
                    }
                }
            }
        }

        if let Some(indices) = self.indices {
            if let Some(accessor) = root.accessors.get(indices.value()) {
                if !accessor.component_type.is_unsigned_integer() {
                    report(
                        &path,
                        Error::InvalidGltf(
                            "index accessor componentType must be u8, u16 or u32".into(),
                        ),
                    );
                }

                let loaded = accessor.buffer_view.and_then(|vi| {
                    let view = root.buffer_views.get(vi.value())?;
                    let buffer = root.buffers.get(view.buffer.value())?;
                    Some((view, buffer.data.as_ref()?))
                });
                if let (Some((view, data)), Some(expected)) = (loaded, attribute_count) {
                    let stride = accessor.stride.max(accessor.element_size());
                    for i in 0..accessor.count {
                        let offset = view.byte_offset + accessor.byte_offset + stride * i;
                        if let Some(value) = read_unsigned(data, offset, accessor.component_type) {
                            if value as usize >= expected {
                                report(
                                    &path,
                                    Error::InvalidGltf(format!(
                                        "index {value} at position {i} exceeds vertex count {expected}"
                                    )),
                                );
                                break;
                            }
                        }
                    }
                }
            }
        }
    }
}

fn read_unsigned(data: &[u8], offset: usize, component_type: crate::accessor::ComponentType) -> Option<u32> {
    use crate::accessor::ComponentType::*;
    match component_type {
        U8 => data.get(offset).map(|&b| b as u32),
        U16 => {
            let bytes = data.get(offset..offset + 2)?;
            Some(u16::from_le_bytes([bytes[0], bytes[1]]) as u32)
        }
        U32 => {
            let bytes = data.get(offset..offset + 4)?;
            Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        }
        _ => None,
    }
}

/// A drawable object: a list of [`Primitive`]s plus optional default
/// morph weights.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub name: Option<String>,
    pub primitives: Vec<Primitive>,
    pub weights: Option<Vec<f32>>,
    pub extras: Option<Extras>,
}

impl Validate for Mesh {
    fn validate<R>(&self, root: &Root, path: impl Fn() -> Path, report: &mut R)
    where
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        self.primitives
            .validate(root, || path().field("primitives"), report);

        let target_counts: Vec<usize> = self.primitives.iter().map(|p| p.targets.len()).collect();
        if let Some(&first) = target_counts.first() {
            if target_counts.iter().any(|&n| n != first) {
                report(
                    &path,
                    Error::InvalidGltf("all primitives of a mesh must have the same targets.length".into()),
                );
            }
            if let Some(weights) = &self.weights {
                if weights.len() != first {
                    report(
                        &path,
                        Error::InvalidGltf(format!(
                            "mesh.weights has length {} but targets.length is {first}",
                            weights.len()
                        )),
                    );
                }
            }
        }
    }
}
