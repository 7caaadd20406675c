// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use gltf_derive::Validate;

use crate::buffer::View;
use crate::extras::Extras;
use crate::index::Index;
use crate::validation::Validate;
use crate::{Error, Path, Root};

/// The scalar storage type of an accessor's components, decoded from the
/// `componentType` integer (spec §4.3 enum table).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComponentType {
    I8,
    U8,
    I16,
    U16,
    U32,
    F32,
}

impl ComponentType {
    /// Decodes the `componentType` integer literal used in glTF JSON.
    pub fn from_gl_enum(value: u32) -> Option<Self> {
        match value {
            5120 => Some(ComponentType::I8),
            5121 => Some(ComponentType::U8),
            5122 => Some(ComponentType::I16),
            5123 => Some(ComponentType::U16),
            5125 => Some(ComponentType::U32),
            5126 => Some(ComponentType::F32),
            _ => None,
        }
    }

    /// Size in bytes of a single component.
    pub fn size(self) -> usize {
        match self {
            ComponentType::I8 | ComponentType::U8 => 1,
            ComponentType::I16 | ComponentType::U16 => 2,
            ComponentType::U32 | ComponentType::F32 => 4,
        }
    }

    /// `true` for the three unsigned integer component types glTF
    /// requires for index buffers and sparse index overlays.
    pub fn is_unsigned_integer(self) -> bool {
        matches!(self, ComponentType::U8 | ComponentType::U16 | ComponentType::U32)
    }

    /// The maximum magnitude used to normalize an integer component into
    /// `[0, 1]` or `[-1, 1]` (spec §4.6).
    pub fn normalization_max(self) -> f32 {
        match self {
            ComponentType::I8 => 127.0,
            ComponentType::U8 => 255.0,
            ComponentType::I16 => 32767.0,
            ComponentType::U16 => 65535.0,
            ComponentType::U32 => u32::MAX as f32,
            ComponentType::F32 => 1.0,
        }
    }
}

/// An accessor's logical element shape, decoded from the `type` string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Type {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl Type {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "SCALAR" => Some(Type::Scalar),
            "VEC2" => Some(Type::Vec2),
            "VEC3" => Some(Type::Vec3),
            "VEC4" => Some(Type::Vec4),
            "MAT2" => Some(Type::Mat2),
            "MAT3" => Some(Type::Mat3),
            "MAT4" => Some(Type::Mat4),
            _ => None,
        }
    }

    /// Number of logical components (`N` in spec §4.6): 1/2/3/4 for
    /// scalar/vecN, 4/9/16 for mat2/mat3/mat4.
    pub fn component_count(self) -> usize {
        match self {
            Type::Scalar => 1,
            Type::Vec2 => 2,
            Type::Vec3 => 3,
            Type::Vec4 => 4,
            Type::Mat2 => 4,
            Type::Mat3 => 9,
            Type::Mat4 => 16,
        }
    }
}

/// Computes the unpacked, per-element byte size of an accessor with the
/// given shape and component type, applying the two packed-matrix
/// alignment cases the glTF spec mandates (spec §4.6):
///
/// - `mat2` with a 1-byte component type packs into 8 bytes (two 4-byte
///   rows of 2 values each, with padding between rows).
/// - `mat3` with a 1- or 2-byte component type packs into `12 * C`
///   bytes (three rows of 3 values each, padded to 4 components per
///   row).
/// - Every other combination is simply `C * N`.
pub fn element_size(component_type: ComponentType, ty: Type) -> usize {
    let c = component_type.size();
    let n = ty.component_count();
    match (ty, c) {
        (Type::Mat2, 1) => 8,
        (Type::Mat3, 1) | (Type::Mat3, 2) => 12 * c,
        _ => c * n,
    }
}

/// An unsigned-integer-component accessor overlay that patches a small
/// set of indices onto a base accessor (or onto zeros, if the accessor
/// has no `bufferView`).
#[derive(Clone, Debug, Validate)]
pub struct SparseIndices {
    pub buffer_view: Index<View>,
    pub byte_offset: usize,
    pub component_type: ComponentType,
    pub extras: Option<Extras>,
}

impl Validate for ComponentType {}

#[derive(Clone, Debug, Validate)]
pub struct SparseValues {
    pub buffer_view: Index<View>,
    pub byte_offset: usize,
    pub extras: Option<Extras>,
}

/// The sparse-overlay block of an [`Accessor`] (spec §3 `AccessorSparse`).
#[derive(Clone, Debug)]
pub struct Sparse {
    pub count: usize,
    pub indices: SparseIndices,
    pub values: SparseValues,
    pub extras: Option<Extras>,
}

impl Validate for Sparse {
    fn validate<R>(&self, root: &Root, path: impl Fn() -> Path, report: &mut R)
    where
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        self.indices
            .validate(root, || path().field("indices"), report);
        self.values.validate(root, || path().field("values"), report);

        if !self.indices.component_type.is_unsigned_integer() {
            report(
                &path,
                Error::InvalidGltf(
                    "sparse indices componentType must be u8, u16 or u32".into(),
                ),
            );
        }

        if let Some(view) = root.buffer_views.get(self.indices.buffer_view.value()) {
            let element = self.indices.component_type.size();
            let needed = self.indices.byte_offset + element * self.count;
            if needed > view.byte_length {
                report(
                    &path,
                    Error::DataTooShort(format!(
                        "sparse indices range needs {needed} bytes but view has {}",
                        view.byte_length
                    )),
                );
            }
        }
    }
}

/// A typed window over a range of bytes in a buffer view (spec §3).
#[derive(Clone, Debug)]
pub struct Accessor {
    pub name: Option<String>,
    pub buffer_view: Option<Index<View>>,
    pub byte_offset: usize,
    pub component_type: ComponentType,
    pub normalized: bool,
    pub type_: Type,
    pub count: usize,
    pub min: Option<Vec<f32>>,
    pub max: Option<Vec<f32>>,
    pub sparse: Option<Sparse>,
    pub extras: Option<Extras>,

    /// `0` until [`Root::resolve`] defaults it to either the owning
    /// buffer view's `byteStride` or the packed element size.
    pub stride: usize,
}

impl Accessor {
    /// Byte size of one element, applying the packed-matrix rules.
    pub fn element_size(&self) -> usize {
        element_size(self.component_type, self.type_)
    }
}

impl Validate for Accessor {
    fn validate<R>(&self, root: &Root, path: impl Fn() -> Path, report: &mut R)
    where
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        self.buffer_view
            .validate(root, || path().field("bufferView"), report);
        self.sparse.validate(root, || path().field("sparse"), report);

        if let Some(sparse) = &self.sparse {
            if let Some(view) = root.buffer_views.get(sparse.indices.buffer_view.value()) {
                if let Some(buffer) = root.buffers.get(view.buffer.value()) {
                    if let Some(data) = &buffer.data {
                        let element = sparse.indices.component_type.size();
                        for i in 0..sparse.count {
                            let offset = view.byte_offset + sparse.indices.byte_offset + element * i;
                            if let Some(value) = read_unsigned(data, offset, sparse.indices.component_type) {
                                if value as usize >= self.count {
                                    report(
                                        &path,
                                        Error::DataTooShort(format!(
                                            "sparse index {value} at position {i} exceeds accessor count {}",
                                            self.count
                                        )),
                                    );
                                    break;
                                }
                            }
                        }
                    }
                }
            }

            if let Some(view) = root.buffer_views.get(sparse.values.buffer_view.value()) {
                let element = self.element_size();
                let needed = sparse.values.byte_offset + element * sparse.count;
                if needed > view.byte_length {
                    report(
                        &path,
                        Error::DataTooShort(format!(
                            "sparse values range needs {needed} bytes but view has {}",
                            view.byte_length
                        )),
                    );
                }
            }
        }

        if let (Some(view_index), None) = (self.buffer_view, &self.sparse) {
            if let Some(view) = root.buffer_views.get(view_index.value()) {
                let stride = if self.stride != 0 {
                    self.stride
                } else {
                    self.element_size()
                };
                let needed = if self.count == 0 {
                    self.byte_offset
                } else {
                    self.byte_offset + stride * (self.count - 1) + self.element_size()
                };
                if needed > view.byte_length {
                    report(
                        &path,
                        Error::DataTooShort(format!(
                            "accessor needs {needed} bytes but buffer view has {}",
                            view.byte_length
                        )),
                    );
                }
            }
        }
    }
}

fn read_unsigned(data: &[u8], offset: usize, component_type: ComponentType) -> Option<u32> {
    match component_type {
        ComponentType::U8 => data.get(offset).map(|&b| b as u32),
        ComponentType::U16 => {
            let bytes = data.get(offset..offset + 2)?;
            Some(u16::from_le_bytes([bytes[0], bytes[1]]) as u32)
        }
        ComponentType::U32 => {
            let bytes = data.get(offset..offset + 4)?;
            Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        }
        _ => None,
    }
}
