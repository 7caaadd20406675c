// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Accessor readout (spec §4.6).
//!
//! `gltf-json` only decodes an accessor's *shape* — component type,
//! element type, stride, sparse overlay. Turning a given element index
//! into actual numbers means walking into the buffer bytes, which needs
//! a loaded [`crate::Document`] and so lives here rather than in
//! `gltf-json`.
//!
//! Sparse accessors are out of scope for [`read_float`]/[`read_index`]
//! (spec §4.6 Non-goals): evaluating the base/overlay merge is left to
//! the caller, who can read [`gltf_json::Accessor::sparse`] directly.

use gltf_json::accessor::{Accessor, ComponentType, Type};

use crate::{Document, Error, Result};

/// Reads the unsigned integer at `index` from an index accessor,
/// returning `0` if the accessor has no buffer view or no buffer data is
/// loaded (spec §4.6: index reads never fail, they degrade to `0`).
pub fn read_index(document: &Document, accessor: &Accessor, index: usize) -> u32 {
    try_read_raw(document, accessor, index)
        .map(|v| v as u32)
        .unwrap_or(0)
}

/// Decodes the `index`th element of `accessor` into `out`, one `f32` per
/// logical component, applying normalization and the packed-matrix
/// unpacking rules (spec §4.6).
///
/// `out` must have room for at least [`Type::component_count`] floats.
/// Fails if the accessor is sparse, has no buffer view, has no buffer
/// data loaded, or `index` runs past the accessor's buffer view range.
pub fn read_float(document: &Document, accessor: &Accessor, index: usize, out: &mut [f32]) -> Result<()> {
    if accessor.sparse.is_some() {
        return Err(Error::InvalidOptions(
            "read_float does not evaluate sparse accessor overlays".into(),
        ));
    }
    let n = accessor.type_.component_count();
    if out.len() < n {
        return Err(Error::InvalidOptions(format!(
            "output slice has {} slots but accessor needs {n}",
            out.len()
        )));
    }

    let data = buffer_bytes(document, accessor)
        .ok_or_else(|| Error::InvalidOptions("accessor has no bufferView or its buffer data is not loaded".into()))?;
    let stride = if accessor.stride != 0 {
        accessor.stride
    } else {
        accessor.element_size()
    };
    let base = element_offset(document, accessor, index, stride);
    let c = accessor.component_type.size();

    match (accessor.type_, c) {
        (Type::Mat2, 1) => unpack_packed_matrix(data, base, 2, 2, 4, accessor, out),
        (Type::Mat3, 1) => unpack_packed_matrix(data, base, 3, 3, 4, accessor, out),
        (Type::Mat3, 2) => unpack_packed_matrix(data, base, 3, 3, 8, accessor, out),
        _ => {
            for i in 0..n {
                let value = decode_component(data, base + i * c, accessor.component_type, accessor.normalized)
                    .ok_or_else(too_short)?;
                out[i] = value;
            }
            Ok(())
        }
    }
}

fn unpack_packed_matrix(
    data: &[u8],
    base: usize,
    rows: usize,
    cols: usize,
    row_stride: usize,
    accessor: &Accessor,
    out: &mut [f32],
) -> Result<()> {
    let c = accessor.component_type.size();
    for row in 0..rows {
        for col in 0..cols {
            let offset = base + row * row_stride + col * c;
            let value = decode_component(data, offset, accessor.component_type, accessor.normalized)
                .ok_or_else(too_short)?;
            out[row * cols + col] = value;
        }
    }
    Ok(())
}

fn too_short() -> Error {
    Error::DataTooShort("accessor element read runs past the end of the buffer".into())
}

fn buffer_bytes<'a>(document: &'a Document, accessor: &Accessor) -> Option<&'a [u8]> {
    let view_index = accessor.buffer_view?;
    let view = document.root().buffer_views.get(view_index.value())?;
    let buffer = document.root().buffers.get(view.buffer.value())?;
    buffer.data.as_deref()
}

fn element_offset(document: &Document, accessor: &Accessor, index: usize, stride: usize) -> usize {
    // Only called once `buffer_bytes` already proved the view exists.
    let view_index = accessor.buffer_view.expect("checked by buffer_bytes");
    let view = &document.root().buffer_views[view_index.value()];
    view.byte_offset + accessor.byte_offset + stride * index
}

fn try_read_raw(document: &Document, accessor: &Accessor, index: usize) -> Option<i64> {
    let data = buffer_bytes(document, accessor)?;
    let stride = if accessor.stride != 0 {
        accessor.stride
    } else {
        accessor.element_size()
    };
    let offset = element_offset(document, accessor, index, stride);
    read_raw(data, offset, accessor.component_type)
}

fn read_raw(data: &[u8], offset: usize, component_type: ComponentType) -> Option<i64> {
    match component_type {
        ComponentType::I8 => data.get(offset).map(|&b| b as i8 as i64),
        ComponentType::U8 => data.get(offset).map(|&b| b as i64),
        ComponentType::I16 => {
            let b = data.get(offset..offset + 2)?;
            Some(i16::from_le_bytes([b[0], b[1]]) as i64)
        }
        ComponentType::U16 => {
            let b = data.get(offset..offset + 2)?;
            Some(u16::from_le_bytes([b[0], b[1]]) as i64)
        }
        ComponentType::U32 => {
            let b = data.get(offset..offset + 4)?;
            Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]) as i64)
        }
        ComponentType::F32 => None,
    }
}

fn decode_component(data: &[u8], offset: usize, component_type: ComponentType, normalized: bool) -> Option<f32> {
    if component_type == ComponentType::F32 {
        let b = data.get(offset..offset + 4)?;
        return Some(f32::from_le_bytes([b[0], b[1], b[2], b[3]]));
    }
    let raw = read_raw(data, offset, component_type)?;
    if normalized {
        Some(raw as f32 / component_type.normalization_max())
    } else {
        Some(raw as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import_slice;

    fn accessor_doc(json: &str, bin: Vec<u8>) -> Document {
        let mut gltf = import_slice(json.as_bytes()).unwrap();
        gltf.document.root.buffers[0].data = Some(bin);
        gltf.document
    }

    #[test]
    fn reads_packed_mat3_of_i8() {
        // Spec §8 scenario S4: MAT3/BYTE, one element, row-padded to 4
        // bytes per row.
        let json = r#"{
            "asset": {"version": "2.0"},
            "buffers": [{"byteLength": 12}],
            "bufferViews": [{"buffer": 0, "byteOffset": 0, "byteLength": 12}],
            "accessors": [{"bufferView": 0, "byteOffset": 0, "componentType": 5120, "count": 1, "type": "MAT3"}]
        }"#;
        let bin = vec![1, 2, 3, 0, 4, 5, 6, 0, 7, 8, 9, 0];
        let document = accessor_doc(json, bin);
        let accessor = &document.root().accessors[0];
        let mut out = [0f32; 9];
        read_float(&document, accessor, 0, &mut out).unwrap();
        assert_eq!(out, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn reads_normalized_u16_vec3() {
        // Spec §8 scenario S5.
        let json = r#"{
            "asset": {"version": "2.0"},
            "buffers": [{"byteLength": 6}],
            "bufferViews": [{"buffer": 0, "byteOffset": 0, "byteLength": 6}],
            "accessors": [{"bufferView": 0, "byteOffset": 0, "componentType": 5123, "normalized": true, "count": 1, "type": "VEC3"}]
        }"#;
        let bin = 0u16
            .to_le_bytes()
            .iter()
            .chain(32768u16.to_le_bytes().iter())
            .chain(65535u16.to_le_bytes().iter())
            .copied()
            .collect();
        let document = accessor_doc(json, bin);
        let accessor = &document.root().accessors[0];
        let mut out = [0f32; 3];
        read_float(&document, accessor, 0, &mut out).unwrap();
        assert!((out[0] - 0.0).abs() < 1e-6);
        assert!((out[1] - 0.50000763).abs() < 1e-5);
        assert!((out[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn read_index_degrades_to_zero_without_buffer_data() {
        let json = r#"{
            "asset": {"version": "2.0"},
            "buffers": [{"byteLength": 4}],
            "bufferViews": [{"buffer": 0, "byteOffset": 0, "byteLength": 4}],
            "accessors": [{"bufferView": 0, "componentType": 5125, "count": 1, "type": "SCALAR"}]
        }"#;
        let gltf = import_slice(json.as_bytes()).unwrap();
        let accessor = &gltf.document.root().accessors[0];
        assert_eq!(read_index(&gltf.document, accessor, 0), 0);
    }
}
