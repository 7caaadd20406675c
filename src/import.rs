// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Public entry points (spec §6): parsing a document from memory or
//! disk, loading its external buffers, and re-running validation.
//!
//! Parsing and buffer loading are deliberately separate steps.
//! [`import_slice`] only demultiplexes the container and runs the
//! `gltf-json` pipeline — tokenize, deserialize, resolve, validate —
//! against the JSON text alone; no file I/O happens. [`load_buffers`]
//! then fills in every [`gltf_json::Buffer::data`] slot from its `uri`
//! (or leaves the GLB's embedded buffer alone, since [`import_slice`]
//! already attached it), and [`import`] chains the two for the common
//! case. Validation runs once against the document without buffer data,
//! and again after buffers are loaded, since some invariants (accessor
//! and sparse byte ranges) can only be checked once the bytes exist;
//! both calls are cheap and idempotent.

use std::path::Path;

use gltf_json as json;

use crate::container::{self, FormatHint};
use crate::document::{Document, Gltf};
use crate::{Error, Result};

/// Caller-supplied parsing configuration (spec §6 `Options`).
///
/// The original design's allocator-pair and token-count-hint fields have
/// no idiomatic Rust equivalent: `Vec`'s global allocator already
/// amortizes the token buffer's allocation, and `gltf_json::token::count_tokens`
/// is a cheap single pass over the input, so there is nothing for a
/// caller to usefully override there. `format` is the one knob worth
/// keeping — it lets a caller who already knows a payload's shape skip
/// the magic-number sniff.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    pub format: FormatHint,
}

/// Parses `data` (either `.gltf` JSON text or a `.glb` container) into a
/// [`Gltf`]. External buffers referenced by URI are not loaded; call
/// [`load_buffers`] (or use [`import`], which does so automatically).
pub fn import_slice(data: &[u8]) -> Result<Gltf> {
    import_slice_with_options(data, Options::default())
}

pub fn import_slice_with_options(data: &[u8], options: Options) -> Result<Gltf> {
    let (json_text, bin_chunk) = container::split(data, options.format)?;

    let root = json::deserialize::deserialize(json_text)?;
    let mut root = root.resolve()?;

    let blob = bin_chunk.map(<[u8]>::to_vec);
    if let Some(bin) = &blob {
        if let Some(buffer) = root.buffers.get_mut(0) {
            if buffer.uri.is_none() && buffer.data.is_none() {
                buffer.data = Some(bin.clone());
            }
        }
    }

    json::validation::validate_root(&root)?;

    let document = Document::new(root, json_text.to_vec());
    Ok(Gltf { document, blob })
}

/// Reads `path` from disk and parses it, then loads every buffer the
/// document references relative to `path`'s directory.
pub fn import(path: impl AsRef<Path>) -> Result<Gltf> {
    let path = path.as_ref();
    let data = read_file(path)?;
    let mut gltf = import_slice(&data)?;
    load_buffers(&mut gltf.document, path.parent())?;
    json::validation::validate_root(gltf.document.root())?;
    Ok(gltf)
}

/// Loads every buffer in `document` whose data is not already present,
/// resolving relative file URIs against `base_dir` (the directory the
/// source `.gltf`/`.glb` file lives in, or `None` for an in-memory
/// document with no filesystem context).
pub fn load_buffers(document: &mut Document, base_dir: Option<&Path>) -> Result<()> {
    for (index, buffer) in document.root.buffers.iter_mut().enumerate() {
        if buffer.data.is_some() {
            continue;
        }
        let Some(uri) = buffer.uri.as_deref() else {
            log::warn!("buffer {index} has no uri and no embedded data; leaving it unloaded");
            continue;
        };

        if let Some(rest) = uri.strip_prefix("data:") {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| Error::UnknownFormat(format!("buffer {index} data URI has no payload")))?;
            if !header.ends_with(";base64") {
                return Err(Error::UnknownFormat(format!(
                    "buffer {index} data URI is not base64-encoded"
                )));
            }
            log::debug!("buffer {index}: decoding embedded base64 payload");
            buffer.data = Some(load_buffer_base64(buffer.byte_length, payload)?);
        } else if uri.contains("://") {
            return Err(Error::UnknownFormat(format!(
                "buffer {index} uri scheme is not supported: {uri}"
            )));
        } else {
            let decoded = urlencoding::decode(uri)
                .map_err(|_| Error::UnknownFormat(format!("buffer {index} uri is not valid percent-encoding")))?;
            let path = match base_dir {
                Some(dir) => dir.join(decoded.as_ref()),
                None => std::path::PathBuf::from(decoded.as_ref()),
            };
            log::debug!("buffer {index}: reading {}", path.display());
            buffer.data = Some(read_file(&path)?);
        }
    }
    Ok(())
}

/// Decodes a base64-encoded buffer payload (the body of a `data:` URI,
/// sans the `data:...;base64,` prefix), logging rather than failing if
/// the decoded length disagrees with the accessor's declared
/// `byteLength` (spec §6).
pub fn load_buffer_base64(expected_len: usize, text: &str) -> Result<Vec<u8>> {
    use base64::Engine;
    let trimmed = text.trim_end_matches('=');
    let bytes = base64::engine::general_purpose::STANDARD_NO_PAD
        .decode(trimmed)
        .map_err(|e| Error::UnknownFormat(format!("invalid base64 payload: {e}")))?;
    if bytes.len() != expected_len {
        log::warn!(
            "decoded buffer is {} bytes but byteLength declares {expected_len}",
            bytes.len()
        );
    }
    Ok(bytes)
}

/// Re-runs [`gltf_json::validation::validate_root`] against `document`,
/// e.g. after [`load_buffers`] has filled in data the first validation
/// pass could not see.
pub fn validate(document: &Document) -> Result<()> {
    json::validation::validate_root(document.root())
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound(path.display().to_string())
        } else {
            Error::IoError(e)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_slice_rejects_missing_required_asset_version() {
        let json = br#"{"asset": {}}"#;
        assert!(import_slice(json).is_err());
    }

    #[test]
    fn import_slice_loads_glb_embedded_buffer_without_explicit_load_buffers() {
        let json = br#"{
            "asset": {"version": "2.0"},
            "buffers": [{"byteLength": 4}]
        }"#;
        let mut chunks = Vec::new();
        chunks.extend_from_slice(&(json.len() as u32).to_le_bytes());
        chunks.extend_from_slice(&0x4E4F_534Au32.to_le_bytes());
        chunks.extend_from_slice(json);
        chunks.extend_from_slice(&4u32.to_le_bytes());
        chunks.extend_from_slice(&0x004E_4942u32.to_le_bytes());
        chunks.extend_from_slice(&[9, 9, 9, 9]);

        let mut glb = Vec::new();
        glb.extend_from_slice(&0x4654_6C67u32.to_le_bytes());
        glb.extend_from_slice(&2u32.to_le_bytes());
        glb.extend_from_slice(&((12 + chunks.len()) as u32).to_le_bytes());
        glb.extend_from_slice(&chunks);

        let gltf = import_slice(&glb).unwrap();
        assert_eq!(gltf.document.root().buffers[0].data, Some(vec![9, 9, 9, 9]));
        assert_eq!(gltf.blob, Some(vec![9, 9, 9, 9]));
    }

    #[test]
    fn load_buffer_base64_decodes_payload() {
        let bytes = load_buffer_base64(3, "AQID").unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }
}
