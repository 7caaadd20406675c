// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The binary container demultiplexer (spec §4.2).
//!
//! A `.glb` file is a 12-byte header followed by one or more 8-byte
//! chunk headers, each immediately followed by that many bytes of
//! payload. The first chunk is always JSON; an optional second chunk
//! holds binary buffer data. Any later chunk of an unrecognized kind is
//! skipped rather than rejected, since new chunk kinds may be added to
//! the format over time.
//!
//! Plain `.gltf` text — JSON with no container at all — is detected by
//! the absence of the magic number at the start of the input and passed
//! straight through.

use crate::{Error, Result};

const MAGIC: u32 = 0x4654_6C67;
const VERSION: u32 = 2;
const JSON_CHUNK: u32 = 0x4E4F_534A;
const BIN_CHUNK: u32 = 0x004E_4942;
const HEADER_LEN: usize = 12;

/// Tells [`split`] whether to sniff the input or trust the caller's
/// claim about its shape (spec §6 `Options`).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FormatHint {
    /// Detect JSON vs. binary from the first four bytes.
    #[default]
    Auto,
    /// Treat the input as plain JSON text, even if it happens to start
    /// with the GLB magic.
    Json,
    /// Treat the input as a binary container; fail if the header does
    /// not actually carry the magic.
    Binary,
}

/// Splits `data` into its JSON chunk and, if present, its binary chunk.
///
/// For plain JSON input the returned JSON slice is `data` itself and the
/// binary slice is `None`. Chunk payloads that run past the declared
/// total length, or past `data` itself, are rejected as
/// [`Error::DataTooShort`]; a magic/version mismatch is
/// [`Error::UnknownFormat`].
pub fn split(data: &[u8], hint: FormatHint) -> Result<(&[u8], Option<&[u8]>)> {
    let looks_binary = data.len() >= 4 && read_u32(data, 0) == MAGIC;
    match hint {
        FormatHint::Json => return Ok((data, None)),
        FormatHint::Auto if !looks_binary => return Ok((data, None)),
        FormatHint::Auto | FormatHint::Binary => {}
    }

    if data.len() < HEADER_LEN {
        return Err(Error::DataTooShort(format!(
            "GLB header needs {HEADER_LEN} bytes but input has {}",
            data.len()
        )));
    }
    if read_u32(data, 0) != MAGIC {
        return Err(Error::UnknownFormat("missing glTF binary magic".into()));
    }
    let version = read_u32(data, 4);
    if version != VERSION {
        return Err(Error::UnknownFormat(format!(
            "unsupported GLB version {version}"
        )));
    }
    let total_length = read_u32(data, 8) as usize;
    if total_length > data.len() {
        return Err(Error::DataTooShort(format!(
            "GLB declares total length {total_length} but input has {}",
            data.len()
        )));
    }

    let mut offset = HEADER_LEN;
    let mut json_chunk: Option<&[u8]> = None;
    let mut bin_chunk: Option<&[u8]> = None;
    let mut first = true;
    while offset + 8 <= total_length {
        let chunk_length = read_u32(data, offset) as usize;
        let chunk_kind = read_u32(data, offset + 4);
        let payload_start = offset + 8;
        let payload_end = payload_start + chunk_length;
        if payload_end > total_length {
            return Err(Error::DataTooShort(
                "GLB chunk payload runs past the declared total length".into(),
            ));
        }
        let payload = &data[payload_start..payload_end];
        if first {
            if chunk_kind != JSON_CHUNK {
                return Err(Error::UnknownFormat(
                    "first GLB chunk must be the JSON chunk".into(),
                ));
            }
            json_chunk = Some(payload);
            first = false;
        } else if chunk_kind == BIN_CHUNK && bin_chunk.is_none() {
            bin_chunk = Some(payload);
        } else {
            log::debug!("skipping GLB chunk of kind {chunk_kind:#010x}");
        }
        offset = payload_end;
    }

    let json_chunk = json_chunk.ok_or_else(|| Error::UnknownFormat("GLB has no JSON chunk".into()))?;
    Ok((json_chunk, bin_chunk))
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([data[offset], data[offset + 1], data[offset + 2], data[offset + 3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(kind: u32, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        out.extend_from_slice(&kind.to_le_bytes());
        out.extend_from_slice(payload);
        out
    }

    fn glb(json: &[u8], bin: Option<&[u8]>) -> Vec<u8> {
        let mut chunks = chunk(JSON_CHUNK, json);
        if let Some(bin) = bin {
            chunks.extend_from_slice(&chunk(BIN_CHUNK, bin));
        }
        let mut out = Vec::new();
        out.extend_from_slice(&MAGIC.to_le_bytes());
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&((HEADER_LEN + chunks.len()) as u32).to_le_bytes());
        out.extend_from_slice(&chunks);
        out
    }

    #[test]
    fn plain_json_passes_through() {
        let data = br#"{"asset":{"version":"2.0"}}"#;
        let (json, bin) = split(data, FormatHint::Auto).unwrap();
        assert_eq!(json, data);
        assert!(bin.is_none());
    }

    #[test]
    fn splits_json_and_bin_chunks() {
        let data = glb(br#"{"asset":{}}"#, Some(&[1, 2, 3, 4]));
        let (json, bin) = split(&data, FormatHint::Auto).unwrap();
        assert_eq!(json, br#"{"asset":{}}"#);
        assert_eq!(bin, Some(&[1u8, 2, 3, 4][..]));
    }

    #[test]
    fn glb_without_bin_chunk() {
        let data = glb(br#"{}"#, None);
        let (_, bin) = split(&data, FormatHint::Auto).unwrap();
        assert!(bin.is_none());
    }

    #[test]
    fn rejects_bad_version() {
        let mut data = glb(br#"{}"#, None);
        data[4..8].copy_from_slice(&99u32.to_le_bytes());
        assert!(matches!(split(&data, FormatHint::Auto), Err(Error::UnknownFormat(_))));
    }

    #[test]
    fn rejects_truncated_declared_length() {
        let mut data = glb(br#"{}"#, None);
        let too_long = data.len() as u32 + 100;
        data[8..12].copy_from_slice(&too_long.to_le_bytes());
        assert!(matches!(split(&data, FormatHint::Auto), Err(Error::DataTooShort(_))));
    }

    #[test]
    fn short_input_is_treated_as_json_under_auto() {
        // Looser than a strict 12-byte minimum probe: anything that
        // doesn't start with the magic is just JSON, however short.
        let data = b"{}";
        let (json, bin) = split(data, FormatHint::Auto).unwrap();
        assert_eq!(json, data);
        assert!(bin.is_none());
    }
}
