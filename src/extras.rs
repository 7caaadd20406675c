// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Extras retrieval (spec §4.8).
//!
//! `gltf-json` captures an `extras` member's literal JSON text as a byte
//! range into the source it was deserialized from, rather than parsing
//! it into any particular shape. [`copy_extras_json`] turns that range
//! back into a string.
//!
//! The original design this is drawn from writes into a caller-supplied,
//! capacity-bounded output buffer and NUL-terminates it; Rust has no use
//! for that pattern; an owned `String` of exactly the captured bytes
//! plays the same role without a destination buffer or capacity
//! parameter.

use gltf_json::Extras;

use crate::{Document, Error, Result};

/// Returns the literal JSON text an `extras` member was written as,
/// verbatim — including the surrounding quotes if it was a string.
pub fn copy_extras_json(document: &Document, extras: &Extras) -> Result<String> {
    let bytes = document
        .json_text()
        .get(extras.start..extras.end)
        .ok_or_else(|| Error::InvalidOptions("extras byte range is out of bounds".into()))?;
    String::from_utf8(bytes.to_vec())
        .map_err(|_| Error::InvalidJson("extras byte range is not valid UTF-8".into()))
}

#[cfg(test)]
mod tests {
    use crate::import_slice;

    #[test]
    fn copies_literal_extras_text() {
        let json = r#"{
            "asset": {"version": "2.0", "extras": {"note": "hi", "n": 3}}
        }"#;
        let gltf = import_slice(json.as_bytes()).unwrap();
        let extras = gltf.document.asset().extras.as_ref().unwrap();
        let text = super::copy_extras_json(&gltf.document, extras).unwrap();
        assert_eq!(text, r#"{"note": "hi", "n": 3}"#);
    }

    #[test]
    fn preserves_quotes_for_string_extras() {
        let json = r#"{
            "asset": {"version": "2.0", "extras": "plain text"}
        }"#;
        let gltf = import_slice(json.as_bytes()).unwrap();
        let extras = gltf.document.asset().extras.as_ref().unwrap();
        let text = super::copy_extras_json(&gltf.document, extras).unwrap();
        assert_eq!(text, "\"plain text\"");
    }
}
