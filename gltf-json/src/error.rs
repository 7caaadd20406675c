// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The single error type shared across tokenizing, deserializing,
//! resolving and validating a document, and re-exported by the root
//! `gltf` crate so callers see one error type end to end.

use std::io;

use crate::token::TokenError;

/// Everything that can go wrong while parsing or validating a glTF asset.
///
/// Variants map directly onto spec §7's taxonomy. The tokenizer's
/// three-valued [`TokenError`] collapses into [`Error::InvalidJson`];
/// out-of-range indices and schema-shape mismatches collapse into
/// [`Error::InvalidGltf`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input truncated relative to a declared length (GLB chunk framing,
    /// or a sparse/accessor byte range that runs past its buffer view).
    #[error("data too short: {0}")]
    DataTooShort(String),

    /// Wrong magic, wrong chunk kind, or an unsupported buffer/image URI
    /// scheme.
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// The input is not well-formed JSON, or a schema slot held a token
    /// of the wrong kind.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// A semantic or reference violation: an index resolved out of
    /// range, a node with two parents, a count mismatch, and so on.
    #[error("invalid glTF: {0}")]
    InvalidGltf(String),

    /// A caller-supplied option was invalid (e.g. a required out
    /// parameter was left unset).
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// A referenced file could not be found on disk.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// An I/O error occurred while reading a file.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// An allocation failed (token buffer or table undersized).
    #[error("out of memory")]
    OutOfMemory,
}

impl From<TokenError> for Error {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::NoMem => Error::OutOfMemory,
            TokenError::Invalid | TokenError::Partial => Error::InvalidJson(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
