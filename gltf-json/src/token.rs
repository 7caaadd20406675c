// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A bounded-memory, single-pass JSON tokenizer.
//!
//! This is the entry point of the parsing pipeline: it turns a raw JSON
//! byte slice into a flat array of [`Token`]s without performing any
//! numeric parsing or string unescaping, and without allocating per-token
//! storage of its own — the caller owns the token array. The schema
//! deserializer (`crate::deserialize`) walks the resulting token stream.
//!
//! The design favours one property above all else: closing a `{`/`[`
//! must be O(1), not O(depth). Every container token records its
//! enclosing container's index in `Token::parent`, so the scanner need
//! only remember "the currently open container" and can pop to its
//! enclosing container by reading that one field back. Without this, the
//! closing-bracket walk would be O(depth) per token and parsing a large,
//! flat JSON array would be quadratic.

use std::fmt;

/// The syntactic kind of a [`Token`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TokenKind {
    Object,
    Array,
    String,
    Primitive,
}

/// A single lexical unit of a scanned JSON document.
///
/// `start`/`end` are byte offsets into the scanned slice. For `String`
/// tokens they exclude the surrounding quotes. `size` is the number of
/// immediate children (key/value pairs for an object, elements for an
/// array, zero otherwise). `parent` is the index of the enclosing
/// container token, or `-1` at the top level.
#[derive(Copy, Clone, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub size: u32,
    pub parent: i32,
}

impl Token {
    pub(crate) const fn empty() -> Self {
        Token {
            kind: TokenKind::Primitive,
            start: 0,
            end: 0,
            size: 0,
            parent: -1,
        }
    }
}

/// Errors produced while scanning raw JSON bytes.
///
/// This collapses to [`crate::Error::InvalidJson`] at the public API
/// boundary; the three-way split is retained internally because it
/// mirrors the distinct failure shapes a caller might want to log
/// (truncated input vs. outright malformed input vs. an undersized
/// token buffer).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TokenError {
    /// The supplied token buffer is smaller than the input requires.
    NoMem,
    /// The input is not well-formed JSON.
    Invalid,
    /// The input ends before a value or string is closed.
    Partial,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            TokenError::NoMem => "token buffer too small",
            TokenError::Invalid => "malformed JSON",
            TokenError::Partial => "truncated JSON",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for TokenError {}

/// Scans `src`, counting the tokens a full tokenize pass would produce,
/// without writing anywhere. Used by the deserializer to size the token
/// array it then allocates in one shot.
///
/// Bracket matching during this pre-pass is checked with a small stack
/// proportional to nesting depth (not to token count), so it stays
/// linear in the input size while still catching unmatched/truncated
/// brackets up front.
pub fn count_tokens(src: &[u8]) -> Result<usize, TokenError> {
    let mut pos = 0usize;
    let mut count = 0usize;
    let mut open: Vec<TokenKind> = Vec::new();
    while pos < src.len() {
        let c = src[pos];
        match c {
            b'{' | b'[' => {
                open.push(if c == b'{' {
                    TokenKind::Object
                } else {
                    TokenKind::Array
                });
                count += 1;
                pos += 1;
            }
            b'}' | b']' => {
                let expected = if c == b'}' {
                    TokenKind::Object
                } else {
                    TokenKind::Array
                };
                match open.pop() {
                    Some(kind) if kind == expected => {}
                    _ => return Err(TokenError::Invalid),
                }
                pos += 1;
            }
            b'"' => {
                pos = skip_string(src, pos)?;
                count += 1;
            }
            b' ' | b'\t' | b'\r' | b'\n' | b':' | b',' => {
                pos += 1;
            }
            _ => {
                pos = skip_primitive(src, pos)?;
                count += 1;
            }
        }
    }
    if !open.is_empty() {
        return Err(TokenError::Partial);
    }
    Ok(count)
}

/// Scans `src`, writing one [`Token`] per lexical unit into `tokens`.
///
/// `tokens` must be exactly as long as [`count_tokens`] reports (the
/// deserializer always calls `count_tokens` first); a shorter buffer
/// yields [`TokenError::NoMem`].
pub fn tokenize(src: &[u8], tokens: &mut [Token]) -> Result<usize, TokenError> {
    let mut pos = 0usize;
    let mut tok_next = 0usize;
    let mut tok_super: i32 = -1;

    macro_rules! alloc {
        () => {{
            if tok_next >= tokens.len() {
                return Err(TokenError::NoMem);
            }
            let idx = tok_next;
            tok_next += 1;
            tokens[idx] = Token::empty();
            if tok_super != -1 {
                tokens[tok_super as usize].size += 1;
                tokens[idx].parent = tok_super;
            }
            idx
        }};
    }

    while pos < src.len() {
        let c = src[pos];
        match c {
            b'{' | b'[' => {
                let idx = alloc!();
                tokens[idx].kind = if c == b'{' {
                    TokenKind::Object
                } else {
                    TokenKind::Array
                };
                tokens[idx].start = pos;
                tokens[idx].end = usize::MAX;
                tok_super = idx as i32;
                pos += 1;
            }
            b'}' | b']' => {
                let expected = if c == b'}' {
                    TokenKind::Object
                } else {
                    TokenKind::Array
                };
                if tok_next == 0 {
                    return Err(TokenError::Invalid);
                }
                let mut cursor = tok_super;
                loop {
                    if cursor == -1 {
                        return Err(TokenError::Invalid);
                    }
                    let tok = &mut tokens[cursor as usize];
                    if tok.end == usize::MAX {
                        if tok.kind != expected {
                            return Err(TokenError::Invalid);
                        }
                        tok.end = pos + 1;
                        if tok.kind == TokenKind::Object {
                            // Every child of an object was counted once in
                            // `alloc!` (key and value both), but `size` is
                            // documented as a pair count, so halve it now
                            // that the object is known well-formed (keys and
                            // values always alternate 1:1).
                            tok.size /= 2;
                        }
                        tok_super = tok.parent;
                        break;
                    }
                    cursor = tok.parent;
                }
                pos += 1;
            }
            b'"' => {
                let start = pos + 1;
                let end_excl = skip_string(src, pos)?;
                let idx = alloc!();
                tokens[idx].kind = TokenKind::String;
                tokens[idx].start = start;
                tokens[idx].end = end_excl - 1;
                pos = end_excl;
            }
            b' ' | b'\t' | b'\r' | b'\n' | b':' | b',' => {
                pos += 1;
            }
            _ => {
                let start = pos;
                let end = skip_primitive(src, pos)?;
                let idx = alloc!();
                tokens[idx].kind = TokenKind::Primitive;
                tokens[idx].start = start;
                tokens[idx].end = end;
                pos = end;
            }
        }
    }
    if tokens[..tok_next].iter().any(|t| t.end == usize::MAX) {
        return Err(TokenError::Partial);
    }
    Ok(tok_next)
}

/// Advances past a `"`-delimited string starting at `src[pos] == b'"'`,
/// returning the offset just past the closing quote. Validates `\uXXXX`
/// escapes as four hex digits but performs no unescaping: callers see
/// the raw bytes between the quotes.
fn skip_string(src: &[u8], pos: usize) -> Result<usize, TokenError> {
    debug_assert_eq!(src[pos], b'"');
    let mut i = pos + 1;
    while i < src.len() {
        let c = src[i];
        if c == b'"' {
            return Ok(i + 1);
        }
        if c == b'\\' {
            i += 1;
            if i >= src.len() {
                break;
            }
            match src[i] {
                b'"' | b'/' | b'\\' | b'b' | b'f' | b'r' | b'n' | b't' => {
                    i += 1;
                }
                b'u' => {
                    i += 1;
                    for _ in 0..4 {
                        if i >= src.len() || !src[i].is_ascii_hexdigit() {
                            return Err(TokenError::Invalid);
                        }
                        i += 1;
                    }
                }
                _ => return Err(TokenError::Invalid),
            }
            continue;
        }
        if c < 32 {
            return Err(TokenError::Invalid);
        }
        i += 1;
    }
    Err(TokenError::Partial)
}

/// Advances past an unquoted primitive (number, `true`, `false`, `null`)
/// starting at `src[pos]`, returning the offset just past its last byte.
/// The text span is retained verbatim; no numeric parsing happens here.
fn skip_primitive(src: &[u8], pos: usize) -> Result<usize, TokenError> {
    let mut i = pos;
    while i < src.len() {
        match src[i] {
            b' ' | b'\t' | b'\r' | b'\n' | b',' | b']' | b'}' | b':' => break,
            c if c < 32 || c >= 127 => return Err(TokenError::Invalid),
            _ => i += 1,
        }
    }
    if i == pos {
        return Err(TokenError::Invalid);
    }
    Ok(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize_all(src: &str) -> Vec<Token> {
        let n = count_tokens(src.as_bytes()).unwrap();
        let mut tokens = vec![Token::empty(); n];
        let written = tokenize(src.as_bytes(), &mut tokens).unwrap();
        assert_eq!(written, n);
        tokens
    }

    #[test]
    fn minimal_object() {
        let tokens = tokenize_all(r#"{"asset":{"version":"2.0"}}"#);
        // root object, "asset" key, nested object, "version" key, "2.0" value
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].kind, TokenKind::Object);
        assert_eq!(tokens[0].size, 1);
        assert_eq!(tokens[0].parent, -1);
        assert_eq!(tokens[2].kind, TokenKind::Object);
        assert_eq!(tokens[2].parent, 0);
    }

    #[test]
    fn count_matches_populated_pass() {
        let src = r#"{"a":[1,2,3],"b":{"c":null,"d":true},"e":"hi"}"#;
        let n = count_tokens(src.as_bytes()).unwrap();
        let mut tokens = vec![Token::empty(); n];
        let written = tokenize(src.as_bytes(), &mut tokens).unwrap();
        assert_eq!(n, written);
    }

    #[test]
    fn rejects_unmatched_closing_bracket() {
        assert_eq!(count_tokens(b"{}}" ), Err(TokenError::Invalid));
    }

    #[test]
    fn rejects_truncated_string() {
        assert_eq!(count_tokens(br#"{"a": "b"#), Err(TokenError::Partial));
    }

    #[test]
    fn rejects_bad_unicode_escape() {
        assert_eq!(count_tokens(br#""\uZZZZ""#), Err(TokenError::Invalid));
    }

    #[test]
    fn nomem_on_undersized_buffer() {
        let src = r#"{"a":1}"#;
        let mut tokens = vec![Token::empty(); 1];
        assert_eq!(tokenize(src.as_bytes(), &mut tokens), Err(TokenError::NoMem));
    }

    #[test]
    fn primitive_rejects_control_and_high_bytes() {
        assert_eq!(count_tokens(&[b't', b'r', 1, b'e']), Err(TokenError::Invalid));
        assert_eq!(count_tokens(&[b'n', 200, b'l']), Err(TokenError::Invalid));
    }

    #[test]
    fn object_size_counts_pairs_not_children() {
        let tokens = tokenize_all(r#"{"a":1,"b":2,"c":3}"#);
        assert_eq!(tokens[0].kind, TokenKind::Object);
        assert_eq!(tokens[0].size, 3);
    }
}
