// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The schema deserializer (spec §4.3): a key-dispatched recursive walk
//! over the token stream `crate::token` produces, building a [`Root`]
//! directly rather than through an intermediate generic JSON value.
//!
//! Every schema object gets its own `read_*` function. Each takes a
//! [`Cursor`] (the shared source bytes and token array) and the index of
//! its own token, and returns the parsed value plus the index of the
//! token just past its own subtree — so the caller knows where the next
//! sibling starts without re-scanning. Unknown object members and
//! unrecognized extension blocks fall through to [`Cursor::skip`], the
//! one generic subtree-skipper every `read_*` function relies on.
//!
//! Array members are read with [`Cursor::read_array`], which allocates
//! the output `Vec` with `Vec::with_capacity` sized to the token's own
//! `size` — the array-allocation contract spec §4.3 describes.

use crate::accessor::{Accessor, ComponentType, Sparse, SparseIndices, SparseValues, Type};
use crate::animation::{Animation, AnimationChannel, AnimationSampler, Interpolation, TargetPath};
use crate::asset::Asset;
use crate::buffer::{Buffer, Target, View};
use crate::camera::{Camera, Orthographic, Perspective, Projection};
use crate::extensions::{Light, LightKind};
use crate::extras::Extras;
use crate::image::Image;
use crate::index::Index;
use crate::material::{
    AlphaMode, Material, NormalTexture, OcclusionTexture, PbrMetallicRoughness, PbrSpecularGlossiness,
};
use crate::mesh::{Attribute, Mesh, Mode, MorphTarget, Primitive, Semantic};
use crate::scene::{Node, Scene, Transform};
use crate::skin::Skin;
use crate::texture::{Info, Sampler, Texture, TextureTransform};
use crate::token::{self, Token, TokenKind};
use crate::{extensions, Error, Root};

/// Tokenizes `src` and deserializes it into a [`Root`]. Cross-entity
/// references are checked and back-links fixed up by a separate call to
/// [`Root::resolve`]; this function only builds the tables.
pub fn deserialize(src: &[u8]) -> Result<Root, Error> {
    let n = token::count_tokens(src)?;
    let mut tokens = vec![Token::empty(); n];
    token::tokenize(src, &mut tokens)?;
    let cursor = Cursor { src, tokens: &tokens };
    if tokens.is_empty() {
        return Err(Error::InvalidJson("empty document".into()));
    }
    let (root, _) = read_root(&cursor, 0)?;
    Ok(root)
}

/// Shared, cheaply-copied view over the source bytes and token array a
/// deserialization pass walks. Every `read_*` function takes one of
/// these plus the index of the token it is responsible for.
#[derive(Clone, Copy)]
struct Cursor<'a> {
    src: &'a [u8],
    tokens: &'a [Token],
}

impl<'a> Cursor<'a> {
    fn text(&self, idx: usize) -> &'a str {
        let t = &self.tokens[idx];
        std::str::from_utf8(&self.src[t.start..t.end]).unwrap_or_default()
    }

    fn expect(&self, idx: usize, kind: TokenKind) -> Result<(), Error> {
        if self.tokens[idx].kind != kind {
            return Err(Error::InvalidJson(format!(
                "expected {kind:?}, found {:?}",
                self.tokens[idx].kind
            )));
        }
        Ok(())
    }

    /// Advances past the value (of any kind) at `idx`, returning the
    /// index just past its entire subtree. The one function every
    /// `read_*` function falls back on for members it does not
    /// recognize.
    fn skip(&self, idx: usize) -> usize {
        let t = &self.tokens[idx];
        match t.kind {
            TokenKind::Primitive | TokenKind::String => idx + 1,
            TokenKind::Array => {
                let mut i = idx + 1;
                for _ in 0..t.size {
                    i = self.skip(i);
                }
                i
            }
            TokenKind::Object => {
                let mut i = idx + 1;
                for _ in 0..t.size {
                    i += 1; // key
                    i = self.skip(i); // value
                }
                i
            }
        }
    }

    /// Captures the byte range of the value at `idx` verbatim, including
    /// the surrounding quotes for a string, for later retrieval via
    /// `gltf::copy_extras_json`.
    fn read_extras(&self, idx: usize) -> (Extras, usize) {
        let t = &self.tokens[idx];
        let (start, end) = match t.kind {
            TokenKind::String => (t.start - 1, t.end + 1),
            _ => (t.start, t.end),
        };
        (Extras { start, end }, self.skip(idx))
    }

    fn read_string(&self, idx: usize) -> Result<(String, usize), Error> {
        self.expect(idx, TokenKind::String)?;
        Ok((self.text(idx).to_string(), idx + 1))
    }

    fn read_bool(&self, idx: usize) -> Result<(bool, usize), Error> {
        self.expect(idx, TokenKind::Primitive)?;
        match self.text(idx) {
            "true" => Ok((true, idx + 1)),
            "false" => Ok((false, idx + 1)),
            other => Err(Error::InvalidJson(format!("expected a boolean, found `{other}`"))),
        }
    }

    fn read_f32(&self, idx: usize) -> Result<(f32, usize), Error> {
        self.expect(idx, TokenKind::Primitive)?;
        let text = self.text(idx);
        let value = text
            .parse::<f32>()
            .map_err(|_| Error::InvalidJson(format!("expected a number, found `{text}`")))?;
        Ok((value, idx + 1))
    }

    fn read_u32(&self, idx: usize) -> Result<(u32, usize), Error> {
        self.expect(idx, TokenKind::Primitive)?;
        let text = self.text(idx);
        let value = text
            .parse::<u32>()
            .map_err(|_| Error::InvalidJson(format!("expected a non-negative integer, found `{text}`")))?;
        Ok((value, idx + 1))
    }

    fn read_usize(&self, idx: usize) -> Result<(usize, usize), Error> {
        let (value, next) = self.read_u32(idx)?;
        Ok((value as usize, next))
    }

    /// Reads the array at `idx`, calling `read_one` for every element in
    /// order. The output `Vec` is allocated with capacity equal to the
    /// token's own `size`.
    fn read_array<T>(
        &self,
        idx: usize,
        mut read_one: impl FnMut(&Cursor<'a>, usize) -> Result<(T, usize), Error>,
    ) -> Result<(Vec<T>, usize), Error> {
        self.expect(idx, TokenKind::Array)?;
        let n = self.tokens[idx].size as usize;
        let mut out = Vec::with_capacity(n);
        let mut i = idx + 1;
        for _ in 0..n {
            let (value, next) = read_one(self, i)?;
            out.push(value);
            i = next;
        }
        Ok((out, i))
    }

    fn read_f32_array(&self, idx: usize) -> Result<(Vec<f32>, usize), Error> {
        self.read_array(idx, |c, i| c.read_f32(i))
    }

    fn read_index_array<T>(&self, idx: usize) -> Result<(Vec<Index<T>>, usize), Error> {
        self.read_array(idx, |c, i| {
            let (value, next) = c.read_u32(i)?;
            Ok((Index::new(value), next))
        })
    }

    fn read_string_array(&self, idx: usize) -> Result<(Vec<String>, usize), Error> {
        self.read_array(idx, |c, i| c.read_string(i))
    }

    fn read_f32_fixed<const N: usize>(&self, idx: usize) -> Result<([f32; N], usize), Error> {
        let (values, next) = self.read_f32_array(idx)?;
        let len = values.len();
        let array: [f32; N] = values
            .try_into()
            .map_err(|_| Error::InvalidJson(format!("expected an array of {N} numbers, found {len}")))?;
        Ok((array, next))
    }

    /// Walks the object at `idx`, invoking `f` once per member with its
    /// key and the index of its value. `f` must return the index just
    /// past the value it was given — calling [`Cursor::skip`] if it does
    /// not recognize the key.
    fn walk_object(
        &self,
        idx: usize,
        mut f: impl FnMut(&Cursor<'a>, &str, usize) -> Result<usize, Error>,
    ) -> Result<usize, Error> {
        self.expect(idx, TokenKind::Object)?;
        let n = self.tokens[idx].size as usize;
        let mut i = idx + 1;
        for _ in 0..n {
            self.expect(i, TokenKind::String)?;
            let key = self.text(i).to_string();
            let value_idx = i + 1;
            i = f(self, &key, value_idx)?;
        }
        Ok(i)
    }
}

fn missing(context: &str, member: &str) -> Error {
    Error::InvalidGltf(format!("{context} is missing required member `{member}`"))
}

fn read_root(c: &Cursor, idx: usize) -> Result<(Root, usize), Error> {
    let mut root = Root::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "asset" => {
            let (asset, n) = read_asset(c, v)?;
            root.asset = asset;
            Ok(n)
        }
        "accessors" => {
            let (values, n) = c.read_array(v, read_accessor)?;
            root.accessors = values;
            Ok(n)
        }
        "animations" => {
            let (values, n) = c.read_array(v, read_animation)?;
            root.animations = values;
            Ok(n)
        }
        "buffers" => {
            let (values, n) = c.read_array(v, read_buffer)?;
            root.buffers = values;
            Ok(n)
        }
        "bufferViews" => {
            let (values, n) = c.read_array(v, read_buffer_view)?;
            root.buffer_views = values;
            Ok(n)
        }
        "cameras" => {
            let (values, n) = c.read_array(v, read_camera)?;
            root.cameras = values;
            Ok(n)
        }
        "images" => {
            let (values, n) = c.read_array(v, read_image)?;
            root.images = values;
            Ok(n)
        }
        "materials" => {
            let (values, n) = c.read_array(v, read_material)?;
            root.materials = values;
            Ok(n)
        }
        "meshes" => {
            let (values, n) = c.read_array(v, read_mesh)?;
            root.meshes = values;
            Ok(n)
        }
        "nodes" => {
            let (values, n) = c.read_array(v, read_node)?;
            root.nodes = values;
            Ok(n)
        }
        "samplers" => {
            let (values, n) = c.read_array(v, read_sampler)?;
            root.samplers = values;
            Ok(n)
        }
        "scenes" => {
            let (values, n) = c.read_array(v, read_scene)?;
            root.scenes = values;
            Ok(n)
        }
        "scene" => {
            let (value, n) = c.read_u32(v)?;
            root.scene = Some(Index::new(value));
            Ok(n)
        }
        "skins" => {
            let (values, n) = c.read_array(v, read_skin)?;
            root.skins = values;
            Ok(n)
        }
        "textures" => {
            let (values, n) = c.read_array(v, read_texture)?;
            root.textures = values;
            Ok(n)
        }
        "extensionsUsed" => {
            let (values, n) = c.read_string_array(v)?;
            root.extensions_used = values;
            Ok(n)
        }
        "extensionsRequired" => {
            let (values, n) = c.read_string_array(v)?;
            root.extensions_required = values;
            Ok(n)
        }
        "extensions" => c.walk_object(v, |c, ext_key, ext_v| match ext_key {
            extensions::KHR_LIGHTS_PUNCTUAL => c.walk_object(ext_v, |c, k, v| match k {
                "lights" => {
                    let (values, n) = c.read_array(v, read_light)?;
                    root.lights = values;
                    Ok(n)
                }
                _ => Ok(c.skip(v)),
            }),
            _ => Ok(c.skip(ext_v)),
        }),
        _ => Ok(c.skip(v)),
    })?;
    Ok((root, next))
}

fn read_asset(c: &Cursor, idx: usize) -> Result<(Asset, usize), Error> {
    let mut asset = Asset::default();
    let mut version = None;
    let next = c.walk_object(idx, |c, key, v| match key {
        "copyright" => {
            let (s, n) = c.read_string(v)?;
            asset.copyright = Some(s);
            Ok(n)
        }
        "generator" => {
            let (s, n) = c.read_string(v)?;
            asset.generator = Some(s);
            Ok(n)
        }
        "version" => {
            let (s, n) = c.read_string(v)?;
            version = Some(s);
            Ok(n)
        }
        "minVersion" => {
            let (s, n) = c.read_string(v)?;
            asset.min_version = Some(s);
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            asset.extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    asset.version = version.ok_or_else(|| missing("asset", "version"))?;
    Ok((asset, next))
}

fn read_buffer(c: &Cursor, idx: usize) -> Result<(Buffer, usize), Error> {
    let mut buffer = Buffer::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "name" => {
            let (s, n) = c.read_string(v)?;
            buffer.name = Some(s);
            Ok(n)
        }
        "byteLength" => {
            let (value, n) = c.read_usize(v)?;
            buffer.byte_length = value;
            Ok(n)
        }
        "uri" => {
            let (s, n) = c.read_string(v)?;
            buffer.uri = Some(s);
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            buffer.extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((buffer, next))
}

fn read_buffer_view(c: &Cursor, idx: usize) -> Result<(View, usize), Error> {
    let mut buffer: Option<Index<Buffer>> = None;
    let mut view = View::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "name" => {
            let (s, n) = c.read_string(v)?;
            view.name = Some(s);
            Ok(n)
        }
        "buffer" => {
            let (value, n) = c.read_u32(v)?;
            buffer = Some(Index::new(value));
            Ok(n)
        }
        "byteOffset" => {
            let (value, n) = c.read_usize(v)?;
            view.byte_offset = value;
            Ok(n)
        }
        "byteLength" => {
            let (value, n) = c.read_usize(v)?;
            view.byte_length = value;
            Ok(n)
        }
        "byteStride" => {
            let (value, n) = c.read_usize(v)?;
            view.byte_stride = value;
            Ok(n)
        }
        "target" => {
            let (value, n) = c.read_u32(v)?;
            view.target = Target::from_gl_enum(value).unwrap_or_default();
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            view.extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    view.buffer = buffer.ok_or_else(|| missing("bufferView", "buffer"))?;
    Ok((view, next))
}

fn read_component_type(c: &Cursor, idx: usize) -> Result<(ComponentType, usize), Error> {
    let (value, next) = c.read_u32(idx)?;
    let component_type = ComponentType::from_gl_enum(value)
        .ok_or_else(|| Error::InvalidGltf(format!("unrecognized componentType `{value}`")))?;
    Ok((component_type, next))
}

fn read_accessor_type(c: &Cursor, idx: usize) -> Result<(Type, usize), Error> {
    let (s, next) = c.read_string(idx)?;
    let ty = Type::from_str(&s).ok_or_else(|| Error::InvalidGltf(format!("unrecognized accessor type `{s}`")))?;
    Ok((ty, next))
}

fn read_sparse_indices(c: &Cursor, idx: usize) -> Result<(SparseIndices, usize), Error> {
    let mut buffer_view: Option<Index<View>> = None;
    let mut byte_offset = 0usize;
    let mut component_type: Option<ComponentType> = None;
    let mut extras = None;
    let next = c.walk_object(idx, |c, key, v| match key {
        "bufferView" => {
            let (value, n) = c.read_u32(v)?;
            buffer_view = Some(Index::new(value));
            Ok(n)
        }
        "byteOffset" => {
            let (value, n) = c.read_usize(v)?;
            byte_offset = value;
            Ok(n)
        }
        "componentType" => {
            let (value, n) = read_component_type(c, v)?;
            component_type = Some(value);
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((
        SparseIndices {
            buffer_view: buffer_view.ok_or_else(|| missing("accessor.sparse.indices", "bufferView"))?,
            byte_offset,
            component_type: component_type.ok_or_else(|| missing("accessor.sparse.indices", "componentType"))?,
            extras,
        },
        next,
    ))
}

fn read_sparse_values(c: &Cursor, idx: usize) -> Result<(SparseValues, usize), Error> {
    let mut buffer_view: Option<Index<View>> = None;
    let mut byte_offset = 0usize;
    let mut extras = None;
    let next = c.walk_object(idx, |c, key, v| match key {
        "bufferView" => {
            let (value, n) = c.read_u32(v)?;
            buffer_view = Some(Index::new(value));
            Ok(n)
        }
        "byteOffset" => {
            let (value, n) = c.read_usize(v)?;
            byte_offset = value;
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((
        SparseValues {
            buffer_view: buffer_view.ok_or_else(|| missing("accessor.sparse.values", "bufferView"))?,
            byte_offset,
            extras,
        },
        next,
    ))
}

fn read_sparse(c: &Cursor, idx: usize) -> Result<(Sparse, usize), Error> {
    let mut count: Option<usize> = None;
    let mut indices: Option<SparseIndices> = None;
    let mut values: Option<SparseValues> = None;
    let mut extras = None;
    let next = c.walk_object(idx, |c, key, v| match key {
        "count" => {
            let (value, n) = c.read_usize(v)?;
            count = Some(value);
            Ok(n)
        }
        "indices" => {
            let (value, n) = read_sparse_indices(c, v)?;
            indices = Some(value);
            Ok(n)
        }
        "values" => {
            let (value, n) = read_sparse_values(c, v)?;
            values = Some(value);
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((
        Sparse {
            count: count.ok_or_else(|| missing("accessor.sparse", "count"))?,
            indices: indices.ok_or_else(|| missing("accessor.sparse", "indices"))?,
            values: values.ok_or_else(|| missing("accessor.sparse", "values"))?,
            extras,
        },
        next,
    ))
}

fn read_accessor(c: &Cursor, idx: usize) -> Result<(Accessor, usize), Error> {
    let mut buffer_view: Option<Index<View>> = None;
    let mut byte_offset = 0usize;
    let mut component_type: Option<ComponentType> = None;
    let mut normalized = false;
    let mut type_: Option<Type> = None;
    let mut count: Option<usize> = None;
    let mut min = None;
    let mut max = None;
    let mut sparse = None;
    let mut name = None;
    let mut extras = None;
    let next = c.walk_object(idx, |c, key, v| match key {
        "name" => {
            let (s, n) = c.read_string(v)?;
            name = Some(s);
            Ok(n)
        }
        "bufferView" => {
            let (value, n) = c.read_u32(v)?;
            buffer_view = Some(Index::new(value));
            Ok(n)
        }
        "byteOffset" => {
            let (value, n) = c.read_usize(v)?;
            byte_offset = value;
            Ok(n)
        }
        "componentType" => {
            let (value, n) = read_component_type(c, v)?;
            component_type = Some(value);
            Ok(n)
        }
        "normalized" => {
            let (value, n) = c.read_bool(v)?;
            normalized = value;
            Ok(n)
        }
        "type" => {
            let (value, n) = read_accessor_type(c, v)?;
            type_ = Some(value);
            Ok(n)
        }
        "count" => {
            let (value, n) = c.read_usize(v)?;
            count = Some(value);
            Ok(n)
        }
        "min" => {
            let (values, n) = c.read_f32_array(v)?;
            min = Some(values);
            Ok(n)
        }
        "max" => {
            let (values, n) = c.read_f32_array(v)?;
            max = Some(values);
            Ok(n)
        }
        "sparse" => {
            let (value, n) = read_sparse(c, v)?;
            sparse = Some(value);
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((
        Accessor {
            name,
            buffer_view,
            byte_offset,
            component_type: component_type.ok_or_else(|| missing("accessor", "componentType"))?,
            normalized,
            type_: type_.ok_or_else(|| missing("accessor", "type"))?,
            count: count.ok_or_else(|| missing("accessor", "count"))?,
            min,
            max,
            sparse,
            extras,
            stride: 0,
        },
        next,
    ))
}

fn read_image(c: &Cursor, idx: usize) -> Result<(Image, usize), Error> {
    let mut image = Image::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "name" => {
            let (s, n) = c.read_string(v)?;
            image.name = Some(s);
            Ok(n)
        }
        "uri" => {
            let (s, n) = c.read_string(v)?;
            image.uri = Some(s);
            Ok(n)
        }
        "bufferView" => {
            let (value, n) = c.read_u32(v)?;
            image.buffer_view = Some(Index::new(value));
            Ok(n)
        }
        "mimeType" => {
            let (s, n) = c.read_string(v)?;
            image.mime_type = Some(s);
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            image.extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((image, next))
}

fn read_sampler(c: &Cursor, idx: usize) -> Result<(Sampler, usize), Error> {
    let mut sampler = Sampler::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "name" => {
            let (s, n) = c.read_string(v)?;
            sampler.name = Some(s);
            Ok(n)
        }
        "magFilter" => {
            let (value, n) = c.read_u32(v)?;
            sampler.mag_filter = Some(value);
            Ok(n)
        }
        "minFilter" => {
            let (value, n) = c.read_u32(v)?;
            sampler.min_filter = Some(value);
            Ok(n)
        }
        "wrapS" => {
            let (value, n) = c.read_u32(v)?;
            sampler.wrap_s = value;
            Ok(n)
        }
        "wrapT" => {
            let (value, n) = c.read_u32(v)?;
            sampler.wrap_t = value;
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            sampler.extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((sampler, next))
}

fn read_texture(c: &Cursor, idx: usize) -> Result<(Texture, usize), Error> {
    let mut name = None;
    let mut sampler = None;
    let mut source: Option<Index<Image>> = None;
    let mut extras = None;
    let next = c.walk_object(idx, |c, key, v| match key {
        "name" => {
            let (s, n) = c.read_string(v)?;
            name = Some(s);
            Ok(n)
        }
        "sampler" => {
            let (value, n) = c.read_u32(v)?;
            sampler = Some(Index::new(value));
            Ok(n)
        }
        "source" => {
            let (value, n) = c.read_u32(v)?;
            source = Some(Index::new(value));
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((
        Texture {
            name,
            sampler,
            source: source.ok_or_else(|| missing("texture", "source"))?,
            extras,
        },
        next,
    ))
}

fn read_texture_transform(c: &Cursor, idx: usize) -> Result<(TextureTransform, usize), Error> {
    let mut transform = TextureTransform::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "offset" => {
            let (value, n) = c.read_f32_fixed::<2>(v)?;
            transform.offset = value;
            Ok(n)
        }
        "rotation" => {
            let (value, n) = c.read_f32(v)?;
            transform.rotation = value;
            Ok(n)
        }
        "scale" => {
            let (value, n) = c.read_f32_fixed::<2>(v)?;
            transform.scale = value;
            Ok(n)
        }
        "texCoord" => {
            let (value, n) = c.read_u32(v)?;
            transform.tex_coord = Some(value);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((transform, next))
}

fn read_texture_view(c: &Cursor, idx: usize) -> Result<(Info, usize), Error> {
    let mut index: Option<Index<Texture>> = None;
    let mut info = Info::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "index" => {
            let (value, n) = c.read_u32(v)?;
            index = Some(Index::new(value));
            Ok(n)
        }
        "texCoord" => {
            let (value, n) = c.read_u32(v)?;
            info.tex_coord = value;
            Ok(n)
        }
        "scale" | "strength" => {
            let (value, n) = c.read_f32(v)?;
            info.scale = value;
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            info.extras = Some(e);
            Ok(n)
        }
        "extensions" => c.walk_object(v, |c, ext_key, ext_v| match ext_key {
            extensions::KHR_TEXTURE_TRANSFORM => {
                let (transform, n) = read_texture_transform(c, ext_v)?;
                info.has_transform = true;
                info.transform = transform;
                Ok(n)
            }
            _ => Ok(c.skip(ext_v)),
        }),
        _ => Ok(c.skip(v)),
    })?;
    info.index = index.ok_or_else(|| missing("textureInfo", "index"))?;
    Ok((info, next))
}

fn read_pbr_metallic_roughness(c: &Cursor, idx: usize) -> Result<(PbrMetallicRoughness, usize), Error> {
    let mut pbr = PbrMetallicRoughness::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "baseColorFactor" => {
            let (value, n) = c.read_f32_fixed::<4>(v)?;
            pbr.base_color_factor = value;
            Ok(n)
        }
        "baseColorTexture" => {
            let (value, n) = read_texture_view(c, v)?;
            pbr.base_color_texture = Some(value);
            Ok(n)
        }
        "metallicFactor" => {
            let (value, n) = c.read_f32(v)?;
            pbr.metallic_factor = value;
            Ok(n)
        }
        "roughnessFactor" => {
            let (value, n) = c.read_f32(v)?;
            pbr.roughness_factor = value;
            Ok(n)
        }
        "metallicRoughnessTexture" => {
            let (value, n) = read_texture_view(c, v)?;
            pbr.metallic_roughness_texture = Some(value);
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            pbr.extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((pbr, next))
}

fn read_pbr_specular_glossiness(c: &Cursor, idx: usize) -> Result<(PbrSpecularGlossiness, usize), Error> {
    let mut pbr = PbrSpecularGlossiness::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "diffuseFactor" => {
            let (value, n) = c.read_f32_fixed::<4>(v)?;
            pbr.diffuse_factor = value;
            Ok(n)
        }
        "diffuseTexture" => {
            let (value, n) = read_texture_view(c, v)?;
            pbr.diffuse_texture = Some(value);
            Ok(n)
        }
        "specularFactor" => {
            let (value, n) = c.read_f32_fixed::<3>(v)?;
            pbr.specular_factor = value;
            Ok(n)
        }
        "glossinessFactor" => {
            let (value, n) = c.read_f32(v)?;
            pbr.glossiness_factor = value;
            Ok(n)
        }
        "specularGlossinessTexture" => {
            let (value, n) = read_texture_view(c, v)?;
            pbr.specular_glossiness_texture = Some(value);
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            pbr.extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((pbr, next))
}

fn read_normal_texture(c: &Cursor, idx: usize) -> Result<(NormalTexture, usize), Error> {
    let mut index: Option<Index<Texture>> = None;
    let mut normal = NormalTexture::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "index" => {
            let (value, n) = c.read_u32(v)?;
            index = Some(Index::new(value));
            Ok(n)
        }
        "texCoord" => {
            let (value, n) = c.read_u32(v)?;
            normal.info.tex_coord = value;
            Ok(n)
        }
        "scale" => {
            let (value, n) = c.read_f32(v)?;
            normal.scale = value;
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            normal.info.extras = Some(e);
            Ok(n)
        }
        "extensions" => c.walk_object(v, |c, ext_key, ext_v| match ext_key {
            extensions::KHR_TEXTURE_TRANSFORM => {
                let (transform, n) = read_texture_transform(c, ext_v)?;
                normal.info.has_transform = true;
                normal.info.transform = transform;
                Ok(n)
            }
            _ => Ok(c.skip(ext_v)),
        }),
        _ => Ok(c.skip(v)),
    })?;
    normal.info.index = index.ok_or_else(|| missing("normalTextureInfo", "index"))?;
    Ok((normal, next))
}

fn read_occlusion_texture(c: &Cursor, idx: usize) -> Result<(OcclusionTexture, usize), Error> {
    let mut index: Option<Index<Texture>> = None;
    let mut occlusion = OcclusionTexture::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "index" => {
            let (value, n) = c.read_u32(v)?;
            index = Some(Index::new(value));
            Ok(n)
        }
        "texCoord" => {
            let (value, n) = c.read_u32(v)?;
            occlusion.info.tex_coord = value;
            Ok(n)
        }
        "strength" => {
            let (value, n) = c.read_f32(v)?;
            occlusion.strength = value;
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            occlusion.info.extras = Some(e);
            Ok(n)
        }
        "extensions" => c.walk_object(v, |c, ext_key, ext_v| match ext_key {
            extensions::KHR_TEXTURE_TRANSFORM => {
                let (transform, n) = read_texture_transform(c, ext_v)?;
                occlusion.info.has_transform = true;
                occlusion.info.transform = transform;
                Ok(n)
            }
            _ => Ok(c.skip(ext_v)),
        }),
        _ => Ok(c.skip(v)),
    })?;
    occlusion.info.index = index.ok_or_else(|| missing("occlusionTextureInfo", "index"))?;
    Ok((occlusion, next))
}

fn read_material(c: &Cursor, idx: usize) -> Result<(Material, usize), Error> {
    let mut material = Material::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "name" => {
            let (s, n) = c.read_string(v)?;
            material.name = Some(s);
            Ok(n)
        }
        "pbrMetallicRoughness" => {
            let (value, n) = read_pbr_metallic_roughness(c, v)?;
            material.pbr_metallic_roughness = value;
            Ok(n)
        }
        "normalTexture" => {
            let (value, n) = read_normal_texture(c, v)?;
            material.normal_texture = Some(value);
            Ok(n)
        }
        "occlusionTexture" => {
            let (value, n) = read_occlusion_texture(c, v)?;
            material.occlusion_texture = Some(value);
            Ok(n)
        }
        "emissiveTexture" => {
            let (value, n) = read_texture_view(c, v)?;
            material.emissive_texture = Some(value);
            Ok(n)
        }
        "emissiveFactor" => {
            let (value, n) = c.read_f32_fixed::<3>(v)?;
            material.emissive_factor = value;
            Ok(n)
        }
        "alphaMode" => {
            let (s, n) = c.read_string(v)?;
            material.alpha_mode =
                AlphaMode::from_str(&s).ok_or_else(|| Error::InvalidGltf(format!("unrecognized alphaMode `{s}`")))?;
            Ok(n)
        }
        "alphaCutoff" => {
            let (value, n) = c.read_f32(v)?;
            material.alpha_cutoff = value;
            Ok(n)
        }
        "doubleSided" => {
            let (value, n) = c.read_bool(v)?;
            material.double_sided = value;
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            material.extras = Some(e);
            Ok(n)
        }
        "extensions" => c.walk_object(v, |c, ext_key, ext_v| match ext_key {
            extensions::KHR_MATERIALS_PBR_SPECULAR_GLOSSINESS => {
                let (value, n) = read_pbr_specular_glossiness(c, ext_v)?;
                material.has_pbr_specular_glossiness = true;
                material.pbr_specular_glossiness = Some(value);
                Ok(n)
            }
            extensions::KHR_MATERIALS_UNLIT => {
                material.unlit = true;
                // `KHR_materials_unlit`'s extension object carries no
                // members of its own; still walk it so any (spec-
                // violating) content inside is skipped rather than
                // desynchronizing the cursor.
                c.walk_object(ext_v, |c, _, v| Ok(c.skip(v)))
            }
            _ => Ok(c.skip(ext_v)),
        }),
        _ => Ok(c.skip(v)),
    })?;
    Ok((material, next))
}

fn read_attribute(c: &Cursor, name: String, value_idx: usize) -> Result<(Attribute, usize), Error> {
    let (accessor_raw, next) = c.read_u32(value_idx)?;
    let (semantic, set_index) = Semantic::parse(&name);
    Ok((
        Attribute {
            name,
            semantic,
            set_index,
            accessor: Index::new(accessor_raw),
        },
        next,
    ))
}

fn read_attributes(c: &Cursor, idx: usize) -> Result<(Vec<Attribute>, usize), Error> {
    let mut attributes = Vec::new();
    let next = c.walk_object(idx, |c, key, v| {
        let (attribute, n) = read_attribute(c, key.to_string(), v)?;
        attributes.push(attribute);
        Ok(n)
    })?;
    Ok((attributes, next))
}

fn read_morph_target(c: &Cursor, idx: usize) -> Result<(MorphTarget, usize), Error> {
    let (attributes, next) = read_attributes(c, idx)?;
    Ok((MorphTarget { attributes }, next))
}

fn read_primitive(c: &Cursor, idx: usize) -> Result<(Primitive, usize), Error> {
    let mut primitive = Primitive::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "attributes" => {
            let (attributes, n) = read_attributes(c, v)?;
            primitive.attributes = attributes;
            Ok(n)
        }
        "indices" => {
            let (value, n) = c.read_u32(v)?;
            primitive.indices = Some(Index::new(value));
            Ok(n)
        }
        "material" => {
            let (value, n) = c.read_u32(v)?;
            primitive.material = Some(Index::new(value));
            Ok(n)
        }
        "mode" => {
            let (value, n) = c.read_u32(v)?;
            primitive.mode = Mode::from_gl_enum(value).ok_or_else(|| Error::InvalidGltf(format!("unrecognized primitive mode `{value}`")))?;
            Ok(n)
        }
        "targets" => {
            let (values, n) = c.read_array(v, read_morph_target)?;
            primitive.targets = values;
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            primitive.extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((primitive, next))
}

fn read_mesh(c: &Cursor, idx: usize) -> Result<(Mesh, usize), Error> {
    let mut mesh = Mesh::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "name" => {
            let (s, n) = c.read_string(v)?;
            mesh.name = Some(s);
            Ok(n)
        }
        "primitives" => {
            let (values, n) = c.read_array(v, read_primitive)?;
            mesh.primitives = values;
            Ok(n)
        }
        "weights" => {
            let (values, n) = c.read_f32_array(v)?;
            mesh.weights = Some(values);
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            mesh.extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((mesh, next))
}

fn read_node(c: &Cursor, idx: usize) -> Result<(Node, usize), Error> {
    let mut node = Node::default();
    let mut has_matrix = false;
    let mut matrix = [0.0f32; 16];
    let mut translation = [0.0f32; 3];
    let mut rotation = [0.0, 0.0, 0.0, 1.0f32];
    let mut scale = [1.0f32; 3];
    let next = c.walk_object(idx, |c, key, v| match key {
        "name" => {
            let (s, n) = c.read_string(v)?;
            node.name = Some(s);
            Ok(n)
        }
        "camera" => {
            let (value, n) = c.read_u32(v)?;
            node.camera = Some(Index::new(value));
            Ok(n)
        }
        "children" => {
            let (values, n) = c.read_index_array(v)?;
            node.children = values;
            Ok(n)
        }
        "skin" => {
            let (value, n) = c.read_u32(v)?;
            node.skin = Some(Index::new(value));
            Ok(n)
        }
        "mesh" => {
            let (value, n) = c.read_u32(v)?;
            node.mesh = Some(Index::new(value));
            Ok(n)
        }
        "matrix" => {
            let (value, n) = c.read_f32_fixed::<16>(v)?;
            matrix = value;
            has_matrix = true;
            Ok(n)
        }
        "translation" => {
            let (value, n) = c.read_f32_fixed::<3>(v)?;
            translation = value;
            Ok(n)
        }
        "rotation" => {
            let (value, n) = c.read_f32_fixed::<4>(v)?;
            rotation = value;
            Ok(n)
        }
        "scale" => {
            let (value, n) = c.read_f32_fixed::<3>(v)?;
            scale = value;
            Ok(n)
        }
        "weights" => {
            let (values, n) = c.read_f32_array(v)?;
            node.weights = Some(values);
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            node.extras = Some(e);
            Ok(n)
        }
        "extensions" => c.walk_object(v, |c, ext_key, ext_v| match ext_key {
            extensions::KHR_LIGHTS_PUNCTUAL => c.walk_object(ext_v, |c, k, v| match k {
                "light" => {
                    let (value, n) = c.read_u32(v)?;
                    node.light = Some(Index::new(value));
                    Ok(n)
                }
                _ => Ok(c.skip(v)),
            }),
            _ => Ok(c.skip(ext_v)),
        }),
        _ => Ok(c.skip(v)),
    })?;
    node.transform = if has_matrix {
        Transform::Matrix { matrix }
    } else {
        Transform::Decomposed {
            translation,
            rotation,
            scale,
        }
    };
    Ok((node, next))
}

fn read_scene(c: &Cursor, idx: usize) -> Result<(Scene, usize), Error> {
    let mut scene = Scene::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "name" => {
            let (s, n) = c.read_string(v)?;
            scene.name = Some(s);
            Ok(n)
        }
        "nodes" => {
            let (values, n) = c.read_index_array(v)?;
            scene.nodes = values;
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            scene.extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((scene, next))
}

fn read_skin(c: &Cursor, idx: usize) -> Result<(Skin, usize), Error> {
    let mut skin = Skin::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "name" => {
            let (s, n) = c.read_string(v)?;
            skin.name = Some(s);
            Ok(n)
        }
        "joints" => {
            let (values, n) = c.read_index_array(v)?;
            skin.joints = values;
            Ok(n)
        }
        "skeleton" => {
            let (value, n) = c.read_u32(v)?;
            skin.skeleton = Some(Index::new(value));
            Ok(n)
        }
        "inverseBindMatrices" => {
            let (value, n) = c.read_u32(v)?;
            skin.inverse_bind_matrices = Some(Index::new(value));
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            skin.extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((skin, next))
}

fn read_perspective(c: &Cursor, idx: usize) -> Result<(Perspective, usize), Error> {
    let mut aspect_ratio = None;
    let mut yfov = None;
    let mut zfar = None;
    let mut znear = None;
    let next = c.walk_object(idx, |c, key, v| match key {
        "aspectRatio" => {
            let (value, n) = c.read_f32(v)?;
            aspect_ratio = Some(value);
            Ok(n)
        }
        "yfov" => {
            let (value, n) = c.read_f32(v)?;
            yfov = Some(value);
            Ok(n)
        }
        "zfar" => {
            let (value, n) = c.read_f32(v)?;
            zfar = Some(value);
            Ok(n)
        }
        "znear" => {
            let (value, n) = c.read_f32(v)?;
            znear = Some(value);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((
        Perspective {
            aspect_ratio,
            yfov: yfov.ok_or_else(|| missing("camera.perspective", "yfov"))?,
            zfar,
            znear: znear.ok_or_else(|| missing("camera.perspective", "znear"))?,
        },
        next,
    ))
}

fn read_orthographic(c: &Cursor, idx: usize) -> Result<(Orthographic, usize), Error> {
    let mut xmag = None;
    let mut ymag = None;
    let mut zfar = None;
    let mut znear = None;
    let next = c.walk_object(idx, |c, key, v| match key {
        "xmag" => {
            let (value, n) = c.read_f32(v)?;
            xmag = Some(value);
            Ok(n)
        }
        "ymag" => {
            let (value, n) = c.read_f32(v)?;
            ymag = Some(value);
            Ok(n)
        }
        "zfar" => {
            let (value, n) = c.read_f32(v)?;
            zfar = Some(value);
            Ok(n)
        }
        "znear" => {
            let (value, n) = c.read_f32(v)?;
            znear = Some(value);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((
        Orthographic {
            xmag: xmag.ok_or_else(|| missing("camera.orthographic", "xmag"))?,
            ymag: ymag.ok_or_else(|| missing("camera.orthographic", "ymag"))?,
            zfar: zfar.ok_or_else(|| missing("camera.orthographic", "zfar"))?,
            znear: znear.ok_or_else(|| missing("camera.orthographic", "znear"))?,
        },
        next,
    ))
}

fn read_camera(c: &Cursor, idx: usize) -> Result<(Camera, usize), Error> {
    let mut name = None;
    let mut kind: Option<String> = None;
    let mut perspective = None;
    let mut orthographic = None;
    let mut extras = None;
    let next = c.walk_object(idx, |c, key, v| match key {
        "name" => {
            let (s, n) = c.read_string(v)?;
            name = Some(s);
            Ok(n)
        }
        "type" => {
            let (s, n) = c.read_string(v)?;
            kind = Some(s);
            Ok(n)
        }
        "perspective" => {
            let (value, n) = read_perspective(c, v)?;
            perspective = Some(value);
            Ok(n)
        }
        "orthographic" => {
            let (value, n) = read_orthographic(c, v)?;
            orthographic = Some(value);
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    let kind = kind.ok_or_else(|| missing("camera", "type"))?;
    let projection = match kind.as_str() {
        "perspective" => Projection::Perspective(perspective.ok_or_else(|| missing("camera", "perspective"))?),
        "orthographic" => Projection::Orthographic(orthographic.ok_or_else(|| missing("camera", "orthographic"))?),
        other => return Err(Error::InvalidGltf(format!("unrecognized camera type `{other}`"))),
    };
    Ok((
        Camera {
            name,
            projection,
            extras,
        },
        next,
    ))
}

fn read_animation_sampler(c: &Cursor, idx: usize) -> Result<(AnimationSampler, usize), Error> {
    let mut input: Option<Index<Accessor>> = None;
    let mut interpolation = Interpolation::default();
    let mut output: Option<Index<Accessor>> = None;
    let mut extras = None;
    let next = c.walk_object(idx, |c, key, v| match key {
        "input" => {
            let (value, n) = c.read_u32(v)?;
            input = Some(Index::new(value));
            Ok(n)
        }
        "interpolation" => {
            let (s, n) = c.read_string(v)?;
            interpolation = Interpolation::from_str(&s)
                .ok_or_else(|| Error::InvalidGltf(format!("unrecognized interpolation `{s}`")))?;
            Ok(n)
        }
        "output" => {
            let (value, n) = c.read_u32(v)?;
            output = Some(Index::new(value));
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((
        AnimationSampler {
            input: input.ok_or_else(|| missing("animation.sampler", "input"))?,
            interpolation,
            output: output.ok_or_else(|| missing("animation.sampler", "output"))?,
            extras,
        },
        next,
    ))
}

fn read_animation_channel(c: &Cursor, idx: usize) -> Result<(AnimationChannel, usize), Error> {
    let mut sampler: Option<Index<AnimationSampler>> = None;
    let mut target_node = None;
    let mut target_path = None;
    let mut extras = None;
    let next = c.walk_object(idx, |c, key, v| match key {
        "sampler" => {
            let (value, n) = c.read_u32(v)?;
            sampler = Some(Index::new(value));
            Ok(n)
        }
        "target" => c.walk_object(v, |c, k, v| match k {
            "node" => {
                let (value, n) = c.read_u32(v)?;
                target_node = Some(Index::new(value));
                Ok(n)
            }
            "path" => {
                let (s, n) = c.read_string(v)?;
                target_path =
                    Some(TargetPath::from_str(&s).ok_or_else(|| Error::InvalidGltf(format!("unrecognized animation target path `{s}`")))?);
                Ok(n)
            }
            _ => Ok(c.skip(v)),
        }),
        "extras" => {
            let (e, n) = c.read_extras(v);
            extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((
        AnimationChannel {
            sampler: sampler.ok_or_else(|| missing("animation.channel", "sampler"))?,
            target_node,
            target_path: target_path.ok_or_else(|| missing("animation.channel.target", "path"))?,
            extras,
        },
        next,
    ))
}

fn read_animation(c: &Cursor, idx: usize) -> Result<(Animation, usize), Error> {
    let mut animation = Animation::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "name" => {
            let (s, n) = c.read_string(v)?;
            animation.name = Some(s);
            Ok(n)
        }
        "samplers" => {
            let (values, n) = c.read_array(v, read_animation_sampler)?;
            animation.samplers = values;
            Ok(n)
        }
        "channels" => {
            let (values, n) = c.read_array(v, read_animation_channel)?;
            animation.channels = values;
            Ok(n)
        }
        "extras" => {
            let (e, n) = c.read_extras(v);
            animation.extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((animation, next))
}

fn read_light(c: &Cursor, idx: usize) -> Result<(Light, usize), Error> {
    let mut light = Light::default();
    let next = c.walk_object(idx, |c, key, v| match key {
        "name" => {
            let (s, n) = c.read_string(v)?;
            light.name = Some(s);
            Ok(n)
        }
        "color" => {
            let (value, n) = c.read_f32_fixed::<3>(v)?;
            light.color = value;
            Ok(n)
        }
        "intensity" => {
            let (value, n) = c.read_f32(v)?;
            light.intensity = value;
            Ok(n)
        }
        "type" => {
            let (s, n) = c.read_string(v)?;
            light.kind = LightKind::from_str(&s).ok_or_else(|| Error::InvalidGltf(format!("unrecognized light type `{s}`")))?;
            Ok(n)
        }
        "range" => {
            let (value, n) = c.read_f32(v)?;
            light.range = Some(value);
            Ok(n)
        }
        "spot" => c.walk_object(v, |c, k, v| match k {
            "innerConeAngle" => {
                let (value, n) = c.read_f32(v)?;
                light.inner_cone_angle = value;
                Ok(n)
            }
            "outerConeAngle" => {
                let (value, n) = c.read_f32(v)?;
                light.outer_cone_angle = value;
                Ok(n)
            }
            _ => Ok(c.skip(v)),
        }),
        "extras" => {
            let (e, n) = c.read_extras(v);
            light.extras = Some(e);
            Ok(n)
        }
        _ => Ok(c.skip(v)),
    })?;
    Ok((light, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document() {
        let root = deserialize(br#"{"asset":{"version":"2.0"}}"#).unwrap();
        assert_eq!(root.asset.version, "2.0");
        assert!(root.accessors.is_empty());
    }

    #[test]
    fn unknown_members_are_skipped() {
        let root = deserialize(br#"{"asset":{"version":"2.0","unknownMember":{"a":[1,2,3]}},"unknownTopLevel":"x"}"#).unwrap();
        assert_eq!(root.asset.version, "2.0");
    }

    #[test]
    fn reads_nodes_and_scene() {
        let root = deserialize(
            br#"{
                "asset": {"version": "2.0"},
                "scene": 0,
                "scenes": [{"nodes": [0, 1]}],
                "nodes": [
                    {"name": "a", "children": [1]},
                    {"translation": [1.0, 2.0, 3.0]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(root.scene, Some(Index::new(0)));
        assert_eq!(root.scenes[0].nodes.len(), 2);
        assert_eq!(root.nodes[0].name.as_deref(), Some("a"));
        match root.nodes[1].transform {
            Transform::Decomposed { translation, .. } => assert_eq!(translation, [1.0, 2.0, 3.0]),
            _ => panic!("expected a decomposed transform"),
        }
    }

    #[test]
    fn node_matrix_wins_over_trs_defaults() {
        let root = deserialize(
            br#"{
                "asset": {"version": "2.0"},
                "nodes": [{"matrix": [1,0,0,0, 0,1,0,0, 0,0,1,0, 0,0,0,1]}]
            }"#,
        )
        .unwrap();
        assert!(matches!(root.nodes[0].transform, Transform::Matrix { .. }));
    }

    #[test]
    fn rejects_accessor_missing_required_member() {
        let err = deserialize(
            br#"{"asset":{"version":"2.0"},"accessors":[{"bufferView":0,"byteOffset":0}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidGltf(_)));
    }

    #[test]
    fn parses_attribute_semantics() {
        let root = deserialize(
            br#"{
                "asset": {"version": "2.0"},
                "meshes": [{"primitives": [{"attributes": {"POSITION": 0, "TEXCOORD_1": 1}}]}]
            }"#,
        )
        .unwrap();
        let attributes = &root.meshes[0].primitives[0].attributes;
        assert_eq!(attributes.len(), 2);
        let position = attributes.iter().find(|a| a.name == "POSITION").unwrap();
        assert_eq!(position.semantic, Semantic::Position);
        assert_eq!(position.set_index, 0);
        let texcoord = attributes.iter().find(|a| a.name == "TEXCOORD_1").unwrap();
        assert_eq!(texcoord.semantic, Semantic::TexCoord);
        assert_eq!(texcoord.set_index, 1);
    }

    #[test]
    fn extras_capture_is_byte_exact() {
        let src = br#"{"asset":{"version":"2.0","extras":{"foo":1}}}"#;
        let root = deserialize(src).unwrap();
        let extras = root.asset.extras.unwrap();
        assert_eq!(&src[extras.start..extras.end], br#"{"foo":1}"#);
    }

    #[test]
    fn khr_materials_unlit_sets_flag() {
        let root = deserialize(
            br#"{
                "asset": {"version": "2.0"},
                "materials": [{"extensions": {"KHR_materials_unlit": {}}}]
            }"#,
        )
        .unwrap();
        assert!(root.materials[0].unlit);
    }
}
