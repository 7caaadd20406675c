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

/// An image referenced either by URI or by a `bufferView` holding its
/// encoded bytes, with an optional explicit MIME type. Decoding image
/// bytes is out of scope (spec §1 Non-goals); the core only records
/// where they are.
#[derive(Clone, Debug, Default, Validate)]
pub struct Image {
    pub name: Option<String>,
    pub uri: Option<String>,
    pub buffer_view: Option<Index<View>>,
    pub mime_type: Option<String>,
    pub extras: Option<Extras>,
}
