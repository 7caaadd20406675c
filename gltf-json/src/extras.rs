// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use gltf_derive::Validate;

/// A recorded byte range into the original JSON text, capturing the
/// literal value of an `extras` member verbatim (object, array, string,
/// number, or literal — whichever kind it was). Retrieved later with
/// `gltf::copy_extras_json` (spec §4.8); this crate never unescapes or
/// reinterprets the bytes. Entities that never saw an `extras` member
/// carry `None` rather than a sentinel `Extras` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Validate)]
pub struct Extras {
    pub start: usize,
    pub end: usize,
}

impl crate::validation::Validate for usize {}
