// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use gltf_derive::Validate;

use crate::accessor::Accessor;
use crate::extras::Extras;
use crate::index::Index;
use crate::scene::Node;

/// A collection of joint nodes plus their inverse-bind matrices used for
/// vertex skinning (spec glossary). Evaluating skinning itself is out of
/// scope.
#[derive(Clone, Debug, Default, Validate)]
pub struct Skin {
    pub name: Option<String>,
    pub joints: Vec<Index<Node>>,
    pub skeleton: Option<Index<Node>>,
    pub inverse_bind_matrices: Option<Index<Accessor>>,
    pub extras: Option<Extras>,
}
