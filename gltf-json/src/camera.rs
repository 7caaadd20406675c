// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use gltf_derive::Validate;

use crate::extras::Extras;

#[derive(Clone, Copy, Debug, Validate)]
pub struct Perspective {
    pub aspect_ratio: Option<f32>,
    pub yfov: f32,
    pub zfar: Option<f32>,
    pub znear: f32,
}

#[derive(Clone, Copy, Debug, Validate)]
pub struct Orthographic {
    pub xmag: f32,
    pub ymag: f32,
    pub zfar: f32,
    pub znear: f32,
}

/// A camera's kind-specific projection parameters (spec §3). Evaluating
/// the projection into an actual matrix is left to the caller; this
/// crate only decodes the parameters.
#[derive(Clone, Copy, Debug)]
pub enum Projection {
    Perspective(Perspective),
    Orthographic(Orthographic),
}

impl crate::validation::Validate for Projection {
    fn validate<R>(&self, root: &crate::Root, path: impl Fn() -> crate::Path, report: &mut R)
    where
        R: FnMut(&dyn Fn() -> crate::Path, crate::Error),
    {
        match self {
            Projection::Perspective(p) => p.validate(root, path, report),
            Projection::Orthographic(o) => o.validate(root, path, report),
        }
    }
}

#[derive(Clone, Debug, Validate)]
pub struct Camera {
    pub name: Option<String>,
    pub projection: Projection,
    pub extras: Option<Extras>,
}
