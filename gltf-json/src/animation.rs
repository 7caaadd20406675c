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

/// How an [`AnimationSampler`]'s output values interpolate between
/// keyframes. Decoding only; evaluating the curve is out of scope.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Interpolation {
    #[default]
    Linear,
    Step,
    CubicSpline,
}

impl Interpolation {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "LINEAR" => Some(Interpolation::Linear),
            "STEP" => Some(Interpolation::Step),
            "CUBICSPLINE" => Some(Interpolation::CubicSpline),
            _ => None,
        }
    }
}

impl crate::validation::Validate for Interpolation {}

#[derive(Clone, Debug, Validate)]
pub struct AnimationSampler {
    pub input: Index<Accessor>,
    pub interpolation: Interpolation,
    pub output: Index<Accessor>,
    pub extras: Option<Extras>,
}

/// The node property an [`AnimationChannel`] drives.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TargetPath {
    Translation,
    Rotation,
    Scale,
    Weights,
}

impl TargetPath {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "translation" => Some(TargetPath::Translation),
            "rotation" => Some(TargetPath::Rotation),
            "scale" => Some(TargetPath::Scale),
            "weights" => Some(TargetPath::Weights),
            _ => None,
        }
    }
}

impl crate::validation::Validate for TargetPath {}

#[derive(Clone, Debug, Validate)]
pub struct AnimationChannel {
    pub sampler: Index<AnimationSampler>,
    pub target_node: Option<Index<Node>>,
    pub target_path: TargetPath,
    pub extras: Option<Extras>,
}

#[derive(Clone, Debug, Default, Validate)]
pub struct Animation {
    pub name: Option<String>,
    pub samplers: Vec<AnimationSampler>,
    pub channels: Vec<AnimationChannel>,
    pub extras: Option<Extras>,
}
