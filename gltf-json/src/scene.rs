// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use gltf_derive::Validate;

use crate::camera::Camera;
use crate::extensions::Light;
use crate::extras::Extras;
use crate::index::Index;
use crate::mesh::Mesh;
use crate::skin::Skin;
use crate::validation::Validate as _;

/// A node's local transform, either an explicit matrix or a decomposed
/// translation/rotation/scale triple (spec §3, §4.7). Exactly one of
/// these was authored; [`Node::matrix`]/[`Node::has_matrix`] records
/// which, matching the real-world `gltf::scene::Transform` enum this is
/// drawn from (spec §6 supplemented feature).
#[derive(Clone, Copy, Debug)]
pub enum Transform {
    Matrix { matrix: [f32; 16] },
    Decomposed {
        translation: [f32; 3],
        rotation: [f32; 4],
        scale: [f32; 3],
    },
}

impl Default for Transform {
    fn default() -> Self {
        Transform::Decomposed {
            translation: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0, 1.0, 1.0],
        }
    }
}

impl crate::validation::Validate for Transform {}

/// A node in the scene graph. `parent` is filled in by
/// [`crate::Root::resolve`]; it is `None` until then (and remains `None`
/// for an actual root).
#[derive(Clone, Debug, Default)]
pub struct Node {
    pub name: Option<String>,
    pub camera: Option<Index<Camera>>,
    pub children: Vec<Index<Node>>,
    pub skin: Option<Index<Skin>>,
    pub mesh: Option<Index<Mesh>>,
    pub light: Option<Index<Light>>,
    pub transform: Transform,
    pub weights: Option<Vec<f32>>,
    pub extras: Option<Extras>,

    /// Back-link set by the resolver; never authored in JSON.
    pub parent: Option<Index<Node>>,
}

impl crate::validation::Validate for Node {
    fn validate<R>(&self, root: &crate::Root, path: impl Fn() -> crate::Path, report: &mut R)
    where
        R: FnMut(&dyn Fn() -> crate::Path, crate::Error),
    {
        self.camera.validate(root, || path().field("camera"), report);
        self.children.validate(root, || path().field("children"), report);
        self.skin.validate(root, || path().field("skin"), report);
        self.mesh.validate(root, || path().field("mesh"), report);
        self.light.validate(root, || path().field("light"), report);
        self.transform.validate(root, || path().field("transform"), report);
        self.extras.validate(root, || path().field("extras"), report);

        if let (Some(weights), Some(mesh_index)) = (&self.weights, self.mesh) {
            if let Some(mesh) = root.meshes.get(mesh_index.value()) {
                if let Some(first_primitive) = mesh.primitives.first() {
                    let expected = first_primitive.targets.len();
                    if weights.len() != expected {
                        report(
                            &path,
                            crate::Error::InvalidGltf(format!(
                                "node.weights has length {} but its mesh's targets.length is {expected}",
                                weights.len()
                            )),
                        );
                    }
                }
            }
        }
    }
}

/// A set of root [`Node`]s forming one renderable scene.
#[derive(Clone, Debug, Default, Validate)]
pub struct Scene {
    pub name: Option<String>,
    pub nodes: Vec<Index<Node>>,
    pub extras: Option<Extras>,
}
