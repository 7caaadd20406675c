// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::accessor::Accessor;
use crate::animation::Animation;
use crate::asset::Asset;
use crate::buffer::{Buffer, View};
use crate::camera::Camera;
use crate::extensions::Light;
use crate::image::Image;
use crate::index::Index;
use crate::material::Material;
use crate::mesh::Mesh;
use crate::scene::{Node, Scene};
use crate::skin::Skin;
use crate::texture::{Sampler, Texture};
use crate::{Error, Path};

/// The root object of a parsed glTF asset: one contiguous, per-kind
/// table for every entity (spec §3), plus the raw JSON and optional
/// binary-chunk byte ranges the document was built from.
///
/// Tables are populated in one shot during deserialization (spec §4.3's
/// array-allocation contract: each table is sized to the JSON array's
/// element count before being filled). Cross-entity references are
/// [`Index<T>`] values from the moment they are read; [`Root::resolve`]
/// is the single pass that checks every one of them is in range and
/// performs the two structural fix-ups spec §4.4 describes (node
/// parent back-links, accessor stride defaulting).
#[derive(Clone, Debug, Default)]
pub struct Root {
    pub asset: Asset,
    pub accessors: Vec<Accessor>,
    pub animations: Vec<Animation>,
    pub buffers: Vec<Buffer>,
    pub buffer_views: Vec<View>,
    pub cameras: Vec<Camera>,
    pub images: Vec<Image>,
    pub materials: Vec<Material>,
    pub meshes: Vec<Mesh>,
    pub nodes: Vec<Node>,
    pub samplers: Vec<Sampler>,
    pub scenes: Vec<Scene>,
    pub scene: Option<Index<Scene>>,
    pub skins: Vec<Skin>,
    pub textures: Vec<Texture>,
    pub lights: Vec<Light>,
    pub extensions_used: Vec<String>,
    pub extensions_required: Vec<String>,
}

impl Root {
    /// Checks that every stored reference resolves in range, rewrites
    /// node parent back-links, and defaults every accessor's `stride`.
    /// Fails on the first out-of-range index or structural violation
    /// (spec §4.4): a node that is a child of more than one parent, or
    /// that is simultaneously a scene root and a child.
    pub fn resolve(mut self) -> Result<Self, Error> {
        for (i, view) in self.buffer_views.iter().enumerate() {
            require(view.buffer.value(), self.buffers.len(), || {
                format!("bufferViews[{i}].buffer")
            })?;
        }
        for (i, accessor) in self.accessors.iter().enumerate() {
            if let Some(view) = accessor.buffer_view {
                require(view.value(), self.buffer_views.len(), || {
                    format!("accessors[{i}].bufferView")
                })?;
            }
            if let Some(sparse) = &accessor.sparse {
                require(sparse.indices.buffer_view.value(), self.buffer_views.len(), || {
                    format!("accessors[{i}].sparse.indices.bufferView")
                })?;
                require(sparse.values.buffer_view.value(), self.buffer_views.len(), || {
                    format!("accessors[{i}].sparse.values.bufferView")
                })?;
            }
        }
        for (i, image) in self.images.iter().enumerate() {
            if let Some(view) = image.buffer_view {
                require(view.value(), self.buffer_views.len(), || format!("images[{i}].bufferView"))?;
            }
        }
        for (i, texture) in self.textures.iter().enumerate() {
            require(texture.source.value(), self.images.len(), || format!("textures[{i}].source"))?;
            if let Some(sampler) = texture.sampler {
                require(sampler.value(), self.samplers.len(), || format!("textures[{i}].sampler"))?;
            }
        }
        for (i, material) in self.materials.iter().enumerate() {
            for (label, info) in [
                ("baseColorTexture", &material.pbr_metallic_roughness.base_color_texture),
                (
                    "metallicRoughnessTexture",
                    &material.pbr_metallic_roughness.metallic_roughness_texture,
                ),
                ("emissiveTexture", &material.emissive_texture),
            ] {
                if let Some(info) = info {
                    require(info.index.value(), self.textures.len(), || {
                        format!("materials[{i}].{label}")
                    })?;
                }
            }
            if let Some(normal) = &material.normal_texture {
                require(normal.info.index.value(), self.textures.len(), || {
                    format!("materials[{i}].normalTexture")
                })?;
            }
            if let Some(occlusion) = &material.occlusion_texture {
                require(occlusion.info.index.value(), self.textures.len(), || {
                    format!("materials[{i}].occlusionTexture")
                })?;
            }
            if let Some(pbr_sg) = &material.pbr_specular_glossiness {
                for (label, info) in [
                    ("diffuseTexture", &pbr_sg.diffuse_texture),
                    ("specularGlossinessTexture", &pbr_sg.specular_glossiness_texture),
                ] {
                    if let Some(info) = info {
                        require(info.index.value(), self.textures.len(), || {
                            format!("materials[{i}].extensions.KHR_materials_pbrSpecularGlossiness.{label}")
                        })?;
                    }
                }
            }
        }
        for (i, mesh) in self.meshes.iter().enumerate() {
            for (j, primitive) in mesh.primitives.iter().enumerate() {
                for attribute in &primitive.attributes {
                    require(attribute.accessor.value(), self.accessors.len(), || {
                        format!("meshes[{i}].primitives[{j}].attributes[{}]", attribute.name)
                    })?;
                }
                for target in &primitive.targets {
                    for attribute in &target.attributes {
                        require(attribute.accessor.value(), self.accessors.len(), || {
                            format!("meshes[{i}].primitives[{j}].targets.{}", attribute.name)
                        })?;
                    }
                }
                if let Some(indices) = primitive.indices {
                    require(indices.value(), self.accessors.len(), || {
                        format!("meshes[{i}].primitives[{j}].indices")
                    })?;
                }
                if let Some(material) = primitive.material {
                    require(material.value(), self.materials.len(), || {
                        format!("meshes[{i}].primitives[{j}].material")
                    })?;
                }
            }
        }
        for (i, skin) in self.skins.iter().enumerate() {
            for (j, joint) in skin.joints.iter().enumerate() {
                require(joint.value(), self.nodes.len(), || format!("skins[{i}].joints[{j}]"))?;
            }
            if let Some(skeleton) = skin.skeleton {
                require(skeleton.value(), self.nodes.len(), || format!("skins[{i}].skeleton"))?;
            }
            if let Some(ibm) = skin.inverse_bind_matrices {
                require(ibm.value(), self.accessors.len(), || {
                    format!("skins[{i}].inverseBindMatrices")
                })?;
            }
        }
        for (i, node) in self.nodes.iter().enumerate() {
            for (j, child) in node.children.iter().enumerate() {
                require(child.value(), self.nodes.len(), || format!("nodes[{i}].children[{j}]"))?;
            }
            if let Some(mesh) = node.mesh {
                require(mesh.value(), self.meshes.len(), || format!("nodes[{i}].mesh"))?;
            }
            if let Some(skin) = node.skin {
                require(skin.value(), self.skins.len(), || format!("nodes[{i}].skin"))?;
            }
            if let Some(camera) = node.camera {
                require(camera.value(), self.cameras.len(), || format!("nodes[{i}].camera"))?;
            }
            if let Some(light) = node.light {
                require(light.value(), self.lights.len(), || format!("nodes[{i}].light"))?;
            }
        }
        for (i, animation) in self.animations.iter().enumerate() {
            for (j, sampler) in animation.samplers.iter().enumerate() {
                require(sampler.input.value(), self.accessors.len(), || {
                    format!("animations[{i}].samplers[{j}].input")
                })?;
                require(sampler.output.value(), self.accessors.len(), || {
                    format!("animations[{i}].samplers[{j}].output")
                })?;
            }
            for (j, channel) in animation.channels.iter().enumerate() {
                require(channel.sampler.value(), animation.samplers.len(), || {
                    format!("animations[{i}].channels[{j}].sampler")
                })?;
                if let Some(node) = channel.target_node {
                    require(node.value(), self.nodes.len(), || {
                        format!("animations[{i}].channels[{j}].target.node")
                    })?;
                }
            }
        }
        for (i, scene) in self.scenes.iter().enumerate() {
            for (j, node) in scene.nodes.iter().enumerate() {
                require(node.value(), self.nodes.len(), || format!("scenes[{i}].nodes[{j}]"))?;
            }
        }
        if let Some(scene) = self.scene {
            require(scene.value(), self.scenes.len(), || "scene".to_string())?;
        }

        // Node parent back-links: a node may be a child of at most one
        // other node, and must not be simultaneously a child and a
        // scene root.
        for parent_index in 0..self.nodes.len() {
            let children = self.nodes[parent_index].children.clone();
            for child in children {
                let child_idx = child.value();
                if self.nodes[child_idx].parent.is_some() {
                    return Err(Error::InvalidGltf(format!(
                        "node {child_idx} is a child of more than one node"
                    )));
                }
                self.nodes[child_idx].parent = Some(Index::new(parent_index as u32));
            }
        }
        for scene in &self.scenes {
            for root_node in &scene.nodes {
                if self.nodes[root_node.value()].parent.is_some() {
                    return Err(Error::InvalidGltf(format!(
                        "node {} is both a scene root and a child node",
                        root_node.value()
                    )));
                }
            }
        }

        // Accessor stride defaulting: the owning buffer view's stride
        // wins if nonzero, else the packed element size.
        for accessor in &mut self.accessors {
            if let Some(view_index) = accessor.buffer_view {
                let view_stride = self.buffer_views[view_index.value()].byte_stride;
                accessor.stride = if view_stride != 0 {
                    view_stride
                } else {
                    accessor.element_size()
                };
            }
        }

        Ok(self)
    }

    /// Iterator over the extension names this document declares using.
    pub fn extensions_used(&self) -> impl Iterator<Item = &str> {
        self.extensions_used.iter().map(String::as_str)
    }

    /// Iterator over the extension names this document requires to
    /// load or render correctly.
    pub fn extensions_required(&self) -> impl Iterator<Item = &str> {
        self.extensions_required.iter().map(String::as_str)
    }
}

fn require(index: usize, len: usize, context: impl Fn() -> String) -> Result<(), Error> {
    if index >= len {
        Err(Error::InvalidGltf(format!(
            "{} references index {index} but only {len} entries exist",
            context()
        )))
    } else {
        Ok(())
    }
}

impl crate::validation::Validate for Root {
    fn validate<R>(&self, root: &Root, path: impl Fn() -> Path, report: &mut R)
    where
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        self.accessors.validate(root, || path().field("accessors"), report);
        self.animations.validate(root, || path().field("animations"), report);
        self.buffers.validate(root, || path().field("buffers"), report);
        self.buffer_views
            .validate(root, || path().field("bufferViews"), report);
        self.cameras.validate(root, || path().field("cameras"), report);
        self.images.validate(root, || path().field("images"), report);
        self.materials.validate(root, || path().field("materials"), report);
        self.meshes.validate(root, || path().field("meshes"), report);
        self.nodes.validate(root, || path().field("nodes"), report);
        self.samplers.validate(root, || path().field("samplers"), report);
        self.scenes.validate(root, || path().field("scenes"), report);
        self.skins.validate(root, || path().field("skins"), report);
        self.textures.validate(root, || path().field("textures"), report);
        self.lights.validate(root, || path().field("lights"), report);
    }
}

use crate::validation::Validate as _;
