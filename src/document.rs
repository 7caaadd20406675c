// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The resolved document and its ergonomic scene-graph views (spec §3,
//! §6 supplemented features).
//!
//! [`Document`] owns the fully tokenized, deserialized, resolved, and
//! validated [`gltf_json::Root`], plus the raw JSON text it was built
//! from (needed later by [`crate::copy_extras_json`]). Every other
//! per-kind table (`meshes()`, `materials()`, and so on) is exposed as a
//! plain slice of the `gltf-json` schema type — there is no parallel
//! wrapper type for every entity kind, only for [`Node`] and [`Scene`],
//! whose navigation (`children()`, `transform()`, `default_scene()`)
//! benefits from holding onto the owning document.

use gltf_json as json;

/// A fully parsed glTF asset: its resolved JSON document, and the binary
/// chunk of its container if it was loaded from a `.glb`.
pub struct Gltf {
    pub document: Document,
    pub blob: Option<Vec<u8>>,
}

/// A resolved, validated glTF document.
pub struct Document {
    pub(crate) root: json::Root,
    pub(crate) json_text: Vec<u8>,
}

impl Document {
    pub(crate) fn new(root: json::Root, json_text: Vec<u8>) -> Self {
        Document { root, json_text }
    }

    /// The underlying schema tree.
    pub fn root(&self) -> &json::Root {
        &self.root
    }

    /// Mutable access to the underlying schema tree, for filling in
    /// [`gltf_json::Buffer::data`] outside of [`crate::load_buffers`]
    /// (e.g. a caller with its own buffer-loading policy).
    pub fn root_mut(&mut self) -> &mut json::Root {
        &mut self.root
    }

    /// The raw JSON text the document was deserialized from; the byte
    /// ranges [`gltf_json::Extras`] records point into this.
    pub fn json_text(&self) -> &[u8] {
        &self.json_text
    }

    pub fn asset(&self) -> &json::Asset {
        &self.root.asset
    }

    pub fn accessors(&self) -> &[json::Accessor] {
        &self.root.accessors
    }

    pub fn animations(&self) -> &[json::Animation] {
        &self.root.animations
    }

    pub fn buffers(&self) -> &[json::Buffer] {
        &self.root.buffers
    }

    pub fn buffer_views(&self) -> &[json::buffer::View] {
        &self.root.buffer_views
    }

    pub fn cameras(&self) -> &[json::Camera] {
        &self.root.cameras
    }

    pub fn images(&self) -> &[json::Image] {
        &self.root.images
    }

    pub fn materials(&self) -> &[json::Material] {
        &self.root.materials
    }

    pub fn meshes(&self) -> &[json::Mesh] {
        &self.root.meshes
    }

    pub fn samplers(&self) -> &[json::texture::Sampler] {
        &self.root.samplers
    }

    pub fn skins(&self) -> &[json::Skin] {
        &self.root.skins
    }

    pub fn textures(&self) -> &[json::Texture] {
        &self.root.textures
    }

    pub fn lights(&self) -> &[json::extensions::Light] {
        &self.root.lights
    }

    /// Iterator over every node, in table order.
    pub fn nodes(&self) -> impl Iterator<Item = Node<'_>> {
        (0..self.root.nodes.len()).map(move |index| Node::new(self, index))
    }

    pub fn node(&self, index: usize) -> Option<Node<'_>> {
        self.root.nodes.get(index).map(|_| Node::new(self, index))
    }

    /// Iterator over every scene, in table order.
    pub fn scenes(&self) -> impl Iterator<Item = Scene<'_>> {
        (0..self.root.scenes.len()).map(move |index| Scene::new(self, index))
    }

    pub fn scene(&self, index: usize) -> Option<Scene<'_>> {
        self.root.scenes.get(index).map(|_| Scene::new(self, index))
    }

    /// The document's designated default scene, if the JSON `scene`
    /// member was present.
    pub fn default_scene(&self) -> Option<Scene<'_>> {
        self.root.scene.map(|index| Scene::new(self, index.value()))
    }

    pub fn extensions_used(&self) -> impl Iterator<Item = &str> {
        self.root.extensions_used()
    }

    pub fn extensions_required(&self) -> impl Iterator<Item = &str> {
        self.root.extensions_required()
    }
}

/// A node in the scene graph, borrowed from its owning [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    document: &'a Document,
    index: usize,
    json: &'a json::scene::Node,
}

impl<'a> Node<'a> {
    fn new(document: &'a Document, index: usize) -> Self {
        Node {
            document,
            index,
            json: &document.root.nodes[index],
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> Option<&'a str> {
        self.json.name.as_deref()
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let document = self.document;
        self.json.children.iter().map(move |i| Node::new(document, i.value()))
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.json.parent.map(|i| Node::new(self.document, i.value()))
    }

    pub fn mesh(&self) -> Option<&'a json::Mesh> {
        self.json.mesh.map(|i| &self.document.root.meshes[i.value()])
    }

    pub fn skin(&self) -> Option<&'a json::Skin> {
        self.json.skin.map(|i| &self.document.root.skins[i.value()])
    }

    pub fn camera(&self) -> Option<&'a json::Camera> {
        self.json.camera.map(|i| &self.document.root.cameras[i.value()])
    }

    pub fn light(&self) -> Option<&'a json::extensions::Light> {
        self.json.light.map(|i| &self.document.root.lights[i.value()])
    }

    pub fn weights(&self) -> Option<&'a [f32]> {
        self.json.weights.as_deref()
    }

    pub fn transform(&self) -> json::scene::Transform {
        self.json.transform
    }

    /// This node's local transform as a 4x4 matrix.
    pub fn local_matrix(&self) -> glam::Mat4 {
        crate::transform::local_matrix(&self.json.transform)
    }

    /// This node's transform composed with every ancestor's, root-first.
    pub fn world_matrix(&self) -> glam::Mat4 {
        crate::transform::world_matrix(self.document, self.index)
    }

    pub fn extras(&self) -> Option<&'a json::Extras> {
        self.json.extras.as_ref()
    }
}

/// A set of root nodes forming one renderable scene.
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    document: &'a Document,
    index: usize,
    json: &'a json::scene::Scene,
}

impl<'a> Scene<'a> {
    fn new(document: &'a Document, index: usize) -> Self {
        Scene {
            document,
            index,
            json: &document.root.scenes[index],
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> Option<&'a str> {
        self.json.name.as_deref()
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let document = self.document;
        self.json.nodes.iter().map(move |i| Node::new(document, i.value()))
    }
}

#[cfg(test)]
mod tests {
    use crate::import_slice;

    #[test]
    fn default_scene_iterates_root_nodes() {
        let json = r#"{
            "asset": {"version": "2.0"},
            "scene": 0,
            "scenes": [{"nodes": [0, 1]}],
            "nodes": [{"name": "a"}, {"name": "b"}]
        }"#;
        let gltf = crate::import_slice(json.as_bytes()).unwrap();
        let scene = gltf.document.default_scene().expect("default scene present");
        let names: Vec<_> = scene.nodes().map(|n| n.name().unwrap().to_string()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn node_parent_child_navigation() {
        let json = r#"{
            "asset": {"version": "2.0"},
            "nodes": [{"children": [1]}, {"name": "child"}]
        }"#;
        let gltf = import_slice(json.as_bytes()).unwrap();
        let parent = gltf.document.node(0).unwrap();
        let child = parent.children().next().unwrap();
        assert_eq!(child.name(), Some("child"));
        assert_eq!(child.parent().unwrap().index(), 0);
    }
}
