// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Prints the scene graph of a glTF asset as an indented tree.

use gltf::Node;

fn print_node(node: Node<'_>, depth: usize) {
    let indent = "  ".repeat(depth);
    let name = node.name().unwrap_or("<unnamed>");
    println!("{indent}- node[{}] {name}", node.index());
    if let Some(mesh) = node.mesh() {
        println!("{indent}    mesh: {} primitive(s)", mesh.primitives.len());
    }
    for child in node.children() {
        print_node(child, depth + 1);
    }
}

fn main() {
    env_logger::init();
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: gltf-tree <path-to-gltf-or-glb>");
            std::process::exit(1);
        }
    };

    let gltf = match gltf::import(&path) {
        Ok(gltf) => gltf,
        Err(error) => {
            eprintln!("failed to load {path}: {error}");
            std::process::exit(1);
        }
    };

    match gltf.document.default_scene() {
        Some(scene) => {
            println!("scene {:?}", scene.name().unwrap_or("<unnamed>"));
            for node in scene.nodes() {
                print_node(node, 1);
            }
        }
        None => {
            for scene in gltf.document.scenes() {
                println!("scene {:?}", scene.name().unwrap_or("<unnamed>"));
                for node in scene.nodes() {
                    print_node(node, 1);
                }
            }
        }
    }
}
