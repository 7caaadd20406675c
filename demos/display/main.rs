// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Prints a summary of a glTF asset: its asset header, per-kind entity
//! counts, and the extensions it declares.

fn main() {
    env_logger::init();
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: gltf-display <path-to-gltf-or-glb>");
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

    let document = &gltf.document;
    let asset = document.asset();
    println!("asset.version  = {}", asset.version);
    println!("asset.generator = {:?}", asset.generator);
    println!();
    println!("scenes     = {}", document.scenes().count());
    println!("nodes      = {}", document.nodes().count());
    println!("meshes     = {}", document.meshes().len());
    println!("materials  = {}", document.materials().len());
    println!("textures   = {}", document.textures().len());
    println!("images     = {}", document.images().len());
    println!("animations = {}", document.animations().len());
    println!("skins      = {}", document.skins().len());
    println!("cameras    = {}", document.cameras().len());
    println!("accessors  = {}", document.accessors().len());
    println!("buffers    = {}", document.buffers().len());

    let used: Vec<_> = document.extensions_used().collect();
    if !used.is_empty() {
        println!();
        println!("extensionsUsed     = {used:?}");
    }
    let required: Vec<_> = document.extensions_required().collect();
    if !required.is_empty() {
        println!("extensionsRequired = {required:?}");
    }
}
