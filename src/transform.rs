// Copyright 2017 The gltf Library Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Node transform composition (spec §4.7).
//!
//! A node's local transform is either an authored matrix or a
//! translation/rotation/scale triple; either way it collapses to a
//! single 4x4 matrix via [`local_matrix`]. [`world_matrix`] walks the
//! node's ancestor chain (via the parent back-links [`crate::Root::resolve`]
//! fills in) and composes them root-to-leaf.

use glam::{Mat4, Quat, Vec3};
use gltf_json::scene::Transform;

use crate::Document;

/// The 4x4 matrix a node's authored transform evaluates to, independent
/// of its position in the scene graph.
pub fn local_matrix(transform: &Transform) -> Mat4 {
    match *transform {
        Transform::Matrix { matrix } => Mat4::from_cols_array(&matrix),
        Transform::Decomposed {
            translation,
            rotation,
            scale,
        } => Mat4::from_scale_rotation_translation(
            Vec3::from_array(scale),
            Quat::from_array(rotation),
            Vec3::from_array(translation),
        ),
    }
}

/// The matrix that carries a point from the node's local space into the
/// scene's root space: the product of every ancestor's local matrix,
/// root-first, times the node's own local matrix.
pub fn world_matrix(document: &Document, node_index: usize) -> Mat4 {
    let mut chain = Vec::new();
    let mut current = Some(node_index);
    while let Some(index) = current {
        chain.push(index);
        current = document.root().nodes[index].parent.map(|p| p.value());
    }
    chain
        .into_iter()
        .rev()
        .fold(Mat4::IDENTITY, |acc, index| {
            acc * local_matrix(&document.root().nodes[index].transform)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_decomposed_is_identity_matrix() {
        let transform = Transform::default();
        assert_relative_eq!(local_matrix(&transform), Mat4::IDENTITY);
    }

    #[test]
    fn translation_only() {
        let transform = Transform::Decomposed {
            translation: [1.0, 2.0, 3.0],
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0, 1.0, 1.0],
        };
        let expected = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(local_matrix(&transform), expected);
    }

    #[test]
    fn matrix_form_is_passed_through_column_major() {
        let mut cols = [0.0f32; 16];
        cols[0] = 2.0;
        cols[5] = 3.0;
        cols[10] = 4.0;
        cols[15] = 1.0;
        let transform = Transform::Matrix { matrix: cols };
        let expected = Mat4::from_cols_array(&cols);
        assert_relative_eq!(local_matrix(&transform), expected);
    }
}
