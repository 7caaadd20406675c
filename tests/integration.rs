//! End-to-end parsing scenarios (spec §8, S1-S8).
//!
//! Each test drives the public surface the way a real caller would:
//! `gltf::import_slice` on raw bytes, then whatever follow-up
//! (`load_buffers`, `validate`, accessor readout, transform math) the
//! scenario calls for.

use gltf::Error;

fn glb(json: &[u8], bin: Option<&[u8]>) -> Vec<u8> {
    fn chunk(kind: u32, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        out.extend_from_slice(&kind.to_le_bytes());
        out.extend_from_slice(payload);
        out
    }
    let mut chunks = chunk(0x4E4F_534A, json);
    if let Some(bin) = bin {
        chunks.extend_from_slice(&chunk(0x004E_4942, bin));
    }
    let mut out = Vec::new();
    out.extend_from_slice(&0x4654_6C67u32.to_le_bytes());
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&((12 + chunks.len()) as u32).to_le_bytes());
    out.extend_from_slice(&chunks);
    out
}

#[test]
fn s1_minimal_asset() {
    let gltf = gltf::import_slice(br#"{"asset":{"version":"2.0"}}"#).unwrap();
    let document = &gltf.document;
    assert_eq!(document.asset().version, "2.0");
    assert_eq!(document.accessors().len(), 0);
    assert_eq!(document.meshes().len(), 0);
    assert_eq!(document.nodes().count(), 0);
    assert!(document.default_scene().is_none());
    assert!(gltf::validate(document).is_ok());
}

#[test]
fn s2_glb_magic_detection() {
    let json = br#"{"asset":{"version":"2.0"}}"#;
    let data = glb(json, None);
    let gltf = gltf::import_slice(&data).unwrap();
    assert!(gltf.blob.is_none());
    assert_eq!(gltf.document.asset().version, "2.0");
}

#[test]
fn s3_parenthood() {
    let json = br#"{
        "asset": {"version": "2.0"},
        "scene": 0,
        "scenes": [{"nodes": [0]}],
        "nodes": [{"children": [1, 2]}, {}, {}]
    }"#;
    let gltf = gltf::import_slice(json).unwrap();
    let document = &gltf.document;
    let node0 = document.node(0).unwrap();
    let node1 = document.node(1).unwrap();
    let node2 = document.node(2).unwrap();
    assert_eq!(node1.parent().unwrap().index(), node0.index());
    assert_eq!(node2.parent().unwrap().index(), node0.index());
    let scene = document.default_scene().unwrap();
    assert_eq!(scene.nodes().next().unwrap().index(), node0.index());
}

#[test]
fn s3_duplicate_parent_is_rejected() {
    let json = br#"{
        "asset": {"version": "2.0"},
        "nodes": [{"children": [1]}, {}, {"children": [1]}]
    }"#;
    let err = gltf::import_slice(json).unwrap_err();
    assert!(matches!(err, Error::InvalidGltf(_)));
}

#[test]
fn s3_root_and_child_is_rejected() {
    let json = br#"{
        "asset": {"version": "2.0"},
        "scenes": [{"nodes": [1]}],
        "nodes": [{"children": [1]}, {}]
    }"#;
    let err = gltf::import_slice(json).unwrap_err();
    assert!(matches!(err, Error::InvalidGltf(_)));
}

#[test]
fn s4_packed_mat3_int8() {
    let json = br#"{
        "asset": {"version": "2.0"},
        "buffers": [{"byteLength": 12}],
        "bufferViews": [{"buffer": 0, "byteLength": 12}],
        "accessors": [{"bufferView": 0, "componentType": 5120, "count": 1, "type": "MAT3"}]
    }"#;
    let mut gltf = gltf::import_slice(json).unwrap();
    gltf.document.root_mut().buffers[0].data = Some(vec![1, 2, 3, 0, 4, 5, 6, 0, 7, 8, 9, 0]);
    let accessor = &gltf.document.root().accessors[0];
    let mut out = [0f32; 9];
    gltf::read_float(&gltf.document, accessor, 0, &mut out).unwrap();
    assert_eq!(out, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
}

#[test]
fn s5_normalized_u16_vec3() {
    let json = br#"{
        "asset": {"version": "2.0"},
        "buffers": [{"byteLength": 6}],
        "bufferViews": [{"buffer": 0, "byteLength": 6}],
        "accessors": [{"bufferView": 0, "componentType": 5123, "normalized": true, "count": 1, "type": "VEC3"}]
    }"#;
    let mut gltf = gltf::import_slice(json).unwrap();
    let mut bin = Vec::new();
    bin.extend_from_slice(&0u16.to_le_bytes());
    bin.extend_from_slice(&32768u16.to_le_bytes());
    bin.extend_from_slice(&65535u16.to_le_bytes());
    gltf.document.root_mut().buffers[0].data = Some(bin);
    let accessor = &gltf.document.root().accessors[0];
    let mut out = [0f32; 3];
    gltf::read_float(&gltf.document, accessor, 0, &mut out).unwrap();
    assert!((out[0] - 0.0).abs() < 1e-6);
    assert!((out[1] - 0.5000076).abs() < 1e-5);
    assert!((out[2] - 1.0).abs() < 1e-6);
}

#[test]
fn s6_sparse_accessor_out_of_range_index() {
    let json = br#"{
        "asset": {"version": "2.0"},
        "buffers": [{"byteLength": 4}],
        "bufferViews": [
            {"buffer": 0, "byteLength": 2},
            {"buffer": 0, "byteOffset": 2, "byteLength": 2}
        ],
        "accessors": [{
            "componentType": 5126, "count": 10, "type": "SCALAR",
            "sparse": {
                "count": 1,
                "indices": {"bufferView": 0, "componentType": 5121},
                "values": {"bufferView": 1}
            }
        }]
    }"#;
    let mut gltf = gltf::import_slice(json).unwrap();
    gltf.document.root_mut().buffers[0].data = Some(vec![10, 0, 0xAA, 0xBB]);
    let err = gltf::validate(&gltf.document).unwrap_err();
    assert!(matches!(err, Error::DataTooShort(_)));

    gltf.document.root_mut().buffers[0].data = Some(vec![9, 0, 0xAA, 0xBB]);
    assert!(gltf::validate(&gltf.document).is_ok());
}

#[test]
fn s7_base64_buffer_uri() {
    let json = br#"{
        "asset": {"version": "2.0"},
        "buffers": [{"byteLength": 3, "uri": "data:application/octet-stream;base64,QUJD"}]
    }"#;
    let mut gltf = gltf::import_slice(json).unwrap();
    gltf::load_buffers(&mut gltf.document, None).unwrap();
    assert_eq!(gltf.document.root().buffers[0].data, Some(vec![0x41, 0x42, 0x43]));
}

#[test]
fn s8_node_transform_compose() {
    let json = br#"{
        "asset": {"version": "2.0"},
        "scene": 0,
        "scenes": [{"nodes": [0]}],
        "nodes": [
            {"translation": [1.0, 2.0, 3.0], "scale": [2.0, 2.0, 2.0], "children": [1]},
            {}
        ]
    }"#;
    let gltf = gltf::import_slice(json).unwrap();
    let parent = gltf.document.node(0).unwrap();
    let child = gltf.document.node(1).unwrap();
    let local = parent.local_matrix();
    assert_eq!(local.col(0).truncate(), glam::Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(local.col(1).truncate(), glam::Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(local.col(2).truncate(), glam::Vec3::new(0.0, 0.0, 2.0));
    assert_eq!(local.col(3).truncate(), glam::Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(child.world_matrix(), parent.local_matrix());
}

#[test]
fn validate_is_idempotent() {
    let json = br#"{
        "asset": {"version": "2.0"},
        "buffers": [{"byteLength": 4}],
        "bufferViews": [{"buffer": 0, "byteLength": 4}],
        "accessors": [{"bufferView": 0, "componentType": 5126, "count": 1, "type": "SCALAR"}]
    }"#;
    let gltf = gltf::import_slice(json).unwrap();
    assert!(gltf::validate(&gltf.document).is_ok());
    assert!(gltf::validate(&gltf.document).is_ok());
}
