use super::*;
use crate::foundation::error::BezringError;
use crate::geometry::functions::Contraction;

#[test]
fn empty_document_is_all_defaults() {
    let scene = SceneFile::from_json_str("{}").unwrap();
    assert_eq!(scene, SceneFile::default());
}

#[test]
fn sections_parse_independently() {
    let scene = SceneFile::from_json_str(
        r#"{
            "ring": { "radius": 40.0, "vertex_count": 6 },
            "geometry": { "contraction": { "kind": "Constant", "params": 0.5 } },
            "render": { "debug_markers": true }
        }"#,
    )
    .unwrap();
    assert_eq!(scene.ring.unwrap().vertex_count, 6);
    assert_eq!(
        scene.geometry.unwrap().contraction,
        Contraction::Constant(0.5)
    );
    assert!(scene.render.unwrap().debug_markers);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SceneFile::from_json_str(r#"{ "ring": "#).unwrap_err();
    assert!(matches!(err, BezringError::Serde(_)));

    let err = SceneFile::from_reader(r#"{ "ring": { "radius": "wide" } }"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn invalid_sections_are_validation_errors() {
    let err = SceneFile::from_json_str(r#"{ "ring": { "cycle_length": 1 } }"#).unwrap_err();
    assert!(matches!(err, BezringError::Validation(_)));

    let err = SceneFile::from_json_str(
        r#"{ "geometry": { "contraction": { "kind": "Noise",
            "params": { "amp": 1.0, "offset": 0.0, "freq": 1e30, "seed": 1 } } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, BezringError::Validation(_)));
}
