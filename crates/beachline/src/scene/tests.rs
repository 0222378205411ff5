use super::*;
use crate::geometry::circumcenter;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

const DOC: &str = r#"{
    "sites": [[2.0, 2.0], [10.0, 2.0], [6.0, 0.1]],
    "verts": [[6.0, 2.3333333333333335], [-0.897282, -4.347282]],
    "v1": [[6.0, 2.3333333333333335]],
    "v2": [[-0.897282, -4.347282]]
}"#;

#[test]
fn loads_four_collections() {
    let s = load_scene_str(DOC).unwrap();
    assert_eq!(s.sites().len(), 3);
    assert_eq!(s.verts().len(), 2);
    assert_eq!(s.num_edges(), 1);
    let (a, b) = s.edges().next().unwrap();
    assert_eq!(a, vector![6.0, 2.3333333333333335]);
    assert_eq!(b, vector![-0.897282, -4.347282]);
    let bounds = s.bounds();
    assert_eq!(bounds.min, vector![-0.897282, -4.347282]);
    assert_eq!(bounds.max, vector![10.0, 2.3333333333333335]);
}

#[test]
fn missing_collection_is_named() {
    let err = load_scene_str(r#"{"sites": [], "verts": [], "v1": []}"#).unwrap_err();
    assert!(matches!(
        err,
        SceneError::MissingCollection { collection: "v2" }
    ));
}

#[test]
fn bad_rows_are_located() {
    let err = load_scene_str(r#"{"sites": [[1, 2], [3]], "verts": [], "v1": [], "v2": []}"#)
        .unwrap_err();
    match err {
        SceneError::BadPair {
            collection, row, ..
        } => assert_eq!((collection, row), ("sites", 1)),
        other => panic!("unexpected error {other}"),
    }
    let err =
        load_scene_str(r#"{"sites": [], "verts": [[0, "x"]], "v1": [], "v2": []}"#).unwrap_err();
    assert!(err.to_string().contains("`verts` row 0"));
    let err = load_scene_str(r#"{"sites": [], "verts": [7], "v1": [], "v2": []}"#).unwrap_err();
    assert!(matches!(err, SceneError::BadPair { row: 0, .. }));
}

#[test]
fn wrong_collection_types_are_named() {
    let err = load_scene_str(r#"{"sites": 5, "verts": [], "v1": [], "v2": []}"#).unwrap_err();
    assert!(matches!(
        err,
        SceneError::BadCollection {
            collection: "sites",
            ..
        }
    ));
    let err = load_scene_str(r#"{"sites": [[0, 0]], "verts": [], "v1": {}, "v2": []}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        SceneError::BadCollection {
            collection: "v1",
            ..
        }
    ));
    assert!(err.to_string().starts_with("`v1`"));
}

#[test]
fn out_of_range_literal_is_located() {
    let err =
        load_scene_str(r#"{"sites": [[0, 0]], "verts": [[1, 1], [1e400, 0]], "v1": [], "v2": []}"#)
            .unwrap_err();
    match err {
        SceneError::BadPair {
            collection, row, ..
        } => assert_eq!((collection, row), ("verts", 1)),
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn encode_errors_keep_their_source() {
    let json_err = serde_json::from_str::<f64>("x").unwrap_err();
    let err = SceneError::Encode(json_err);
    assert!(err.to_string().starts_with("encoding scene document"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn edge_lists_must_align() {
    let err = load_scene_str(r#"{"sites": [[0, 0]], "verts": [], "v1": [[0, 0], [1, 1]], "v2": [[1, 1]]}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        SceneError::EdgeLengthMismatch { starts: 2, ends: 1 }
    ));
}

#[test]
fn rejects_executable_or_unknown_content() {
    assert!(matches!(
        load_scene_str("sites = np.array([(1, 2)])"),
        Err(SceneError::Parse(_))
    ));
    assert!(matches!(
        load_scene_str(r#"{"sites": [], "verts": [], "v1": [], "v2": [], "exec": "x"}"#),
        Err(SceneError::Parse(_))
    ));
}

#[test]
fn empty_and_non_finite_scenes() {
    assert!(matches!(
        load_scene_str(r#"{"sites": [], "verts": [], "v1": [], "v2": []}"#),
        Err(SceneError::EmptyScene)
    ));
    let err = SceneData::new(vec![vector![0.0, f64::NAN]], vec![], vec![], vec![]).unwrap_err();
    assert!(matches!(
        err,
        SceneError::NonFinite {
            collection: "sites",
            row: 0
        }
    ));
}

#[test]
fn round_trip_through_disk_is_exact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");
    let scene = fixtures::clipped();
    save_scene_path(&scene, &path).unwrap();
    let back = load_scene_path(&path).unwrap();
    assert_eq!(back, scene);
    // Awkward binary fractions survive too.
    let odd = SceneData::new(
        vec![vector![0.1 + 0.2, 1.0 / 3.0]],
        vec![vector![1e-300, -2.5e17]],
        vec![],
        vec![],
    )
    .unwrap();
    let back = load_scene_str(&serde_json::to_string(&odd.to_document()).unwrap()).unwrap();
    assert_eq!(back.sites()[0].x.to_bits(), (0.1f64 + 0.2).to_bits());
    assert_eq!(back, odd);
}

fn coord() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

fn points(max: usize) -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((coord(), coord()).prop_map(|(x, y)| vector![x, y]), 0..max)
}

fn same_bits(a: &[Vector2<f64>], b: &[Vector2<f64>]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(p, q)| {
            p.x.to_bits() == q.x.to_bits() && p.y.to_bits() == q.y.to_bits()
        })
}

proptest! {
    #[test]
    fn document_round_trip_keeps_every_bit(
        sites in points(6),
        verts in points(6),
        edges in prop::collection::vec(
            ((coord(), coord()), (coord(), coord())),
            0..6,
        ),
    ) {
        let (starts, ends): (Vec<_>, Vec<_>) = edges
            .into_iter()
            .map(|((ax, ay), (bx, by))| (vector![ax, ay], vector![bx, by]))
            .unzip();
        prop_assume!(!(sites.is_empty() && verts.is_empty() && starts.is_empty()));
        let scene = SceneData::new(sites, verts, starts, ends).unwrap();
        let text = serde_json::to_string(&scene.to_document()).unwrap();
        let back = load_scene_str(&text).unwrap();
        prop_assert!(same_bits(back.sites(), scene.sites()));
        prop_assert!(same_bits(back.verts(), scene.verts()));
        prop_assert!(same_bits(back.edge_starts(), scene.edge_starts()));
        prop_assert!(same_bits(back.edge_ends(), scene.edge_ends()));
    }
}

#[test]
fn missing_file_reports_path() {
    let err = load_scene_path("/nonexistent/scene.json").unwrap_err();
    assert!(err.to_string().contains("/nonexistent/scene.json"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn fixtures_are_consistent() {
    for name in fixtures::NAMES {
        let s = fixtures::by_name(name).unwrap();
        assert_eq!(s.edge_starts().len(), s.edge_ends().len());
        assert!(!s.sites().is_empty());
    }
    assert!(fixtures::by_name("huge").is_none());
    // Interior vertices are circumcenters of site triples.
    let s = fixtures::small();
    let c = circumcenter(s.sites()[1], s.sites()[2], s.sites()[3]).unwrap();
    assert!((c - s.verts()[0]).norm() < 1e-5);
    let c = circumcenter(s.sites()[0], s.sites()[2], s.sites()[3]).unwrap();
    assert!((c - s.verts()[1]).norm() < 1e-5);
}
