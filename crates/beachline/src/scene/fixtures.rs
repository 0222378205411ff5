//! Recorded scenes for tests, benches, and the CLI `fixture` command.
//!
//! Both were dumped from a Fortune run; vertex lists end with the synthetic
//! bounding-box corners and clip points the run inserted.

use nalgebra::Vector2;

use super::SceneData;

type Pair = (f64, f64);

const SMALL_SITES: &[Pair] = &[(2.0, 2.0), (10.0, 2.0), (6.0, 0.1), (9.0, 5.0)];

const SMALL_VERTS: &[Pair] = &[
    (7.200360, 2.733453),
    (5.340514, 3.872134),
    // clipping box and clip points
    (-0.897282, -4.347282),
    (12.897282, -4.347282),
    (12.897282, 9.447282),
    (-0.897282, 9.447282),
    (1.436291, -4.347282),
    (10.563709, -4.347282),
    (12.897282, 4.632427),
    (2.951165, 9.447282),
];

const SMALL_V1: &[Pair] = &[
    (5.340514, 3.872134),
    (7.200360, 2.733453),
    (7.200360, 2.733453),
    (12.897282, 4.632427),
    (2.951165, 9.447282),
];

const SMALL_V2: &[Pair] = &[
    (1.436291, -4.347282),
    (5.340514, 3.872134),
    (10.563709, -4.347282),
    (7.200360, 2.733453),
    (5.340514, 3.872134),
];

const CLIPPED_SITES: &[Pair] = &[
    (61.0, 121.0),
    (71.0, 121.0),
    (101.0, 121.0),
    (141.0, 121.0),
    (81.0, 61.0),
    (71.0, 39.0),
    (71.0, 142.25),
];

const CLIPPED_VERTS: &[Pair] = &[
    (215.333333, -13.333333),
    (21.846154, 74.615385),
    (121.000000, 81.000000),
    (66.000000, 89.333333),
    (86.000000, 92.666667),
    (86.000000, 131.625000),
    (121.000000, 181.036765),
    (66.000000, 131.625000),
    // clipping box and clip points
    (-48.988438, -83.726466),
    (286.167925, -83.726466),
    (286.167925, 251.429897),
    (-48.988438, 251.429897),
    (-48.988438, 185.737206),
    (286.167925, -73.801887),
    (142.369344, 251.429897),
    (-48.988438, 65.977020),
];

const CLIPPED_V1: &[Pair] = &[
    (-48.988438, 185.737206),
    (86.000000, 131.625000),
    (215.333333, -13.333333),
    (215.333333, -13.333333),
    (86.000000, 131.625000),
    (121.000000, 181.036765),
    (66.000000, 89.333333),
    (142.369344, 251.429897),
    (66.000000, 131.625000),
    (86.000000, 131.625000),
    (86.000000, 92.666667),
    (66.000000, 89.333333),
    (121.000000, 81.000000),
    (21.846154, 74.615385),
];

const CLIPPED_V2: &[Pair] = &[
    (66.000000, 131.625000),
    (66.000000, 131.625000),
    (286.167925, -73.801887),
    (21.846154, 74.615385),
    (121.000000, 181.036765),
    (121.000000, 81.000000),
    (21.846154, 74.615385),
    (121.000000, 181.036765),
    (66.000000, 89.333333),
    (86.000000, 92.666667),
    (121.000000, 81.000000),
    (86.000000, 92.666667),
    (215.333333, -13.333333),
    (-48.988438, 65.977020),
];

/// Names accepted by `by_name`.
pub const NAMES: &[&str] = &["small", "clipped"];

fn points(pairs: &[Pair]) -> Vec<Vector2<f64>> {
    pairs.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
}

fn build(sites: &[Pair], verts: &[Pair], v1: &[Pair], v2: &[Pair]) -> SceneData {
    SceneData::new(points(sites), points(verts), points(v1), points(v2))
        .expect("bundled fixture is well-formed")
}

/// Four sites, two interior vertices, five edges.
pub fn small() -> SceneData {
    build(SMALL_SITES, SMALL_VERTS, SMALL_V1, SMALL_V2)
}

/// Seven sites on a 300-unit canvas with a clipping box; fourteen edges.
pub fn clipped() -> SceneData {
    build(CLIPPED_SITES, CLIPPED_VERTS, CLIPPED_V1, CLIPPED_V2)
}

pub fn by_name(name: &str) -> Option<SceneData> {
    match name {
        "small" => Some(small()),
        "clipped" => Some(clipped()),
        _ => None,
    }
}
