//! Scene document: four collections of `[x, y]` pairs.
//!
//! ```json
//! { "sites": [[2, 2], ...], "verts": [...], "v1": [...], "v2": [...] }
//! ```
//!
//! `v1[i]`/`v2[i]` are the endpoints of edge `i`. Vertices may include the
//! synthetic bounding-box corners used for clipping; the loader does not
//! distinguish them. The schema is fixed: unknown keys are rejected and no
//! entry is ever interpreted as anything but a pair of numbers.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;

use super::types::SceneData;

/// Errors surfaced while loading or validating a scene.
#[derive(Debug)]
pub enum SceneError {
    /// Reading or writing the document failed.
    Io { path: PathBuf, source: std::io::Error },
    /// The document is not JSON of the expected top-level shape.
    Parse(serde_json::Error),
    /// Writing the document as JSON failed.
    Encode(serde_json::Error),
    /// One of `sites`, `verts`, `v1`, `v2` is absent.
    MissingCollection { collection: &'static str },
    /// A collection is present but is not an array of rows.
    BadCollection {
        collection: &'static str,
        reason: String,
    },
    /// A row is not exactly two numbers.
    BadPair {
        collection: &'static str,
        row: usize,
        reason: String,
    },
    /// `v1` and `v2` differ in length.
    EdgeLengthMismatch { starts: usize, ends: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { collection: &'static str, row: usize },
    /// The scene has no points, so no bounding box exists.
    EmptyScene,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            SceneError::Parse(err) => write!(f, "malformed scene document: {err}"),
            SceneError::Encode(err) => write!(f, "encoding scene document: {err}"),
            SceneError::MissingCollection { collection } => {
                write!(f, "scene document has no `{collection}` collection")
            }
            SceneError::BadCollection { collection, reason } => {
                write!(f, "`{collection}` is not a list of pairs: {reason}")
            }
            SceneError::BadPair {
                collection,
                row,
                reason,
            } => write!(f, "`{collection}` row {row}: {reason}"),
            SceneError::EdgeLengthMismatch { starts, ends } => write!(
                f,
                "edge endpoint lists differ in length (v1 has {starts}, v2 has {ends})"
            ),
            SceneError::NonFinite { collection, row } => {
                write!(f, "`{collection}` row {row}: coordinate is not finite")
            }
            SceneError::EmptyScene => write!(f, "scene has no points"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Io { source, .. } => Some(source),
            SceneError::Parse(err) | SceneError::Encode(err) => Some(err),
            _ => None,
        }
    }
}

/// Serialized form of a scene, as written by `SceneData::to_document`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    pub sites: Vec<[f64; 2]>,
    pub verts: Vec<[f64; 2]>,
    pub v1: Vec<[f64; 2]>,
    pub v2: Vec<[f64; 2]>,
}

impl SceneDocument {
    /// Validate into a `SceneData`.
    pub fn into_scene(self) -> Result<SceneData, SceneError> {
        let conv = |v: Vec<[f64; 2]>| v.into_iter().map(|[x, y]| Vector2::new(x, y)).collect();
        SceneData::new(conv(self.sites), conv(self.verts), conv(self.v1), conv(self.v2))
    }
}

impl SceneData {
    pub fn to_document(&self) -> SceneDocument {
        let conv = |pts: &[Vector2<f64>]| pts.iter().map(|p| [p.x, p.y]).collect();
        SceneDocument {
            sites: conv(self.sites()),
            verts: conv(self.verts()),
            v1: conv(self.edge_starts()),
            v2: conv(self.edge_ends()),
        }
    }
}

// Collections and rows stay raw until `parse_pairs` so every failure past the
// top-level object can name its collection and row.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocument<'a> {
    #[serde(borrow)]
    sites: Option<&'a RawValue>,
    #[serde(borrow)]
    verts: Option<&'a RawValue>,
    #[serde(borrow)]
    v1: Option<&'a RawValue>,
    #[serde(borrow)]
    v2: Option<&'a RawValue>,
}

fn parse_pairs(
    collection: &'static str,
    raw: Option<&RawValue>,
) -> Result<Vec<Vector2<f64>>, SceneError> {
    let raw = raw.ok_or(SceneError::MissingCollection { collection })?;
    let rows: Vec<&RawValue> =
        serde_json::from_str(raw.get()).map_err(|err| SceneError::BadCollection {
            collection,
            reason: err.to_string(),
        })?;
    rows.iter()
        .enumerate()
        .map(|(row, text)| {
            let bad = |reason: String| SceneError::BadPair {
                collection,
                row,
                reason,
            };
            // Out-of-range literals like `1e400` fail here.
            let value: Value =
                serde_json::from_str(text.get()).map_err(|err| bad(err.to_string()))?;
            let items = value
                .as_array()
                .ok_or_else(|| bad(format!("expected a pair, found {value}")))?;
            if items.len() != 2 {
                return Err(bad(format!("expected 2 values, found {}", items.len())));
            }
            let coord = |v: &Value| {
                v.as_f64()
                    .ok_or_else(|| bad(format!("expected a number, found {v}")))
            };
            let p = Vector2::new(coord(&items[0])?, coord(&items[1])?);
            if !(p.x.is_finite() && p.y.is_finite()) {
                return Err(SceneError::NonFinite { collection, row });
            }
            Ok(p)
        })
        .collect()
}

/// Parse and validate a scene document held in memory.
pub fn load_scene_str(text: &str) -> Result<SceneData, SceneError> {
    let raw: RawDocument = serde_json::from_str(text).map_err(SceneError::Parse)?;
    let sites = parse_pairs("sites", raw.sites)?;
    let verts = parse_pairs("verts", raw.verts)?;
    let starts = parse_pairs("v1", raw.v1)?;
    let ends = parse_pairs("v2", raw.v2)?;
    let scene = SceneData::new(sites, verts, starts, ends)?;
    tracing::debug!(
        sites = scene.sites().len(),
        verts = scene.verts().len(),
        edges = scene.num_edges(),
        "scene_loaded"
    );
    Ok(scene)
}

/// Read and validate a scene document from disk.
pub fn load_scene_path<P: AsRef<Path>>(path: P) -> Result<SceneData, SceneError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_scene_str(&text)
}

/// Write `scene` as a pretty-printed document. Coordinates round-trip exactly.
pub fn save_scene_path<P: AsRef<Path>>(scene: &SceneData, path: P) -> Result<(), SceneError> {
    let path = path.as_ref();
    let bytes = serde_json::to_vec_pretty(&scene.to_document()).map_err(SceneError::Encode)?;
    fs::write(path, bytes).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })
}
