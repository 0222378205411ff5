//! Scene data types.
//!
//! - `SceneData`: sites, vertices, and index-aligned edge endpoint lists.
//! - `Bounds2`: axis-aligned bounding box of everything in a scene.

use nalgebra::Vector2;

use super::load::SceneError;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds2 {
    /// Smallest box containing all `points`; `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut b = Self {
            min: first,
            max: first,
        };
        for p in it {
            b.min = b.min.inf(&p);
            b.max = b.max.sup(&p);
        }
        Some(b)
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// The solved diagram under inspection. Constructed once, never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneData {
    sites: Vec<Vector2<f64>>,
    verts: Vec<Vector2<f64>>,
    starts: Vec<Vector2<f64>>,
    ends: Vec<Vector2<f64>>,
    bounds: Bounds2,
}

impl SceneData {
    /// Validate and freeze a scene.
    ///
    /// Errors if the edge lists differ in length, any coordinate is not finite,
    /// or the scene holds no points at all.
    pub fn new(
        sites: Vec<Vector2<f64>>,
        verts: Vec<Vector2<f64>>,
        starts: Vec<Vector2<f64>>,
        ends: Vec<Vector2<f64>>,
    ) -> Result<Self, SceneError> {
        if starts.len() != ends.len() {
            return Err(SceneError::EdgeLengthMismatch {
                starts: starts.len(),
                ends: ends.len(),
            });
        }
        for (collection, pts) in [
            ("sites", &sites),
            ("verts", &verts),
            ("v1", &starts),
            ("v2", &ends),
        ] {
            if let Some(row) = pts.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
                return Err(SceneError::NonFinite { collection, row });
            }
        }
        let bounds = Bounds2::from_points(
            sites
                .iter()
                .chain(&verts)
                .chain(&starts)
                .chain(&ends)
                .copied(),
        )
        .ok_or(SceneError::EmptyScene)?;
        Ok(Self {
            sites,
            verts,
            starts,
            ends,
            bounds,
        })
    }

    #[inline]
    pub fn sites(&self) -> &[Vector2<f64>] {
        &self.sites
    }
    #[inline]
    pub fn verts(&self) -> &[Vector2<f64>] {
        &self.verts
    }
    #[inline]
    pub fn edge_starts(&self) -> &[Vector2<f64>] {
        &self.starts
    }
    #[inline]
    pub fn edge_ends(&self) -> &[Vector2<f64>] {
        &self.ends
    }
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.starts.len()
    }
    /// Edge `i` as `(start, end)`; index-aligned with `edge_starts`/`edge_ends`.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        self.starts.iter().copied().zip(self.ends.iter().copied())
    }
    /// Bounding box over sites, vertices, and both endpoint lists.
    #[inline]
    pub fn bounds(&self) -> Bounds2 {
        self.bounds
    }
}
