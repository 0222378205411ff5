use nalgebra::Vector2;

use crate::scene::SceneData;

/// How a segment meets the horizontal line `y = d`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SweepCrossing {
    /// Unique crossing; its ordinate is exactly `d`.
    Point(Vector2<f64>),
    /// The segment is horizontal and lies on the line; endpoints ordered by `x`.
    Collinear {
        from: Vector2<f64>,
        to: Vector2<f64>,
    },
    Miss,
}

impl SweepCrossing {
    pub fn point(&self) -> Option<Vector2<f64>> {
        match self {
            SweepCrossing::Point(p) => Some(*p),
            _ => None,
        }
    }
}

/// Crossing of segment `p1 p2` with `y = directrix`, endpoints inclusive.
pub fn segment_crossing(p1: Vector2<f64>, p2: Vector2<f64>, directrix: f64) -> SweepCrossing {
    let (lo, hi) = if p1.y > p2.y { (p2, p1) } else { (p1, p2) };
    if !(lo.y <= directrix && directrix <= hi.y) {
        return SweepCrossing::Miss;
    }
    if lo.y == hi.y {
        let (from, to) = if lo.x > hi.x { (hi, lo) } else { (lo, hi) };
        return SweepCrossing::Collinear { from, to };
    }
    let t = (directrix - lo.y) / (hi.y - lo.y);
    SweepCrossing::Point(Vector2::new(lo.x + t * (hi.x - lo.x), directrix))
}

/// Every edge of `scene` that meets `y = directrix`, as `(edge index, crossing)`.
pub fn scene_crossings(scene: &SceneData, directrix: f64) -> Vec<(usize, SweepCrossing)> {
    scene
        .edges()
        .enumerate()
        .map(|(i, (a, b))| (i, segment_crossing(a, b, directrix)))
        .filter(|(_, c)| *c != SweepCrossing::Miss)
        .collect()
}
