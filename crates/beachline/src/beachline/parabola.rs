//! Point–directrix parabolas.
//!
//! For focus `F = (fx, fy)` and horizontal directrix `y = d`, the arc is the
//! locus of points equidistant to both:
//!
//! `y(x) = ((x - fx)² + fy² - d²) / (2 (fy - d))`

use nalgebra::Vector2;

use super::grid::SampleGrid;

/// Whether the sweep at `directrix` has already crossed `focus`.
#[inline]
pub fn is_active(focus: Vector2<f64>, directrix: f64) -> bool {
    focus.y >= directrix
}

/// Height of the arc of `focus` at abscissa `x`.
///
/// When `focus.y == directrix` the arc has collapsed to the vertical ray above
/// the focus: the result is `+inf` for every `x != focus.x` and `focus.y` at
/// the focus itself (the limit of the apex). Never NaN for finite input.
#[inline]
pub fn evaluate_parabola(focus: Vector2<f64>, directrix: f64, x: f64) -> f64 {
    let t = focus.y - directrix;
    if t == 0.0 {
        return if x == focus.x { focus.y } else { f64::INFINITY };
    }
    let dx = x - focus.x;
    (dx * dx + focus.y * focus.y - directrix * directrix) / (2.0 * t)
}

/// One arc sampled at every grid column.
pub fn sample_arc(focus: Vector2<f64>, directrix: f64, grid: &SampleGrid) -> Vec<f64> {
    grid.xs()
        .map(|x| evaluate_parabola(focus, directrix, x))
        .collect()
}

/// Exact breakpoint between two active arcs, where `left`'s arc precedes
/// `right`'s along the beach line.
///
/// Returns `None` if either focus is inactive, if both lie on the directrix,
/// or if the arcs have no such crossing (equal ordinates with
/// `left.x >= right.x`). A focus on the directrix pins the breakpoint to its
/// own abscissa.
pub fn breakpoint(left: Vector2<f64>, right: Vector2<f64>, directrix: f64) -> Option<Vector2<f64>> {
    let tl = left.y - directrix;
    let tr = right.y - directrix;
    if tl < 0.0 || tr < 0.0 {
        return None;
    }
    let x = match (tl == 0.0, tr == 0.0) {
        (true, true) => return None,
        (true, false) => left.x,
        (false, true) => right.x,
        (false, false) if tl == tr => {
            if left.x >= right.x {
                return None;
            }
            0.5 * (left.x + right.x)
        }
        (false, false) => {
            // tr (x - lx)² - tl (x - rx)² + tl tr (tl - tr) = 0, taking the root
            // where the left arc hands over to the right one.
            let a = tr - tl;
            let h = tl * right.x - tr * left.x;
            let disc = tl * tr * (left - right).norm_squared();
            (-h + disc.sqrt()) / a
        }
    };
    let y = if tl == 0.0 {
        evaluate_parabola(right, directrix, x)
    } else {
        evaluate_parabola(left, directrix, x)
    };
    Some(Vector2::new(x, y))
}
