use nalgebra::{Matrix3, Vector2};

/// Twice the signed area of triangle `(a, b, c)`.
/// Positive when `a → b → c` turns counterclockwise, zero when collinear.
#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)
}

/// Center of the circle through `a`, `b`, `c`; `None` for collinear input.
///
/// A diagram vertex is the circumcenter of the sites whose regions meet there,
/// and its discovery directrix is `center.y - radius`.
pub fn circumcenter(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Option<Vector2<f64>> {
    let det = 2.0 * orientation(a, b, c);
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let (na, nb, nc) = (a.norm_squared(), b.norm_squared(), c.norm_squared());
    // Cramer's rule on the two bisector equations.
    let mx = Matrix3::new(na, a.y, 1.0, nb, b.y, 1.0, nc, c.y, 1.0);
    let my = Matrix3::new(a.x, na, 1.0, b.x, nb, 1.0, c.x, nc, 1.0);
    Some(Vector2::new(mx.determinant() / det, my.determinant() / det))
}
