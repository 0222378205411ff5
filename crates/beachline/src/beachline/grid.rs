use serde::Serialize;

use crate::scene::Bounds2;

/// Fixed horizontal sample grid: `len` evenly spaced abscissas from `min_x` to
/// `max_x` inclusive. Shared by every frame of a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SampleGrid {
    min_x: f64,
    max_x: f64,
    len: usize,
}

impl SampleGrid {
    /// `len` is clamped to at least one column; `max_x < min_x` is swapped.
    pub fn new(min_x: f64, max_x: f64, len: usize) -> Self {
        let (min_x, max_x) = if max_x < min_x {
            (max_x, min_x)
        } else {
            (min_x, max_x)
        };
        Self {
            min_x,
            max_x,
            len: len.max(1),
        }
    }

    /// Grid over the x-extent of a scene's bounding box.
    pub fn from_bounds(bounds: Bounds2, resolution: usize) -> Self {
        Self::new(bounds.min.x, bounds.max.x, resolution)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }
    /// A grid always has at least one column.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Column spacing; zero for a one-column grid.
    #[inline]
    pub fn step(&self) -> f64 {
        if self.len < 2 {
            0.0
        } else {
            (self.max_x - self.min_x) / (self.len - 1) as f64
        }
    }

    /// Abscissa of column `col`. The last column is exactly `max_x`.
    #[inline]
    pub fn x(&self, col: usize) -> f64 {
        if col + 1 >= self.len {
            if self.len == 1 {
                self.min_x
            } else {
                self.max_x
            }
        } else {
            self.min_x + col as f64 * self.step()
        }
    }

    pub fn xs(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len).map(move |col| self.x(col))
    }

    /// Column nearest to `x`, clamped into the grid. Points drifting outside
    /// the span (or NaN) land on the closest edge column.
    pub fn column_of(&self, x: f64) -> usize {
        let step = self.step();
        if !(step > 0.0) {
            return 0;
        }
        let c = ((x - self.min_x) / step).round();
        if !(c > 0.0) {
            0
        } else {
            (c as usize).min(self.len - 1)
        }
    }
}
