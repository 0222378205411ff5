//! Sampled lower envelope of the active arcs.
//!
//! Cost is `O(sites × columns)` per frame with no cross-frame state; the grid
//! trades exact arc breakpoints for a bounded, simple per-frame pass.
//! `BeachlineEnvelope::breakpoints` recovers the exact breakpoints afterwards
//! when a caller needs them.

use nalgebra::Vector2;
use serde::Serialize;

use super::grid::SampleGrid;
use super::parabola::{breakpoint, evaluate_parabola, is_active};

/// Run of consecutive columns whose minimum comes from the same site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ArcSpan {
    pub site: usize,
    /// First and last column, inclusive.
    pub first: usize,
    pub last: usize,
}

/// One height per grid column at a single directrix.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BeachlineEnvelope {
    grid: SampleGrid,
    directrix: f64,
    heights: Vec<f64>,
    /// Index of the site attaining the minimum; `None` where the height is infinite.
    owners: Vec<Option<usize>>,
}

impl BeachlineEnvelope {
    #[inline]
    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }
    #[inline]
    pub fn directrix(&self) -> f64 {
        self.directrix
    }
    #[inline]
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }
    #[inline]
    pub fn owners(&self) -> &[Option<usize>] {
        &self.owners
    }

    /// `(x, height)` per column.
    pub fn samples(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.grid.xs().zip(self.heights.iter().copied())
    }

    /// Envelope height at the column nearest `x` (clamped into the grid).
    #[inline]
    pub fn height_at(&self, x: f64) -> f64 {
        self.heights[self.grid.column_of(x)]
    }

    /// True while no arc contributes anywhere (nothing revealed yet).
    pub fn is_unbounded(&self) -> bool {
        self.owners.iter().all(Option::is_none)
    }

    /// Visible arcs, left to right.
    pub fn arc_spans(&self) -> Vec<ArcSpan> {
        let mut spans: Vec<ArcSpan> = Vec::new();
        for (col, owner) in self.owners.iter().enumerate() {
            let Some(site) = *owner else { continue };
            match spans.last_mut() {
                Some(last) if last.site == site && last.last + 1 == col => last.last = col,
                _ => spans.push(ArcSpan {
                    site,
                    first: col,
                    last: col,
                }),
            }
        }
        spans
    }

    /// Exact breakpoints between horizontally adjacent arc spans.
    ///
    /// `sites` must be the slice the envelope was sampled from. Pairs whose
    /// arcs admit no left-to-right crossing are skipped.
    pub fn breakpoints(&self, sites: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
        self.arc_spans()
            .windows(2)
            .filter(|w| w[0].last + 1 == w[1].first)
            .filter_map(|w| breakpoint(sites[w[0].site], sites[w[1].site], self.directrix))
            .collect()
    }
}

/// Minimum arc height over all sites active at `directrix`, per grid column.
///
/// Inactive sites contribute nothing; with none active every height is `+inf`.
/// Ties keep the lower site index.
pub fn sample_envelope(
    sites: &[Vector2<f64>],
    directrix: f64,
    grid: &SampleGrid,
) -> BeachlineEnvelope {
    let mut heights = vec![f64::INFINITY; grid.len()];
    let mut owners = vec![None; grid.len()];
    for (i, &site) in sites.iter().enumerate() {
        if !is_active(site, directrix) {
            continue;
        }
        for (col, x) in grid.xs().enumerate() {
            let h = evaluate_parabola(site, directrix, x);
            if h < heights[col] {
                heights[col] = h;
                owners[col] = Some(i);
            }
        }
    }
    BeachlineEnvelope {
        grid: *grid,
        directrix,
        heights,
        owners,
    }
}
