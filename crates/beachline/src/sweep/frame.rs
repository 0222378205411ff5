//! Per-frame payloads and ordered precompute.

use std::thread;

use serde::Serialize;

use crate::beachline::{
    is_active, revealed_edges, revealed_points, sample_envelope, BeachlineEnvelope, EdgePolicy,
    SampleGrid,
};
use crate::cfg::SweepCfg;
use crate::scene::SceneData;

use super::sequencer::SweepFrameSequencer;

/// Everything a renderer needs for one directrix.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub index: usize,
    pub directrix: f64,
    /// Sites whose arcs exist at this directrix (draw these arcs).
    pub active_sites: Vec<usize>,
    pub envelope: BeachlineEnvelope,
    pub revealed_sites: Vec<usize>,
    pub revealed_verts: Vec<usize>,
    pub revealed_edges: Vec<usize>,
}

/// Pure function of its arguments; no state survives between calls.
pub fn compute_frame(
    scene: &SceneData,
    grid: &SampleGrid,
    index: usize,
    directrix: f64,
    policy: EdgePolicy,
) -> Frame {
    let envelope = sample_envelope(scene.sites(), directrix, grid);
    let active_sites = scene
        .sites()
        .iter()
        .enumerate()
        .filter(|(_, s)| is_active(**s, directrix))
        .map(|(i, _)| i)
        .collect();
    Frame {
        index,
        directrix,
        active_sites,
        revealed_sites: revealed_points(&envelope, scene.sites()),
        revealed_verts: revealed_points(&envelope, scene.verts()),
        revealed_edges: revealed_edges(&envelope, scene.edge_starts(), scene.edge_ends(), policy),
        envelope,
    }
}

/// All frames of one sweep, in presentation order.
#[derive(Clone, Debug, Serialize)]
pub struct FrameSet {
    grid: SampleGrid,
    step: f64,
    frames: Vec<Frame>,
}

impl FrameSet {
    /// Compute every frame of `cfg.frames` on up to `cfg.worker_count()` scoped
    /// threads. Workers take contiguous index ranges and results are stitched
    /// back in index order, so the output never depends on scheduling.
    pub fn precompute(scene: &SceneData, cfg: &SweepCfg) -> Self {
        let grid = SampleGrid::from_bounds(scene.bounds(), cfg.resolution);
        let seq = SweepFrameSequencer::new(scene, cfg.frames);
        let step = seq.step();
        let directrices: Vec<f64> = seq.collect();
        let workers = cfg.worker_count().min(directrices.len()).max(1);
        tracing::debug!(
            frames = directrices.len(),
            columns = grid.len(),
            workers,
            step,
            "precompute_frames"
        );
        let policy = cfg.edge_policy;
        let run = |offset: usize, ds: &[f64]| -> Vec<Frame> {
            ds.iter()
                .enumerate()
                .map(|(k, &d)| compute_frame(scene, &grid, offset + k, d, policy))
                .collect()
        };
        let frames = if workers == 1 {
            run(0, &directrices)
        } else {
            let chunk = directrices.len().div_ceil(workers);
            thread::scope(|s| {
                let handles: Vec<_> = directrices
                    .chunks(chunk)
                    .enumerate()
                    .map(|(c, ds)| s.spawn(move || run(c * chunk, ds)))
                    .collect();
                let mut frames = Vec::with_capacity(directrices.len());
                for h in handles {
                    // A panicking worker aborts the whole sweep.
                    frames.extend(h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)));
                }
                frames
            })
        };
        Self { grid, step, frames }
    }

    #[inline]
    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }
    /// Directrix spacing between consecutive frames.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames in presentation order.
    pub fn playback(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Endless replay for a looping display; empty if there are no frames.
    pub fn looped(&self) -> std::iter::Cycle<std::slice::Iter<'_, Frame>> {
        self.frames.iter().cycle()
    }
}
