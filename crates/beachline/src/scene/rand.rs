//! Random scenes (uniform sites, vertices, and vertex-to-vertex edges).
//!
//! Purpose
//! - Feed property tests and benchmarks with reproducible scenes of a chosen
//!   size. The geometry is not a valid Voronoi diagram; the engine never
//!   relies on that.
//!
//! Determinism uses a replay token `(seed, index)` written straight into the
//! RNG key, so draw `k` of a run can be regenerated without replaying draws
//! `0..k`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::SceneData;

/// Scene sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomSceneCfg {
    pub sites: usize,
    pub verts: usize,
    /// Each edge joins two distinct vertices (needs `verts >= 2`).
    pub edges: usize,
    /// Points are drawn from `[-extent, extent]²`.
    pub extent: f64,
}

impl Default for RandomSceneCfg {
    fn default() -> Self {
        Self {
            sites: 24,
            verts: 40,
            edges: 60,
            extent: 100.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// Key the RNG with both halves of the token. `StdRng` takes a full
    /// 256-bit key, so distinct `(seed, index)` pairs give independent
    /// streams without a pre-mixing step.
    fn rng(self) -> StdRng {
        let mut key = <StdRng as SeedableRng>::Seed::default();
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        key[16..].copy_from_slice(b"beachline-scenes");
        StdRng::from_seed(key)
    }
}

/// Draw a random scene. Returns `None` when the configuration cannot produce a
/// non-empty scene (no points requested, or edges without two vertices).
pub fn draw_scene(cfg: RandomSceneCfg, tok: ReplayToken) -> Option<SceneData> {
    if cfg.edges > 0 && cfg.verts < 2 {
        return None;
    }
    let ext = cfg.extent.abs().max(1e-9);
    let mut rng = tok.rng();
    let point =
        |rng: &mut StdRng| Vector2::new(rng.gen_range(-ext..=ext), rng.gen_range(-ext..=ext));
    let sites: Vec<_> = (0..cfg.sites).map(|_| point(&mut rng)).collect();
    let verts: Vec<_> = (0..cfg.verts).map(|_| point(&mut rng)).collect();
    let mut starts = Vec::with_capacity(cfg.edges);
    let mut ends = Vec::with_capacity(cfg.edges);
    for _ in 0..cfg.edges {
        let a = rng.gen_range(0..cfg.verts);
        // Shift past `a` to keep the endpoints distinct.
        let mut b = rng.gen_range(0..cfg.verts - 1);
        if b >= a {
            b += 1;
        }
        starts.push(verts[a]);
        ends.push(verts[b]);
    }
    SceneData::new(sites, verts, starts, ends).ok()
}
