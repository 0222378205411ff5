//! Which parts of the final diagram the sweep has already passed.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::envelope::BeachlineEnvelope;

/// How an edge's visibility follows from its endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Revealed once both endpoints are revealed.
    #[default]
    BothEndpoints,
    /// Revealed as soon as the start endpoint is. Coarser; kept to compare
    /// against recordings made with it.
    StartEndpoint,
}

/// `p` lies on or above the envelope at its nearest column.
#[inline]
pub fn is_revealed(envelope: &BeachlineEnvelope, p: Vector2<f64>) -> bool {
    p.y >= envelope.height_at(p.x)
}

pub fn is_edge_revealed(
    envelope: &BeachlineEnvelope,
    start: Vector2<f64>,
    end: Vector2<f64>,
    policy: EdgePolicy,
) -> bool {
    match policy {
        EdgePolicy::BothEndpoints => is_revealed(envelope, start) && is_revealed(envelope, end),
        EdgePolicy::StartEndpoint => is_revealed(envelope, start),
    }
}

/// Indices of the revealed points, ascending.
pub fn revealed_points(envelope: &BeachlineEnvelope, points: &[Vector2<f64>]) -> Vec<usize> {
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| is_revealed(envelope, **p))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of the revealed edges given index-aligned endpoint lists.
pub fn revealed_edges(
    envelope: &BeachlineEnvelope,
    starts: &[Vector2<f64>],
    ends: &[Vector2<f64>],
    policy: EdgePolicy,
) -> Vec<usize> {
    starts
        .iter()
        .zip(ends)
        .enumerate()
        .filter(|(_, (s, e))| is_edge_revealed(envelope, **s, **e, policy))
        .map(|(i, _)| i)
        .collect()
}

/// Directrix at which the exact (unsampled) beach line passes `p`.
///
/// `p` is behind the beach line at `d` iff some site `s` has
/// `|p - s| <= p.y - d`, so the sweep reveals `p` for every
/// `d <= p.y - min_s |p - s|`. `None` without sites.
pub fn reveal_directrix(p: Vector2<f64>, sites: &[Vector2<f64>]) -> Option<f64> {
    sites
        .iter()
        .map(|s| (p - s).norm())
        .min_by(f64::total_cmp)
        .map(|r| p.y - r)
}
