//! Beach line: parabolic arcs, their sampled lower envelope, and the
//! visibility predicate derived from it.
//!
//! Conventions
//! - The sweep moves top-down. A site is active at directrix `d` iff
//!   `site.y >= d`; active arcs open upward and the beach line is their
//!   pointwise minimum over a fixed `SampleGrid`.
//! - A point is revealed iff it lies on or above the envelope at its nearest
//!   column. An infinite column (no active arc yet) reveals nothing.
//! - A site exactly on the directrix is a degenerate arc: `+inf` everywhere
//!   except its own abscissa. This is a value, never an error.
//!
//! Code cross-refs: `sweep::compute_frame` (per-frame driver).

mod envelope;
mod grid;
mod parabola;
mod visibility;

pub use envelope::{sample_envelope, ArcSpan, BeachlineEnvelope};
pub use grid::SampleGrid;
pub use parabola::{breakpoint, evaluate_parabola, is_active, sample_arc};
pub use visibility::{
    is_edge_revealed, is_revealed, reveal_directrix, revealed_edges, revealed_points, EdgePolicy,
};

#[cfg(test)]
mod tests;
