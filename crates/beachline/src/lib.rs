//! Beach-line reconstruction over a solved Voronoi diagram.
//!
//! Given the final output of a Fortune sweep (sites, vertices, edges), this
//! crate rebuilds what the sweep would plausibly have looked like at any
//! directrix: the sampled lower envelope of the active parabolic arcs and the
//! subset of the diagram that lies behind it.
//!
//! Layout
//! - `scene`: immutable input geometry, the JSON document loader, fixtures,
//!   and random scenes.
//! - `beachline`: parabola math, envelope sampling, visibility predicate.
//! - `sweep`: frame sequencing, edge/sweep crossings, per-frame payloads.
//!
//! Each frame is a pure function of `(SceneData, directrix, SampleGrid)`;
//! nothing is carried from one frame to the next.

pub mod beachline;
pub mod cfg;
pub mod geometry;
pub mod scene;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::SweepCfg;
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::beachline::{
        breakpoint, evaluate_parabola, is_revealed, reveal_directrix, sample_arc,
        sample_envelope, ArcSpan, BeachlineEnvelope, EdgePolicy, SampleGrid,
    };
    pub use crate::cfg::SweepCfg;
    pub use crate::scene::{
        load_scene_path, load_scene_str, save_scene_path, Bounds2, SceneData, SceneDocument,
        SceneError,
    };
    pub use crate::sweep::{
        compute_frame, scene_crossings, segment_crossing, Frame, FrameSet, SweepCrossing,
        SweepFrameSequencer,
    };
    pub use nalgebra::Vector2 as Vec2;
}
