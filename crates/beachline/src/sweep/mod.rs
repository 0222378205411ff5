//! Driving the reconstruction across a sweep.
//!
//! - `SweepFrameSequencer`: the ordered directrix values, top to bottom.
//! - `segment_crossing`/`scene_crossings`: where edges meet one directrix.
//! - `compute_frame`/`FrameSet`: per-frame payloads for a renderer.
//!
//! Frames are independent pure computations; only their presentation order
//! matters. `FrameSet::precompute` exploits that with scoped worker threads
//! writing into an ordered buffer.

mod frame;
mod intersect;
mod sequencer;

pub use frame::{compute_frame, Frame, FrameSet};
pub use intersect::{scene_crossings, segment_crossing, SweepCrossing};
pub use sequencer::SweepFrameSequencer;
