//! Immutable scene geometry and its persisted document format.
//!
//! Purpose
//! - Hold the already-solved diagram (sites, vertices, edge endpoint lists) as
//!   one read-only `SceneData` value that every component borrows.
//! - Parse the four-collection JSON document with a fixed schema and report
//!   which collection/row failed validation.
//!
//! Code cross-refs: `beachline::SampleGrid::from_bounds`, `sweep::SweepFrameSequencer`.

pub mod fixtures;
mod load;
pub mod rand;
mod types;

pub use load::{load_scene_path, load_scene_str, save_scene_path, SceneDocument, SceneError};
pub use types::{Bounds2, SceneData};

#[cfg(test)]
mod tests;
