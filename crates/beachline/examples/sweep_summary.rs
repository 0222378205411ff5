//! Walk a bundled fixture through its sweep and print what every tenth frame
//! reveals, plus the exact breakpoints of the beach line.
//!
//! Run: `cargo run -p beachline --example sweep_summary [small|clipped]`

use beachline::prelude::*;
use beachline::scene::fixtures;

fn main() {
    let name = std::env::args().nth(1).unwrap_or_else(|| "small".to_string());
    let scene = fixtures::by_name(&name).expect("unknown fixture (try small or clipped)");
    let cfg = SweepCfg {
        frames: 50,
        ..SweepCfg::default()
    };
    let set = FrameSet::precompute(&scene, &cfg);
    println!(
        "fixture={name} sites={} verts={} edges={} step={:.4}",
        scene.sites().len(),
        scene.verts().len(),
        scene.num_edges(),
        set.step()
    );
    for frame in set.playback().step_by(10) {
        let arcs: Vec<usize> = frame.envelope.arc_spans().iter().map(|s| s.site).collect();
        let bps = frame.envelope.breakpoints(scene.sites());
        println!(
            "frame={:>3} d={:>9.4} active={:?} arcs={:?} breakpoints={} sites={}/{} verts={}/{} edges={}/{}",
            frame.index,
            frame.directrix,
            frame.active_sites,
            arcs,
            bps.len(),
            frame.revealed_sites.len(),
            scene.sites().len(),
            frame.revealed_verts.len(),
            scene.verts().len(),
            frame.revealed_edges.len(),
            scene.num_edges()
        );
    }
}
