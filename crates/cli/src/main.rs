use anyhow::{Context, Result};
use beachline::prelude::*;
use beachline::scene::fixtures;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "beachline")]
#[command(about = "Reconstruct sweep-line frames from a solved Voronoi diagram")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute every frame of a sweep and write them as JSON
    Frames {
        #[command(flatten)]
        sweep: SweepArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write sampled envelopes as a CSV or Parquet table
    Table {
        #[command(flatten)]
        sweep: SweepArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Inspect a scene at a single directrix
    Probe {
        #[arg(long)]
        scene: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        directrix: f64,
        #[arg(long)]
        resolution: Option<usize>,
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
    },
    /// Write a bundled fixture scene document
    Fixture {
        #[arg(long)]
        name: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct SweepArgs {
    /// Scene document (JSON with `sites`, `verts`, `v1`, `v2`)
    #[arg(long)]
    scene: PathBuf,
    /// Optional JSON sweep config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    frames: Option<usize>,
    #[arg(long)]
    resolution: Option<usize>,
    /// Worker threads for precompute (0 = available parallelism)
    #[arg(long)]
    threads: Option<usize>,
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Edge shown once both endpoints are revealed
    Both,
    /// Edge shown once its start endpoint is revealed
    Start,
}

impl From<PolicyArg> for EdgePolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Both => EdgePolicy::BothEndpoints,
            PolicyArg::Start => EdgePolicy::StartEndpoint,
        }
    }
}

impl SweepArgs {
    /// Defaults, then the config file, then explicit flags.
    fn cfg(&self) -> Result<SweepCfg> {
        let mut cfg = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => SweepCfg::default(),
        };
        if let Some(frames) = self.frames {
            cfg.frames = frames;
        }
        if let Some(resolution) = self.resolution {
            cfg.resolution = resolution;
        }
        if let Some(threads) = self.threads {
            cfg.threads = threads;
        }
        if let Some(policy) = self.policy {
            cfg.edge_policy = policy.into();
        }
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Frames { sweep, out } => frames(&sweep, &out, cmd.tag),
        Action::Table { sweep, out } => table(&sweep, &out, cmd.tag),
        Action::Probe {
            scene,
            directrix,
            resolution,
            policy,
        } => probe(&scene, directrix, resolution, policy),
        Action::Fixture { name, out } => fixture(&name, &out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn load(path: &Path) -> Result<SceneData> {
    load_scene_path(path).with_context(|| format!("loading scene {}", path.display()))
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn sweep_params(cfg: &SweepCfg) -> serde_json::Value {
    json!({
        "frames": cfg.frames,
        "resolution": cfg.resolution,
        "edge_policy": cfg.edge_policy,
        "threads": cfg.worker_count(),
    })
}

fn precompute(sweep: &SweepArgs) -> Result<(SweepCfg, FrameSet)> {
    let cfg = sweep.cfg()?;
    let scene = load(&sweep.scene)?;
    let set = FrameSet::precompute(&scene, &cfg);
    tracing::info!(
        frames = set.len(),
        columns = set.grid().len(),
        step = set.step(),
        "frames_ready"
    );
    Ok((cfg, set))
}

fn frames(sweep: &SweepArgs, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(scene = %sweep.scene.display(), out = %out.display(), tag = ?tag, "frames");
    let (cfg, set) = precompute(sweep)?;
    ensure_parent(out)?;
    // Non-finite envelope heights serialize as null.
    std::fs::write(out, serde_json::to_vec(&set)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(sweep_params(&cfg))
        .scene(&sweep.scene)
        .tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn table(sweep: &SweepArgs, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(scene = %sweep.scene.display(), out = %out.display(), tag = ?tag, "table");
    let (cfg, set) = precompute(sweep)?;
    let mut df = export::envelope_table(&set)?;
    tracing::info!(rows = df.height(), cols = df.width(), "envelope_table");
    ensure_parent(out)?;
    export::write_table(&mut df, out)?;
    let payload = Payload::new(sweep_params(&cfg))
        .scene(&sweep.scene)
        .tag(tag);
    write_sidecar(out, payload)?;
    Ok(())
}

fn probe_doc(
    scene: &SceneData,
    directrix: f64,
    resolution: usize,
    policy: EdgePolicy,
) -> serde_json::Value {
    let grid = SampleGrid::from_bounds(scene.bounds(), resolution);
    let frame = compute_frame(scene, &grid, 0, directrix, policy);
    let crossings: Vec<_> = scene_crossings(scene, directrix)
        .into_iter()
        .map(|(edge, c)| match c {
            SweepCrossing::Point(p) => json!({"edge": edge, "kind": "point", "at": [p.x, p.y]}),
            SweepCrossing::Collinear { from, to } => json!({
                "edge": edge,
                "kind": "collinear",
                "from": [from.x, from.y],
                "to": [to.x, to.y]
            }),
            SweepCrossing::Miss => json!({"edge": edge, "kind": "miss"}),
        })
        .collect();
    let breakpoints: Vec<[f64; 2]> = frame
        .envelope
        .breakpoints(scene.sites())
        .iter()
        .map(|p| [p.x, p.y])
        .collect();
    let vertex_reveal: Vec<Option<f64>> = scene
        .verts()
        .iter()
        .map(|v| reveal_directrix(*v, scene.sites()))
        .collect();
    json!({
        "directrix": directrix,
        "active_sites": frame.active_sites,
        "arcs": frame.envelope.arc_spans(),
        "breakpoints": breakpoints,
        "crossings": crossings,
        "revealed": {
            "sites": frame.revealed_sites,
            "verts": frame.revealed_verts,
            "edges": frame.revealed_edges,
        },
        "vertex_reveal_directrix": vertex_reveal,
    })
}

fn probe(
    scene: &Path,
    directrix: f64,
    resolution: Option<usize>,
    policy: Option<PolicyArg>,
) -> Result<()> {
    tracing::info!(scene = %scene.display(), directrix, "probe");
    let data = load(scene)?;
    let doc = probe_doc(
        &data,
        directrix,
        resolution.unwrap_or(beachline::cfg::DEFAULT_RESOLUTION),
        policy.map(Into::into).unwrap_or_default(),
    );
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn fixture(name: &str, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(name, out = %out.display(), "fixture");
    let scene = fixtures::by_name(name).with_context(|| {
        format!(
            "unknown fixture `{name}` (available: {})",
            fixtures::NAMES.join(", ")
        )
    })?;
    ensure_parent(out)?;
    save_scene_path(&scene, out)?;
    write_sidecar(out, Payload::new(json!({ "fixture": name })).tag(tag))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let doc = provenance::provenance_doc(&Payload::new(json!({})).tag(tag), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
