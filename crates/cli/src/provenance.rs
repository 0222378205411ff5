use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to every artifact the CLI writes.
pub struct Payload {
    pub params: Value,
    pub scene: Option<PathBuf>,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            scene: None,
            tag: None,
        }
    }

    pub fn scene<P: AsRef<Path>>(mut self, scene: P) -> Self {
        self.scene = Some(scene.as_ref().to_path_buf());
        self
    }

    pub fn tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

/// Provenance block shared by sidecars and `report`.
#[track_caller]
pub fn provenance_doc(payload: &Payload, outputs: &[&Path]) -> Value {
    let callsite = Location::caller();
    json!({
        "code_rev": current_git_rev(),
        "version": beachline::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "tag": payload.tag,
        "scene": payload.scene.as_ref().map(|p| p.to_string_lossy().into_owned()),
        "params": payload.params,
        "outputs": outputs.iter().map(|p| p.to_string_lossy().into_owned()).collect::<Vec<_>>()
    })
}

/// Write `<artifact>.provenance.json` describing how `artifact` was produced.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = provenance_doc(&payload, &[artifact]);
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), "provenance_written");
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}
