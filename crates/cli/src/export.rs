//! Tabular export of sampled envelopes: one row per (frame, column).
//!
//! Columns: `frame` (u32), `directrix`, `x`, `height` (null where no arc is
//! active), `owner` (site index attaining the minimum, null likewise).

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use beachline::sweep::FrameSet;
use polars::prelude::*;

pub fn envelope_table(set: &FrameSet) -> PolarsResult<DataFrame> {
    let rows = set.len() * set.grid().len();
    let mut frame: Vec<u32> = Vec::with_capacity(rows);
    let mut directrix: Vec<f64> = Vec::with_capacity(rows);
    let mut xs: Vec<f64> = Vec::with_capacity(rows);
    let mut height: Vec<Option<f64>> = Vec::with_capacity(rows);
    let mut owner: Vec<Option<u32>> = Vec::with_capacity(rows);
    for f in set.playback() {
        let owners = f.envelope.owners();
        for (col, (x, h)) in f.envelope.samples().enumerate() {
            frame.push(f.index as u32);
            directrix.push(f.directrix);
            xs.push(x);
            height.push(h.is_finite().then_some(h));
            owner.push(owners[col].map(|o| o as u32));
        }
    }
    df!(
        "frame" => frame,
        "directrix" => directrix,
        "x" => xs,
        "height" => height,
        "owner" => owner
    )
}

/// Write `df` as CSV or Parquet, chosen by the extension of `out`.
pub fn write_table(df: &mut DataFrame, out: &Path) -> Result<()> {
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("csv") => {
            let mut file =
                File::create(out).with_context(|| format!("creating {}", out.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        Some("parquet") => {
            let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
            ParquetWriter::new(file)
                .finish(df)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        _ => bail!(
            "unsupported table format for {} (use .csv or .parquet)",
            out.display()
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use beachline::scene::fixtures;
    use beachline::SweepCfg;
    use tempfile::tempdir;

    fn small_set() -> FrameSet {
        let cfg = SweepCfg {
            frames: 4,
            resolution: 16,
            threads: 1,
            ..SweepCfg::default()
        };
        FrameSet::precompute(&fixtures::small(), &cfg)
    }

    #[test]
    fn one_row_per_frame_column() {
        let df = envelope_table(&small_set()).unwrap();
        assert_eq!(df.shape(), (4 * 16, 5));
        // Frame 0 sits above every site, so its heights are all null.
        let first = df.head(Some(16));
        assert_eq!(first.column("height").unwrap().null_count(), 16);
        assert_eq!(first.column("owner").unwrap().null_count(), 16);
        assert!(df.column("height").unwrap().null_count() < 4 * 16);
    }

    #[test]
    fn writes_csv_and_rejects_unknown_extensions() {
        let dir = tempdir().unwrap();
        let mut df = envelope_table(&small_set()).unwrap();
        let csv = dir.path().join("env.csv");
        write_table(&mut df, &csv).unwrap();
        let text = std::fs::read_to_string(&csv).unwrap();
        assert_eq!(
            text.lines().next().unwrap(),
            "frame,directrix,x,height,owner"
        );
        assert_eq!(text.lines().count(), 1 + 4 * 16);
        assert!(write_table(&mut df, &dir.path().join("env.xlsx")).is_err());
    }
}
