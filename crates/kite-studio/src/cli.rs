use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use kite_engine::coords::Vec2;

/// Paints a `.kml` document headlessly and prints each frame's mesh as JSON.
#[derive(Parser, Debug)]
#[command(name = "kite-studio", version, about)]
pub struct Args {
    /// Optional `.kml` file followed by viewport sizes such as `320x200`.
    #[arg(value_name = "FILE.kml | WxH")]
    pub inputs: Vec<String>,

    /// Log filter (env_logger syntax, e.g. `debug` or `kite_ui=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Single-line JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,

    /// Print only the per-frame summary line.
    #[arg(long)]
    pub summary: bool,
}

/// Positional inputs split into a document path and viewport sizes.
#[derive(Debug, Default, PartialEq)]
pub struct Inputs {
    pub file: Option<PathBuf>,
    pub sizes: Vec<Vec2>,
}

impl Args {
    pub fn inputs(&self) -> anyhow::Result<Inputs> {
        let mut out = Inputs::default();
        for raw in &self.inputs {
            if raw.ends_with(".kml") {
                if let Some(prev) = &out.file {
                    bail!("only one document allowed, got {} and {raw}", prev.display());
                }
                out.file = Some(PathBuf::from(raw));
            } else {
                out.sizes.push(parse_size(raw)?);
            }
        }
        Ok(out)
    }
}

/// `WxH` with non-negative, finite dimensions.
pub fn parse_size(s: &str) -> anyhow::Result<Vec2> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("`{s}` is neither a .kml file nor a WxH size"))?;
    let dim = |v: &str| -> anyhow::Result<f32> {
        let n: f32 = v.trim().parse().with_context(|| format!("bad dimension `{v}` in `{s}`"))?;
        if !n.is_finite() || n < 0.0 {
            bail!("dimension `{v}` in `{s}` must be a non-negative number");
        }
        Ok(n)
    };
    Ok(Vec2::new(dim(w)?, dim(h)?))
}
