use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use synthmask::{
    MaskCfg, default_classes, instances, load_classes,
    record::{FrameRecord, SCHEMA, SequenceHeader},
    render_frames,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Generates a sequence of synthetic composite masks and prints one JSON line per frame.
#[derive(Parser, Debug)]
#[command(name = "synthmask")]
struct Args {
    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Smallest block edge in pixels.
    #[arg(long)]
    min_block: Option<usize>,

    /// Largest block edge in pixels.
    #[arg(long)]
    max_block: Option<usize>,

    /// Placement attempts per block before it is skipped.
    #[arg(long)]
    max_attempts: Option<usize>,

    #[arg(long)]
    start_frame: Option<u32>,

    /// Exclusive.
    #[arg(long)]
    end_frame: Option<u32>,

    #[arg(long)]
    skip_frame: Option<u32>,

    /// JSON array of {"label", "index", "color": [r, g, b]}; built-in demo classes if omitted.
    #[arg(long)]
    classes: Option<PathBuf>,
}

impl Args {
    fn into_cfg(self) -> (MaskCfg, Option<PathBuf>) {
        let d = MaskCfg::default();
        let cfg = MaskCfg {
            width: self.width.unwrap_or(d.width),
            height: self.height.unwrap_or(d.height),
            min_block: self.min_block.unwrap_or(d.min_block),
            max_block: self.max_block.unwrap_or(d.max_block),
            max_attempts: self.max_attempts.unwrap_or(d.max_attempts),
            start_frame: self.start_frame.unwrap_or(d.start_frame),
            end_frame: self.end_frame.unwrap_or(d.end_frame),
            skip_frame: self.skip_frame.unwrap_or(d.skip_frame),
        };
        (cfg, self.classes)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (cfg, classes_path) = Args::parse().into_cfg();
    let classes = match classes_path {
        Some(path) => load_classes(&path)?,
        None => default_classes(),
    };
    if classes.is_empty() {
        warn!("no class assignments; every mask will be blank");
    }

    let range = cfg.frame_range()?;
    let compositor = cfg.compositor();
    info!(
        width = cfg.width,
        height = cfg.height,
        classes = classes.len(),
        frames = range.len(),
        "generating composite masks"
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let header = SequenceHeader {
        schema: SCHEMA,
        width: cfg.width,
        height: cfg.height,
        frames: range.indices().collect(),
        instances: instances(&classes),
    };
    serde_json::to_writer(&mut out, &header)?;
    writeln!(out)?;

    let mut short_frames = 0;
    for frame in render_frames(&compositor, &classes, range) {
        let frame = frame.context("invalid block placement parameters")?;
        if frame.composite.regions.len() < frame.composite.requested {
            short_frames += 1;
        }
        serde_json::to_writer(&mut out, &FrameRecord::from(&frame))?;
        writeln!(out)?;
    }
    out.flush()?;

    if short_frames > 0 {
        warn!(short_frames, "some frames are missing classes");
    }
    info!("done");
    Ok(())
}
