use crate::rasterize::Rasterizer;
use anyhow::Context;
use console::style;
use log::{error, info};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const TARGET_SIZE: u32 = 1024;

/// Stems of the launcher icon set. `flutter_launcher_icons` expects both the
/// main icon and the adaptive-icon foreground under these names.
const ICON_STEMS: [&str; 2] = ["app_icon", "app_icon_foreground"];

pub struct ConversionJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub size: u32,
}

impl ConversionJob {
    fn new(icons_dir: &Path, stem: &str, size: u32) -> Self {
        Self {
            source: icons_dir.join(format!("{stem}.svg")),
            destination: icons_dir.join(format!("{stem}.png")),
            size,
        }
    }
}

/// Converts the fixed icon set under `icons_dir`, creating the directory if
/// needed. Returns whether every job succeeded; per-job failures are logged
/// and absorbed so the remaining jobs still run.
pub fn run(rasterizer: &dyn Rasterizer, icons_dir: &Path) -> anyhow::Result<bool> {
    fs::create_dir_all(icons_dir)
        .with_context(|| format!("Failed to create icons directory {}", icons_dir.display()))?;

    info!("Converting SVG icons to PNG...");
    info!("Working directory: {}", icons_dir.display());

    let mut success = true;
    for stem in ICON_STEMS {
        let job = ConversionJob::new(icons_dir, stem, TARGET_SIZE);
        success &= convert_job(rasterizer, &job);
    }

    Ok(success)
}

fn convert_job(rasterizer: &dyn Rasterizer, job: &ConversionJob) -> bool {
    if !job.source.exists() {
        error!(
            "{} SVG file not found: {}",
            style("✗").red(),
            job.source.display()
        );
        return false;
    }

    match convert(rasterizer, job) {
        Ok(()) => {
            info!(
                "{} Converted: {} → {}",
                style("✓").green(),
                job.source.display(),
                job.destination.display()
            );
            true
        }
        Err(err) => {
            error!(
                "{} Error converting {}: {}",
                style("✗").red(),
                job.source.display(),
                chain_to_string(&err)
            );
            false
        }
    }
}

fn convert(rasterizer: &dyn Rasterizer, job: &ConversionJob) -> anyhow::Result<()> {
    let data = fs::read(&job.source).context("Failed to read SVG file")?;
    let png = rasterizer.rasterize(&data, job.size)?;
    fs::write(&job.destination, png).context("Failed to write PNG file")?;

    Ok(())
}

fn chain_to_string(err: &anyhow::Error) -> String {
    err.chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}
