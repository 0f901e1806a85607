use anyhow::{bail, Context};
use clap::Parser;
use cli::Cli;
use console::style;
use log::{info, LevelFilter};
use rasterize::ResvgRasterizer;

mod cli;
mod convert;
mod project;
mod rasterize;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("icongen", args.verbose.log_level_filter())
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    // The probe must pass before anything on disk is touched.
    let rasterizer = ResvgRasterizer::new()
        .context("The SVG rasterizer is unusable. Reinstall icongen (cargo install icongen)")?;

    let project_root = project::resolve_project_root()?;
    let icons_dir = project::icons_dir(&project_root);

    if convert::run(&rasterizer, &icons_dir)? {
        info!(
            "{}",
            style("All icons converted successfully!").green().bold()
        );
        info!("Now run: flutter pub run flutter_launcher_icons");
        Ok(())
    } else {
        bail!("Some conversions failed.");
    }
}
