use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};

/// The icon set is fixed, so there is nothing to configure here beyond
/// verbosity. Paths are resolved relative to the running executable, or to
/// `ICONGEN_PROJECT_DIR` when it is set.
#[derive(Parser)]
#[command(version, about = "Convert SVG app icons to PNG for launcher icon packaging.")]
pub struct Cli {
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}
