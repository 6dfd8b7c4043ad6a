//! CLI entry point for rendering pattern wallpapers

use clap::Parser;
use mandala::io::cli::{BatchRenderer, Cli};
use mandala::io::logging;

fn main() -> mandala::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut renderer = BatchRenderer::new(cli);
    let written = renderer.process()?;
    tracing::info!(images = written.len(), "batch complete");
    Ok(())
}
