//! Command-line interface for rendering batches of pattern wallpapers

use crate::canvas::color::Color;
use crate::canvas::geometry::CanvasSize;
use crate::canvas::image::write_png;
use crate::engine::generator::PatternGenerator;
use crate::engine::kind::PatternKind;
use crate::engine::wallpaper::Wallpaper;
use crate::io::configuration::{
    DEFAULT_IMAGE_COUNT, DEFAULT_OUTPUT_DIR, DEFAULT_PRESET, DEFAULT_SEED, OUTPUT_EXTENSION,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::palette::ordered::Palette;
use crate::palette::presets::PaletteSource;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "mandala")]
#[command(
    author,
    version,
    about = "Render seeded mandala and pattern wallpapers to PNG"
)]
/// Command-line arguments for the wallpaper renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Pattern kind (mandala, geometric, floral, abstract, waves, dots, lines, mixed)
    #[arg(short, long, default_value_t = PatternKind::Mandala)]
    pub kind: PatternKind,

    /// Render every pattern kind instead of a single one
    #[arg(short, long, conflicts_with = "kind")]
    pub all_kinds: bool,

    /// Device resolution preset (xs-max, 12-pro, se)
    #[arg(short, long, conflicts_with_all = ["width", "height"])]
    pub preset: Option<String>,

    /// Width in pixels (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Built-in palette (vibrant, pastel)
    #[arg(long, default_value = "vibrant")]
    pub palette: PaletteSource,

    /// Manual palette color as #RRGGBB or #RRGGBBAA; repeat for more colors
    #[arg(short, long = "color", value_name = "HEX")]
    pub colors: Vec<Color>,

    /// Use the manual palette even when no colors are given
    #[arg(short, long)]
    pub manual: bool,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Images to render per pattern kind, seeded consecutively
    #[arg(short = 'n', long, default_value_t = DEFAULT_IMAGE_COUNT)]
    pub count: usize,

    /// Directory images are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Render files even if output exists
    #[arg(long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Canvas size from explicit dimensions, a preset, or the default preset
    ///
    /// # Errors
    ///
    /// Returns an error if the preset name is unknown or a dimension is invalid
    pub fn canvas_size(&self) -> Result<CanvasSize> {
        let size = match (self.width, self.height, &self.preset) {
            (Some(w), Some(h), _) => CanvasSize::new(w, h),
            (Some(side), None, _) | (None, Some(side), _) => CanvasSize::new(side, side),
            (None, None, preset) => {
                let name = preset.as_deref().unwrap_or(DEFAULT_PRESET);
                CanvasSize::preset(name).ok_or_else(|| {
                    crate::io::error::invalid_argument(
                        "preset",
                        &name,
                        &"expected xs-max, 12-pro or se",
                    )
                })?
            }
        };
        size.validated()
    }

    /// Palette from manual colors when given, otherwise the built-in choice
    pub fn palette(&self) -> Palette {
        let source = if self.manual || !self.colors.is_empty() {
            PaletteSource::CustomManual(Palette::from(self.colors.clone()))
        } else {
            self.palette.clone()
        };
        source.resolve()
    }

    /// Pattern kinds to render
    pub fn kinds(&self) -> Vec<PatternKind> {
        if self.all_kinds {
            PatternKind::ALL.to_vec()
        } else {
            vec![self.kind]
        }
    }
}

/// One image to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    /// Pattern kind
    pub kind: PatternKind,
    /// Seed for this image
    pub seed: u64,
    /// Destination file
    pub output_path: PathBuf,
}

/// Orchestrates rendering a batch of wallpapers with progress tracking
pub struct BatchRenderer {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchRenderer {
    /// Create a new renderer with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Jobs implied by the arguments, skipping existing outputs unless told otherwise
    pub fn plan(&self) -> Vec<RenderJob> {
        let mut jobs = Vec::new();
        for kind in self.cli.kinds() {
            for index in 0..self.cli.count {
                let seed = self.cli.seed.wrapping_add(index as u64);
                let output_path = Self::get_output_path(&self.cli.output, kind, seed);
                if self.cli.skip_existing() && output_path.exists() {
                    tracing::info!(path = %output_path.display(), "skipping existing output");
                    continue;
                }
                jobs.push(RenderJob {
                    kind,
                    seed,
                    output_path,
                });
            }
        }
        jobs
    }

    /// Render every planned job and return the written paths
    ///
    /// # Errors
    ///
    /// Returns an error if the size or palette arguments are invalid, or if
    /// rendering or writing any image fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let size = self.cli.canvas_size()?;
        let palette = self.cli.palette();
        let jobs = self.plan();
        tracing::info!(
            jobs = jobs.len(),
            width = size.width,
            height = size.height,
            palette = %palette,
            "starting batch"
        );

        if jobs.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        let mut written = Vec::with_capacity(jobs.len());
        for job in &jobs {
            self.render_job(job, size, &palette)?;
            written.push(job.output_path.clone());
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn render_job(&mut self, job: &RenderJob, size: CanvasSize, palette: &Palette) -> Result<()> {
        let start_time = Instant::now();
        if let Some(ref pm) = self.progress_manager {
            pm.start_job(&format!("{} #{}", job.kind, job.seed));
        }

        let mut generator = PatternGenerator::new(job.seed);
        let wallpaper = Wallpaper::create(job.kind, size, palette, generator.rng())?;

        write_png(&job.output_path, &wallpaper.png)?;
        tracing::info!(path = %job.output_path.display(), kind = %job.kind, "wrote wallpaper");

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_job(start_time.elapsed());
        }
        Ok(())
    }

    /// File name `<kind>_<seed>.png` inside `dir`
    pub fn get_output_path(dir: &Path, kind: PatternKind, seed: u64) -> PathBuf {
        dir.join(format!(
            "{}_{seed}.{OUTPUT_EXTENSION}",
            kind.name().to_ascii_lowercase()
        ))
    }
}
