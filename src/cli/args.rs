use clap::Parser;
use std::path::PathBuf;

use dotpix::core::params::{DEFAULT_DOT_SIZE, DEFAULT_PALETTE_COLORS};
use dotpix::types::OutputFormat;

#[derive(Parser)]
#[command(name = "dotpix", version, about = "dotpix CLI")]
pub struct CliArgs {
    /// Input image file (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing images (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode); defaults to `<input stem>_dot.<ext>`
    /// next to the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output format (bmp or png)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Bmp)]
    pub format: OutputFormat,

    /// Side length of the intermediate pixel grid
    #[arg(long, default_value_t = DEFAULT_DOT_SIZE)]
    pub dot_size: usize,

    /// Maximum number of palette colors (1-256)
    #[arg(long, default_value_t = DEFAULT_PALETTE_COLORS)]
    pub colors: usize,

    /// Write a JSON sidecar listing the output's palette
    #[arg(long, default_value_t = false)]
    pub palette_sidecar: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue processing other files when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
