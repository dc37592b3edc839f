use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sashimi")]
#[command(version, about = "Sprite sheet slicer", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split the sheet into an even NxN grid
    Grid(GridArgs),
    /// Slice regions listed in a config file
    Slice(SliceArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Source sheet image
    pub input: PathBuf,

    /// Grid dimension (N for an NxN split)
    #[arg(short, long, default_value_t = 3)]
    pub grid_size: u32,

    /// Comma-separated cell labels in row-major order; cells beyond the
    /// list fall back to cell_<n>
    #[arg(short, long, value_delimiter = ',')]
    pub labels: Vec<String>,

    /// Also write the resolved cells to FILE as an explicit-rect config,
    /// ready for hand-tuning with `sashimi slice`
    #[arg(long, value_name = "FILE")]
    pub emit_config: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SliceArgs {
    /// Config file listing the regions to slice
    pub config: PathBuf,

    /// Source sheet image (overrides the config's input)
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output directory for sliced images [default: .]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output RGB instead of RGBA (opaque slices)
    #[arg(long)]
    pub opaque: bool,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Write a manifest.json describing every slice
    #[arg(long)]
    pub manifest: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
