use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use image::Rgba;
use log::info;

use sashimi::cli::{CliArgs, Command, CompressionLevel, GridArgs, SliceArgs};
use sashimi::config::{CompressConfig, LoadedConfig, SliceConfig, save_config};
use sashimi::output::{save_slice_image, write_manifest};
use sashimi::region::{Region, resolve};
use sashimi::sheet::load_sheet;
use sashimi::slicer::{SheetSlicer, Slice};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    let verbose = match &cli.command {
        Command::Grid(args) => args.output.verbose,
        Command::Slice(args) => args.output.verbose,
    };

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("sashimi sprite sheet slicer v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Grid(args) => run_grid(args),
        Command::Slice(args) => run_slice(args),
    }
}

/// Where and how slices get written, after CLI/config merging.
struct SaveOptions {
    output_dir: PathBuf,
    opaque: bool,
    compress: Option<CompressionLevel>,
    manifest: bool,
}

/// Even NxN split of the sheet, row-major labels.
fn run_grid(args: GridArgs) -> Result<()> {
    let sheet = load_sheet(&args.input)?;
    let (sheet_width, sheet_height) = sheet.dimensions();
    info!(
        "Sheet {}: {}x{}",
        args.input.display(),
        sheet_width,
        sheet_height
    );

    let regions = grid_regions(args.grid_size, &args.labels);
    let options = SaveOptions {
        output_dir: args
            .output
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(".")),
        opaque: args.output.opaque,
        compress: args.output.compress,
        manifest: args.output.manifest,
    };

    if let Some(config_path) = &args.emit_config {
        let config = grid_config(&args, &options.output_dir, sheet_width, sheet_height, &regions);
        save_config(&config, config_path)?;
        info!("Wrote config {}", config_path.display());
    }

    let slices = SheetSlicer::new()
        .grid_size(args.grid_size)
        .slice(&sheet, &regions)?;

    save_all(&slices, &options, &args.input, sheet_width, sheet_height)
}

/// Region list from a config file; CLI flags override the config.
fn run_slice(args: SliceArgs) -> Result<()> {
    let loaded = LoadedConfig::load(&args.config)
        .with_context(|| format!("failed to load config: {}", args.config.display()))?;
    let config = &loaded.config;

    let input = args.input.clone().unwrap_or_else(|| loaded.resolve_input());
    let options = SaveOptions {
        output_dir: args
            .output
            .output
            .clone()
            .unwrap_or_else(|| loaded.resolve_output_dir()),
        opaque: args.output.opaque || config.opaque,
        compress: args.output.compress.or_else(|| {
            config.compress.as_ref().map(|c| match c {
                CompressConfig::Level(n) => CompressionLevel::Level(*n),
                CompressConfig::Max(_) => CompressionLevel::Max,
            })
        }),
        manifest: args.output.manifest || config.manifest,
    };

    let sheet = load_sheet(&input)?;
    let (sheet_width, sheet_height) = sheet.dimensions();
    info!("Sheet {}: {}x{}", input.display(), sheet_width, sheet_height);

    let slices = SheetSlicer::new()
        .grid_size(config.grid_size)
        .fill(Rgba(config.fill))
        .corner_size(config.corner_size)
        .slice(&sheet, &config.regions)?;

    save_all(&slices, &options, &input, sheet_width, sheet_height)
}

/// Build row-major cell regions; cells beyond the label list get cell_<n>.
fn grid_regions(grid_size: u32, labels: &[String]) -> Vec<Region> {
    let mut regions = Vec::with_capacity((grid_size * grid_size) as usize);
    for row in 0..grid_size {
        for col in 0..grid_size {
            let idx = (row * grid_size + col) as usize;
            let label = labels
                .get(idx)
                .cloned()
                .unwrap_or_else(|| format!("cell_{}", idx + 1));
            regions.push(Region::cell(label, row, col));
        }
    }
    regions
}

/// Freeze the grid's resolved cells into an explicit-rect config for tuning.
fn grid_config(
    args: &GridArgs,
    output_dir: &Path,
    sheet_width: u32,
    sheet_height: u32,
    regions: &[Region],
) -> SliceConfig {
    SliceConfig {
        input: args.input.to_string_lossy().into_owned(),
        output_dir: output_dir.to_string_lossy().into_owned(),
        grid_size: args.grid_size,
        regions: regions
            .iter()
            .map(|region| {
                let rect = resolve(&region.shape, sheet_width, sheet_height, args.grid_size);
                Region::rect(
                    region.label.clone(),
                    rect.left,
                    rect.top,
                    rect.right,
                    rect.bottom,
                )
            })
            .collect(),
        ..SliceConfig::default()
    }
}

/// Save every slice in order (fail-fast), then the optional manifest.
fn save_all(
    slices: &[Slice],
    options: &SaveOptions,
    sheet_path: &Path,
    sheet_width: u32,
    sheet_height: u32,
) -> Result<()> {
    // Create output directory if it doesn't exist
    if !options.output_dir.exists() {
        fs::create_dir_all(&options.output_dir).with_context(|| {
            format!(
                "failed to create output dir: {}",
                options.output_dir.display()
            )
        })?;
    }

    for slice in slices {
        let path = options.output_dir.join(slice.filename());
        save_slice_image(&slice.image, &path, options.opaque, options.compress)?;
        info!("Saved {}", path.display());
    }

    if options.manifest {
        write_manifest(
            slices,
            sheet_path,
            sheet_width,
            sheet_height,
            &options.output_dir,
        )?;
        info!("Generated manifest.json");
    }

    info!(
        "Done! {} images saved to '{}'",
        slices.len(),
        options.output_dir.display()
    );

    Ok(())
}
