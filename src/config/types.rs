use serde::{Deserialize, Serialize};

use crate::region::Region;
use crate::slicer::{DEFAULT_CORNER_SIZE, DEFAULT_FILL};

/// PNG compression level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// Slice configuration file structure.
///
/// All paths in the config are relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Source sheet image path
    pub input: String,
    /// Output directory for sliced images
    pub output_dir: String,
    /// Grid dimension for `cell` regions (N means an NxN split)
    pub grid_size: u32,
    /// Fill color for corner cleanup triangles (RGBA)
    pub fill: [u8; 4],
    /// Default triangle leg length for corner masks, in pixels
    pub corner_size: u32,
    /// Output RGB instead of RGBA (opaque slices)
    pub opaque: bool,
    /// Write a manifest.json describing every slice
    pub manifest: bool,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
    /// Regions to slice, in processing order
    pub regions: Vec<Region>,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            input: "sheet.png".to_string(),
            output_dir: ".".to_string(),
            grid_size: 3,
            fill: DEFAULT_FILL,
            corner_size: DEFAULT_CORNER_SIZE,
            opaque: false,
            manifest: false,
            compress: None,
            regions: Vec::new(),
        }
    }
}
