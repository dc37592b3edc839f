use std::path::PathBuf;
use thiserror::Error;

use crate::region::Rect;

#[derive(Error, Debug)]
pub enum SliceError {
    #[error("Failed to load sheet '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Input sheet does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Region {rect} is empty or exceeds sheet bounds ({sheet_width}x{sheet_height})")]
    InvalidRegion {
        rect: Rect,
        sheet_width: u32,
        sheet_height: u32,
    },

    #[error("No regions to slice")]
    NoRegions,
}
