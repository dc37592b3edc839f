use std::path::Path;

use anyhow::Result;
use image::{ImageReader, RgbaImage};

use crate::error::SliceError;

/// Load the source sheet and convert it to RGBA8.
///
/// Everything is normalized to RGBA on load so corner masking always has an
/// alpha channel to write; `--opaque` converts back to RGB at save time.
pub fn load_sheet(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(SliceError::InputNotFound(path.to_path_buf()).into());
    }

    let sheet = ImageReader::open(path)
        .map_err(|e| SliceError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SliceError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    Ok(sheet)
}
