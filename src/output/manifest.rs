use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::error::SliceError;
use crate::region::Rect;
use crate::slicer::Slice;

#[derive(Serialize)]
struct Manifest {
    meta: Meta,
    sheet: SheetInfo,
    slices: Vec<ManifestSlice>,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct SheetInfo {
    path: String,
    width: u32,
    height: u32,
}

#[derive(Serialize)]
struct ManifestSlice {
    label: String,
    file: String,
    rect: Rect,
    size: Size,
    masked_corners: usize,
}

#[derive(Serialize)]
struct Size {
    w: u32,
    h: u32,
}

/// Write manifest.json describing every slice of the run
pub fn write_manifest(
    slices: &[Slice],
    sheet_path: &Path,
    sheet_width: u32,
    sheet_height: u32,
    output_dir: &Path,
) -> Result<()> {
    let manifest = Manifest {
        meta: Meta {
            app: "sashimi",
            version: env!("CARGO_PKG_VERSION"),
        },
        sheet: SheetInfo {
            path: sheet_path.to_string_lossy().into_owned(),
            width: sheet_width,
            height: sheet_height,
        },
        slices: slices.iter().map(slice_to_manifest).collect(),
    };

    let manifest_path = output_dir.join("manifest.json");
    let content = serde_json::to_string_pretty(&manifest)?;

    fs::write(&manifest_path, content).map_err(|e| SliceError::OutputWrite {
        path: manifest_path,
        source: e,
    })?;

    Ok(())
}

fn slice_to_manifest(slice: &Slice) -> ManifestSlice {
    ManifestSlice {
        label: slice.label.clone(),
        file: slice.filename(),
        rect: slice.rect,
        size: Size {
            w: slice.width(),
            h: slice.height(),
        },
        masked_corners: slice.masked_corners,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_manifest_slice_fields() {
        let slice = Slice {
            label: "angry".to_string(),
            rect: Rect::new(25, 5, 365, 240),
            image: RgbaImage::new(340, 235),
            masked_corners: 2,
        };

        let entry = slice_to_manifest(&slice);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["file"], "angry.png");
        assert_eq!(json["rect"]["left"], 25);
        assert_eq!(json["size"]["w"], 340);
        assert_eq!(json["masked_corners"], 2);
    }
}
