use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use log::{debug, info};

use super::Slice;
use crate::error::SliceError;
use crate::region::{Region, resolve};
use crate::sheet::{crop_region, mask_corner};

/// Default triangle leg length for corner cleanup, in pixels.
pub const DEFAULT_CORNER_SIZE: u32 = 70;

/// Default corner fill: opaque white.
pub const DEFAULT_FILL: [u8; 4] = [255, 255, 255, 255];

/// Configuration for slicing a sheet into named regions.
pub struct SheetSlicer {
    pub grid_size: u32,
    pub fill: Rgba<u8>,
    pub corner_size: u32,
}

impl SheetSlicer {
    pub fn new() -> Self {
        Self {
            grid_size: 3,
            fill: Rgba(DEFAULT_FILL),
            corner_size: DEFAULT_CORNER_SIZE,
        }
    }

    /// Grid dimension for `cell` regions (N means an NxN split).
    pub fn grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Fill color for corner cleanup triangles.
    pub fn fill(mut self, fill: Rgba<u8>) -> Self {
        self.fill = fill;
        self
    }

    /// Default triangle leg length for corner masks without an explicit size.
    pub fn corner_size(mut self, corner_size: u32) -> Self {
        self.corner_size = corner_size;
        self
    }

    /// Slice every region out of the sheet, in list order.
    ///
    /// Regions are independent; order only matters for deterministic logs
    /// and for which duplicate label wins when the slices are saved.
    /// Fails fast on the first bad region.
    pub fn slice(&self, sheet: &RgbaImage, regions: &[Region]) -> Result<Vec<Slice>> {
        if regions.is_empty() {
            return Err(SliceError::NoRegions.into());
        }

        let (sheet_width, sheet_height) = sheet.dimensions();
        let mut slices = Vec::with_capacity(regions.len());

        for region in regions {
            let rect = resolve(&region.shape, sheet_width, sheet_height, self.grid_size);
            debug!("{}: resolved to {}", region.label, rect);

            let mut image = crop_region(sheet, rect)
                .with_context(|| format!("failed to slice region '{}'", region.label))?;

            for mask in &region.corners {
                let size = mask.size.unwrap_or(self.corner_size);
                mask_corner(&mut image, mask.corner, size, self.fill);
            }

            info!(
                "{}: {} [{}x{}]{}",
                region.label,
                rect,
                rect.width(),
                rect.height(),
                if region.corners.is_empty() {
                    String::new()
                } else {
                    format!(" ({} corners cleaned)", region.corners.len())
                }
            );

            slices.push(Slice {
                label: region.label.clone(),
                rect,
                image,
                masked_corners: region.corners.len(),
            });
        }

        Ok(slices)
    }
}

impl Default for SheetSlicer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Corner;

    const GRID_LABELS: [&str; 9] = [
        "angry",
        "wave_hi",
        "excited",
        "shouting",
        "nervous",
        "laughing",
        "thinking",
        "thumbs_up",
        "celebrating",
    ];

    fn grid_regions() -> Vec<Region> {
        GRID_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| Region::cell(*label, (i / 3) as u32, (i % 3) as u32))
            .collect()
    }

    #[test]
    fn test_three_by_three_grid_slices_sheet() {
        let sheet = RgbaImage::new(1200, 800);
        let slices = SheetSlicer::new().slice(&sheet, &grid_regions()).unwrap();

        assert_eq!(slices.len(), 9);
        for (slice, label) in slices.iter().zip(GRID_LABELS) {
            assert_eq!(slice.label, label);
            assert_eq!(slice.width(), 400);
            assert_eq!(slice.height(), 266);
        }
        // Row-major order
        assert_eq!(slices[0].rect.left, 0);
        assert_eq!(slices[2].rect.left, 800);
        assert_eq!(slices[6].rect.top, 532);
    }

    #[test]
    fn test_bad_explicit_rect_aborts_with_label() {
        let sheet = RgbaImage::new(100, 100);
        let regions = vec![
            Region::rect("good", 0, 0, 50, 50),
            Region::rect("bad", 90, 90, 200, 200),
        ];

        let err = SheetSlicer::new().slice(&sheet, &regions).unwrap_err();
        assert!(err.to_string().contains("bad"));
        assert!(matches!(
            err.downcast_ref::<SliceError>(),
            Some(SliceError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn test_duplicate_labels_are_tolerated() {
        let sheet = RgbaImage::new(100, 100);
        let regions = vec![
            Region::rect("hero", 0, 0, 10, 10),
            Region::rect("hero", 20, 20, 40, 40),
        ];

        let slices = SheetSlicer::new().slice(&sheet, &regions).unwrap();
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, slices[1].label);
    }

    #[test]
    fn test_corner_masks_use_default_size_and_fill() {
        let mut sheet = RgbaImage::new(100, 100);
        for pixel in sheet.pixels_mut() {
            *pixel = Rgba([1, 2, 3, 255]);
        }

        let regions =
            vec![Region::rect("masked", 0, 0, 100, 100).with_corner(Corner::BottomLeft, None)];
        let slices = SheetSlicer::new()
            .corner_size(10)
            .slice(&sheet, &regions)
            .unwrap();

        let slice = &slices[0];
        assert_eq!(slice.masked_corners, 1);
        assert_eq!(*slice.image.get_pixel(0, 99), Rgba(DEFAULT_FILL));
        // Past the 10px leg the sheet pixel survives
        assert_eq!(*slice.image.get_pixel(10, 99), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_no_regions_is_an_error() {
        let sheet = RgbaImage::new(10, 10);
        let err = SheetSlicer::new().slice(&sheet, &[]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SliceError>(),
            Some(SliceError::NoRegions)
        ));
    }
}
