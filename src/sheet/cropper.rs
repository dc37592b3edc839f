use image::RgbaImage;
use image::imageops;

use crate::error::SliceError;
use crate::region::Rect;

/// Copy the pixels inside `rect` out of the sheet.
///
/// This is where bad geometry dies: the rectangle must be non-empty and lie
/// fully inside the sheet, otherwise the run aborts. No resampling, a crop
/// is a pixel-for-pixel copy.
pub fn crop_region(sheet: &RgbaImage, rect: Rect) -> Result<RgbaImage, SliceError> {
    let (sheet_width, sheet_height) = sheet.dimensions();

    if !rect.fits_within(sheet_width, sheet_height) {
        return Err(SliceError::InvalidRegion {
            rect,
            sheet_width,
            sheet_height,
        });
    }

    let cropped =
        imageops::crop_imm(sheet, rect.left, rect.top, rect.width(), rect.height()).to_image();

    Ok(cropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient_sheet(width: u32, height: u32) -> RgbaImage {
        let mut img = RgbaImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                img.put_pixel(x, y, Rgba([(x % 256) as u8, (y % 256) as u8, 0, 255]));
            }
        }
        img
    }

    #[test]
    fn test_crop_copies_exact_pixels() {
        let sheet = gradient_sheet(40, 30);
        let cropped = crop_region(&sheet, Rect::new(10, 5, 25, 20)).unwrap();

        assert_eq!(cropped.dimensions(), (15, 15));
        for y in 0..15 {
            for x in 0..15 {
                assert_eq!(cropped.get_pixel(x, y), sheet.get_pixel(x + 10, y + 5));
            }
        }
    }

    #[test]
    fn test_crop_full_extent_is_identity() {
        let sheet = gradient_sheet(40, 30);
        let cropped = crop_region(&sheet, Rect::new(0, 0, 40, 30)).unwrap();
        assert_eq!(cropped, sheet);
    }

    #[test]
    fn test_crop_is_idempotent() {
        let sheet = gradient_sheet(40, 30);
        let first = crop_region(&sheet, Rect::new(3, 7, 23, 27)).unwrap();
        let second = crop_region(&first, Rect::new(0, 0, 20, 20)).unwrap();
        assert_eq!(second, first);
    }

    #[test]
    fn test_crop_out_of_bounds_fails() {
        let sheet = gradient_sheet(40, 30);
        let err = crop_region(&sheet, Rect::new(10, 5, 41, 20)).unwrap_err();
        assert!(matches!(err, SliceError::InvalidRegion { .. }));
    }

    #[test]
    fn test_crop_empty_rect_fails() {
        let sheet = gradient_sheet(40, 30);
        assert!(crop_region(&sheet, Rect::new(10, 5, 10, 20)).is_err());
        assert!(crop_region(&sheet, Rect::new(25, 5, 10, 20)).is_err());
    }
}
