use image::RgbaImage;

use crate::region::Rect;

/// One finished slice, ready to be written as `<label>.png`.
#[derive(Debug)]
pub struct Slice {
    pub label: String,
    /// Rectangle the slice was cropped from, in sheet coordinates.
    pub rect: Rect,
    pub image: RgbaImage,
    /// Number of corner masks that were painted onto this slice.
    pub masked_corners: usize,
}

impl Slice {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Output file name for this slice.
    pub fn filename(&self) -> String {
        format!("{}.png", self.label)
    }
}
