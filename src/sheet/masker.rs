use image::{Rgba, RgbaImage};

use crate::region::Corner;

/// Paint over one corner of a cropped region with a right triangle.
///
/// The triangle's two legs of length `size` run along the two image edges
/// meeting at `corner`; the hypotenuse cuts diagonally into the image. Used
/// to erase bleed-through from a neighboring region captured by an oversized
/// crop box. Destructive: painted pixels are gone, everything outside the
/// triangle is untouched. A leg longer than the image just clips against
/// the opposite edges.
pub fn mask_corner(image: &mut RgbaImage, corner: Corner, size: u32, fill: Rgba<u8>) {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || size == 0 {
        return;
    }

    for y in 0..height {
        for x in 0..width {
            // Taxicab distance from the corner, measured along the two legs
            let distance = match corner {
                Corner::TopLeft => x + y,
                Corner::TopRight => (width - 1 - x) + y,
                Corner::BottomLeft => x + (height - 1 - y),
                Corner::BottomRight => (width - 1 - x) + (height - 1 - y),
            };
            if distance < size {
                image.put_pixel(x, y, fill);
            }
        }
    }
}
