mod cropper;
mod loader;
mod masker;

pub use cropper::crop_region;
pub use loader::load_sheet;
pub use masker::mask_corner;
