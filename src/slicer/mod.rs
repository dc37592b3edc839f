mod builder;
mod types;

pub use builder::{DEFAULT_CORNER_SIZE, DEFAULT_FILL, SheetSlicer};
pub use types::Slice;
