mod args;

pub use args::{CliArgs, Command, CompressionLevel, GridArgs, OutputArgs, SliceArgs};
