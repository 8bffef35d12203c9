mod args;

pub use args::{CliArgs, Command, CompressionLevel, InfoArgs, ResizeArgs};
