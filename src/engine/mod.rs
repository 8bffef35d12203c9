mod builder;
mod types;

pub use builder::{ResizeEngine, resize};
pub use types::{ResizeMode, ResizeOutcome};
