mod loader;
mod types;

pub use loader::{load_source, load_sources};
pub use types::SourceImage;
