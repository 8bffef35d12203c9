mod format;

pub use format::{find_collisions, output_path, save_png};
