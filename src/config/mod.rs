//! Configuration file and loading
//!
//! Settings live in `.decomp-progress.toml` in the working directory.
//! A missing file is not an error; every field has a default.

mod file;
mod loader;

pub use file::{ChartSettings, ConfigFile, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
