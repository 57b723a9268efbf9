//! Configuration loading for `.secretsweep.toml`.

mod loader;
mod models;
#[cfg(test)]
mod tests;

use std::path::Path;

pub use models::{Config, SecretSweepConfig};

impl Config {
    /// Loads configuration from the default location (current directory and
    /// its ancestors).
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        loader::load_from_path(path)
    }
}
