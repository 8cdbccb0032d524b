// Compiled-in settings. Nothing is read from flags, the environment or a
// config file; tests build a `Config` by hand when they need other values.

use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_OUTPUT_FILE: &str = "README.md";

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the GitHub REST API used for the profile lookup.
    pub api_base_url: String,
    /// Where the README is written, relative to the working directory.
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}
