//! Runtime configuration for the native binary.
//!
//! Sources, later ones winning:
//!
//! 1. built-in defaults
//! 2. `ideaboard.toml` in the working directory (optional), or the file
//!    passed with `--config`
//! 3. environment variables prefixed with `IDEABOARD_`
//!    (`IDEABOARD_DATA_DIR`, `IDEABOARD_SEED_DEMO`, `IDEABOARD_LOG_FILTER`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const DEFAULT_FILE: &str = "ideaboard";
const ENV_PREFIX: &str = "IDEABOARD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding one JSON file per storage key.
    pub data_dir: PathBuf,
    /// Seed the demo ideas and user when the idea collection is empty.
    pub seed_demo: bool,
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl AppConfig {
    /// Load defaults, then the config file, then the environment.
    pub fn load(config_file: Option<&Path>) -> Result<Self, AppError> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_FILE).required(false),
        };

        let config = Self::defaults()?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, AppError> {
        Ok(Config::builder()
            .set_default("data_dir", ".ideaboard")?
            .set_default("seed_demo", true)?
            .set_default("log_filter", "ideaboard=info")?)
    }
}
