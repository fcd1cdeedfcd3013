//! Engine settings management.
//!
//! Handles loading an optional fixed seed from environment variables or a
//! settings file, so that a whole program run can be made reproducible
//! without code changes. Nothing is read unless the caller asks for it.
//!
//! # Sources
//!
//! - Environment: `EASYRAND_SEED=42`
//! - File (TOML, JSON, YAML, ...): `seed = 42`, with environment variables
//!   layered on top

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::info;

use crate::engine::{reseed_with, try_reseed};
use crate::error::Result;

/// Environment variable prefix for engine settings.
pub const ENV_PREFIX: &str = "EASYRAND";

/// Settings for the calling thread's engine.
///
/// # Examples
///
/// ```rust
/// use easyrand::{current_seed, EngineSettings};
///
/// let settings = EngineSettings { seed: Some(1234) };
/// assert_eq!(settings.apply().unwrap(), 1234);
/// assert_eq!(current_seed(), 1234);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Fixed seed; `None` means seed from entropy
    pub seed: Option<u64>,
}

impl EngineSettings {
    /// Loads settings from `EASYRAND_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_env_prefix(ENV_PREFIX)
    }

    /// Loads settings from a file, with `EASYRAND_*` environment variables
    /// overriding values found in the file.
    ///
    /// The format is inferred from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    fn from_env_prefix(prefix: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(Environment::with_prefix(prefix).try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Reseeds the calling thread's engine according to these settings and
    /// returns the seed in effect.
    ///
    /// A fixed seed is applied with [`reseed_with`]; otherwise a fresh
    /// entropy seed is drawn.
    pub fn apply(&self) -> Result<u64> {
        let seed = match self.seed {
            Some(seed) => {
                reseed_with(seed);
                seed
            }
            None => try_reseed()?,
        };
        info!(seed, fixed = self.seed.is_some(), "applied engine settings");
        Ok(seed)
    }
}
