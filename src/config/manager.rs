use super::{features::FeatureConfig, sampling::SamplingConfig, traits::ConfigSection};
use crate::error::FemoError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix of environment overrides, e.g. `FEMO__SAMPLING__SEED=7`
pub const ENV_PREFIX: &str = "FEMO";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sampling: SamplingConfig,
    pub features: FeatureConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), FemoError> {
        Self::check(&self.sampling)?;
        Self::check(&self.features)?;
        Ok(())
    }

    fn check<S: ConfigSection>(section: &S) -> Result<(), FemoError> {
        section.validate().map_err(|e| match e {
            FemoError::Configuration(msg) => {
                FemoError::Configuration(format!("[{}] {}", S::section_name(), msg))
            }
            other => other,
        })
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML/JSON file, layered under `FEMO__`-prefixed environment variables.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FemoError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::env_source())
            .build()
            .map_err(|e| FemoError::Configuration(format!("Failed to read config: {}", e)))?;

        self.apply(settings)
    }

    /// Defaults with environment overrides only
    pub fn load_from_env(&self) -> Result<(), FemoError> {
        let settings = config::Config::builder()
            .add_source(Self::env_source())
            .build()
            .map_err(|e| FemoError::Configuration(format!("Failed to read environment: {}", e)))?;

        self.apply(settings)
    }

    fn env_source() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }

    fn apply(&self, settings: config::Config) -> Result<(), FemoError> {
        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| FemoError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FemoError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| FemoError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| FemoError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Apply `f` and keep the result only if it validates.
    pub fn update<F>(&self, f: F) -> Result<(), FemoError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(|e| e.into_inner());
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
