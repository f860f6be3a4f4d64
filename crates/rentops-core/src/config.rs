use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Default upper bound on the span of an event window, in days.
pub const DEFAULT_MAX_WINDOW_DAYS: u32 = 3660;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EngineConfig {
    /// Longest event window the generator will scan, in whole days.
    pub max_window_days: u32,
}

impl EngineConfig {
    /// ## Summary
    /// Checks that the engine limits are usable.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if `max_window_days` is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_window_days == 0 {
            return Err(CoreError::ConfigError(
                "engine.max_window_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_window_days: DEFAULT_MAX_WINDOW_DAYS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with the default values.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("engine.max_window_days", i64::from(DEFAULT_MAX_WINDOW_DAYS))?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Loads configuration from `.env` file, environment variables and an optional
    /// `config.toml` into a `Settings`.
    ///
    /// Environment variables use the `RENTOPS_` prefix and `__` as the nesting
    /// separator, e.g. `RENTOPS_ENGINE__MAX_WINDOW_DAYS=365`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the engine limits fails.
    pub fn load() -> Result<Self> {
        let settings = Self::defaults()?
            // Env file
            .add_source(
                config::Environment::with_prefix("RENTOPS")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.engine.validate()?;
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        max_window_days = settings.engine.max_window_days,
        level = %settings.logging.level,
        "Configuration loaded"
    );
    Ok(settings)
}
