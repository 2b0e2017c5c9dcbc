use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub scheduler: SchedulerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    /// Default cap on unbounded occurrence fetches.
    pub fetch_limit: usize,
    /// Length of the feed window, in days from its start date.
    pub horizon_days: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl SchedulerConfig {
    /// ## Summary
    /// Checks the scheduler values against their minimums. Both the fetch cap
    /// and the feed horizon must be at least 1.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` naming the offending key.
    pub fn validate(&self) -> CoreResult<()> {
        if self.fetch_limit == 0 {
            return Err(CoreError::InvalidConfiguration(
                "scheduler.fetch_limit must be at least 1".to_string(),
            ));
        }
        if self.horizon_days == 0 {
            return Err(CoreError::InvalidConfiguration(
                "scheduler.horizon_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("scheduler.fetch_limit", 100)?
            .set_default("scheduler.horizon_days", 366)?
            .set_default("logging.level", "debug")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;
        settings.scheduler.validate()?;
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
        fetch_limit = settings.scheduler.fetch_limit,
        horizon_days = settings.scheduler.horizon_days,
        "Configuration loaded"
    );
    Ok(settings)
}
