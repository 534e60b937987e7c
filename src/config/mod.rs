// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::cli::Args;
use crate::error::{CalculatorError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. CLI arguments (highest)
    /// 2. Environment variables (prefix: CALCULATOR_, nested with `__`)
    /// 3. Config file
    /// 4. Defaults (lowest)
    pub fn load(args: &Args) -> Result<Self> {
        let config_path = args
            .config
            .clone()
            .unwrap_or_else(Self::default_config_path);

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists; an explicit --config must exist
            .add_source(File::from(config_path).required(args.config.is_some()))
            .add_source(
                Environment::with_prefix("CALCULATOR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", args.host.clone())?
            .set_override_option("server.port", args.port.map(i64::from))?
            .set_override_option("logging.directory", args.log_dir.clone())?
            .build()
            .map_err(|e| CalculatorError::Config(e.to_string()))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| CalculatorError::Config(e.to_string()))?;

        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> Result<()> {
        if self.server.workers == 0 {
            return Err(CalculatorError::Config(
                "server.workers must be at least 1".to_string(),
            ));
        }
        if self.logging.combined_file == self.logging.error_file {
            return Err(CalculatorError::Config(
                "logging.combined_file and logging.error_file must differ".to_string(),
            ));
        }
        Ok(())
    }

    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calculator-microservice")
            .join("config.toml")
    }
}
