//! Settings file for the calculator front end.
//!
//! Every key is optional:
//!
//! ```toml
//! surcharge_rate = "1.10"
//! fortune_seed = 42
//!
//! [window]
//! width = 360.0
//! height = 520.0
//!
//! [log]
//! level = "info"
//! file = "calculator.log"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use calc_core::{CalculatorConfig, CalculatorConfigError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading [`Settings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Invalid(#[from] CalculatorConfigError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 520.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// `EnvFilter` directive; `RUST_LOG` wins when this is unset.
    pub level: Option<String>,
    /// File that receives a copy of every log record.
    pub file: Option<PathBuf>,
}

/// Front-end settings, loaded from TOML and overridden from the command line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub surcharge_rate: Decimal,
    /// Fixed seed for the fortune key; random when unset.
    pub fortune_seed: Option<u64>,
    pub window: WindowSettings,
    pub log: LogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surcharge_rate: CalculatorConfig::default().surcharge_rate,
            fortune_seed: None,
            window: WindowSettings::default(),
            log: LogSettings::default(),
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(
        text: &str,
        origin: &Path,
    ) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        settings.calculator_config()?;
        Ok(settings)
    }

    /// Reads and validates a settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Validated core configuration derived from these settings.
    pub fn calculator_config(&self) -> Result<CalculatorConfig, CalculatorConfigError> {
        let config = CalculatorConfig {
            surcharge_rate: self.surcharge_rate,
        };
        config.validate()?;
        Ok(config)
    }
}
