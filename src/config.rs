use crate::common::error::CovError;
use crate::common::hex::Xlen;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_XLEN: u32 = 32;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "configs/default.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_xlen")]
    pub xlen: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            xlen: default_xlen(),
        }
    }
}

impl GeneralConfig {
    pub fn xlen_val(&self) -> Result<Xlen, CovError> {
        Xlen::try_from(self.xlen)
    }
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Parses a TOML document.
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self, CovError> {
        let config: Config = toml::from_str(content).map_err(|e| CovError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        config.general.xlen_val()?;
        Ok(config)
    }

    /// Loads a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, CovError> {
        let content = fs::read_to_string(path).map_err(|e| CovError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content, path)
    }

    /// Loads `path` if given, else the default file if it exists, else
    /// built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, CovError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

fn default_xlen() -> u32 {
    DEFAULT_XLEN
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
