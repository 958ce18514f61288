//! Configuration for signrep tools
//!
//! Sources are merged lowest to highest priority:
//! 1. Built-in defaults
//! 2. `config/signrep.toml`, `config/signrep.yaml`, `config/signrep.json`
//! 3. An explicit file passed by the caller (format from its extension)
//! 4. `SIGNREP_*` environment variables (e.g. `SIGNREP_DEFAULT_WIDTH=8`)

use crate::{Error, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::Level;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SIGNREP_";

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text tables
    #[default]
    Table,
    /// One JSON document per command
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignrepConfig {
    /// Bit width used when a command does not specify one
    pub default_width: usize,
    /// Colored table headers
    pub color: bool,
    pub format: OutputFormat,
    /// `trace`, `debug`, `info`, `warn` or `error`
    pub log_level: String,
}

impl Default for SignrepConfig {
    fn default() -> Self {
        Self {
            default_width: 4,
            color: true,
            format: OutputFormat::Table,
            log_level: "info".to_string(),
        }
    }
}

impl SignrepConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_width == 0 {
            return Err(Error::Config("default_width must be at least 1".to_string()));
        }
        self.log_level.parse::<Level>().map_err(|_| {
            Error::Config(format!("Invalid log_level '{}'", self.log_level))
        })?;
        Ok(())
    }
}

/// Load configuration from defaults, well-known files, `explicit` and the
/// environment
pub fn load_config(explicit: Option<&Path>) -> Result<SignrepConfig> {
    let mut figment = Figment::from(Serialized::defaults(SignrepConfig::default()))
        .merge(Toml::file("config/signrep.toml"))
        .merge(Yaml::file("config/signrep.yaml"))
        .merge(Json::file("config/signrep.json"));

    if let Some(path) = explicit {
        figment = figment.merge(file_figment(path)?);
    }

    let config: SignrepConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .map_err(|e| Error::Config(format!("Failed to load configuration: {}", e)))?;

    config.validate()?;
    Ok(config)
}

/// Figment over a single file, picked by extension
fn file_figment(path: &Path) -> Result<Figment> {
    if !path.is_file() {
        return Err(Error::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| Error::Config("Config file must have an extension".to_string()))?;

    match extension {
        "toml" => Ok(Figment::from(Toml::file(path))),
        "yaml" | "yml" => Ok(Figment::from(Yaml::file(path))),
        "json" => Ok(Figment::from(Json::file(path))),
        _ => Err(Error::Config(format!(
            "Unsupported config file format: {}",
            extension
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config, SignrepConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_well_known_file() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file("config/signrep.toml", "default_width = 8\ncolor = false")?;
            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config.default_width, 8);
            assert!(!config.color);
            assert_eq!(config.format, OutputFormat::Table);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file("config/signrep.yaml", "default_width: 8\nformat: table")?;
            jail.set_env("SIGNREP_DEFAULT_WIDTH", "16");
            jail.set_env("SIGNREP_FORMAT", "json");
            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config.default_width, 16);
            assert_eq!(config.format, OutputFormat::Json);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.json", r#"{"default_width": 12, "log_level": "debug"}"#)?;
            let config = load_config(Some(Path::new("custom.json"))).map_err(|e| e.to_string())?;
            assert_eq!(config.default_width, 12);
            assert_eq!(config.log_level, "debug");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_missing() {
        Jail::expect_with(|_jail| {
            let err = load_config(Some(Path::new("missing.toml"))).unwrap_err();
            assert!(err.to_string().contains("not found"));
            Ok(())
        });
    }

    #[test]
    fn test_unsupported_extension() {
        Jail::expect_with(|jail| {
            jail.create_file("signrep.ini", "default_width=8")?;
            let err = load_config(Some(Path::new("signrep.ini"))).unwrap_err();
            assert!(err.to_string().contains("Unsupported"));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_width_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("SIGNREP_DEFAULT_WIDTH", "0");
            assert!(load_config(None).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_validate() {
        let zero_width = SignrepConfig {
            default_width: 0,
            ..Default::default()
        };
        assert!(zero_width.validate().is_err());

        let bad_level = SignrepConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(bad_level.validate().is_err());

        assert!(SignrepConfig::default().validate().is_ok());
    }
}
