//! Configuration file support for ops-sysd
//!
//! Loads the daemon configuration from a TOML file.
//! Default location: /etc/openswitch/ops-sysd.conf

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use ops_sysd_common::{SysdError, SysdResult};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "/etc/openswitch/ops-sysd.conf";

/// Newline convention used by the vty output sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlineStyle {
    /// `\n` (vtysh)
    #[default]
    Lf,
    /// `\r\n` (telnet vty)
    Crlf,
}

impl NewlineStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewlineStyle::Lf => "\n",
            NewlineStyle::Crlf => "\r\n",
        }
    }
}

/// General daemon settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default log level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// JSON snapshot of the row store
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

/// Hardware description settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareConfig {
    /// Directory holding the platform hardware description files
    #[serde(default = "default_hw_desc_dir")]
    pub hw_desc_dir: PathBuf,

    /// ACL limits file name, relative to `hw_desc_dir`
    #[serde(default = "default_acl_file")]
    pub acl_file: String,
}

/// CLI output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub newline: NewlineStyle,
}

/// Complete ops-sysd configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SysdConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub hardware: HardwareConfig,

    #[serde(default)]
    pub cli: CliConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_db_path() -> PathBuf {
    PathBuf::from("/var/run/openswitch/ops-sysd.db.json")
}

fn default_hw_desc_dir() -> PathBuf {
    PathBuf::from("/etc/openswitch/hwdesc")
}

fn default_acl_file() -> String {
    "acl.yaml".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            db_path: default_db_path(),
        }
    }
}

impl Default for HardwareConfig {
    fn default() -> Self {
        Self {
            hw_desc_dir: default_hw_desc_dir(),
            acl_file: default_acl_file(),
        }
    }
}

impl HardwareConfig {
    /// Full path of the ACL limits file
    pub fn acl_path(&self) -> PathBuf {
        self.hw_desc_dir.join(&self.acl_file)
    }
}

impl SysdConfig {
    /// Parses a TOML configuration document
    pub fn from_toml_str(content: &str) -> SysdResult<Self> {
        toml::from_str(content).map_err(|e| SysdError::invalid_config("config", e.to_string()))
    }

    /// Load configuration from file, falling back to defaults if file not found
    pub fn load_or_default(path: impl AsRef<Path>) -> SysdResult<Self> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).map_err(|e| {
                SysdError::invalid_config(
                    "config",
                    format!("Failed to parse config file {}: {}", path.display(), e),
                )
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Config file {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(SysdError::io(path.display().to_string(), e)),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SysdResult<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.general.log_level.to_ascii_lowercase().as_str()) {
            return Err(SysdError::invalid_config(
                "general.log_level",
                format!("unknown level '{}'", self.general.log_level),
            ));
        }

        if self.hardware.acl_file.is_empty() {
            return Err(SysdError::invalid_config(
                "hardware.acl_file",
                "must not be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SysdConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.cli.newline, NewlineStyle::Lf);
        assert_eq!(
            config.hardware.acl_path(),
            PathBuf::from("/etc/openswitch/hwdesc/acl.yaml")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = SysdConfig::from_toml_str(
            r#"
            [hardware]
            hw_desc_dir = "/usr/share/hwdesc/as5712"

            [cli]
            newline = "crlf"
            "#,
        )
        .unwrap();

        assert_eq!(config.general.log_level, "info");
        assert_eq!(
            config.hardware.acl_path(),
            PathBuf::from("/usr/share/hwdesc/as5712/acl.yaml")
        );
        assert_eq!(config.cli.newline.as_str(), "\r\n");
    }

    #[test]
    fn test_invalid_toml() {
        let err = SysdConfig::from_toml_str("[general\nlog_level = 1").unwrap_err();
        assert!(matches!(err, SysdError::InvalidConfig { .. }));
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let mut config = SysdConfig::default();
        config.general.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = SysdConfig::load_or_default("/nonexistent/ops-sysd.conf").unwrap();
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ops-sysd.conf");
        std::fs::write(
            &path,
            "[general]\nlog_level = \"debug\"\n\n[cli]\nnewline = \"crlf\"\n",
        )
        .unwrap();

        let loaded = SysdConfig::load_or_default(&path).unwrap();
        assert_eq!(loaded.general.log_level, "debug");
        assert_eq!(loaded.cli.newline, NewlineStyle::Crlf);
    }
}
