use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Keys written by `init`; `config --check` reports the ones a file lacks.
pub const KNOWN_KEYS: [&str; 4] = ["timesheet_dir", "extension", "color", "default_format"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_timesheet_dir")]
    pub timesheet_dir: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub color: bool,
    #[serde(default)]
    pub default_format: ExportFormat,
}

fn default_timesheet_dir() -> String {
    "time-sheets".to_string()
}
fn default_extension() -> String {
    "txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timesheet_dir: default_timesheet_dir(),
            extension: default_extension(),
            color: false,
            default_format: ExportFormat::Text,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Load configuration from the standard file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // un file vuoto vale come configurazione di default
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|_| AppError::ConfigSave)?;
        }
        fs::write(path, self.to_yaml()?).map_err(|_| AppError::ConfigSave)
    }

    /// Directory holding the time sheets, with `~/` expanded
    pub fn timesheet_dir(&self) -> PathBuf {
        expand_tilde(&self.timesheet_dir)
    }

    /// Keys of [`KNOWN_KEYS`] missing from a YAML document
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = if content.trim().is_empty() {
            serde_yaml::Value::Null
        } else {
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?
        };

        Ok(KNOWN_KEYS
            .iter()
            .copied()
            .filter(|k| value.get(*k).is_none())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.timesheet_dir, "time-sheets");
        assert_eq!(c.extension, "txt");
        assert!(!c.color);
        assert_eq!(c.default_format, ExportFormat::Text);
    }

    #[test]
    fn partial_file_uses_defaults_for_missing_fields() {
        let c = Config::from_yaml("color: true\n").unwrap();
        assert!(c.color);
        assert_eq!(c.extension, "txt");
        assert_eq!(Config::missing_keys("color: true\n").unwrap().len(), 3);
    }

    #[test]
    fn yaml_round_trip() {
        let c = Config {
            timesheet_dir: "/srv/sheets".into(),
            extension: "log".into(),
            color: true,
            default_format: ExportFormat::Json,
        };
        let yaml = c.to_yaml().unwrap();
        assert!(yaml.contains("default_format: json"));
        assert_eq!(Config::from_yaml(&yaml).unwrap(), c);
        assert!(Config::missing_keys(&yaml).unwrap().is_empty());
    }

    #[test]
    fn broken_yaml_is_an_error() {
        assert!(matches!(
            Config::from_yaml("color: [unclosed"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let p = std::env::temp_dir().join("rtimesheet_no_such_dir/rtimesheet.conf");
        assert_eq!(Config::load_from(&p).unwrap(), Config::default());
    }
}
