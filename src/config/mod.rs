use crate::errors::{AppError, AppResult};
use crate::models::columns::DEFAULT_PURPOSE;
use crate::utils::date::DEFAULT_DATE_FORMAT;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Which backend stands in for the remote sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Sqlite,
    Csv,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_backend")]
    pub backend: Backend,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_sheet_file")]
    pub sheet_file: String,
    #[serde(default = "default_purpose")]
    pub default_purpose: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,
}

/// Fields every configuration file is expected to carry.
pub const CONFIG_FIELDS: [&str; 6] = [
    "backend",
    "database",
    "sheet_file",
    "default_purpose",
    "date_format",
    "utc_offset_hours",
];

fn default_backend() -> Backend {
    Backend::Sqlite
}
fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_sheet_file() -> String {
    Config::config_dir()
        .join("visitors.csv")
        .to_string_lossy()
        .to_string()
}
fn default_purpose() -> String {
    DEFAULT_PURPOSE.to_string()
}
fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
fn default_utc_offset() -> i32 {
    7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            database: default_database(),
            sheet_file: default_sheet_file(),
            default_purpose: default_purpose(),
            date_format: default_date_format(),
            utc_offset_hours: default_utc_offset(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("visitorlog")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".visitorlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("visitorlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("visitorlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Point the active backend at `path` (the global `--db` flag).
    pub fn override_storage(&mut self, path: &str) {
        match self.backend {
            Backend::Sqlite => self.database = path.to_string(),
            Backend::Csv => self.sheet_file = path.to_string(),
        }
    }

    /// Active storage location, for messages.
    pub fn storage_path(&self) -> &str {
        match self.backend {
            Backend::Sqlite => &self.database,
            Backend::Csv => &self.sheet_file,
        }
    }

    /// Fields absent from the YAML file at `path`.
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        let Some(map) = yaml.as_mapping() else {
            return Ok(CONFIG_FIELDS.to_vec());
        };

        Ok(CONFIG_FIELDS
            .iter()
            .copied()
            .filter(|f| !map.contains_key(*f))
            .collect())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration to the standard config file.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
