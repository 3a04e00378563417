use crate::error::{Result, ToolkitError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use ta_toolkit_common::{ContainmentPolicy, MatchOptions, DEFAULT_THRESHOLD};

/// Directories never descended into when looking for Python sources.
/// Any directory whose name contains `env` is skipped as well.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["__pycache__", ".git", ".idea", ".vscode", "__MACOSX"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spreadsheet with the authoritative (group, name) list
    pub roster_path: Option<PathBuf>,
    /// First roster row, 1-indexed
    pub roster_first_row: u32,
    /// Last roster row, 1-indexed, inclusive
    pub roster_last_row: u32,
    pub match_threshold: f64,
    pub containment: ContainmentPolicy,
    pub excluded_dirs: Vec<String>,
    pub output_csv: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: None,
            roster_first_row: 8,
            roster_last_row: 102,
            match_threshold: DEFAULT_THRESHOLD,
            containment: ContainmentPolicy::First,
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
            output_csv: PathBuf::from("class_usage_result.csv"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ToolkitError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("ta-toolkit").join("config.json"))
    }

    pub fn match_options(&self) -> Result<MatchOptions> {
        Ok(MatchOptions::new(self.match_threshold, self.containment)?)
    }

    /// Zero-based, inclusive row window for the roster sheet.
    pub fn roster_rows(&self) -> Result<(u32, u32)> {
        if self.roster_first_row == 0 || self.roster_last_row < self.roster_first_row {
            return Err(ToolkitError::Config(format!(
                "invalid roster rows {}..{}",
                self.roster_first_row, self.roster_last_row
            )));
        }
        Ok((self.roster_first_row - 1, self.roster_last_row - 1))
    }
}
