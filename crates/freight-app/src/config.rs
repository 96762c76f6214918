//! Configuration management for freightline
//!
//! Config stored at: ~/.config/freightline/config.json

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use freight_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Company name shown in reports
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// State document override
    #[serde(default)]
    pub state_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Empty every vehicle before each menu distribution
    #[serde(default = "default_true")]
    pub reset_before_distribute: bool,

    /// Apply the name/weight input policy to new clients
    #[serde(default = "default_true")]
    pub enforce_input_policy: bool,
}

fn default_company_name() -> String {
    "MyCompany".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            state_path: None,
            output_format: OutputFormat::default(),
            reset_before_distribute: true,
            enforce_input_policy: true,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("freightline");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the state document path
    pub fn state_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.state_path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("freightline");
        Ok(data_dir.join("state.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Freightline Configuration")?;
        writeln!(f, "=========================")?;
        writeln!(f)?;
        writeln!(f, "Company:           {}", self.company_name)?;
        writeln!(
            f,
            "State file:        {}",
            self.state_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Output format:     {}", self.output_format)?;
        writeln!(f, "Reset before run:  {}", self.reset_before_distribute)?;
        writeln!(f, "Input policy:      {}", self.enforce_input_policy)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}
