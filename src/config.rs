use serde::Deserialize;

use covid_api::CaseField;

use crate::error::AppError;
use crate::models::FieldSelection;

const CONFIG_FILE: &str = "dashboard.toml";

/// Application configuration, optionally overridden by `dashboard.toml`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the statistics API
    pub api_base_url: String,
    /// Initial lower bound of the date range (ISO timestamp)
    pub date_from: String,
    /// Initial upper bound of the date range (ISO timestamp)
    pub date_to: String,
    /// Initially charted statistic field
    pub selected_case: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.covid19api.com".to_string(),
            date_from: "2021-09-29T23:08:34.402Z".to_string(),
            date_to: "2023-01-27T21:08:16.708Z".to_string(),
            selected_case: "NewConfirmed".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration, falling back to defaults when the file is
    /// absent or unreadable
    pub fn load() -> AppConfig {
        match Self::read_file(CONFIG_FILE) {
            Ok(Some(config)) => {
                log::info!("Loaded configuration from {}", CONFIG_FILE);
                config
            }
            Ok(None) => AppConfig::default(),
            Err(e) => {
                log::warn!("Ignoring {}: {}", CONFIG_FILE, e);
                AppConfig::default()
            }
        }
    }

    fn read_file(path: &str) -> Result<Option<AppConfig>, AppError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::Config(format!("could not read {}: {}", path, e))),
        };

        let config = toml::from_str(&raw)
            .map_err(|e| AppError::Config(format!("could not parse {}: {}", path, e)))?;

        Ok(Some(config))
    }

    /// Initial form state derived from the configured defaults
    ///
    /// An unknown `selected_case` value falls back to NewConfirmed.
    pub fn initial_selection(&self) -> FieldSelection {
        FieldSelection {
            date_from: self.date_from.clone(),
            date_to: self.date_to.clone(),
            selected_case: CaseField::from_param(&self.selected_case)
                .unwrap_or(CaseField::NewConfirmed),
        }
    }
}
