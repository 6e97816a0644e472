//! Application configuration
//!
//! Values come from an optional JSON file, then `AMORT_*` environment
//! variables; command-line flags are layered on top by the binary.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::{default_dates, ScheduleForm, DEFAULT_ASSET_NAME};
use crate::schedule::Method;

pub const ENV_ASSET_NAME: &str = "AMORT_ASSET_NAME";
pub const ENV_COST: &str = "AMORT_COST";
pub const ENV_SALVAGE: &str = "AMORT_SALVAGE";
pub const ENV_START: &str = "AMORT_START";
pub const ENV_END: &str = "AMORT_END";
pub const ENV_METHOD: &str = "AMORT_METHOD";
pub const ENV_OUTPUT_DIR: &str = "AMORT_OUTPUT_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

fn default_asset_name() -> String {
    DEFAULT_ASSET_NAME.to_string()
}

fn default_salvage() -> String {
    "0".to_string()
}

fn default_method() -> String {
    Method::StraightLine.label().to_string()
}

/// Asset inputs and output location, all as user text until validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_asset_name")]
    pub asset_name: String,

    /// Total cost; required before a schedule can be computed
    #[serde(default)]
    pub total_cost: Option<String>,

    #[serde(default = "default_salvage")]
    pub salvage_value: String,

    /// Defaults to the first of the current month
    #[serde(default)]
    pub start_date: Option<String>,

    /// Defaults to one year from today less a day
    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default = "default_method")]
    pub method: String,

    /// Directory for exported files (default: current directory)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_name: default_asset_name(),
            total_cost: None,
            salvage_value: default_salvage(),
            start_date: None,
            end_date: None,
            method: default_method(),
            output_dir: None,
        }
    }
}

impl AppConfig {
    /// Load from `path` if given, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Override fields from variables that `lookup` finds
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_ASSET_NAME) {
            self.asset_name = v;
        }
        if let Some(v) = lookup(ENV_COST) {
            self.total_cost = Some(v);
        }
        if let Some(v) = lookup(ENV_SALVAGE) {
            self.salvage_value = v;
        }
        if let Some(v) = lookup(ENV_START) {
            self.start_date = Some(v);
        }
        if let Some(v) = lookup(ENV_END) {
            self.end_date = Some(v);
        }
        if let Some(v) = lookup(ENV_METHOD) {
            self.method = v;
        }
        if let Some(v) = lookup(ENV_OUTPUT_DIR) {
            self.output_dir = Some(PathBuf::from(v));
        }
    }

    /// Form with missing dates filled relative to `today`
    pub fn to_form(&self, today: NaiveDate) -> ScheduleForm {
        let (default_start, default_end) = default_dates(today);
        ScheduleForm {
            asset_name: self.asset_name.clone(),
            total_cost: self.total_cost.clone().unwrap_or_default(),
            salvage_value: self.salvage_value.clone(),
            start_date: self
                .start_date
                .clone()
                .unwrap_or_else(|| default_start.format("%Y-%m-%d").to_string()),
            end_date: self
                .end_date
                .clone()
                .unwrap_or_else(|| default_end.format("%Y-%m-%d").to_string()),
            method: self.method.clone(),
        }
    }

    /// Where an export named `file_name` should be written
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}
