//! Schedule export: CSV for spreadsheets, JSON for programs

mod csv;
mod json;

pub use self::csv::{export_csv_file, write_csv};
pub use self::json::{write_json, ScheduleDocument};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// `Schedule_<asset name>.<extension>` with spaces turned into underscores
pub fn default_export_filename(asset_name: &str, extension: &str) -> String {
    format!("Schedule_{}.{}", asset_name.trim(), extension).replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export_filename() {
        assert_eq!(default_export_filename("New Asset", "csv"), "Schedule_New_Asset.csv");
        assert_eq!(default_export_filename(" Forklift ", "json"), "Schedule_Forklift.json");
    }
}
