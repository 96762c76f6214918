//! Distribution report export

mod csv_export;
mod json_export;

use std::path::Path;

pub use csv_export::{export_to_csv, write_csv};
pub use json_export::{export_to_json, write_json};

use freight_types::{DistributionReport, Result};

/// Export file flavour, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// `.json` (any case) is JSON; everything else is CSV
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }
}

/// Write the report to `output_path` in the format its extension implies
pub fn export_report(report: &DistributionReport, output_path: &Path) -> Result<ExportFormat> {
    let format = ExportFormat::from_path(output_path);
    match format {
        ExportFormat::Json => export_to_json(report, output_path)?,
        ExportFormat::Csv => export_to_csv(report, output_path)?,
    }
    tracing::info!(path = %output_path.display(), ?format, "report exported");
    Ok(format)
}
