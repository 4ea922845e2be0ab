//! Export encodings (JSON, CSV) and the printable summary.

pub mod csv;
pub mod json;
pub mod printable;

pub use self::csv::{to_csv, CSV_HEADER};
pub use self::json::{from_json, to_json, to_json_at, ExportedData};
pub use self::printable::PrintableReport;

use chrono::{DateTime, Utc};

/// Export encodings offered for download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }

    /// `fintrack_export_<unix-millis>.<ext>`
    pub fn default_file_name(&self, at: DateTime<Utc>) -> String {
        format!(
            "fintrack_export_{}.{}",
            at.timestamp_millis(),
            self.extension()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_file_name_uses_epoch_millis() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            ExportFormat::Csv.default_file_name(at),
            "fintrack_export_1704067200000.csv"
        );
        assert_eq!(ExportFormat::parse("JSON"), Some(ExportFormat::Json));
    }
}
