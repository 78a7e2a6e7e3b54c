//! Exporters for the checked subset of search results.
//!
//! Two outputs: a CSV document with a fixed column order, and a printable
//! list (plain text or standalone HTML). Both accept an empty selection and
//! produce a header-only or "nothing selected" document instead of failing.

pub mod printable;
pub mod table;

use chrono::NaiveDateTime;

pub use printable::{escape_html, printable_html, printable_text};
pub use table::{CSV_HEADER, CsvRow, from_csv, to_csv, write_csv};

/// Export formats offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Csv,
    Html,
    Text,
    PosterArchive,
}

impl ExportKind {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Html => "html",
            Self::Text => "txt",
            Self::PosterArchive => "zip",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Html => "text/html; charset=utf-8",
            Self::Text => "text/plain; charset=utf-8",
            Self::PosterArchive => "application/zip",
        }
    }
}

/// Builds `{prefix}_YYYYMMDD_HHMMSS.{ext}`.
pub fn export_filename(prefix: &str, kind: ExportKind, timestamp: NaiveDateTime) -> String {
    format!(
        "{prefix}_{}.{}",
        timestamp.format("%Y%m%d_%H%M%S"),
        kind.extension()
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_export_filename_format() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap();

        assert_eq!(
            export_filename("films", ExportKind::Csv, ts),
            "films_20240309_140507.csv"
        );
        assert_eq!(
            export_filename("films", ExportKind::PosterArchive, ts),
            "films_20240309_140507.zip"
        );
    }
}
