//! CSV export with the stable `title, year, director, summary` layout.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::movie::MovieRecord;

/// Header row written at the top of every export.
pub const CSV_HEADER: [&str; 4] = ["title", "year", "director", "summary"];

/// One exported line. Field order here is the column order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRow {
    pub title: String,
    pub year: Option<u16>,
    pub director: Option<String>,
    pub summary: String,
}

impl From<&MovieRecord> for CsvRow {
    fn from(record: &MovieRecord) -> Self {
        Self {
            title: record.title.clone(),
            year: record.year,
            director: record.director.clone(),
            summary: record.summary.clone(),
        }
    }
}

/// Writes `records` as CSV into `writer`.
///
/// The header is written explicitly so an empty selection still yields a
/// one-line document.
///
/// # Errors
/// - `ReelpickError::Csv` - A row could not be serialized
/// - `ReelpickError::Io` - The underlying writer failed
pub fn write_csv<'a, W, I>(writer: W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a MovieRecord>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.serialize(CsvRow::from(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Renders `records` as a CSV string.
///
/// # Errors
/// - `ReelpickError::Csv` - Serialization failed
/// - `ReelpickError::Export` - Output was not valid UTF-8
pub fn to_csv<'a, I>(records: I) -> Result<String>
where
    I: IntoIterator<Item = &'a MovieRecord>,
{
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records)?;
    String::from_utf8(buffer).map_err(|e| crate::ReelpickError::Export {
        reason: format!("CSV output is not UTF-8: {e}"),
    })
}

/// Parses a document produced by [`to_csv`] back into rows.
///
/// # Errors
/// - `ReelpickError::Csv` - Malformed CSV
/// - `ReelpickError::Export` - Header does not match `title,year,director,summary`
pub fn from_csv(text: &str) -> Result<Vec<CsvRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(crate::ReelpickError::Export {
            reason: format!("unexpected CSV header: {}", headers.iter().collect::<Vec<_>>().join(",")),
        });
    }

    let rows = reader
        .deserialize::<CsvRow>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::CatalogSource;

    fn sample() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new("Inception", CatalogSource::Demo)
                .with_year(2010)
                .with_director("Christopher Nolan")
                .with_summary("A thief who steals secrets through dreams."),
            MovieRecord::new("Amélie, le fabuleux destin", CatalogSource::Tmdb)
                .with_year(2001)
                .with_summary("Line one\nLine two, with \"quotes\""),
            MovieRecord::new("Untitled", CatalogSource::Omdb),
        ]
    }

    #[test]
    fn test_empty_selection_is_header_only() {
        let csv = to_csv(std::iter::empty::<&MovieRecord>()).unwrap();

        assert_eq!(csv, "title,year,director,summary\n");
        assert!(from_csv(&csv).unwrap().is_empty());
    }

    #[test]
    fn test_row_count_matches_selection() {
        let records = sample();
        for take in 0..=records.len() {
            let csv = to_csv(records.iter().take(take)).unwrap();
            let rows = from_csv(&csv).unwrap();
            assert_eq!(rows.len(), take);
        }
    }

    #[test]
    fn test_single_record_layout() {
        let records = sample();
        let csv = to_csv(records.iter().take(1)).unwrap();

        assert_eq!(
            csv,
            "title,year,director,summary\n\
             Inception,2010,Christopher Nolan,A thief who steals secrets through dreams.\n"
        );
    }

    #[test]
    fn test_parse_back_matches_selected_records() {
        let records = sample();
        let csv = to_csv(&records).unwrap();
        let rows = from_csv(&csv).unwrap();

        let expected: Vec<CsvRow> = records.iter().map(CsvRow::from).collect();
        assert_eq!(rows, expected);
        assert_eq!(rows[1].summary, "Line one\nLine two, with \"quotes\"");
        assert_eq!(rows[2].director, None);
        assert_eq!(rows[2].year, None);
    }

    #[test]
    fn test_wrong_header_is_rejected() {
        let err = from_csv("name,year\nX,1999\n").unwrap_err();
        assert!(matches!(err, crate::ReelpickError::Export { .. }));
    }

    #[test]
    fn test_write_csv_to_file() {
        let records = sample();
        let file = tempfile::NamedTempFile::new().unwrap();

        write_csv(file.reopen().unwrap(), records.iter().skip(2)).unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(text, "title,year,director,summary\nUntitled,,,\n");
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failing_writer_is_io_error() {
        let records = sample();

        let err = write_csv(FullDisk, records.iter()).unwrap_err();

        assert!(matches!(err, crate::ReelpickError::Io(_)));
        assert!(!err.is_user_error());
    }
}
