//! Poster download into a ZIP archive.

use std::collections::HashSet;
use std::io::{Cursor, Write};

use reelpick_core::{CatalogConfig, MovieRecord};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::errors::CatalogError;
use crate::providers::http_client;

/// Result of building a poster archive.
#[derive(Debug, Clone)]
pub struct ArchiveReport {
    /// Finished ZIP file
    pub bytes: Vec<u8>,
    /// Entry names written, in record order
    pub included: Vec<String>,
    /// Titles left out because they had no poster or the download failed
    pub skipped: Vec<String>,
}

/// Archive entry name for a record: `{safe title}_{year}.jpg`.
///
/// The safe title keeps alphanumerics, space, `-` and `_`. A missing year
/// becomes `unknown`.
pub fn poster_filename(record: &MovieRecord) -> String {
    let safe: String = record
        .title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let safe = safe.trim_end();
    let safe = if safe.is_empty() { "poster" } else { safe };
    let year = record
        .year
        .map_or_else(|| "unknown".to_string(), |y| y.to_string());
    format!("{safe}_{year}.jpg")
}

/// Downloads posters for selected films.
#[derive(Debug, Clone)]
pub struct PosterArchive {
    client: reqwest::Client,
}

impl PosterArchive {
    /// # Errors
    /// - `CatalogError::ProviderError` - HTTP client could not be built
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Ok(Self {
            client: http_client(config)?,
        })
    }

    /// Downloads one poster image.
    ///
    /// # Errors
    /// - `CatalogError::PosterFetchFailed` - Request failed or returned a non-success status
    pub async fn fetch_poster(&self, title: &str, url: &str) -> Result<Vec<u8>, CatalogError> {
        let fail = |reason: String| CatalogError::PosterFetchFailed {
            title: title.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fail(e.without_url().to_string()))?;
        if !response.status().is_success() {
            return Err(fail(format!("HTTP {}", response.status().as_u16())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| fail(e.without_url().to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Builds a ZIP with one entry per downloadable poster.
    ///
    /// Duplicate entry names get a numeric suffix.
    ///
    /// # Errors
    /// - `CatalogError::ArchiveFailed` - Writing the archive failed
    pub async fn build_zip(&self, records: &[&MovieRecord]) -> Result<ArchiveReport, CatalogError> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        let mut included = Vec::new();
        let mut skipped = Vec::new();
        let mut used = HashSet::new();

        for record in records {
            let Some(url) = record.poster_url.as_deref() else {
                tracing::warn!(title = %record.title, "No poster available");
                skipped.push(record.title.clone());
                continue;
            };

            let image = match self.fetch_poster(&record.title, url).await {
                Ok(image) => image,
                Err(e) => {
                    tracing::warn!(title = %record.title, error = %e, "Skipping poster");
                    skipped.push(record.title.clone());
                    continue;
                }
            };

            let name = unique_name(poster_filename(record), &mut used);
            zip.start_file(name.as_str(), options).map_err(archive_error)?;
            zip.write_all(&image).map_err(archive_error)?;
            included.push(name);
        }

        let bytes = zip.finish().map_err(archive_error)?.into_inner();
        tracing::info!(
            count = included.len(),
            skipped = skipped.len(),
            "Poster archive built"
        );

        Ok(ArchiveReport {
            bytes,
            included,
            skipped,
        })
    }
}

fn unique_name(name: String, used: &mut HashSet<String>) -> String {
    if used.insert(name.clone()) {
        return name;
    }
    let stem = name.trim_end_matches(".jpg");
    let mut n = 2;
    loop {
        let candidate = format!("{stem}_{n}.jpg");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

fn archive_error(e: impl std::fmt::Display) -> CatalogError {
    CatalogError::ArchiveFailed {
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelpick_core::CatalogSource;

    #[test]
    fn test_poster_filename_is_safe() {
        let record = MovieRecord::new("Schindler's List: Part 1/2 ", CatalogSource::Demo)
            .with_year(1993);

        assert_eq!(poster_filename(&record), "Schindlers List Part 12_1993.jpg");
    }

    #[test]
    fn test_poster_filename_without_year() {
        let record = MovieRecord::new("Dune", CatalogSource::Tmdb);

        assert_eq!(poster_filename(&record), "Dune_unknown.jpg");
    }

    #[test]
    fn test_unique_name_suffixes_duplicates() {
        let mut used = HashSet::new();

        assert_eq!(unique_name("Dune_2021.jpg".to_string(), &mut used), "Dune_2021.jpg");
        assert_eq!(unique_name("Dune_2021.jpg".to_string(), &mut used), "Dune_2021_2.jpg");
    }
}
