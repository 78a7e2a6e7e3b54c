//! Export handlers for the session's checked results

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use reelpick_core::ExportKind;
use reelpick_core::export::{
    escape_html, export_filename, printable_html, printable_text, to_csv,
};
use serde::Deserialize;

use crate::error::WebError;
use crate::server::AppState;
use crate::session::SessionStore;

/// How the browser should treat a generated file.
#[derive(Debug, Clone, Copy)]
enum Disposition {
    Attachment,
    Inline,
}

fn export_response(
    state: &AppState,
    kind: ExportKind,
    disposition: Disposition,
    body: Vec<u8>,
) -> Response {
    let timestamp = chrono::Local::now().naive_local();
    let filename = export_filename(state.file_prefix, kind, timestamp);
    let disposition = match disposition {
        Disposition::Attachment => "attachment",
        Disposition::Inline => "inline",
    };

    (
        [
            (header::CONTENT_TYPE, kind.mime_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!(r#"{disposition}; filename="{filename}""#),
            ),
        ],
        body,
    )
        .into_response()
}

fn attachment(state: &AppState, kind: ExportKind, body: Vec<u8>) -> Response {
    export_response(state, kind, Disposition::Attachment, body)
}

/// Query string of the print view.
#[derive(Debug, Default, Deserialize)]
pub struct PrintParams {
    #[serde(default)]
    pub format: Option<String>,
}

/// Downloads the checked results as CSV. An empty selection gives a
/// header-only file.
///
/// # Errors
/// - `WebError::Core` - CSV serialization failed
pub async fn export_csv(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Response), WebError> {
    let (jar, session) = SessionStore::resolve(jar);
    let picker = state.sessions.snapshot(session).await;

    let csv = to_csv(picker.selected())?;
    tracing::info!(session = %session, count = picker.selected_count(), "Exported CSV");

    Ok((jar, attachment(&state, ExportKind::Csv, csv.into_bytes())))
}

/// Printable list of the checked results.
///
/// `format=html` (the default) renders a standalone page in the browser;
/// `format=text` downloads the same list as plain text.
///
/// # Errors
/// - `WebError::BadRequest` - `format` is neither `html` nor `text`
pub async fn export_print(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<PrintParams>,
) -> Result<(CookieJar, Response), WebError> {
    let kind = match params.format.as_deref().map(str::trim) {
        None | Some("") | Some("html") => ExportKind::Html,
        Some("text") | Some("txt") => ExportKind::Text,
        Some(other) => {
            return Err(WebError::BadRequest {
                reason: format!(
                    "Unknown print format '{}', use html or text",
                    escape_html(other)
                ),
            });
        }
    };

    let (jar, session) = SessionStore::resolve(jar);
    let picker = state.sessions.snapshot(session).await;
    let generated_at = chrono::Local::now().naive_local();

    let response = match kind {
        ExportKind::Text => {
            let text = printable_text(&picker.selected(), generated_at);
            attachment(&state, kind, text.into_bytes())
        }
        _ => {
            let html = printable_html(&picker.selected(), generated_at);
            export_response(&state, kind, Disposition::Inline, html.into_bytes())
        }
    };
    tracing::info!(
        session = %session,
        count = picker.selected_count(),
        format = kind.extension(),
        "Exported print view"
    );

    Ok((jar, response))
}

/// Downloads the posters of the checked results as a ZIP archive.
///
/// # Errors
/// - `WebError::Catalog` - The archive could not be written
pub async fn export_posters(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Response), WebError> {
    let (jar, session) = SessionStore::resolve(jar);
    let picker = state.sessions.snapshot(session).await;

    let report = state.posters.build_zip(&picker.selected()).await?;
    tracing::info!(
        session = %session,
        included = report.included.len(),
        skipped = report.skipped.len(),
        "Exported posters"
    );

    Ok((
        jar,
        attachment(&state, ExportKind::PosterArchive, report.bytes),
    ))
}
