//! Search fragment handler

use axum::extract::{Query, State};
use axum::response::Html;
use axum_extra::extract::cookie::CookieJar;
use reelpick_core::ResultPicker;
use reelpick_search::SearchOutcome;
use serde::Deserialize;
use uuid::Uuid;

use crate::components::movie;
use crate::server::AppState;
use crate::session::SessionStore;

/// Query string of the search form.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }
}

/// Searches and installs the results as the session's new picker contents.
///
/// The previous selection is always dropped, even when the lookup degrades
/// to an empty result.
pub(crate) async fn search_into_session(
    state: &AppState,
    session: Uuid,
    query: &str,
) -> (ResultPicker, SearchOutcome) {
    let outcome = state.catalog.search(query).await;

    let picker = state
        .sessions
        .update(session, |picker| {
            picker.replace_results(outcome.query.clone(), outcome.records.clone());
            picker.clone()
        })
        .await;

    (picker, outcome)
}

/// Returns the results fragment for a new search.
pub async fn htmx_search(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<SearchParams>,
) -> (CookieJar, Html<String>) {
    let (jar, session) = SessionStore::resolve(jar);
    let (picker, outcome) = search_into_session(&state, session, params.query()).await;

    (
        jar,
        Html(movie::results_panel(&picker, outcome.notice.as_ref())),
    )
}
