//! Search page - query form and the session's current results

use axum::extract::{Query, State};
use axum::response::Html;
use axum_extra::extract::cookie::CookieJar;
use reelpick_core::export::escape_html;

use crate::components::{layout, movie, stats};
use crate::htmx::search::{SearchParams, search_into_session};
use crate::pages::render_page;
use crate::server::AppState;
use crate::session::SessionStore;

/// Renders the search page with whatever the session last searched for.
pub async fn search_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    let (jar, session) = SessionStore::resolve(jar);
    let picker = state.sessions.snapshot(session).await;

    let results = movie::results_panel(&picker, None);
    let page = page_body(&state, picker.query().unwrap_or_default(), &results);
    (jar, page)
}

/// Runs a search and renders the full page, for browsers without JavaScript.
pub async fn search_results_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<SearchParams>,
) -> (CookieJar, Html<String>) {
    let (jar, session) = SessionStore::resolve(jar);
    let (picker, outcome) = search_into_session(&state, session, params.query()).await;

    let results = movie::results_panel(&picker, outcome.notice.as_ref());
    let page = page_body(&state, &outcome.query, &results);
    (jar, page)
}

fn page_body(state: &AppState, query: &str, results: &str) -> Html<String> {
    let input_attrs = format!(r#"value="{}" autofocus required"#, escape_html(query));
    let search_form = format!(
        r##"<form action="/search" method="get" class="flex space-x-4"
                  hx-get="/htmx/search" hx-target="#results" hx-swap="outerHTML"
                  hx-indicator="#search-spinner">
            {}
            {}
        </form>
        <p id="search-spinner" class="htmx-indicator text-gray-400 text-sm mt-3">Searching...</p>"##,
        layout::input(
            "query",
            "Film title, e.g. Inception",
            "search",
            Some(input_attrs.as_str())
        ),
        layout::button("Search", "primary", Some(r#"type="submit""#))
    );

    let subtitle = if state.catalog.mode().is_demo() {
        "Demonstration data: set an API key for live lookups"
    } else {
        "Search the catalog, tick the films you want, export them"
    };

    let content = format!(
        r#"{}
        {}
        {}"#,
        layout::page_header("Find films", Some(subtitle)),
        layout::card(Some("Find a film"), &search_form),
        results
    );

    let mode_html = stats::mode_badge(state.catalog.mode(), &state.catalog.provider_name());
    render_page("Search", "search", &mode_html, &content)
}
