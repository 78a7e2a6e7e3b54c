//! Checkbox selection handlers
//!
//! Every route carries the generation of the result list it was rendered
//! from. A request against an older list is refused with 409 so a stale tab
//! cannot tick a film the user never saw.

use axum::extract::{Path, State};
use axum::response::Html;
use axum_extra::extract::cookie::CookieJar;
use reelpick_core::{ReelpickError, ResultPicker};
use uuid::Uuid;

use crate::components::movie;
use crate::error::WebError;
use crate::server::AppState;
use crate::session::SessionStore;

/// Flips one checkbox and returns the updated counter.
///
/// # Errors
/// - `WebError::Core` - `generation` is stale or `index` is not a position in the session's results
pub async fn toggle_pick(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((generation, index)): Path<(u64, usize)>,
) -> Result<(CookieJar, Html<String>), WebError> {
    let (jar, session) = SessionStore::resolve(jar);

    let outcome = state
        .sessions
        .update_existing(session, |picker| {
            picker.ensure_generation(generation)?;
            let checked = picker.toggle(index)?;
            Ok::<_, ReelpickError>((checked, picker.selected_count(), picker.results().len()))
        })
        .await;

    let (checked, selected, total) = match outcome {
        Some(result) => result?,
        None => {
            ResultPicker::default().ensure_generation(generation)?;
            return Err(ReelpickError::Selection { index, len: 0 }.into());
        }
    };

    tracing::debug!(session = %session, generation, index, checked, selected, "Toggled pick");
    Ok((jar, Html(movie::selection_counter(selected, total))))
}

/// Checks every result and re-renders the results panel.
///
/// # Errors
/// - `WebError::Core` - `generation` is stale
pub async fn pick_all(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(generation): Path<u64>,
) -> Result<(CookieJar, Html<String>), WebError> {
    let (jar, session) = SessionStore::resolve(jar);
    let picker = bulk_select(&state, session, generation, ResultPicker::select_all).await?;

    Ok((jar, Html(movie::results_panel(&picker, None))))
}

/// Unchecks every result and re-renders the results panel.
///
/// # Errors
/// - `WebError::Core` - `generation` is stale
pub async fn pick_none(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(generation): Path<u64>,
) -> Result<(CookieJar, Html<String>), WebError> {
    let (jar, session) = SessionStore::resolve(jar);
    let picker = bulk_select(&state, session, generation, ResultPicker::clear_selection).await?;

    Ok((jar, Html(movie::results_panel(&picker, None))))
}

/// Applies `change` to an existing session's picker. Unknown sessions are
/// left out of the store and answered with an empty picker.
async fn bulk_select(
    state: &AppState,
    session: Uuid,
    generation: u64,
    change: fn(&mut ResultPicker),
) -> Result<ResultPicker, ReelpickError> {
    state
        .sessions
        .update_existing(session, |picker| {
            picker.ensure_generation(generation)?;
            change(picker);
            Ok(picker.clone())
        })
        .await
        .unwrap_or_else(|| {
            let empty = ResultPicker::default();
            empty.ensure_generation(generation).map(|()| empty)
        })
}
