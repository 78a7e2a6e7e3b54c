//! End-to-end tests of the router in demonstration mode.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use reelpick_core::ReelpickConfig;
use reelpick_core::export::from_csv;
use reelpick_web::{AppState, SESSION_COOKIE_NAME, create_router};
use tower::ServiceExt;

fn app() -> Router {
    app_with(ReelpickConfig::default())
}

fn app_with(config: ReelpickConfig) -> Router {
    let state = AppState::from_config(&config).unwrap();
    create_router(state)
}

async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Performs `method uri` with an optional session cookie and returns status,
/// the issued cookie (if any) and the body.
async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
) -> (StatusCode, Option<String>, String) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    let response = app
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let issued = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string);
    let body = body_to_string(response.into_body()).await;
    (status, issued, body)
}

async fn new_session(app: &Router) -> String {
    let (status, cookie, _) = send(app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    cookie.expect("first visit issues a session cookie")
}

#[tokio::test]
async fn test_first_visit_issues_session_cookie() {
    let app = app();

    let cookie = new_session(&app).await;
    assert!(cookie.starts_with(&format!("{SESSION_COOKIE_NAME}=")));

    // A known session keeps its cookie.
    let (status, reissued, body) = send(&app, "GET", "/", Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(reissued.is_none());
    assert!(body.contains("Demonstration data"));
}

#[tokio::test]
async fn test_search_pick_and_export_csv() {
    let app = app();
    let cookie = new_session(&app).await;

    let (status, _, body) = send(&app, "GET", "/htmx/search?query=Matrix", Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Inception"));
    assert!(body.contains("The Godfather"));
    assert!(body.contains("Schindler&#39;s List"));

    let (status, _, body) = send(&app, "POST", "/htmx/pick/1/0", Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<strong class=\"text-white\">1</strong> of 3 selected"));

    let response = app
        .clone()
        .oneshot(
            Request::get("/export/csv")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"films_"));
    assert!(disposition.ends_with(".csv\""));

    let csv = body_to_string(response.into_body()).await;
    assert_eq!(csv.lines().count(), 2);
    let rows = from_csv(&csv).unwrap();
    assert_eq!(rows[0].title, "Inception");
    assert_eq!(rows[0].year, Some(2010));
    assert_eq!(rows[0].director.as_deref(), Some("Christopher Nolan"));
}

#[tokio::test]
async fn test_new_search_clears_selection() {
    let app = app();
    let cookie = new_session(&app).await;

    send(&app, "GET", "/htmx/search?query=Matrix", Some(&cookie)).await;
    send(&app, "POST", "/htmx/pick/1/all", Some(&cookie)).await;
    let (_, _, csv) = send(&app, "GET", "/export/csv", Some(&cookie)).await;
    assert_eq!(csv.lines().count(), 4);

    let (_, _, body) = send(&app, "GET", "/htmx/search?query=Godfather", Some(&cookie)).await;
    assert!(body.contains("<strong class=\"text-white\">0</strong> of 3 selected"));

    let (_, _, csv) = send(&app, "GET", "/export/csv", Some(&cookie)).await;
    assert_eq!(csv.trim_end(), "title,year,director,summary");
}

#[tokio::test]
async fn test_pick_none_and_out_of_range() {
    let app = app();
    let cookie = new_session(&app).await;

    // Nothing searched yet: no position exists.
    let (status, _, _) = send(&app, "POST", "/htmx/pick/0/0", Some(&cookie)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    send(&app, "GET", "/htmx/search?query=Matrix", Some(&cookie)).await;
    let (status, _, _) = send(&app, "POST", "/htmx/pick/1/3", Some(&cookie)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    send(&app, "POST", "/htmx/pick/1/all", Some(&cookie)).await;
    let (status, _, body) = send(&app, "POST", "/htmx/pick/1/none", Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains(" checked"));
}

#[tokio::test]
async fn test_sessions_do_not_share_selection() {
    let app = app();
    let alice = new_session(&app).await;
    let bob = new_session(&app).await;
    assert_ne!(alice, bob);

    send(&app, "GET", "/htmx/search?query=Matrix", Some(&alice)).await;
    send(&app, "POST", "/htmx/pick/1/all", Some(&alice)).await;

    let (_, _, csv) = send(&app, "GET", "/export/csv", Some(&bob)).await;
    assert_eq!(csv.lines().count(), 1);
}

#[tokio::test]
async fn test_print_view_with_empty_selection() {
    let app = app();
    let cookie = new_session(&app).await;

    let (status, _, body) = send(&app, "GET", "/export/print", Some(&cookie)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No film selected."));
    assert!(body.contains("<strong>Films:</strong> 0"));
}

/// GET returning status, content type, content disposition and body.
async fn get_with_headers(
    app: &Router,
    uri: &str,
    cookie: &str,
) -> (StatusCode, String, String, String) {
    let response = app
        .clone()
        .oneshot(
            Request::get(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let header_value = |name: header::HeaderName| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    let content_type = header_value(header::CONTENT_TYPE);
    let disposition = header_value(header::CONTENT_DISPOSITION);
    let status = response.status();
    let body = body_to_string(response.into_body()).await;
    (status, content_type, disposition, body)
}

#[tokio::test]
async fn test_print_view_formats() {
    let app = app();
    let cookie = new_session(&app).await;
    send(&app, "GET", "/htmx/search?query=Matrix", Some(&cookie)).await;
    send(&app, "POST", "/htmx/pick/1/0", Some(&cookie)).await;

    let (status, content_type, disposition, body) =
        get_with_headers(&app, "/export/print", &cookie).await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(disposition.starts_with("inline; filename=\"films_"));
    assert!(disposition.ends_with(".html\""));
    assert!(body.contains("Inception"));

    let (status, content_type, disposition, body) =
        get_with_headers(&app, "/export/print?format=text", &cookie).await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/plain"));
    assert!(disposition.starts_with("attachment; filename=\"films_"));
    assert!(disposition.ends_with(".txt\""));
    assert!(body.contains("## 1. Inception"));
    assert!(body.contains("**Director:** Christopher Nolan"));

    let (status, _, body) = send(&app, "GET", "/export/print?format=pdf", Some(&cookie)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Unknown print format"));
}

#[tokio::test]
async fn test_stale_tab_cannot_pick_from_replaced_results() {
    let app = app();
    let cookie = new_session(&app).await;

    // Tab A renders generation 1; tab B then searches again in the same session.
    let (_, _, tab_a) = send(&app, "GET", "/htmx/search?query=Matrix", Some(&cookie)).await;
    assert!(tab_a.contains(r#"hx-post="/htmx/pick/1/0""#));
    let (_, _, tab_b) = send(&app, "GET", "/htmx/search?query=Godfather", Some(&cookie)).await;
    assert!(tab_b.contains(r#"hx-post="/htmx/pick/2/0""#));

    let (status, _, body) = send(&app, "POST", "/htmx/pick/1/0", Some(&cookie)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("replaced by a newer search"));

    let (status, _, _) = send(&app, "POST", "/htmx/pick/1/all", Some(&cookie)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, _, csv) = send(&app, "GET", "/export/csv", Some(&cookie)).await;
    assert_eq!(csv.trim_end(), "title,year,director,summary");

    let (status, _, _) = send(&app, "POST", "/htmx/pick/2/0", Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_cookieless_traffic_stays_within_session_cap() {
    let mut config = ReelpickConfig::default();
    config.server.max_sessions = 3;
    let app = app_with(config);

    for _ in 0..10 {
        let (status, issued, _) = send(&app, "GET", "/htmx/search?query=Matrix", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(issued.is_some());
    }
    // Bulk picks from unknown sessions do not create entries.
    for _ in 0..10 {
        send(&app, "POST", "/htmx/pick/0/all", None).await;
    }

    let (_, _, body) = send(&app, "GET", "/api/status", None).await;
    let status: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(status["sessions"], 3);
}

#[tokio::test]
async fn test_full_page_search_without_javascript() {
    let app = app();

    let (status, _, body) = send(&app, "GET", "/search?query=Matrix", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Inception"));
    assert!(body.contains(r#"value="Matrix""#));
}

#[tokio::test]
async fn test_api_search_and_filters() {
    let app = app();

    let (status, _, body) = send(&app, "GET", "/api/search?query=Matrix", None).await;
    assert_eq!(status, StatusCode::OK);
    let outcome: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(outcome["mode"], "demo");
    assert_eq!(outcome["records"].as_array().unwrap().len(), 3);
    assert_eq!(outcome["notice"]["level"], "info");

    let (_, _, body) = send(&app, "GET", "/api/search?query=Matrix&year=1972", None).await;
    let outcome: serde_json::Value = serde_json::from_str(&body).unwrap();
    let records = outcome["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "The Godfather");

    let (_, _, body) = send(&app, "GET", "/api/search?query=%20%20", None).await;
    let outcome: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(outcome["records"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_api_status_reports_demo_mode() {
    let app = app();

    let (status, _, body) = send(&app, "GET", "/api/status", None).await;

    assert_eq!(status, StatusCode::OK);
    let status: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(status["mode"], "demo");
    assert_eq!(status["provider"], "Demo");
}
