//! Integration tests for the dramlog API endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

use dramlog_server::{build_router, AppState};
use dramlog_store::Store;

/// Test helper: seed a small data root.
fn seed_data_root() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "data/tastings/experts/jane-doe/chivas-regal-12yo.json",
        r#"{
            "contributor": {"id": "jane-doe", "name": "Jane Doe", "tier": "expert"},
            "whisky": {"name_display": "Chivas Regal 12 Year Old",
                       "category": "Blended Scotch Whisky", "age_years": 12},
            "tasting": {"score": {"overall_1_10": 9}}
        }"#,
    );
    write(
        tmp.path(),
        "data/reviewers/index.json",
        r#"{"reviewers": [{"id": "jane-doe", "order": 1}]}"#,
    );
    write(
        tmp.path(),
        "data/reviewers/jane-doe.json",
        r#"{"id": "jane-doe", "type": "expert", "country": "UK", "language": "en",
            "displayName": "Jane Doe", "sortName": "Doe, Jane", "bio": "", "links": []}"#,
    );
    tmp
}

fn write(root: &Path, rel: &str, contents: &str) {
    let full = root.join(rel);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, contents).unwrap();
}

fn setup_app(root: &Path, admin_token: Option<&str>) -> axum::Router {
    let state = AppState::new(Store::open(root), admin_token.map(str::to_string));
    build_router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("x-admin-token", token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

fn review_payload() -> Value {
    json!({
        "reviewer": {"id": "joe", "name": "Joe Public"},
        "bottle": {"key": "chivas-regal-12yo", "name_display": "Chivas Regal 12 Year Old",
                   "category": "Blended Scotch Whisky"},
        "tasted_date": "2026-08-30",
        "overall_1_10": 8,
        "served": "Neat",
        "would_buy_again": true
    })
}

#[tokio::test]
async fn health_needs_no_auth() {
    let tmp = seed_data_root();
    let app = setup_app(tmp.path(), None);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "dramlog-server");
}

#[tokio::test]
async fn bottles_listing_aggregates_the_corpus() {
    let tmp = seed_data_root();
    let app = setup_app(tmp.path(), None);

    let response = app.oneshot(get("/api/bottles")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["bottle"]["slug"], "chivas-regal-12-year-old");
    assert_eq!(list[0]["ratedCount"], 1);
    assert_eq!(list[0]["distStars1to5"]["5"], 1);
}

#[tokio::test]
async fn unknown_bottle_slug_is_a_placeholder_not_a_404() {
    let tmp = seed_data_root();
    let app = setup_app(tmp.path(), None);

    let response = app
        .oneshot(get("/api/bottles/unknown-slug-xyz"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["bottle"]["name"], "unknown-slug-xyz");
    assert_eq!(body["tastings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn tastings_browse_carries_global_slugs() {
    let tmp = seed_data_root();
    let app = setup_app(tmp.path(), None);

    let response = app.oneshot(get("/api/tastings")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body[0]["slug"], "expert:Jane Doe:chivas-regal-12yo");
}

#[tokio::test]
async fn reviewers_roster_and_filtered_tastings() {
    let tmp = seed_data_root();

    let response = setup_app(tmp.path(), None)
        .oneshot(get("/api/reviewers"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body[0]["displayName"], "Jane Doe");

    let response = setup_app(tmp.path(), None)
        .oneshot(get("/api/reviewers/jane-doe/tastings"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let response = setup_app(tmp.path(), None)
        .oneshot(get("/api/reviewers/nobody/tastings"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn admin_write_is_refused_without_configuration() {
    let tmp = seed_data_root();
    let app = setup_app(tmp.path(), None);

    let response = app
        .oneshot(post_json(
            "/api/admin/consumer-reviews",
            Some("whatever"),
            &review_payload(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn admin_write_rejects_a_bad_token() {
    let tmp = seed_data_root();

    let missing = setup_app(tmp.path(), Some("secret"))
        .oneshot(post_json("/api/admin/consumer-reviews", None, &review_payload()))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let wrong = setup_app(tmp.path(), Some("secret"))
        .oneshot(post_json(
            "/api/admin/consumer-reviews",
            Some("nope"),
            &review_payload(),
        ))
        .await
        .unwrap();
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_write_names_the_missing_field() {
    let tmp = seed_data_root();
    let app = setup_app(tmp.path(), Some("secret"));

    let mut payload = review_payload();
    payload.as_object_mut().unwrap().remove("tasted_date");

    let response = app
        .oneshot(post_json("/api/admin/consumer-reviews", Some("secret"), &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("tasted_date"));
}

#[tokio::test]
async fn admin_write_persists_and_reports_the_record() {
    let tmp = seed_data_root();
    let app = setup_app(tmp.path(), Some("secret"));

    let response = app
        .oneshot(post_json(
            "/api/admin/consumer-reviews",
            Some("secret"),
            &review_payload(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["ok"], true);
    assert_eq!(
        body["written"],
        "data/tastings/consumers/joe/chivas-regal-12yo-consumer-2026-08-30-001.json"
    );
    assert_eq!(
        body["slug"],
        "consumer:Joe Public:chivas-regal-12yo-consumer-2026-08-30-001"
    );

    // the new record feeds straight back into the aggregates
    let listing = setup_app(tmp.path(), None)
        .oneshot(get("/api/bottles"))
        .await
        .unwrap();
    let list = extract_json(listing.into_body()).await;
    assert_eq!(list[0]["tastingCount"], 2);
    assert_eq!(list[0]["ratedCount"], 2);
}
