//! Integration tests for `/observations` against a local stand-in for the
//! iNaturalist API.

mod common;

use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get as get_route;
use axum::{Json, Router};
use common::{body_json, build_test_app, build_test_app_with, get, spawn_stub};
use serde_json::json;

/// Serves a fixed page, but only if the expected query parameters are sent.
async fn observations_page(RawQuery(query): RawQuery) -> Response {
    let query = query.unwrap_or_default();
    if !query.contains("per_page=20") || !query.contains("has%5B%5D=geo") {
        return (StatusCode::BAD_REQUEST, format!("unexpected query: {query}")).into_response();
    }

    Json(json!([
        {
            "id": 1,
            "latitude": "22.4712",
            "longitude": "89.5951",
            "species_guess": "Bengal Tiger",
            "user": { "login": "ranger" },
            "place_guess": "Sundarbans",
            "quality_grade": "research",
            "observed_on": "2024-03-01",
            "photos": [{ "medium_url": "https://example.org/1.jpg" }]
        },
        { "id": 2, "latitude": null, "longitude": "89.0" },
        { "id": 3, "species_guess": "No location" },
        { "id": 4, "latitude": 40.7, "longitude": -74.0 }
    ]))
    .into_response()
}

async fn maintenance() -> Response {
    (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance").into_response()
}

async fn not_an_array() -> Response {
    Json(json!({ "error": "unexpected" })).into_response()
}

fn stub_router(route: axum::routing::MethodRouter) -> Router {
    Router::new().route("/observations.json", route)
}

async fn app_for_stub(stub: Router) -> Router {
    let base_url = spawn_stub(stub).await;
    build_test_app_with(None, &base_url)
}

// ---------------------------------------------------------------------------
// Test: observations are mapped and records without coordinates dropped
// ---------------------------------------------------------------------------

#[tokio::test]
async fn observations_drop_records_without_coordinates() {
    let app = app_for_stub(stub_router(get_route(observations_page))).await;
    let response = get(app, "/observations").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["type"], "FeatureCollection");

    let features = json["features"].as_array().unwrap();
    let ids: Vec<i64> = features
        .iter()
        .map(|f| f["properties"]["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 4]);

    for feature in features {
        assert_eq!(feature["geometry"]["type"], "Point");
        let coordinates = feature["geometry"]["coordinates"].as_array().unwrap();
        assert_eq!(coordinates.len(), 2);
        assert!(coordinates.iter().all(|c| c.is_f64()));
    }

    let first = &features[0]["properties"];
    assert_eq!(features[0]["geometry"]["coordinates"], json!([89.5951, 22.4712]));
    assert_eq!(first["user_login"], "ranger");
    assert_eq!(first["image_url"], "https://example.org/1.jpg");

    let defaulted = &features[1]["properties"];
    assert_eq!(defaulted["species_guess"], "Unknown Species");
    assert_eq!(defaulted["quality_grade"], "casual");
    assert_eq!(defaulted["image_url"], serde_json::Value::Null);
}

// ---------------------------------------------------------------------------
// Test: upstream non-2xx maps to 502 with the upstream message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upstream_error_status_returns_502() {
    let app = app_for_stub(stub_router(get_route(maintenance))).await;
    let response = get(app, "/observations").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("Failed to fetch data from iNaturalist: "));
    assert!(message.contains("503"), "got: {message}");
    assert!(message.contains("down for maintenance"), "got: {message}");
}

// ---------------------------------------------------------------------------
// Test: a body that is not a JSON array maps to 502
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unexpected_body_returns_502() {
    let app = app_for_stub(stub_router(get_route(not_an_array))).await;
    let response = get(app, "/observations").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// ---------------------------------------------------------------------------
// Test: transport failure maps to 502
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_upstream_returns_502() {
    let response = get(build_test_app(), "/observations").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["code"], "UPSTREAM_ERROR");
}
