//! Tests for the assembled API router.
//!
//! Requests go through axum's routing and extractors, checking that query strings in the
//! format produced by the client reach the handlers.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use talya::{
    model::{api::ErrorDto, booking::SearchResultsDto},
    server::router::routes,
};
use talya_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{response_json, TestContextExt};

/// Expected: 200 OK for a camelCase search query string
#[tokio::test]
async fn routes_search_query_string() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(
            factory::mock_definitions(vec![factory::mock_room(12, "Suit")], vec![]),
            1,
        )
        .with_price_endpoint(
            "2025-08-10",
            "2025-08-15",
            json!([factory::mock_offer("offer-a", 12, 1, 1000.0)]),
            1,
        )
        .build()
        .await;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(
            Request::get(
                "/api/booking/search?checkIn=2025-08-10&checkOut=2025-08-15&adults=2&children=0&roomId=12",
            )
            .body(Body::empty())
            .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let results: SearchResultsDto = response_json(resp).await?;
    assert_eq!(results.rooms[0].nightly_price, 200);

    test.assert_mocks();

    Ok(())
}

/// Expected: 400 Bad Request when the checkout query has no offer id
#[tokio::test]
async fn routes_checkout_without_offer_id() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(
            Request::get("/api/booking/checkout?checkIn=2025-08-10&checkOut=2025-08-15")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: 400 Bad Request with a JSON error body for out of range guest counts
#[tokio::test]
async fn routes_invalid_guest_count_to_error_body() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(
            Request::get("/api/booking/search?checkIn=2025-08-10&checkOut=2025-08-15&adults=0&children=x")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = response_json(resp).await?;
    assert_eq!(body.error, "Please select between 1 and 4 adults.");

    Ok(())
}

/// Expected: 200 OK for the hotel profile and the OpenAPI document
#[tokio::test]
async fn serves_profile_and_api_docs() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await;
    let app = routes().with_state(test.into_app_state());

    for path in ["/api/hotel", "/api/docs/openapi.json"] {
        let resp = app
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "GET {}", path);
    }

    Ok(())
}
