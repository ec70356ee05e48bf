//! Tests for the search endpoint.
//!
//! Verifies the join of offers with room and board types, the night count and price
//! derivation, validation of the dates before any hotel API call, and error responses
//! for upstream failures.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use talya::{
    model::{
        api::ErrorDto,
        booking::{SearchQuery, SearchResultsDto},
        room::PLACEHOLDER_IMAGE,
    },
    server::{controller::booking::search, error::hotel_api::UPSTREAM_UNAVAILABLE_MESSAGE},
};

use super::*;

fn query(check_in: &str, check_out: &str) -> SearchQuery {
    SearchQuery {
        check_in: Some(check_in.to_string()),
        check_out: Some(check_out.to_string()),
        adults: Some("2".to_string()),
        children: Some("0".to_string()),
        room_id: None,
    }
}

/// Expected: Ok with 200 OK, one card per offer in API order with prices over 5 nights
#[tokio::test]
async fn joins_offers_with_rooms_and_boards() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 1)
        .with_price_endpoint(CHECK_IN, CHECK_OUT, offers(), 1)
        .build()
        .await;

    let result = search(State(test.into_app_state()), Query(query(CHECK_IN, CHECK_OUT))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let results: SearchResultsDto = response_json(resp).await?;
    assert_eq!(results.nights, 5);
    assert_eq!(results.check_in, CHECK_IN);
    assert_eq!(results.rooms.len(), 3);

    let suit = &results.rooms[0];
    assert_eq!(suit.offer_id, "offer-a");
    assert_eq!(suit.name, "Suit");
    assert_eq!(suit.room_id, Some(12));
    assert_eq!(suit.board_type.as_deref(), Some("All Inclusive"));
    assert_eq!(suit.nightly_price, 200);
    assert_eq!(suit.total_price, 1000);

    // 501 / 5 = 100.2
    assert_eq!(results.rooms[1].nightly_price, 100);
    assert_eq!(results.rooms[1].board_type.as_deref(), Some("Bed & Breakfast"));

    let unknown = &results.rooms[2];
    assert_eq!(unknown.name, "Family Room");
    assert_eq!(unknown.room_id, None);
    assert_eq!(unknown.image_url, PLACEHOLDER_IMAGE);
    assert_eq!(unknown.is_refundable, Some(false));

    test.assert_mocks();

    Ok(())
}

/// Expected: Ok with 200 OK when the price endpoint wraps its offers in an object
#[tokio::test]
async fn accepts_wrapped_offers() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 1)
        .with_price_endpoint(CHECK_IN, CHECK_OUT, json!({ "offers": offers() }), 1)
        .build()
        .await;

    let result = search(State(test.into_app_state()), Query(query(CHECK_IN, CHECK_OUT))).await;

    assert!(result.is_ok());
    let results: SearchResultsDto = response_json(result.unwrap().into_response()).await?;
    assert_eq!(results.rooms.len(), 3);

    Ok(())
}

/// Expected: Ok with 200 OK and no rooms when the hotel has no availability
#[tokio::test]
async fn returns_no_rooms_without_offers() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 1)
        .with_price_endpoint(CHECK_IN, CHECK_OUT, json!([]), 1)
        .build()
        .await;

    let result = search(State(test.into_app_state()), Query(query(CHECK_IN, CHECK_OUT))).await;

    assert!(result.is_ok());
    let results: SearchResultsDto = response_json(result.unwrap().into_response()).await?;
    assert!(results.rooms.is_empty());
    assert_eq!(results.nights, 5);

    Ok(())
}

/// Expected: a same-day stay is priced as a single night
#[tokio::test]
async fn prices_same_day_stay_as_one_night() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 1)
        .with_price_endpoint(
            CHECK_IN,
            CHECK_IN,
            json!([factory::mock_offer("offer-a", 12, 1, 180.0)]),
            1,
        )
        .build()
        .await;

    let result = search(State(test.into_app_state()), Query(query(CHECK_IN, CHECK_IN))).await;

    assert!(result.is_ok());
    let results: SearchResultsDto = response_json(result.unwrap().into_response()).await?;
    assert_eq!(results.nights, 1);
    assert_eq!(results.rooms[0].nightly_price, 180);

    Ok(())
}

/// Expected: Err with 400 Bad Request and no hotel API call when dates are missing
#[tokio::test]
async fn fails_without_dates() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 0)
        .with_price_endpoint(CHECK_IN, CHECK_OUT, offers(), 0)
        .build()
        .await;

    let result = search(
        State(test.into_app_state()),
        Query(SearchQuery::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = response_json(resp).await?;
    assert_eq!(body.error, "Please select both check-in and check-out dates.");

    test.assert_mocks();

    Ok(())
}

/// Expected: Err with 400 Bad Request when check-out is before check-in
#[tokio::test]
async fn fails_when_check_out_before_check_in() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await;

    let result = search(State(test.into_app_state()), Query(query(CHECK_OUT, CHECK_IN))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: Err with 400 Bad Request for a date that is not YYYY-MM-DD
#[tokio::test]
async fn fails_for_malformed_date() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await;

    let result = search(
        State(test.into_app_state()),
        Query(query("10/08/2025", CHECK_OUT)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: Err with 502 Bad Gateway when the price endpoint fails
#[tokio::test]
async fn fails_when_price_endpoint_errors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 1)
        .with_failing_endpoint("price", 500, 1)
        .build()
        .await;

    let result = search(State(test.into_app_state()), Query(query(CHECK_IN, CHECK_OUT))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: ErrorDto = response_json(resp).await?;
    assert_eq!(body.error, UPSTREAM_UNAVAILABLE_MESSAGE);

    Ok(())
}

/// Expected: Err with 502 Bad Gateway when the definitions endpoint fails
#[tokio::test]
async fn fails_when_definitions_endpoint_errors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failing_endpoint("hotel-definitions", 500, 1)
        .with_price_endpoint(CHECK_IN, CHECK_OUT, offers(), 1)
        .build()
        .await;

    let result = search(State(test.into_app_state()), Query(query(CHECK_IN, CHECK_OUT))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: ErrorDto = response_json(resp).await?;
    assert_eq!(body.error, UPSTREAM_UNAVAILABLE_MESSAGE);

    Ok(())
}

/// Expected: Err with 400 Bad Request and no hotel API call for zero adults
#[tokio::test]
async fn fails_without_adults() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 0)
        .with_price_endpoint(CHECK_IN, CHECK_OUT, offers(), 0)
        .build()
        .await;
    let mut no_adults = query(CHECK_IN, CHECK_OUT);
    no_adults.adults = Some("0".to_string());

    let result = search(State(test.into_app_state()), Query(no_adults)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = response_json(resp).await?;
    assert_eq!(body.error, "Please select between 1 and 4 adults.");

    test.assert_mocks();

    Ok(())
}

/// Expected: Ok with 200 OK, non-numeric guest counts fall back to the defaults
#[tokio::test]
async fn defaults_non_numeric_guest_counts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 1)
        .with_price_endpoint(CHECK_IN, CHECK_OUT, offers(), 1)
        .build()
        .await;
    let mut lenient = query(CHECK_IN, CHECK_OUT);
    lenient.adults = Some("abc".to_string());
    lenient.children = Some(String::new());

    let result = search(State(test.into_app_state()), Query(lenient)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let results: SearchResultsDto = response_json(resp).await?;
    assert_eq!(results.adults, 2);
    assert_eq!(results.children, 0);

    Ok(())
}
