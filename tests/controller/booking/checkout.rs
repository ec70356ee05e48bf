//! Tests for the checkout endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use talya::{
    model::{
        api::ErrorDto,
        booking::{CheckoutDto, CheckoutQuery},
    },
    server::{
        controller::booking::checkout,
        error::booking::{MISSING_OFFER_ID_MESSAGE, OFFER_NOT_FOUND_MESSAGE},
    },
};

use super::*;

fn query(offer_id: Option<&str>) -> CheckoutQuery {
    CheckoutQuery {
        offer_id: offer_id.map(str::to_string),
        check_in: Some(CHECK_IN.to_string()),
        check_out: Some(CHECK_OUT.to_string()),
        adults: Some("2".to_string()),
        children: Some("1".to_string()),
    }
}

/// Expected: Ok with 200 OK summarizing the selected offer
#[tokio::test]
async fn summarizes_selected_offer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 1)
        .with_price_endpoint(CHECK_IN, CHECK_OUT, offers(), 1)
        .build()
        .await;

    let result = checkout(State(test.into_app_state()), Query(query(Some("offer-b")))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let summary: CheckoutDto = response_json(resp).await?;
    assert_eq!(summary.offer_id, "offer-b");
    assert_eq!(summary.room_name, "Standart");
    assert_eq!(summary.board_type.as_deref(), Some("Bed & Breakfast"));
    assert_eq!(summary.nights, 5);
    assert_eq!(summary.children, 1);
    assert_eq!(summary.total_price, 501);

    test.assert_mocks();

    Ok(())
}

/// Expected: Err with 400 Bad Request and no hotel API call without an offer id
#[tokio::test]
async fn fails_without_offer_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 0)
        .with_price_endpoint(CHECK_IN, CHECK_OUT, offers(), 0)
        .build()
        .await;

    let result = checkout(State(test.into_app_state()), Query(query(None))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = response_json(resp).await?;
    assert_eq!(body.error, MISSING_OFFER_ID_MESSAGE);

    test.assert_mocks();

    Ok(())
}

/// Expected: a blank offer id is treated as missing
#[tokio::test]
async fn fails_with_blank_offer_id() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await;

    let result = checkout(State(test.into_app_state()), Query(query(Some("  ")))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expected: Err with 404 Not Found when the offer is no longer returned for the stay
#[tokio::test]
async fn fails_for_unknown_offer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 1)
        .with_price_endpoint(CHECK_IN, CHECK_OUT, offers(), 1)
        .build()
        .await;

    let result = checkout(State(test.into_app_state()), Query(query(Some("sold-out")))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorDto = response_json(resp).await?;
    assert_eq!(body.error, OFFER_NOT_FOUND_MESSAGE);

    Ok(())
}
