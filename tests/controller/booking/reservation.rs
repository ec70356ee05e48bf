//! Tests for the reservation endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use talya::{
    model::{api::ErrorDto, booking::ReservationRequest},
    server::{
        controller::booking::create_reservation, error::booking::RESERVATION_UNAVAILABLE_MESSAGE,
    },
};

use super::*;

fn request() -> ReservationRequest {
    ReservationRequest {
        offer_id: "offer-a".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Yilmaz".to_string(),
        email: "ada@example.com".to_string(),
        phone: "+90 555 000 0000".to_string(),
    }
}

/// Expected: 501 Not Implemented for complete guest details
#[tokio::test]
async fn reports_reservations_unavailable() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await;

    let result = create_reservation(State(test.into_app_state()), Json(request())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);

    let body: ErrorDto = response_json(resp).await?;
    assert_eq!(body.error, RESERVATION_UNAVAILABLE_MESSAGE);

    Ok(())
}

/// Expected: 400 Bad Request naming the first missing field
#[tokio::test]
async fn fails_for_missing_field() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await;
    let mut incomplete = request();
    incomplete.last_name = " ".to_string();

    let result = create_reservation(State(test.into_app_state()), Json(incomplete)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorDto = response_json(resp).await?;
    assert_eq!(body.error, "Last name is required.");

    Ok(())
}

/// Expected: 400 Bad Request for a malformed email address
#[tokio::test]
async fn fails_for_invalid_email() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await;
    let mut invalid = request();
    invalid.email = "not-an-email".to_string();

    let result = create_reservation(State(test.into_app_state()), Json(invalid)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
