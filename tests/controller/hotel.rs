//! Tests for the get_hotel endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use talya::{model::hotel::HotelProfile, server::controller::hotel::get_hotel};

use super::*;

/// Expected: Ok with 200 OK and the profile held in AppState, without calling the hotel API
#[tokio::test]
async fn returns_configured_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await;

    let result = get_hotel(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let profile: HotelProfile = response_json(resp).await?;
    assert_eq!(profile, HotelProfile::default());
    assert_eq!(profile.nav_links.len(), 5);

    Ok(())
}
