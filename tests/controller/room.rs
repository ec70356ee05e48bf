//! Tests for the room catalog endpoints.
//!
//! Verifies listing and lookup of room types from the hotel definitions, the shared
//! definitions cache, and error responses for unknown rooms and upstream failures.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use talya::{
    model::{
        api::ErrorDto,
        room::{RoomDetailDto, RoomDto, PLACEHOLDER_IMAGE},
    },
    server::{
        controller::room::{get_room, get_rooms},
        error::room::ROOM_NOT_FOUND_MESSAGE,
    },
};

use super::*;

fn definitions() -> serde_json::Value {
    let mut no_image = factory::mock_room(13, "Ekonomik");
    no_image["room-image-url"] = serde_json::json!("");

    factory::mock_definitions(
        vec![factory::mock_room(12, "Suit"), no_image],
        vec![factory::mock_board(1, "Bed & Breakfast")],
    )
}

/// Expected: Ok with 200 OK listing rooms in catalog order
#[tokio::test]
async fn lists_rooms_in_catalog_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 1)
        .build()
        .await;

    let result = get_rooms(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let rooms: Vec<RoomDto> = response_json(resp).await?;
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].id, 12);
    assert_eq!(rooms[0].name, "Suit");
    assert_eq!(rooms[0].image_url, "https://cdn.example.com/rooms/12.jpg");
    assert_eq!(rooms[0].capacity, Some(3));
    assert_eq!(rooms[1].image_url, PLACEHOLDER_IMAGE);

    test.assert_mocks();

    Ok(())
}

/// Expected: Ok with 200 OK and the comma separated room property split into features
#[tokio::test]
async fn returns_room_with_features() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 1)
        .build()
        .await;

    let result = get_room(State(test.into_app_state()), Path(12)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let detail: RoomDetailDto = response_json(resp).await?;
    assert_eq!(detail.room.name, "Suit");
    assert_eq!(
        detail.features,
        vec!["Sea view", "Minibar", "Air conditioning"]
    );

    Ok(())
}

/// Expected: Err with 404 Not Found for a room id missing from the catalog
#[tokio::test]
async fn fails_for_unknown_room() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 1)
        .build()
        .await;

    let result = get_room(State(test.into_app_state()), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: ErrorDto = response_json(resp).await?;
    assert_eq!(body.error, ROOM_NOT_FOUND_MESSAGE);

    Ok(())
}

/// Expected: the hotel API is called once for consecutive requests sharing an AppState
#[tokio::test]
async fn reuses_cached_definitions() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_definitions_endpoint(definitions(), 1)
        .build()
        .await;
    let state = test.into_app_state();

    let first = get_rooms(State(state.clone())).await;
    let second = get_room(State(state), Path(13)).await;

    assert!(first.is_ok());
    assert!(second.is_ok());
    test.assert_mocks();

    Ok(())
}

/// Expected: Err with 502 Bad Gateway when the hotel API fails
#[tokio::test]
async fn fails_when_hotel_api_errors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_failing_endpoint("hotel-definitions", 500, 1)
        .build()
        .await;

    let result = get_rooms(State(test.into_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    test.assert_mocks();

    Ok(())
}
