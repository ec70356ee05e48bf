use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        room::{RoomDetailDto, RoomDto},
    },
    server::{error::Error, model::app::AppState, service::room::RoomService},
};

pub static ROOM_TAG: &str = "room";

/// List every room type of the hotel
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "Room types in catalog order", body = Vec<RoomDto>),
        (status = 502, description = "Hotel API unavailable", body = ErrorDto),
    ),
)]
pub async fn get_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let room_service = RoomService::new(&state.hotel_api);

    let rooms = room_service.list_rooms().await?;

    Ok((StatusCode::OK, Json(rooms)))
}

/// Get a single room type with its features
#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}",
    tag = ROOM_TAG,
    params(
        ("room_id" = i64, Path, description = "Room type ID from the hotel definitions")
    ),
    responses(
        (status = 200, description = "Room type details", body = RoomDetailDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 502, description = "Hotel API unavailable", body = ErrorDto),
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let room_service = RoomService::new(&state.hotel_api);

    let room = room_service.get_room(room_id).await?;

    Ok((StatusCode::OK, Json(room)))
}
