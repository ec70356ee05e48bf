use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

pub const ROOM_NOT_FOUND_MESSAGE: &str = "Room not found";

#[derive(Error, Debug)]
pub enum RoomError {
    #[error("Room type {0} not found in hotel definitions")]
    NotFound(i64),
}

impl IntoResponse for RoomError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(room_id) => {
                tracing::warn!(room_id = %room_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: ROOM_NOT_FOUND_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
