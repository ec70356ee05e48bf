use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::hotel::HotelProfile,
    server::{error::Error, model::app::AppState},
};

pub static HOTEL_TAG: &str = "hotel";

/// Get the site content of the hotel
#[utoipa::path(
    get,
    path = "/api/hotel",
    tag = HOTEL_TAG,
    responses(
        (status = 200, description = "Hotel profile used to render the site", body = HotelProfile),
    ),
)]
pub async fn get_hotel(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    Ok((StatusCode::OK, Json(state.profile.as_ref().clone())))
}
