use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, gallery::GalleryImageDto},
    server::{error::Error, model::app::AppState, service::gallery::GalleryService},
};

pub static GALLERY_TAG: &str = "gallery";

/// Get the hotel's marketing image gallery
#[utoipa::path(
    get,
    path = "/api/gallery",
    tag = GALLERY_TAG,
    responses(
        (status = 200, description = "Gallery images, possibly empty", body = Vec<GalleryImageDto>),
        (status = 502, description = "Hotel API unavailable", body = ErrorDto),
    ),
)]
pub async fn get_gallery(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let gallery_service = GalleryService::new(&state.hotel_api);

    let images = gallery_service.get_gallery().await?;

    Ok((StatusCode::OK, Json(images)))
}
