//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/hotel` - Hotel profile used to render the site
/// - `GET /api/rooms` - Room types of the hotel
/// - `GET /api/rooms/{room_id}` - A single room type with its features
/// - `GET /api/gallery` - Marketing image gallery
/// - `GET /api/booking/search` - Priced offers for a stay
/// - `GET /api/booking/checkout` - Summary of a selected offer
/// - `POST /api/booking/reservation` - Guest details for a selected offer
///
/// # Returns
/// An Axum `Router<AppState>` ready to be merged into the Dioxus server router.
///
/// # Example
/// ```ignore
/// let app_state = startup::build_app_state(&config)?;
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Talya", description = "Talya Hotel API"), tags(
        (name = controller::hotel::HOTEL_TAG, description = "Hotel profile routes"),
        (name = controller::room::ROOM_TAG, description = "Room catalog routes"),
        (name = controller::gallery::GALLERY_TAG, description = "Gallery routes"),
        (name = controller::booking::BOOKING_TAG, description = "Search and checkout routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::hotel::get_hotel))
        .routes(routes!(controller::room::get_rooms))
        .routes(routes!(controller::room::get_room))
        .routes(routes!(controller::gallery::get_gallery))
        .routes(routes!(controller::booking::search))
        .routes(routes!(controller::booking::checkout))
        .routes(routes!(controller::booking::create_reservation))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
