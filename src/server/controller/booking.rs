use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{
            CheckoutDto, CheckoutQuery, ReservationRequest, SearchForm, SearchQuery,
            SearchResultsDto,
        },
    },
    server::{error::Error, model::app::AppState, service::booking::BookingService},
};

pub static BOOKING_TAG: &str = "booking";

/// Search priced offers for a stay
#[utoipa::path(
    get,
    path = "/api/booking/search",
    tag = BOOKING_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Offers joined with room and board types", body = SearchResultsDto),
        (status = 400, description = "Missing or invalid dates", body = ErrorDto),
        (status = 502, description = "Hotel API unavailable", body = ErrorDto),
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, Error> {
    let booking_service = BookingService::new(&state.hotel_api);

    let results = booking_service.search(&SearchForm::from(query)).await?;

    Ok((StatusCode::OK, Json(results)))
}

/// Get the summary of a selected offer
#[utoipa::path(
    get,
    path = "/api/booking/checkout",
    tag = BOOKING_TAG,
    params(CheckoutQuery),
    responses(
        (status = 200, description = "Summary of the selected offer", body = CheckoutDto),
        (status = 400, description = "Offer ID is missing or the dates are invalid", body = ErrorDto),
        (status = 404, description = "Offer no longer available", body = ErrorDto),
        (status = 502, description = "Hotel API unavailable", body = ErrorDto),
    ),
)]
pub async fn checkout(
    State(state): State<AppState>,
    Query(query): Query<CheckoutQuery>,
) -> Result<impl IntoResponse, Error> {
    let booking_service = BookingService::new(&state.hotel_api);

    let summary = booking_service.checkout(&query).await?;

    Ok((StatusCode::OK, Json(summary)))
}

/// Submit guest details for the selected offer
///
/// Reservations cannot be created through the hotel API yet, valid requests are logged and
/// answered with 501.
#[utoipa::path(
    post,
    path = "/api/booking/reservation",
    tag = BOOKING_TAG,
    request_body = ReservationRequest,
    responses(
        (status = 400, description = "Guest details incomplete", body = ErrorDto),
        (status = 501, description = "Reservation creation not available", body = ErrorDto),
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(request): Json<ReservationRequest>,
) -> Error {
    let booking_service = BookingService::new(&state.hotel_api);

    booking_service.submit_reservation(&request).await
}
