use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::{
    api::ErrorDto,
    booking::{ReservationFormError, SearchFormError},
};

pub const MISSING_OFFER_ID_MESSAGE: &str = "Offer ID is missing.";
pub const OFFER_NOT_FOUND_MESSAGE: &str =
    "The selected offer is no longer available, please search again.";
pub const RESERVATION_UNAVAILABLE_MESSAGE: &str =
    "Online reservations are not available yet, please contact the hotel to complete your booking.";

#[derive(Error, Debug)]
pub enum BookingError {
    #[error(transparent)]
    InvalidSearch(#[from] SearchFormError),
    #[error(transparent)]
    InvalidReservation(#[from] ReservationFormError),
    #[error("Checkout requested without an offer ID")]
    MissingOfferId,
    #[error("Offer {0:?} was not returned by the hotel API for the requested stay")]
    OfferNotFound(String),
    #[error("Reservation for offer {0:?} received but reservation creation is not supported")]
    ReservationNotSupported(String),
}

impl BookingError {
    fn respond(status: StatusCode, message: impl Into<String>) -> Response {
        (
            status,
            Json(ErrorDto {
                error: message.into(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidSearch(ref err) => {
                tracing::debug!("{}", self);

                Self::respond(StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::InvalidReservation(ref err) => {
                tracing::debug!("{}", self);

                Self::respond(StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::MissingOfferId => {
                tracing::debug!("{}", self);

                Self::respond(StatusCode::BAD_REQUEST, MISSING_OFFER_ID_MESSAGE)
            }
            Self::OfferNotFound(ref offer_id) => {
                tracing::warn!(offer_id = %offer_id, "{}", self);

                Self::respond(StatusCode::NOT_FOUND, OFFER_NOT_FOUND_MESSAGE)
            }
            Self::ReservationNotSupported(_) => {
                tracing::info!("{}", self);

                Self::respond(
                    StatusCode::NOT_IMPLEMENTED,
                    RESERVATION_UNAVAILABLE_MESSAGE,
                )
            }
        }
    }
}
