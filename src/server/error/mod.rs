//! Error types for the Talya server application.
//!
//! Each domain (configuration, hotel API access, booking, rooms) has its own error enum
//! defined with `thiserror`. They are aggregated into [`Error`], which handlers return and
//! which maps every variant onto an HTTP response with an [`ErrorDto`] body.

pub mod booking;
pub mod config;
pub mod hotel_api;
pub mod room;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        booking::BookingError, config::ConfigError, hotel_api::HotelApiError, room::RoomError,
    },
};

/// Main error type for the Talya server application.
///
/// Domain errors convert into this type through `?`, and the `IntoResponse`
/// implementation delegates to the domain error so each one decides its own status code.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables, unreadable hotel profile)
/// - Hotel API errors (non-success status, transport or decoding failures)
/// - Booking errors (invalid search, missing or unknown offer, reservation submission)
/// - Room errors (room type not found)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Remote hotel API failure.
    #[error(transparent)]
    HotelApiError(#[from] HotelApiError),
    /// Search, checkout, or reservation error.
    #[error(transparent)]
    BookingError(#[from] BookingError),
    /// Room lookup error.
    #[error(transparent)]
    RoomError(#[from] RoomError),
    /// HTTP client construction error.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid search criteria, missing offer ID, or incomplete guest form
/// - 404 Not Found - Unknown room type or offer
/// - 501 Not Implemented - Reservation submission
/// - 502 Bad Gateway - Hotel API failures, with a generic "couldn't load" message
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::HotelApiError(err) => err.into_response(),
            Self::BookingError(err) => err.into_response(),
            Self::RoomError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
