use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message shown to visitors whenever the hotel API cannot be reached or answers with an
/// error status.
pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str =
    "We couldn't load hotel information right now, please try again later.";

/// Hotel API endpoints, used to say which call failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    HotelDefinitions,
    Params,
    Price,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::HotelDefinitions => "hotel-definitions",
            Self::Params => "params",
            Self::Price => "price",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Error, Debug)]
pub enum HotelApiError {
    #[error("Hotel API {endpoint} endpoint responded with status {status}")]
    Status {
        endpoint: Endpoint,
        status: reqwest::StatusCode,
    },
    #[error("Hotel API {endpoint} request failed: {source}")]
    Request {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },
}

impl IntoResponse for HotelApiError {
    fn into_response(self) -> Response {
        // Status failures are logged with their body where the response is read
        if let Self::Request { endpoint, .. } = &self {
            tracing::error!(endpoint = %endpoint, "{}", self);
        }

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: UPSTREAM_UNAVAILABLE_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}
