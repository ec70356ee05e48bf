//! Requests to the site's own `/api` endpoints.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;

#[cfg(feature = "web")]
use crate::model::{api::ErrorDto, booking::ReservationRequest};

/// Failure of an API request, carrying the HTTP status when a response was received.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "Request failed with status {}: {}", status, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// State of data fetched for a page.
#[derive(Clone, Debug, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

/// Fetches `path` whenever it changes and tracks the response as a [`Loadable`].
///
/// Outside the browser nothing is fetched and the data stays loading.
pub fn use_api<T>(path: String) -> Loadable<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    #[cfg(feature = "web")]
    {
        let resource = use_resource(use_reactive((&path,), |(path,)| async move {
            get_json::<T>(&path).await
        }));

        let state = match &*resource.read_unchecked() {
            Some(Ok(value)) => Loadable::Ready(value.clone()),
            Some(Err(err)) => Loadable::Failed(err.clone()),
            None => Loadable::Loading,
        };
        state
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = path;
        Loadable::Loading
    }
}

#[cfg(feature = "web")]
async fn error_from_response(response: reqwasm::http::Response) -> ApiError {
    let status = response.status();

    let message = match response.json::<ErrorDto>().await {
        Ok(error_dto) => error_dto.error,
        Err(_) => "Unknown error".to_string(),
    };

    ApiError {
        status: Some(status),
        message,
    }
}

/// Retrieve JSON from an API endpoint
#[cfg(feature = "web")]
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    use reqwasm::http::Request;

    let response = Request::get(path).send().await.map_err(|e| ApiError {
        status: None,
        message: format!("Failed to send request: {}", e),
    })?;

    match response.status() {
        200 => response.json::<T>().await.map_err(|e| ApiError {
            status: Some(200),
            message: format!("Failed to parse response from {}: {}", path, e),
        }),
        _ => Err(error_from_response(response).await),
    }
}

/// Submit guest details for the selected offer
///
/// Reservations cannot be created yet, so every submission ends in an [`ApiError`]
/// whose message is shown to the guest.
#[cfg(feature = "web")]
pub async fn post_reservation(request: &ReservationRequest) -> ApiError {
    use reqwasm::http::Request;

    let body = match serde_json::to_string(request) {
        Ok(body) => body,
        Err(e) => {
            return ApiError {
                status: None,
                message: format!("Failed to serialize reservation: {}", e),
            }
        }
    };

    match Request::post("/api/booking/reservation")
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
    {
        Ok(response) => error_from_response(response).await,
        Err(e) => ApiError {
            status: None,
            message: format!("Failed to send request: {}", e),
        },
    }
}
