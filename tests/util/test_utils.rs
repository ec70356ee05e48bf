//! Test utilities for building AppState against the mock hotel API

use std::sync::Arc;

use axum::response::Response;
use serde::de::DeserializeOwned;
use talya::{
    model::hotel::HotelProfile,
    server::{data::hotel_api::HotelApiClient, model::app::AppState},
};
use talya_test_utils::{
    constant::{TEST_CONTENT_LANGUAGE, TEST_CURRENCY, TEST_LANGUAGE},
    TestContext, TestError,
};

/// Extension trait for TestContext to create a hotel API client and AppState
pub trait TestContextExt {
    fn hotel_api(&self) -> HotelApiClient;
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn hotel_api(&self) -> HotelApiClient {
        HotelApiClient::builder(&self.api_base_url(), &self.hotel_id, &self.bearer_token)
            .currency(TEST_CURRENCY)
            .language(TEST_LANGUAGE)
            .content_language(TEST_CONTENT_LANGUAGE)
            .build()
            .expect("Failed to build hotel API client")
    }

    fn into_app_state(&self) -> AppState {
        AppState {
            hotel_api: self.hotel_api(),
            profile: Arc::new(HotelProfile::default()),
        }
    }
}

/// Reads a response body as JSON
pub async fn response_json<T: DeserializeOwned>(response: Response) -> Result<T, TestError> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .map_err(|e| TestError::BodyError(e.to_string()))?;

    Ok(serde_json::from_slice(&bytes)?)
}
