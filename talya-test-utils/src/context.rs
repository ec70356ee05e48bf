//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns the
//! mock hotel API server and every mock endpoint registered on it, so the mocks stay alive
//! for as long as the test holds the context.

use mockito::{Mock, Server, ServerGuard};

use crate::constant::{TEST_BEARER_TOKEN, TEST_HOTEL_ID};

/// Test context structure returned by `TestBuilder`
///
/// Provides the details needed to point a hotel API client at the mock server and the
/// collection of mock endpoints for assertion.
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_definitions_endpoint(factory::mock_definitions(vec![], vec![]), 1)
///     .build()
///     .await?;
///
/// // Base URL to configure the hotel API client with
/// let url = test.api_base_url();
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Hotel ID the mock endpoints are registered under
    pub hotel_id: String,
    /// Bearer token the mock endpoints require
    pub bearer_token: String,

    /// Mock HTTP server for hotel API endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context with a fresh mock server and no endpoints.
    pub(crate) async fn new() -> Self {
        let server = Server::new_async().await;

        TestContext {
            hotel_id: TEST_HOTEL_ID.to_string(),
            bearer_token: TEST_BEARER_TOKEN.to_string(),
            server,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock hotel API, without a trailing slash.
    pub fn api_base_url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
