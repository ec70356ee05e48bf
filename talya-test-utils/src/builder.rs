//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring the mock hotel API before a
//! test runs. Endpoint methods can be chained together, with all mocks created during the
//! final `build()` call.

use mockito::Mock;
use serde_json::Value;

use crate::TestContext;

/// Builder for declarative test initialization.
///
/// Queues mock hotel API endpoints and creates them on a fresh mock server when
/// `build()` is called.
pub struct TestBuilder {
    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    definitions_endpoints: Vec<(Value, usize)>, // (definitions, expected_requests)
    params_endpoints: Vec<(Value, usize)>,
    price_endpoints: Vec<(String, String, Value, usize)>, // (from_date, to_date, offers, expected_requests)
    failing_endpoints: Vec<(String, usize, usize)>,       // (endpoint, status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            definitions_endpoints: Vec::new(),
            params_endpoints: Vec::new(),
            price_endpoints: Vec::new(),
            failing_endpoints: Vec::new(),
        }
    }

    /// Add mock room and board definitions endpoint to the test server.
    ///
    /// # Arguments
    /// - `definitions` - Response body, see [`factory::mock_definitions`](crate::fixtures::hotel::factory::mock_definitions)
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_definitions_endpoint(mut self, definitions: Value, expected_requests: usize) -> Self {
        self.definitions_endpoints
            .push((definitions, expected_requests));
        self
    }

    /// Add mock hotel params endpoint to the test server.
    ///
    /// # Arguments
    /// - `params` - Response body, see [`factory::mock_params`](crate::fixtures::hotel::factory::mock_params)
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_params_endpoint(mut self, params: Value, expected_requests: usize) -> Self {
        self.params_endpoints.push((params, expected_requests));
        self
    }

    /// Add mock price endpoint for a stay to the test server.
    ///
    /// The endpoint only matches requests for the given dates.
    ///
    /// # Arguments
    /// - `from_date` - Check-in date, formatted `YYYY-MM-DD`
    /// - `to_date` - Check-out date, formatted `YYYY-MM-DD`
    /// - `offers` - Response body, a JSON array of offers or an object wrapping one
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_price_endpoint(
        mut self,
        from_date: &str,
        to_date: &str,
        offers: Value,
        expected_requests: usize,
    ) -> Self {
        self.price_endpoints.push((
            from_date.to_string(),
            to_date.to_string(),
            offers,
            expected_requests,
        ));
        self
    }

    /// Add a hotel API endpoint that fails with the given status.
    ///
    /// # Arguments
    /// - `endpoint` - Endpoint name under the hotel path, e.g. `"hotel-definitions"`
    /// - `status` - HTTP status to respond with
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_failing_endpoint(
        mut self,
        endpoint: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.failing_endpoints
            .push((endpoint.to_string(), status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured mock endpoints.
    ///
    /// Custom endpoints are created first so tests can register several mocks for the
    /// same path and rely on mockito's matching order.
    pub async fn build(self) -> TestContext {
        let mut setup = TestContext::new().await;
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (definitions, expected) in self.definitions_endpoints {
            mocks.push(
                setup
                    .hotel()
                    .create_definitions_endpoint(definitions, expected),
            );
        }

        for (params, expected) in self.params_endpoints {
            mocks.push(setup.hotel().create_params_endpoint(params, expected));
        }

        for (from_date, to_date, offers, expected) in self.price_endpoints {
            mocks.push(
                setup
                    .hotel()
                    .create_price_endpoint(&from_date, &to_date, offers, expected),
            );
        }

        for (endpoint, status, expected) in self.failing_endpoints {
            mocks.push(
                setup
                    .hotel()
                    .create_failing_endpoint(&endpoint, status, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        setup
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
