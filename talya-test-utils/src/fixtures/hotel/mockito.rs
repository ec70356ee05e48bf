//! Hotel API mock endpoint creation utilities.
//!
//! Each endpoint checks the bearer token and the query parameters the hotel API
//! requires, and verifies it was called the expected number of times.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{
    constant::{TEST_BEARER_TOKEN, TEST_CONTENT_LANGUAGE, TEST_CURRENCY, TEST_LANGUAGE},
    fixtures::hotel::{hotel_path, HotelFixtures},
};

fn bearer() -> String {
    format!("Bearer {}", TEST_BEARER_TOKEN)
}

impl<'a> HotelFixtures<'a> {
    /// Create a mock endpoint for room and board definitions.
    ///
    /// Sets up `GET /hotel/{id}/hotel-definitions` requiring the content language and
    /// `room-details=true`.
    ///
    /// # Arguments
    /// - `definitions` - Response body, see [`factory::mock_definitions`](crate::fixtures::hotel::factory::mock_definitions)
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_definitions_endpoint(
        &mut self,
        definitions: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", hotel_path("hotel-definitions").as_str())
            .match_header("authorization", bearer().as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("language".into(), TEST_CONTENT_LANGUAGE.into()),
                Matcher::UrlEncoded("room-details".into(), "true".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(definitions.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for hotel params.
    ///
    /// Sets up `GET /hotel/{id}/params` requiring the content language and the empty
    /// `x-captcha` header.
    pub fn create_params_endpoint(&mut self, params: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", hotel_path("params").as_str())
            .match_header("authorization", bearer().as_str())
            .match_header("x-captcha", "")
            .match_query(Matcher::UrlEncoded(
                "language".into(),
                TEST_CONTENT_LANGUAGE.into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(params.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for price offers of a stay.
    ///
    /// Sets up `GET /hotel/{id}/price` requiring the given dates, the configured currency
    /// and language, and every offer rather than only the best one.
    ///
    /// # Arguments
    /// - `from_date` - Expected `fromdate`, formatted `YYYY-MM-DD`
    /// - `to_date` - Expected `todate`, formatted `YYYY-MM-DD`
    /// - `offers` - Response body, either an array of offers or an object wrapping one
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_price_endpoint(
        &mut self,
        from_date: &str,
        to_date: &str,
        offers: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", hotel_path("price").as_str())
            .match_header("authorization", bearer().as_str())
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("fromdate".into(), from_date.into()),
                Matcher::UrlEncoded("todate".into(), to_date.into()),
                Matcher::UrlEncoded("currency".into(), TEST_CURRENCY.into()),
                Matcher::UrlEncoded("language".into(), TEST_LANGUAGE.into()),
                Matcher::UrlEncoded("onlybestoffer".into(), "false".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(offers.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint that fails with the given status.
    ///
    /// # Arguments
    /// - `endpoint` - Endpoint name under the hotel path, e.g. `"price"`
    /// - `status` - HTTP status to respond with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_failing_endpoint(
        &mut self,
        endpoint: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", hotel_path(endpoint).as_str())
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"upstream failure"}"#)
            .expect(expected_requests)
            .create()
    }
}
