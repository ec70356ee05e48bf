//! Test configuration constants for the hotel API client.
//!
//! These are placeholder values used by every test, none of them are real credentials.

/// Hotel ID the mock hotel API serves.
pub static TEST_HOTEL_ID: &str = "21966";

/// Bearer token the mock hotel API expects on every request.
///
/// Placeholder token, not a real credential.
pub static TEST_BEARER_TOKEN: &str = "test-bearer-token";

/// Currency prices are requested in.
pub static TEST_CURRENCY: &str = "EUR";

/// Language of the price endpoint.
pub static TEST_LANGUAGE: &str = "en";

/// Language of room definitions and hotel params.
pub static TEST_CONTENT_LANGUAGE: &str = "TR";
