//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an AppState pointing at the mock hotel API,
//! verifying status codes, response bodies, and which upstream calls were made.

mod booking;
mod gallery;
mod hotel;
mod room;

use talya_test_utils::prelude::*;

use crate::util::{response_json, TestContextExt};
