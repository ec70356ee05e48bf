//! Tests for the hotel API client.

mod hotel_api;

use talya_test_utils::prelude::*;

use crate::util::TestContextExt;
