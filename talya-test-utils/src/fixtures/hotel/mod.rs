use crate::{constant::TEST_HOTEL_ID, TestContext};

pub mod factory;
pub mod mockito;

/// Path of a hotel API endpoint for the test hotel, e.g. `hotel_path("price")`.
pub fn hotel_path(endpoint: &str) -> String {
    format!("/hotel/{}/{}", TEST_HOTEL_ID, endpoint)
}

impl TestContext {
    pub fn hotel<'a>(&'a mut self) -> HotelFixtures<'a> {
        HotelFixtures { setup: self }
    }
}

pub struct HotelFixtures<'a> {
    pub setup: &'a mut TestContext,
}
