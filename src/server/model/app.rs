use std::sync::Arc;

use crate::{model::hotel::HotelProfile, server::data::hotel_api::HotelApiClient};

#[derive(Clone)]
pub struct AppState {
    pub hotel_api: HotelApiClient,
    pub profile: Arc<HotelProfile>,
}
