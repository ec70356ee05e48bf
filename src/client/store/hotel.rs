use dioxus::prelude::*;

use crate::model::hotel::HotelProfile;

/// Hotel profile shared by every page, fetched once when the app starts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HotelState {
    pub profile: Option<HotelProfile>,
}

/// The hotel profile once it has been fetched.
pub fn use_hotel_profile() -> Option<HotelProfile> {
    let hotel_store = use_context::<Signal<HotelState>>();
    let profile = hotel_store.read().profile.clone();
    profile
}
