use dioxus::prelude::*;

use crate::client::{
    components::SiteLayout,
    routes::{BookingSearch, Checkout, Gallery, Home, NotFound, RoomDetail, Rooms},
};

/// Site routes. Search and checkout state only lives in the query string, so the query
/// parameter names double as the public URL format.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]

    #[route("/")]
    Home {},

    #[route("/rooms")]
    Rooms {},

    #[route("/rooms/:room_id")]
    RoomDetail { room_id: i64 },

    #[route("/gallery")]
    Gallery {},

    #[route("/booking/search?:checkIn&:checkOut&:adults&:children&:roomId")]
    BookingSearch {
        checkIn: String,
        checkOut: String,
        adults: String,
        children: String,
        roomId: String,
    },

    #[route("/booking/checkout?:offerId&:checkIn&:checkOut&:adults&:children")]
    Checkout {
        offerId: String,
        checkIn: String,
        checkOut: String,
        adults: String,
        children: String,
    },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The search page without any criteria, showing the booking form.
    pub fn book_now() -> Self {
        Self::BookingSearch {
            checkIn: String::new(),
            checkOut: String::new(),
            adults: String::new(),
            children: String::new(),
            roomId: String::new(),
        }
    }
}
