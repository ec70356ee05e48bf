//! Tests for the search, checkout, and reservation endpoints.

mod checkout;
mod reservation;
mod search;

use serde_json::{json, Value};

use super::*;

pub static CHECK_IN: &str = "2025-08-10";
pub static CHECK_OUT: &str = "2025-08-15";

/// Catalog with two room types and two board types.
pub fn definitions() -> Value {
    factory::mock_definitions(
        vec![
            factory::mock_room(11, "Standart"),
            factory::mock_room(12, "Suit"),
        ],
        vec![
            factory::mock_board(1, "Bed & Breakfast"),
            factory::mock_board(2, "All Inclusive"),
        ],
    )
}

/// Offers for a five night stay, one of them for a room type missing from the catalog.
pub fn offers() -> Value {
    let mut unknown_room = factory::mock_offer("offer-c", 99, 1, 750.0);
    unknown_room["room-type"] = json!("Family Room");
    unknown_room["is-refundable"] = json!(false);

    json!([
        factory::mock_offer("offer-a", 12, 2, 1000.0),
        factory::mock_offer("offer-b", 11, 1, 501.0),
        unknown_room,
    ])
}
