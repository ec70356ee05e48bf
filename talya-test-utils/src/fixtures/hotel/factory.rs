//! Hotel API response bodies with default test values.
//!
//! Bodies are built as JSON in the hotel API's own kebab-case shape so tests exercise the
//! same decoding path as production responses.

use serde_json::{json, Value};

/// Create a mock room definition.
///
/// # Arguments
/// - `room_id` - Room type ID offers refer to
/// - `room_name` - Display name of the room type
///
/// # Returns
/// - `Value` - A `roomtype` entry with an image, area, capacity and features
pub fn mock_room(room_id: i64, room_name: &str) -> Value {
    json!({
        "room-id": room_id,
        "room-name": room_name,
        "room-image-url": format!("https://cdn.example.com/rooms/{}.jpg", room_id),
        "room-area": 32,
        "room-rules": { "max-pax-capacity": 3 },
        "room-has-balcony": true,
        "room-has-wifi": true,
        "room-property": "Sea view, Minibar, Air conditioning"
    })
}

/// Create a mock board type.
pub fn mock_board(board_type_id: i64, board_type_name: &str) -> Value {
    json!({
        "board-type-id": board_type_id,
        "board-type-name": board_type_name
    })
}

/// Create a `hotel-definitions` response body.
pub fn mock_definitions(rooms: Vec<Value>, boards: Vec<Value>) -> Value {
    json!({
        "roomtype": rooms,
        "boardtype": boards
    })
}

/// Create a mock gallery image, `caption` is omitted from the body when `None`.
pub fn mock_gallery_image(image_id: i64, image_url: &str, caption: Option<&str>) -> Value {
    let mut image = json!({
        "image-id": image_id,
        "image-url": image_url
    });

    if let Some(caption) = caption {
        image["image-caption"] = json!(caption);
    }

    image
}

/// Create a `params` response body.
pub fn mock_params(images: Vec<Value>) -> Value {
    json!({
        "hotel-name": "Talya Hotel",
        "images": images
    })
}

/// Create a mock price offer.
///
/// # Arguments
/// - `offer_id` - Offer ID used to select the offer at checkout
/// - `room_type_id` - Room type the offer is for
/// - `board_type_id` - Meal plan of the offer
/// - `price` - Total price for the whole stay
///
/// # Returns
/// - `Value` - A refundable offer without a discount
pub fn mock_offer(offer_id: &str, room_type_id: i64, board_type_id: i64, price: f64) -> Value {
    json!({
        "offer-id": offer_id,
        "room-type-id": room_type_id,
        "room-type": "",
        "board-type-id": board_type_id,
        "price": price,
        "discounted-price": null,
        "is-refundable": true
    })
}
