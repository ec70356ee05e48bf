use serde::{Deserialize, Serialize};

/// Image shown when a room type has no image or an offer matches no room type.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

/// Fallback blurb for room types without a curated description.
pub const DEFAULT_ROOM_DESCRIPTION: &str = "A stylish, modern room designed for your comfort.";

/// Curated description for a room type, used by cards that are not showing an offer.
pub fn room_description(room_name: &str) -> &'static str {
    match room_name {
        "Suit" => "A spacious living area finished with luxurious details for an unforgettable stay.",
        "Ekonomik" => "Everything you need for a comfortable, practical stay.",
        "B Suites" => "A stylish escape that pairs modern design with superior comfort.",
        "Standart" => DEFAULT_ROOM_DESCRIPTION,
        _ => DEFAULT_ROOM_DESCRIPTION,
    }
}

/// A room type from the hotel catalog, independent of pricing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RoomDto {
    pub id: i64,
    pub name: String,
    pub image_url: String,
    /// Floor area in square meters
    pub area: Option<f64>,
    /// Maximum number of guests
    pub capacity: Option<u32>,
    pub has_balcony: Option<bool>,
    pub has_wifi: Option<bool>,
}

/// A room type with the feature list shown on its detail page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RoomDetailDto {
    pub room: RoomDto,
    pub features: Vec<String>,
}

/// A priced offer joined with its room type and board type, ready to render as a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RoomCardDto {
    pub offer_id: String,
    /// Room type the offer matched, `None` when no catalog entry had its id
    pub room_id: Option<i64>,
    pub name: String,
    pub image_url: String,
    /// Meal plan label, e.g. "Bed & Breakfast"
    pub board_type: Option<String>,
    /// Rounded per-night price derived from the (discounted) total
    pub nightly_price: i64,
    /// Rounded total price for the whole stay
    pub total_price: i64,
    pub is_refundable: Option<bool>,
}
