//! Response schema of the remote hotel API.
//!
//! The API uses kebab-case keys and is inconsistent about whether identifiers and amounts
//! are sent as numbers or strings, so both are accepted here and everything downstream
//! works with plain typed values.

use serde::{Deserialize, Deserializer};

/// Response of the `hotel-definitions` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HotelDefinitions {
    #[serde(default)]
    pub roomtype: Vec<RoomDefinition>,
    #[serde(default)]
    pub boardtype: Vec<BoardType>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RoomDefinition {
    #[serde(deserialize_with = "flexible::id")]
    pub room_id: i64,
    #[serde(default)]
    pub room_name: String,
    #[serde(default)]
    pub room_image_url: Option<String>,
    #[serde(default, deserialize_with = "flexible::optional_amount")]
    pub room_area: Option<f64>,
    #[serde(default)]
    pub room_rules: Option<RoomRules>,
    #[serde(default)]
    pub room_has_balcony: Option<bool>,
    #[serde(default)]
    pub room_has_wifi: Option<bool>,
    /// Comma separated list of room features
    #[serde(default)]
    pub room_property: Option<String>,
}

impl RoomDefinition {
    pub fn max_capacity(&self) -> Option<u32> {
        self.room_rules.as_ref().and_then(|rules| rules.max_pax_capacity)
    }

    /// Splits `room-property` into trimmed, non-empty feature names.
    pub fn features(&self) -> Vec<String> {
        self.room_property
            .as_deref()
            .map(|property| {
                property
                    .split(',')
                    .map(str::trim)
                    .filter(|feature| !feature.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RoomRules {
    #[serde(default, deserialize_with = "flexible::optional_count")]
    pub max_pax_capacity: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BoardType {
    #[serde(deserialize_with = "flexible::id")]
    pub board_type_id: i64,
    #[serde(default)]
    pub board_type_name: String,
}

/// Response of the `params` endpoint, only the parts the site uses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HotelParams {
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GalleryImage {
    #[serde(deserialize_with = "flexible::id")]
    pub image_id: i64,
    pub image_url: String,
    #[serde(default)]
    pub image_caption: Option<String>,
}

/// A priced offer returned by the `price` endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PriceOffer {
    #[serde(deserialize_with = "flexible::text")]
    pub offer_id: String,
    #[serde(default, deserialize_with = "flexible::optional_id")]
    pub room_type_id: Option<i64>,
    /// Raw room type label, shown when no room definition matches
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default, deserialize_with = "flexible::optional_id")]
    pub board_type_id: Option<i64>,
    /// Total price for the whole stay
    #[serde(deserialize_with = "flexible::amount")]
    pub price: f64,
    #[serde(default, deserialize_with = "flexible::optional_amount")]
    pub discounted_price: Option<f64>,
    #[serde(default)]
    pub is_refundable: Option<bool>,
}

impl PriceOffer {
    /// The price the guest actually pays, preferring the discounted price.
    pub fn effective_price(&self) -> f64 {
        self.discounted_price.unwrap_or(self.price)
    }
}

/// The `price` endpoint answers with either a bare list of offers or an object wrapping it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceResponse {
    Offers(Vec<PriceOffer>),
    Wrapped {
        #[serde(default)]
        offers: Vec<PriceOffer>,
    },
}

impl PriceResponse {
    pub fn into_offers(self) -> Vec<PriceOffer> {
        match self {
            Self::Offers(offers) | Self::Wrapped { offers } => offers,
        }
    }
}

mod flexible {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Integer(i64),
        Float(f64),
        Text(String),
    }

    fn parse_id<E: serde::de::Error>(value: Value) -> Result<i64, E> {
        match value {
            Value::Integer(id) => Ok(id),
            Value::Float(id) if id.fract() == 0.0 => Ok(id as i64),
            Value::Float(id) => Err(E::custom(format!("expected an integer id, got {}", id))),
            Value::Text(id) => id
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected an integer id, got {:?}", id))),
        }
    }

    fn parse_amount<E: serde::de::Error>(value: Value) -> Result<f64, E> {
        match value {
            Value::Integer(amount) => Ok(amount as f64),
            Value::Float(amount) => Ok(amount),
            Value::Text(amount) => amount
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected a number, got {:?}", amount))),
        }
    }

    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        parse_id(Value::deserialize(deserializer)?)
    }

    pub fn optional_id<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Text(text)) if text.trim().is_empty() => Ok(None),
            Some(value) => parse_id(value).map(Some),
            None => Ok(None),
        }
    }

    pub fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        parse_amount(Value::deserialize(deserializer)?)
    }

    pub fn optional_amount<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Text(text)) if text.trim().is_empty() => Ok(None),
            Some(value) => parse_amount(value).map(Some),
            None => Ok(None),
        }
    }

    pub fn optional_count<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u32>, D::Error> {
        match optional_id(deserializer)? {
            Some(count) => u32::try_from(count)
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid count {}", count))),
            None => Ok(None),
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Integer(value) => Ok(value.to_string()),
            Value::Float(value) => Ok(value.to_string()),
            Value::Text(value) => Ok(value),
        }
    }
}
