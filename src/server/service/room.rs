use crate::{
    model::room::{RoomDetailDto, RoomDto, PLACEHOLDER_IMAGE},
    server::{
        data::hotel_api::HotelApiClient,
        error::{room::RoomError, Error},
        model::hotel_api::RoomDefinition,
    },
};

pub struct RoomService<'a> {
    hotel_api: &'a HotelApiClient,
}

impl<'a> RoomService<'a> {
    /// Creates a new instance of [`RoomService`]
    pub fn new(hotel_api: &'a HotelApiClient) -> Self {
        Self { hotel_api }
    }

    /// All room types of the hotel in catalog order
    pub async fn list_rooms(&self) -> Result<Vec<RoomDto>, Error> {
        let definitions = self.hotel_api.get_hotel_definitions().await?;

        Ok(definitions.roomtype.iter().map(room_dto).collect())
    }

    /// A single room type with its feature list
    ///
    /// Returns [`RoomError::NotFound`] when no room type has the given id.
    pub async fn get_room(&self, room_id: i64) -> Result<RoomDetailDto, Error> {
        let definitions = self.hotel_api.get_hotel_definitions().await?;

        let room = definitions
            .roomtype
            .iter()
            .find(|room| room.room_id == room_id)
            .ok_or(RoomError::NotFound(room_id))?;

        Ok(RoomDetailDto {
            room: room_dto(room),
            features: room.features(),
        })
    }
}

/// Image of a room type, falling back to the placeholder when the catalog has none.
pub fn room_image(room: &RoomDefinition) -> String {
    room.room_image_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_string()
}

pub fn room_dto(room: &RoomDefinition) -> RoomDto {
    RoomDto {
        id: room.room_id,
        name: room.room_name.clone(),
        image_url: room_image(room),
        area: room.room_area,
        capacity: room.max_capacity(),
        has_balcony: room.room_has_balcony,
        has_wifi: room.room_has_wifi,
    }
}
