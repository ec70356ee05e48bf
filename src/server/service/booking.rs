use dioxus_logger::tracing;

use crate::{
    model::{
        booking::{
            CheckoutDto, CheckoutQuery, ReservationRequest, SearchCriteria, SearchForm,
            SearchResultsDto,
        },
        room::{RoomCardDto, PLACEHOLDER_IMAGE},
    },
    server::{
        data::hotel_api::HotelApiClient,
        error::{booking::BookingError, Error},
        model::hotel_api::{BoardType, PriceOffer, RoomDefinition},
        service::room::room_image,
        util::{
            price::{nightly_price, total_price},
            time::night_count,
        },
    },
};

/// Name shown for offers that match no room type and carry no label of their own.
pub const UNNAMED_ROOM: &str = "Room";

pub struct BookingService<'a> {
    hotel_api: &'a HotelApiClient,
}

impl<'a> BookingService<'a> {
    /// Creates a new instance of [`BookingService`]
    pub fn new(hotel_api: &'a HotelApiClient) -> Self {
        Self { hotel_api }
    }

    /// Searches offers for a stay and joins them with the room and board catalogs
    ///
    /// Room definitions and prices are fetched concurrently, if either call fails the
    /// whole search fails.
    ///
    /// # Returns
    /// - `Ok(SearchResultsDto)` - One room card per offer, in the order returned by the API
    /// - `Err(Error::BookingError)` - The search form was incomplete or invalid
    /// - `Err(Error::HotelApiError)` - Either hotel API call failed
    pub async fn search(&self, form: &SearchForm) -> Result<SearchResultsDto, Error> {
        let criteria = form.validate().map_err(BookingError::from)?;
        let (rooms, nights) = self.find_offers(&criteria).await?;

        Ok(SearchResultsDto {
            check_in: criteria.check_in_param(),
            check_out: criteria.check_out_param(),
            adults: criteria.adults,
            children: criteria.children,
            nights,
            rooms,
        })
    }

    /// Summarizes the offer selected on the search page
    ///
    /// Offers are not stored, so the search is re-run with the same criteria and the
    /// offer looked up by id. No hotel API call is made when the offer id is missing.
    pub async fn checkout(&self, query: &CheckoutQuery) -> Result<CheckoutDto, Error> {
        let offer_id = query.offer_id().ok_or(BookingError::MissingOfferId)?;
        let criteria = query
            .search_form()
            .validate()
            .map_err(BookingError::from)?;

        let (rooms, nights) = self.find_offers(&criteria).await?;
        let room = rooms
            .into_iter()
            .find(|room| room.offer_id == offer_id)
            .ok_or_else(|| BookingError::OfferNotFound(offer_id.to_string()))?;

        Ok(CheckoutDto {
            offer_id: room.offer_id,
            room_name: room.name,
            image_url: room.image_url,
            board_type: room.board_type,
            check_in: criteria.check_in_param(),
            check_out: criteria.check_out_param(),
            adults: criteria.adults,
            children: criteria.children,
            nights,
            nightly_price: room.nightly_price,
            total_price: room.total_price,
            is_refundable: room.is_refundable,
        })
    }

    /// Validates guest details for the selected offer
    ///
    /// The hotel API offers no reservation endpoint to this site, so a valid request is
    /// logged and answered with [`BookingError::ReservationNotSupported`]. The returned
    /// error is the response for every submission.
    pub async fn submit_reservation(&self, request: &ReservationRequest) -> Error {
        if let Err(err) = request.validate() {
            return BookingError::from(err).into();
        }

        tracing::info!(
            offer_id = %request.offer_id,
            "Reservation request received"
        );

        BookingError::ReservationNotSupported(request.offer_id.clone()).into()
    }

    async fn find_offers(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<(Vec<RoomCardDto>, u32), Error> {
        let (definitions, offers) = futures::try_join!(
            self.hotel_api.get_hotel_definitions(),
            self.hotel_api.get_price_offers(criteria)
        )?;

        let nights = night_count(&criteria.check_in_param(), &criteria.check_out_param());
        let rooms = join_offers(
            &offers,
            &definitions.roomtype,
            &definitions.boardtype,
            nights,
        );

        Ok((rooms, nights))
    }
}

/// Joins each offer with its room type and board type
///
/// Produces exactly one card per offer, preserving order. Lookups are by id with the
/// first match winning, a missing room type falls back to the offer's own label and the
/// placeholder image, a missing board type leaves the meal plan empty.
pub fn join_offers(
    offers: &[PriceOffer],
    rooms: &[RoomDefinition],
    boards: &[BoardType],
    nights: u32,
) -> Vec<RoomCardDto> {
    offers
        .iter()
        .map(|offer| {
            let room = offer
                .room_type_id
                .and_then(|id| rooms.iter().find(|room| room.room_id == id));
            let board = offer
                .board_type_id
                .and_then(|id| boards.iter().find(|board| board.board_type_id == id));

            let name = match room {
                Some(room) => room.room_name.clone(),
                None => offer
                    .room_type
                    .clone()
                    .filter(|label| !label.trim().is_empty())
                    .unwrap_or_else(|| UNNAMED_ROOM.to_string()),
            };
            let price = offer.effective_price();

            RoomCardDto {
                offer_id: offer.offer_id.clone(),
                room_id: room.map(|room| room.room_id),
                name,
                image_url: room
                    .map(room_image)
                    .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
                board_type: board.map(|board| board.board_type_name.clone()),
                nightly_price: nightly_price(price, nights),
                total_price: total_price(price),
                is_refundable: offer.is_refundable,
            }
        })
        .collect()
}
