//! Search, checkout, and reservation models.
//!
//! Search criteria only ever travel through the URL query string, so the types here
//! convert between loosely typed query parameters and validated criteria.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::form_urlencoded::Serializer;

use crate::model::room::RoomCardDto;

/// Date format used in query strings and in requests to the hotel API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_ADULTS: u32 = 2;
pub const DEFAULT_CHILDREN: u32 = 0;
pub const MAX_ADULTS: u32 = 4;
pub const MAX_CHILDREN: u32 = 3;

/// Reasons a search cannot be submitted.
///
/// The display strings are shown to visitors verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchFormError {
    #[error("Please select both check-in and check-out dates.")]
    MissingDates,
    #[error("Check-out date cannot be before check-in date.")]
    CheckOutBeforeCheckIn,
    #[error("Invalid date {0:?}, dates must use the YYYY-MM-DD format.")]
    InvalidDate(String),
    #[error("Please select between 1 and {} adults.", MAX_ADULTS)]
    InvalidAdults(u32),
    #[error("Please select at most {} children.", MAX_CHILDREN)]
    InvalidChildren(u32),
}

/// Query parameters accepted by the search endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Check-in date (YYYY-MM-DD)
    pub check_in: Option<String>,
    /// Check-out date (YYYY-MM-DD)
    pub check_out: Option<String>,
    pub adults: Option<String>,
    pub children: Option<String>,
    /// Room type the visitor started from, carried through untouched
    pub room_id: Option<String>,
}

/// Unvalidated search state, as held by the booking form.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchForm {
    pub check_in: String,
    pub check_out: String,
    pub adults: u32,
    pub children: u32,
    pub room_id: Option<i64>,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            check_in: String::new(),
            check_out: String::new(),
            adults: DEFAULT_ADULTS,
            children: DEFAULT_CHILDREN,
            room_id: None,
        }
    }
}

impl SearchForm {
    /// Builds a form from raw query string values, falling back to defaults for
    /// counts that are missing or not numbers.
    pub fn from_params(
        check_in: &str,
        check_out: &str,
        adults: &str,
        children: &str,
        room_id: &str,
    ) -> Self {
        Self {
            check_in: check_in.trim().to_string(),
            check_out: check_out.trim().to_string(),
            adults: adults.trim().parse().unwrap_or(DEFAULT_ADULTS),
            children: children.trim().parse().unwrap_or(DEFAULT_CHILDREN),
            room_id: room_id.trim().parse().ok(),
        }
    }

    /// Whether both dates have been filled in, regardless of their validity.
    pub fn has_dates(&self) -> bool {
        !self.check_in.is_empty() && !self.check_out.is_empty()
    }

    /// Checks that both dates are present and well formed and that check-out is not
    /// before check-in. Equal dates are accepted and priced as a single night.
    pub fn validate(&self) -> Result<SearchCriteria, SearchFormError> {
        if !self.has_dates() {
            return Err(SearchFormError::MissingDates);
        }

        let check_in = parse_date(&self.check_in)?;
        let check_out = parse_date(&self.check_out)?;

        if check_out < check_in {
            return Err(SearchFormError::CheckOutBeforeCheckIn);
        }

        if !(1..=MAX_ADULTS).contains(&self.adults) {
            return Err(SearchFormError::InvalidAdults(self.adults));
        }

        if self.children > MAX_CHILDREN {
            return Err(SearchFormError::InvalidChildren(self.children));
        }

        Ok(SearchCriteria {
            check_in,
            check_out,
            adults: self.adults,
            children: self.children,
            room_id: self.room_id,
        })
    }
}

impl From<SearchQuery> for SearchForm {
    fn from(query: SearchQuery) -> Self {
        Self::from_params(
            query.check_in.as_deref().unwrap_or_default(),
            query.check_out.as_deref().unwrap_or_default(),
            query.adults.as_deref().unwrap_or_default(),
            query.children.as_deref().unwrap_or_default(),
            query.room_id.as_deref().unwrap_or_default(),
        )
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, SearchFormError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| SearchFormError::InvalidDate(value.to_string()))
}

/// Validated search criteria.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchCriteria {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub room_id: Option<i64>,
}

impl SearchCriteria {
    pub fn check_in_param(&self) -> String {
        self.check_in.format(DATE_FORMAT).to_string()
    }

    pub fn check_out_param(&self) -> String {
        self.check_out.format(DATE_FORMAT).to_string()
    }

    /// Serializes the criteria into the query string understood by the search route
    /// and the search endpoint.
    pub fn to_query_string(&self) -> String {
        let mut query = self.query_serializer(None);

        if let Some(room_id) = self.room_id {
            query.append_pair("roomId", &room_id.to_string());
        }

        query.finish()
    }

    /// Serializes the criteria together with a selected offer into the query string
    /// understood by the checkout endpoint.
    pub fn to_checkout_query_string(&self, offer_id: &str) -> String {
        self.query_serializer(Some(offer_id)).finish()
    }

    fn query_serializer(&self, offer_id: Option<&str>) -> Serializer<'static, String> {
        let mut query = Serializer::new(String::new());

        if let Some(offer_id) = offer_id {
            query.append_pair("offerId", offer_id);
        }

        query
            .append_pair("checkIn", &self.check_in_param())
            .append_pair("checkOut", &self.check_out_param())
            .append_pair("adults", &self.adults.to_string())
            .append_pair("children", &self.children.to_string());

        query
    }
}

/// Offers found for a search, in the order the hotel API returned them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SearchResultsDto {
    pub check_in: String,
    pub check_out: String,
    pub adults: u32,
    pub children: u32,
    pub nights: u32,
    pub rooms: Vec<RoomCardDto>,
}

/// Query parameters accepted by the checkout endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuery {
    /// Offer selected on the search page
    pub offer_id: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub adults: Option<String>,
    pub children: Option<String>,
}

impl CheckoutQuery {
    /// The selected offer id, `None` when absent or blank.
    pub fn offer_id(&self) -> Option<&str> {
        self.offer_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    pub fn search_form(&self) -> SearchForm {
        SearchForm::from(SearchQuery {
            check_in: self.check_in.clone(),
            check_out: self.check_out.clone(),
            adults: self.adults.clone(),
            children: self.children.clone(),
            room_id: None,
        })
    }
}

/// Summary of the offer a visitor is about to reserve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CheckoutDto {
    pub offer_id: String,
    pub room_name: String,
    pub image_url: String,
    pub board_type: Option<String>,
    pub check_in: String,
    pub check_out: String,
    pub adults: u32,
    pub children: u32,
    pub nights: u32,
    pub nightly_price: i64,
    pub total_price: i64,
    pub is_refundable: Option<bool>,
}

/// Reasons the guest information form cannot be submitted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReservationFormError {
    #[error("{0} is required.")]
    MissingField(&'static str),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Guest details submitted from the checkout page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ReservationRequest {
    pub offer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ReservationRequest {
    pub fn validate(&self) -> Result<(), ReservationFormError> {
        let required = [
            ("Offer ID", &self.offer_id),
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Email address", &self.email),
            ("Phone number", &self.phone),
        ];

        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(ReservationFormError::MissingField(label));
            }
        }

        let email = self.email.trim();
        let valid_email = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid_email {
            return Err(ReservationFormError::InvalidEmail);
        }

        Ok(())
    }
}
