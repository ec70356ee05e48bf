//! Client for the remote hotel reservation API.
//!
//! Every call is a single authenticated GET against a path scoped to the configured hotel.
//! Room definitions and hotel params change rarely and are cached for the configured time
//! to live, price offers depend on the search and are always fetched fresh.

pub mod cache;

use std::time::Duration;

use dioxus_logger::tracing;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::{
    model::booking::SearchCriteria,
    server::{
        config::{
            Config, DEFAULT_CONTENT_LANGUAGE, DEFAULT_CURRENCY, DEFAULT_DEFINITIONS_CACHE_SECONDS,
            DEFAULT_LANGUAGE,
        },
        error::hotel_api::{Endpoint, HotelApiError},
        model::hotel_api::{HotelDefinitions, HotelParams, PriceOffer, PriceResponse},
    },
};

use self::cache::TtlCache;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone)]
pub struct HotelApiClient {
    http: reqwest::Client,
    base_url: String,
    hotel_id: String,
    bearer_token: String,
    currency: String,
    language: String,
    content_language: String,
    definitions_cache: TtlCache<HotelDefinitions>,
    params_cache: TtlCache<HotelParams>,
}

pub struct HotelApiClientBuilder {
    base_url: String,
    hotel_id: String,
    bearer_token: String,
    currency: String,
    language: String,
    content_language: String,
    cache_ttl: Duration,
    timeout: Duration,
}

impl HotelApiClientBuilder {
    pub fn currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_string();
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn content_language(mut self, content_language: &str) -> Self {
        self.content_language = content_language.to_string();
        self
    }

    /// Time to live of cached room definitions and hotel params
    pub fn cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HotelApiClient, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(HotelApiClient {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            hotel_id: self.hotel_id,
            bearer_token: self.bearer_token,
            currency: self.currency,
            language: self.language,
            content_language: self.content_language,
            definitions_cache: TtlCache::new(self.cache_ttl),
            params_cache: TtlCache::new(self.cache_ttl),
        })
    }
}

impl HotelApiClient {
    pub fn builder(base_url: &str, hotel_id: &str, bearer_token: &str) -> HotelApiClientBuilder {
        HotelApiClientBuilder {
            base_url: base_url.to_string(),
            hotel_id: hotel_id.to_string(),
            bearer_token: bearer_token.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            content_language: DEFAULT_CONTENT_LANGUAGE.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_DEFINITIONS_CACHE_SECONDS),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::builder(
            &config.api_base_url,
            &config.hotel_id,
            &config.api_bearer_token,
        )
        .currency(&config.currency)
        .language(&config.language)
        .content_language(&config.content_language)
        .cache_ttl(config.definitions_cache_ttl)
        .build()
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!(
            "{}/hotel/{}/{}",
            self.base_url,
            self.hotel_id,
            endpoint.path()
        )
    }

    /// Room types and board types of the hotel.
    pub async fn get_hotel_definitions(&self) -> Result<HotelDefinitions, HotelApiError> {
        self.definitions_cache
            .get_or_try_fetch(move || async move {
                let request = self
                    .http
                    .get(self.endpoint_url(Endpoint::HotelDefinitions))
                    .query(&[
                        ("language", self.content_language.as_str()),
                        ("room-details", "true"),
                    ]);

                self.send(Endpoint::HotelDefinitions, request).await
            })
            .await
    }

    /// General hotel information including the marketing image gallery.
    pub async fn get_hotel_params(&self) -> Result<HotelParams, HotelApiError> {
        self.params_cache
            .get_or_try_fetch(move || async move {
                let request = self
                    .http
                    .get(self.endpoint_url(Endpoint::Params))
                    .query(&[("language", self.content_language.as_str())])
                    .header("x-captcha", "");

                self.send(Endpoint::Params, request).await
            })
            .await
    }

    /// Offers for the given stay, in the order the API returns them.
    ///
    /// Child ages are not collected by the booking form, so `childage` is sent empty.
    pub async fn get_price_offers(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<PriceOffer>, HotelApiError> {
        let from_date = criteria.check_in_param();
        let to_date = criteria.check_out_param();
        let adults = criteria.adults.to_string();

        let request = self
            .http
            .get(self.endpoint_url(Endpoint::Price))
            .query(&[
                ("fromdate", from_date.as_str()),
                ("todate", to_date.as_str()),
                ("adult", adults.as_str()),
                ("childage", ""),
                ("currency", self.currency.as_str()),
                ("nationality", ""),
                ("onlybestoffer", "false"),
                ("language", self.language.as_str()),
                ("promocode", ""),
            ]);

        let response: PriceResponse = self.send(Endpoint::Price, request).await?;

        Ok(response.into_offers())
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<T, HotelApiError> {
        let request = request
            .bearer_auth(&self.bearer_token)
            .build()
            .map_err(|source| HotelApiError::Request { endpoint, source })?;

        tracing::debug!(endpoint = %endpoint, url = %request.url(), "Calling hotel API");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| HotelApiError::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                endpoint = %endpoint,
                status = %status,
                body = %body,
                "Hotel API request failed"
            );

            return Err(HotelApiError::Status { endpoint, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| HotelApiError::Request { endpoint, source })
    }
}
