use std::sync::Arc;

use dioxus_logger::tracing;

use crate::{
    model::hotel::HotelProfile,
    server::{
        config::Config,
        data::hotel_api::HotelApiClient,
        error::{config::ConfigError, Error},
        model::app::AppState,
    },
};

/// Build the hotel API client from the configured base URL, hotel and token
pub fn build_hotel_api_client(config: &Config) -> Result<HotelApiClient, Error> {
    let client = HotelApiClient::from_config(config)?;

    Ok(client)
}

/// Load the hotel profile, using the built-in profile when no file is configured
pub fn load_hotel_profile(config: &Config) -> Result<HotelProfile, Error> {
    let Some(path) = config.hotel_profile_path.as_deref() else {
        return Ok(HotelProfile::default());
    };

    let invalid = |reason: String| ConfigError::InvalidHotelProfile {
        path: path.to_string(),
        reason,
    };

    let contents = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let profile: HotelProfile =
        serde_json::from_str(&contents).map_err(|e| invalid(e.to_string()))?;

    tracing::info!(path = %path, hotel = %profile.name, "Loaded hotel profile");

    Ok(profile)
}

/// Build the state shared by every API handler
pub fn build_app_state(config: &Config) -> Result<AppState, Error> {
    Ok(AppState {
        hotel_api: build_hotel_api_client(config)?,
        profile: Arc::new(load_hotel_profile(config)?),
    })
}
