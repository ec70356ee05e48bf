//! HTTP controller endpoints for the Talya web API.
//!
//! Axum handlers for the hotel profile, the room catalog, the gallery, and the booking
//! flow. Handlers build a service from the shared [`AppState`](crate::server::model::app::AppState),
//! let domain errors convert into HTTP responses, and document themselves with utoipa.

pub mod booking;
pub mod gallery;
pub mod hotel;
pub mod room;
