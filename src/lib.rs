//! Talya Hotel website.
//!
//! The library half of the crate holds the data transfer objects shared by the Dioxus
//! client and the axum server, plus the server itself behind the `server` feature.

pub mod model;

#[cfg(feature = "server")]
pub mod server;
