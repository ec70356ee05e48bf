//! Server application core modules.
//!
//! This module contains all server-side functionality of the Talya site: configuration,
//! the hotel API client with its in-memory catalog cache, the booking services that join
//! offers with room and board types, and the HTTP API consumed by the Dioxus client.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
