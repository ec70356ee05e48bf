//! Server application models and type definitions.
//!
//! This module contains the shared application state handed to every handler and the
//! schema of the remote hotel API responses.

pub mod app;
pub mod hotel_api;
