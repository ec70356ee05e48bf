//! Types shared between the client and the server.
//!
//! Everything in here is serialized over the `/api` boundary, so both sides must agree
//! on field names. Pure booking rules that the browser and the server both enforce
//! (search form validation, guest form validation) live here as well.

pub mod api;
pub mod booking;
pub mod gallery;
pub mod hotel;
pub mod room;
