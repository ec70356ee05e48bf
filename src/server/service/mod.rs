//! Service layer for business logic.
//!
//! Services call the hotel API client, join the returned catalogs and offers by id, and
//! shape the results into the DTOs the client renders.

pub mod booking;
pub mod gallery;
pub mod room;
