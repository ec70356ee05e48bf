//! Data access for the remote hotel API.
//!
//! The hotel API is the only data source of the site. Nothing is persisted locally, slow
//! changing catalog data is only kept in memory for a bounded time.

pub mod hotel_api;
