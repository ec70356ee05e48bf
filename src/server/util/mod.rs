//! Utility functions shared by the booking services.
//!
//! Stay length and nightly price calculations used when turning price offers into room
//! cards and checkout summaries.

pub mod price;
pub mod time;
