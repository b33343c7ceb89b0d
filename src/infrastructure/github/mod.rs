//! Repository listing over the GitHub REST API

pub mod client;
pub mod listing_source;
