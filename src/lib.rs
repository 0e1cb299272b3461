//! Fetch Dogs - search client for the Fetch dog adoption service
//!
//! This library provides the typed REST client, the search controller that
//! sequences breed, search, detail, location and match calls, and the route
//! guard used by the terminal front end.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{SearchController, SearchState};
pub use models::{Dog, Location, SearchFilters, SortOrder, MatchStatus};
pub use services::{ApiClient, ApiError};
