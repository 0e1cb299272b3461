// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Dog, Location, Coordinates, GeoBoundingBox, SortField, SortDirection, SortOrder, SearchFilters, MatchStatus};
pub use requests::{LoginRequest, DogSearchQuery, LocationSearchRequest};
pub use responses::{SearchResponse, MatchResponse, LocationSearchResponse};
