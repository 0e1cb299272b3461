// Core search exports
pub mod distance;
pub mod filters;
pub mod search;

pub use distance::{haversine_distance, bounding_box_around, sort_by_distance};
pub use filters::{append_unique, distinct_zip_codes, index_locations};
pub use search::{SearchController, SearchState};
