use serde::{Deserialize, Serialize};
use crate::models::domain::Location;

/// Response of `GET /dogs/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "resultIds", default)]
    pub result_ids: Vec<String>,
    /// Continuation path for the next page, absent on the last page
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: u64,
}

/// Response of `POST /dogs/match`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(rename = "match", default)]
    pub matched: Option<String>,
}

/// Response of `POST /locations/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationSearchResponse {
    #[serde(default)]
    pub results: Vec<Location>,
    #[serde(default)]
    pub total: u64,
}
