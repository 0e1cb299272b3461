use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{GeoBoundingBox, SearchFilters};

/// Request body for `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

impl LoginRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
        }
    }
}

/// Query for the first page of `GET /dogs/search`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DogSearchQuery {
    pub breeds: Vec<String>,
    pub zip_codes: Vec<String>,
    pub sort: Option<String>,
    pub size: Option<u32>,
}

impl DogSearchQuery {
    /// Build a query from the active filters; unset filters are left out
    pub fn from_filters(filters: &SearchFilters, size: Option<u32>) -> Self {
        Self {
            breeds: filters.breed.iter().cloned().collect(),
            zip_codes: filters.zip_code.iter().cloned().collect(),
            sort: Some(filters.sort.to_string()),
            size,
        }
    }

    /// Key/value pairs in the order they go on the wire
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for breed in &self.breeds {
            pairs.push(("breeds", breed.clone()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        for zip in &self.zip_codes {
            pairs.push(("zipCodes", zip.clone()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        pairs
    }

    /// Percent-encoded query string including the leading `?`, or empty
    pub fn to_query_string(&self) -> String {
        let pairs = self.to_pairs();
        if pairs.is_empty() {
            return String::new();
        }
        let joined = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }
}

/// Request body for `POST /locations/search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    #[serde(rename = "geoBoundingBox", skip_serializing_if = "Option::is_none")]
    pub geo_bounding_box: Option<GeoBoundingBox>,
    #[serde(default = "default_location_page_size")]
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,
}

impl Default for LocationSearchRequest {
    fn default() -> Self {
        Self {
            city: None,
            states: None,
            geo_bounding_box: None,
            size: default_location_page_size(),
            from: None,
        }
    }
}

fn default_location_page_size() -> u32 {
    25
}

impl LocationSearchRequest {
    /// Search for shelters within `radius_km` of a point
    pub fn near(lat: f64, lon: f64, radius_km: f64) -> Self {
        Self {
            geo_bounding_box: Some(crate::core::distance::bounding_box_around(lat, lon, radius_km)),
            ..Default::default()
        }
    }

    /// Offset into the result set; an offset of zero is left off the wire
    pub fn starting_at(mut self, from: u32) -> Self {
        self.from = (from > 0).then_some(from);
        self
    }
}
