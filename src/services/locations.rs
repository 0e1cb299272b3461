use crate::models::{Location, LocationSearchRequest, LocationSearchResponse};
use crate::services::client::{ApiClient, ApiError};

impl ApiClient {
    /// Fetch location details for a batch of postal codes
    ///
    /// The service answers `null` for postal codes it does not know; those
    /// entries are dropped.
    pub async fn fetch_locations(&self, zip_codes: &[String]) -> Result<Vec<Location>, ApiError> {
        if zip_codes.is_empty() {
            return Err(ApiError::Validation("No zip codes provided.".to_string()));
        }

        let raw: Vec<Option<Location>> = self.post_json("/locations", zip_codes).await?;
        let requested = raw.len();
        let locations: Vec<Location> = raw.into_iter().flatten().collect();

        tracing::debug!(
            "Fetched {} locations ({} unknown zip codes dropped)",
            locations.len(),
            requested - locations.len()
        );

        Ok(locations)
    }

    /// Search locations by city, states or bounding box
    pub async fn search_locations(
        &self,
        request: &LocationSearchRequest,
    ) -> Result<LocationSearchResponse, ApiError> {
        self.post_json("/locations/search", request).await
    }
}
