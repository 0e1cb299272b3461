use std::collections::{BTreeSet, HashMap, HashSet};
use tokio::sync::Mutex;

use crate::core::filters::{append_unique, distinct_zip_codes, index_locations};
use crate::models::{Dog, DogSearchQuery, Location, MatchStatus, SearchFilters, SortOrder};
use crate::services::{ApiClient, ApiError};

/// Everything the search page renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub breeds: Vec<String>,
    pub dogs: Vec<Dog>,
    /// Shelter lookup keyed by postal code
    pub locations: HashMap<String, Location>,
    pub favorites: BTreeSet<String>,
    pub filters: SearchFilters,
    pub next_cursor: Option<String>,
    pub total: u64,
    pub match_status: MatchStatus,
    pub error: Option<String>,
    pub loading: bool,
}

impl SearchState {
    /// Whether another page can be requested
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn location_of(&self, dog: &Dog) -> Option<&Location> {
        self.locations.get(&dog.zip_code)
    }
}

struct Inner {
    state: SearchState,
    /// Bumped by every fresh search and filter change; responses tagged with an older value are dropped
    generation: u64,
}

struct FirstPage {
    dogs: Vec<Dog>,
    locations: HashMap<String, Location>,
    next: Option<String>,
    total: u64,
}

struct NextPage {
    dogs: Vec<Dog>,
    locations: Vec<Location>,
    next: Option<String>,
}

/// Owns the search state and sequences calls to the dogs service
///
/// Every operation reports failure through `SearchState::error` instead of
/// returning it. The state lock is never held across a network call, so
/// independent operations can be awaited concurrently.
pub struct SearchController {
    api: ApiClient,
    page_size: Option<u32>,
    inner: Mutex<Inner>,
}

impl SearchController {
    pub fn new(api: ApiClient) -> Self {
        Self::with_options(api, SortOrder::default(), None)
    }

    pub fn with_options(api: ApiClient, sort: SortOrder, page_size: Option<u32>) -> Self {
        let state = SearchState {
            filters: SearchFilters {
                sort,
                ..Default::default()
            },
            ..Default::default()
        };

        Self {
            api,
            page_size,
            inner: Mutex::new(Inner { state, generation: 0 }),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Clone of the current state
    pub async fn snapshot(&self) -> SearchState {
        self.inner.lock().await.state.clone()
    }

    /// Initial load: breed list and first page of dogs, concurrently
    pub async fn mount(&self) {
        tokio::join!(self.load_breeds(), self.load_dogs());
    }

    pub async fn load_breeds(&self) {
        let result = self.api.fetch_breeds().await;
        let mut inner = self.inner.lock().await;
        match result {
            Ok(breeds) => {
                tracing::info!("Loaded {} breeds", breeds.len());
                inner.state.breeds = breeds;
            }
            Err(e) => {
                tracing::error!("Failed to load breeds: {}", e);
                inner.state.error = Some(format!("Failed to load breeds: {}", e));
            }
        }
    }

    /// Run a fresh search for the current filters, replacing the result set
    pub async fn load_dogs(&self) {
        let (generation, filters) = self.begin_search().await;
        let outcome = self.fetch_first_page(&filters).await;
        self.finish_search(generation, outcome).await;
    }

    async fn begin_search(&self) -> (u64, SearchFilters) {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        inner.state.loading = true;
        (inner.generation, inner.state.filters.clone())
    }

    async fn fetch_first_page(&self, filters: &SearchFilters) -> Result<FirstPage, ApiError> {
        let query = DogSearchQuery::from_filters(filters, self.page_size);
        let search = self.api.search_dogs(&query).await?;
        let dogs = self.api.fetch_dog_details(&search.result_ids).await?;

        let zip_codes = distinct_zip_codes(&dogs);
        let locations = if zip_codes.is_empty() {
            HashMap::new()
        } else {
            index_locations(self.api.fetch_locations(&zip_codes).await?)
        };

        Ok(FirstPage {
            dogs,
            locations,
            next: search.next,
            total: search.total,
        })
    }

    /// Apply a finished search; returns false when a newer search superseded it
    async fn finish_search(&self, generation: u64, outcome: Result<FirstPage, ApiError>) -> bool {
        let mut inner = self.inner.lock().await;
        if generation != inner.generation {
            tracing::warn!(
                "Discarding stale search response (generation {}, current {})",
                generation,
                inner.generation
            );
            return false;
        }

        let state = &mut inner.state;
        state.loading = false;
        match outcome {
            Ok(page) => {
                let mut dogs = Vec::with_capacity(page.dogs.len());
                append_unique(&mut dogs, page.dogs);
                tracing::info!("Loaded {} dogs (total: {})", dogs.len(), page.total);

                state.dogs = dogs;
                state.locations = page.locations;
                state.next_cursor = page.next;
                state.total = page.total;
            }
            Err(e) => {
                tracing::error!("Failed to load dogs: {}", e);
                state.error = Some(format!("Failed to load dogs: {}", e));
            }
        }
        true
    }

    /// Append the next page of the current search; no-op on the last page
    pub async fn load_next_page(&self) {
        let Some((generation, cursor, known_zips)) = self.begin_next_page().await else {
            return;
        };
        let outcome = self.fetch_next_page(&cursor, &known_zips).await;
        self.finish_next_page(generation, outcome).await;
    }

    async fn begin_next_page(&self) -> Option<(u64, String, HashSet<String>)> {
        let mut inner = self.inner.lock().await;
        let cursor = inner.state.next_cursor.clone()?;
        inner.state.loading = true;
        let known: HashSet<String> = inner.state.locations.keys().cloned().collect();
        Some((inner.generation, cursor, known))
    }

    /// Append a fetched page; returns false when the search it belongs to was superseded
    async fn finish_next_page(&self, generation: u64, outcome: Result<NextPage, ApiError>) -> bool {
        let mut inner = self.inner.lock().await;
        if generation != inner.generation {
            tracing::warn!("Discarding next page of a superseded search");
            return false;
        }

        let state = &mut inner.state;
        state.loading = false;
        match outcome {
            Ok(page) => {
                let appended = append_unique(&mut state.dogs, page.dogs);
                tracing::info!("Appended {} dogs (now {})", appended, state.dogs.len());

                state.locations.extend(index_locations(page.locations));
                state.next_cursor = page.next;
            }
            Err(e) => {
                tracing::error!("Failed to load more dogs: {}", e);
                state.error = Some(format!("Failed to load more dogs: {}", e));
            }
        }
        true
    }

    async fn fetch_next_page(
        &self,
        cursor: &str,
        known_zips: &HashSet<String>,
    ) -> Result<NextPage, ApiError> {
        let search = self.api.fetch_search_page(cursor).await?;
        let dogs = self.api.fetch_dog_details(&search.result_ids).await?;

        let missing: Vec<String> = distinct_zip_codes(&dogs)
            .into_iter()
            .filter(|zip| !known_zips.contains(zip))
            .collect();

        // Cards without a resolved shelter still render, so a failed lookup
        // does not fail the page
        let locations = if missing.is_empty() {
            Vec::new()
        } else {
            self.api.fetch_locations(&missing).await.unwrap_or_else(|e| {
                tracing::warn!("Location lookup for next page failed: {}", e);
                Vec::new()
            })
        };

        Ok(NextPage {
            dogs,
            locations,
            next: search.next,
        })
    }

    /// Add `id` to favorites if absent, remove it if present.
    /// Returns whether the dog is a favorite afterwards.
    pub async fn toggle_favorite(&self, id: &str) -> bool {
        let mut inner = self.inner.lock().await;
        let favorites = &mut inner.state.favorites;
        if favorites.remove(id) {
            false
        } else {
            favorites.insert(id.to_string());
            true
        }
    }

    /// Ask the service for a match among the favorites and resolve it
    pub async fn generate_match(&self) {
        let favorites: Vec<String> = {
            let mut inner = self.inner.lock().await;
            if inner.state.favorites.is_empty() {
                inner.state.error = Some("Please select at least one dog to find a match.".to_string());
                return;
            }
            inner.state.favorites.iter().cloned().collect()
        };

        let outcome = self.resolve_match(&favorites).await;

        let mut inner = self.inner.lock().await;
        match outcome {
            Ok((status, location)) => {
                if let Some(location) = location {
                    inner.state.locations.insert(location.zip_code.clone(), location);
                }
                inner.state.match_status = status;
            }
            Err(e) => {
                tracing::error!("Failed to generate match: {}", e);
                inner.state.error = Some(format!("Failed to generate match: {}", e));
            }
        }
    }

    async fn resolve_match(
        &self,
        favorites: &[String],
    ) -> Result<(MatchStatus, Option<Location>), ApiError> {
        let Some(id) = self.api.fetch_match(favorites).await? else {
            tracing::info!("No match returned for {} favorites", favorites.len());
            return Ok((MatchStatus::NoMatch, None));
        };

        let dog = self
            .api
            .fetch_dog_details(std::slice::from_ref(&id))
            .await?
            .into_iter()
            .find(|d| d.id == id)
            .ok_or_else(|| ApiError::InvalidResponse(format!("No details for matched dog {}", id)))?;

        let known = self.inner.lock().await.state.locations.contains_key(&dog.zip_code);
        let location = if known {
            None
        } else {
            match self.api.fetch_locations(std::slice::from_ref(&dog.zip_code)).await {
                Ok(found) => found.into_iter().next(),
                Err(e) => {
                    tracing::warn!("Location lookup for match failed: {}", e);
                    None
                }
            }
        };

        tracing::info!("Matched with {} ({})", dog.name, dog.id);
        Ok((MatchStatus::Matched(dog), location))
    }

    pub async fn clear_match(&self) {
        self.inner.lock().await.state.match_status = MatchStatus::Idle;
    }

    pub async fn clear_error(&self) {
        self.inner.lock().await.state.error = None;
    }

    /// Dismiss the current error and run the search again
    pub async fn retry(&self) {
        self.clear_error().await;
        self.load_dogs().await;
    }

    pub async fn set_breed(&self, breed: Option<String>) {
        let breed = normalize(breed);
        if self.update_filters(|f| f.breed = breed).await {
            self.load_dogs().await;
        }
    }

    pub async fn set_zip_code(&self, zip_code: Option<String>) {
        let zip_code = normalize(zip_code);
        if self.update_filters(|f| f.zip_code = zip_code).await {
            self.load_dogs().await;
        }
    }

    pub async fn set_sort(&self, sort: SortOrder) {
        if self.update_filters(|f| f.sort = sort).await {
            self.load_dogs().await;
        }
    }

    /// Clear breed and postal code, keep the sort, and search again
    pub async fn reset_filters(&self) {
        self.update_filters(|f| {
            f.breed = None;
            f.zip_code = None;
        })
        .await;
        self.load_dogs().await;
    }

    /// Apply `change` to the filters; when they changed, drop the stale result set
    async fn update_filters<F>(&self, change: F) -> bool
    where
        F: FnOnce(&mut SearchFilters),
    {
        let mut inner = self.inner.lock().await;
        let before = inner.state.filters.clone();
        change(&mut inner.state.filters);

        let changed = before != inner.state.filters;
        if changed {
            // Responses still in flight for the old filters must not land
            inner.generation += 1;
            let state = &mut inner.state;
            tracing::debug!("Filters changed: {:?}", state.filters);
            state.dogs.clear();
            state.locations.clear();
            state.next_cursor = None;
            state.total = 0;
        }
        changed
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
