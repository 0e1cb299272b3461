//! Plain-text rendering of the search page.
//!
//! Everything here is a pure function of `SearchState`; the terminal front end
//! prints whatever these return.

use std::fmt::Write;

use crate::core::SearchState;
use crate::models::{Dog, Location, MatchStatus};

pub fn dog_card(dog: &Dog, location: Option<&Location>, is_favorite: bool) -> String {
    let marker = if is_favorite { "★" } else { "☆" };
    let place = location
        .map(|l| format!("{}, {}", l.city, l.state))
        .unwrap_or_else(|| "Unknown".to_string());

    format!(
        "{} {} [{}]\n    Breed: {}\n    Age: {}\n    Zip Code: {}\n    Location: {}",
        marker, dog.name, dog.id, dog.breed, dog.age, dog.zip_code, place
    )
}

pub fn filter_summary(state: &SearchState) -> String {
    let filters = &state.filters;
    format!(
        "Breed: {} | Zip Code: {} | Sort: {}",
        filters.breed.as_deref().unwrap_or("All Breeds"),
        filters.zip_code.as_deref().unwrap_or("Any"),
        filters.sort
    )
}

pub fn error_banner(state: &SearchState) -> Option<String> {
    state
        .error
        .as_ref()
        .map(|e| format!("! {}\n  (type `retry` to try again)", e))
}

pub fn match_panel(state: &SearchState) -> Option<String> {
    match &state.match_status {
        MatchStatus::Idle => None,
        MatchStatus::NoMatch => Some("No match this time. Try favoriting a few more dogs.".to_string()),
        MatchStatus::Matched(dog) => Some(format!(
            "You matched with:\n{}",
            dog_card(dog, state.location_of(dog), false)
        )),
    }
}

/// Full search page
pub fn search_page(state: &SearchState) -> String {
    if state.loading && state.dogs.is_empty() {
        return "Loading dogs...".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Browse Shelter Friends!");
    let _ = writeln!(out, "{}", filter_summary(state));

    if let Some(banner) = error_banner(state) {
        let _ = writeln!(out, "{}", banner);
    }
    if let Some(panel) = match_panel(state) {
        let _ = writeln!(out, "{}", panel);
    }

    if state.dogs.is_empty() {
        let _ = writeln!(
            out,
            "No dogs found for the selected filters. Please try different criteria (`reset`)."
        );
    }
    for dog in &state.dogs {
        let _ = writeln!(out, "{}", dog_card(dog, state.location_of(dog), state.is_favorite(&dog.id)));
    }

    let _ = write!(
        out,
        "Showing {} of {} | Favorites: {}",
        state.dogs.len(),
        state.total,
        state.favorites.len()
    );
    if state.has_more() {
        let _ = write!(out, " | `more` to load more");
    }
    out
}
