// Unit tests for Fetch Dogs

use fetch_dogs::core::{
    distance::{bounding_box_around, haversine_distance},
    filters::{append_unique, distinct_zip_codes, index_locations},
    SearchState,
};
use fetch_dogs::models::{Coordinates, Dog, DogSearchQuery, Location, SearchFilters, SortOrder};
use fetch_dogs::routes::render;

fn create_dog(id: &str, zip: &str) -> Dog {
    Dog {
        id: id.to_string(),
        img: format!("https://img.test/{}.jpg", id),
        name: format!("Dog {}", id),
        age: 5,
        zip_code: zip.to_string(),
        breed: "Labrador".to_string(),
    }
}

fn create_location(zip: &str, city: &str, state: &str) -> Location {
    Location {
        id: format!("loc-{}", zip),
        name: format!("{} Shelter", city),
        address: "1 Main St".to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip.to_string(),
        county: None,
        latitude: None,
        longitude: None,
    }
}

#[test]
fn test_query_for_breed_and_sort_only() {
    let filters = SearchFilters {
        breed: Some("Poodle".to_string()),
        zip_code: None,
        sort: "breed:asc".parse().unwrap(),
    };
    let pairs = DogSearchQuery::from_filters(&filters, None).to_pairs();

    assert_eq!(
        pairs,
        vec![("breeds", "Poodle".to_string()), ("sort", "breed:asc".to_string())]
    );
}

#[test]
fn test_default_filters_have_deterministic_query() {
    let query = DogSearchQuery::from_filters(&SearchFilters::default(), None);
    assert_eq!(query.to_query_string(), "?sort=breed%3Aasc");
}

#[test]
fn test_repeated_overlapping_pages_never_duplicate() {
    let pages = vec![
        vec![create_dog("1", "a"), create_dog("2", "a"), create_dog("3", "b")],
        vec![create_dog("3", "b"), create_dog("4", "b")],
        vec![create_dog("4", "b"), create_dog("5", "c"), create_dog("1", "a")],
    ];

    let mut dogs = Vec::new();
    for page in pages.iter().chain(pages.iter()) {
        append_unique(&mut dogs, page.clone());
    }

    let ids: Vec<_> = dogs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_location_table_keyed_by_zip() {
    let dogs = vec![create_dog("1", "10001"), create_dog("2", "10001"), create_dog("3", "60601")];
    assert_eq!(distinct_zip_codes(&dogs).len(), 2);

    let table = index_locations(vec![
        create_location("10001", "New York", "NY"),
        create_location("60601", "Chicago", "IL"),
    ]);
    let state = SearchState {
        dogs,
        locations: table,
        ..Default::default()
    };

    assert_eq!(state.location_of(&state.dogs[0]).unwrap().city, "New York");
    assert_eq!(state.location_of(&state.dogs[1]).unwrap().city, "New York");
    assert_eq!(state.location_of(&state.dogs[2]).unwrap().state, "IL");
    assert!(state.location_of(&create_dog("4", "99999")).is_none());
}

#[test]
fn test_search_page_rendering() {
    let mut state = SearchState {
        dogs: vec![create_dog("1", "10001"), create_dog("2", "99999")],
        locations: index_locations(vec![create_location("10001", "New York", "NY")]),
        total: 2,
        ..Default::default()
    };
    state.favorites.insert("1".to_string());
    state.filters.sort = "age:desc".parse::<SortOrder>().unwrap();

    let page = render::search_page(&state);

    assert!(page.contains("★ Dog 1 [1]"));
    assert!(page.contains("☆ Dog 2 [2]"));
    assert!(page.contains("Location: New York, NY"));
    assert!(page.contains("Location: Unknown"));
    assert!(page.contains("Sort: age:desc"));
    assert!(!page.contains("load more"));
}

#[test]
fn test_loading_placeholder_only_when_empty() {
    let mut state = SearchState {
        loading: true,
        ..Default::default()
    };
    assert_eq!(render::search_page(&state), "Loading dogs...");

    state.dogs.push(create_dog("1", "10001"));
    assert_ne!(render::search_page(&state), "Loading dogs...");
}

#[test]
fn test_bounding_box_contains_nearby_point() {
    let center = Coordinates { lat: 40.7128, lon: -74.0060 };
    let bbox = bounding_box_around(center.lat, center.lon, 10.0);
    let top_left = bbox.top_left.unwrap();
    let bottom_right = bbox.bottom_right.unwrap();

    let nearby = Coordinates { lat: 40.71, lon: -74.0 };
    assert!(haversine_distance(center, nearby) < 10.0);
    assert!(nearby.lat < top_left.lat && nearby.lat > bottom_right.lat);
    assert!(nearby.lon > top_left.lon && nearby.lon < bottom_right.lon);
}
