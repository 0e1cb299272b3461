use crate::models::{Coordinates, GeoBoundingBox, Location};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
#[inline]
pub fn haversine_distance(a: Coordinates, b: Coordinates) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Bounding box around a center point, expressed as top-left and
/// bottom-right corners for the location search endpoint
///
/// 1° latitude ≈ 111km, 1° longitude ≈ 111km * cos(latitude)
pub fn bounding_box_around(lat: f64, lon: f64, radius_km: f64) -> GeoBoundingBox {
    let lat_delta = radius_km / 111.0;
    // Clamp near the poles where cos(lat) goes to zero
    let lon_delta = (radius_km / (111.0 * lat.to_radians().cos().abs().max(1e-6))).min(180.0);

    GeoBoundingBox {
        top_left: Some(Coordinates {
            lat: (lat + lat_delta).min(90.0),
            lon: lon - lon_delta,
        }),
        bottom_right: Some(Coordinates {
            lat: (lat - lat_delta).max(-90.0),
            lon: lon + lon_delta,
        }),
        ..Default::default()
    }
}

/// Order locations by distance from `center`; locations without coordinates go last
pub fn sort_by_distance(locations: &mut [Location], center: Coordinates) {
    locations.sort_by(|a, b| {
        let da = a.coordinates().map(|c| haversine_distance(center, c));
        let db = b.coordinates().map(|c| haversine_distance(center, c));
        match (da, db) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });
}
