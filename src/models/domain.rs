use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Adoptable dog as returned by `POST /dogs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: String,
    pub img: String,
    pub name: String,
    pub age: u32,
    pub zip_code: String,
    pub breed: String,
}

/// Shelter location, keyed by postal code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub zip_code: String,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Location {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Geographic bounding box accepted by `POST /locations/search`
///
/// The service accepts either `top`/`left`/`bottom`/`right` or a pair of
/// opposite corners. Unset corners are left off the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoBoundingBox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_left: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_right: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_right: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_left: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Breed,
    Name,
    Age,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort order for dog search, `field:direction` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::new(SortField::Breed, SortDirection::Asc)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self.field {
            SortField::Breed => "breed",
            SortField::Name => "name",
            SortField::Age => "age",
        };
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}:{}", field, direction)
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| format!("Sort order must look like field:direction, got '{}'", s))?;

        let field = match field.to_lowercase().as_str() {
            "breed" => SortField::Breed,
            "name" => SortField::Name,
            "age" => SortField::Age,
            other => return Err(format!("Unknown sort field '{}' (breed, name, age)", other)),
        };
        let direction = match direction.to_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            other => return Err(format!("Unknown sort direction '{}' (asc, desc)", other)),
        };

        Ok(Self::new(field, direction))
    }
}

/// Filters applied to a fresh dog search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub breed: Option<String>,
    pub zip_code: Option<String>,
    pub sort: SortOrder,
}

/// Outcome of the most recent match request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MatchStatus {
    #[default]
    Idle,
    Matched(Dog),
    /// The service answered but chose no dog
    NoMatch,
}

impl MatchStatus {
    pub fn matched_dog(&self) -> Option<&Dog> {
        match self {
            MatchStatus::Matched(dog) => Some(dog),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_parse_and_display() {
        let order: SortOrder = "name:desc".parse().unwrap();
        assert_eq!(order, SortOrder::new(SortField::Name, SortDirection::Desc));
        assert_eq!(order.to_string(), "name:desc");
        assert_eq!(SortOrder::default().to_string(), "breed:asc");
    }

    #[test]
    fn test_sort_order_rejects_garbage() {
        assert!("breed".parse::<SortOrder>().is_err());
        assert!("color:asc".parse::<SortOrder>().is_err());
        assert!("age:sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_location_tolerates_missing_fields() {
        let json = r#"{"zip_code":"10001","city":"New York","state":"NY","latitude":40.75,"longitude":-73.99,"county":"New York"}"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.zip_code, "10001");
        assert_eq!(location.name, "");
        assert_eq!(location.coordinates(), Some(Coordinates { lat: 40.75, lon: -73.99 }));
    }

    #[test]
    fn test_bounding_box_omits_unset_corners() {
        let bbox = GeoBoundingBox {
            top_left: Some(Coordinates { lat: 41.0, lon: -75.0 }),
            bottom_right: Some(Coordinates { lat: 40.0, lon: -73.0 }),
            ..Default::default()
        };
        let value = serde_json::to_value(&bbox).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 2);
        assert!(value.get("top").is_none());
    }
}
