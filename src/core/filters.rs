use std::collections::{HashMap, HashSet};
use crate::models::{Dog, Location};

/// Append `incoming` to `existing`, skipping dogs whose id is already present
///
/// Pages can overlap at their boundaries, so appending the same page twice
/// must leave the list unchanged. Returns the number of dogs appended.
pub fn append_unique(existing: &mut Vec<Dog>, incoming: Vec<Dog>) -> usize {
    let mut seen: HashSet<String> = existing.iter().map(|d| d.id.clone()).collect();
    let before = existing.len();

    for dog in incoming {
        if seen.insert(dog.id.clone()) {
            existing.push(dog);
        }
    }

    existing.len() - before
}

/// Distinct postal codes of `dogs`, in first-seen order
pub fn distinct_zip_codes<'a, I>(dogs: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Dog>,
{
    let mut seen = HashSet::new();
    dogs.into_iter()
        .filter(|d| seen.insert(d.zip_code.as_str()))
        .map(|d| d.zip_code.clone())
        .collect()
}

/// Build the postal-code lookup table from a location batch
pub fn index_locations(locations: Vec<Location>) -> HashMap<String, Location> {
    locations
        .into_iter()
        .map(|l| (l.zip_code.clone(), l))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog(id: &str, zip: &str) -> Dog {
        Dog {
            id: id.to_string(),
            img: format!("https://img.test/{}.jpg", id),
            name: format!("Dog {}", id),
            age: 3,
            zip_code: zip.to_string(),
            breed: "Beagle".to_string(),
        }
    }

    #[test]
    fn test_append_skips_overlap() {
        let mut dogs = vec![dog("a", "1"), dog("b", "1")];
        let appended = append_unique(&mut dogs, vec![dog("b", "1"), dog("c", "2")]);

        assert_eq!(appended, 1);
        let ids: Vec<_> = dogs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_append_same_page_twice_is_noop() {
        let page = vec![dog("a", "1"), dog("b", "2")];
        let mut dogs = Vec::new();
        append_unique(&mut dogs, page.clone());
        let appended = append_unique(&mut dogs, page);

        assert_eq!(appended, 0);
        assert_eq!(dogs.len(), 2);
    }

    #[test]
    fn test_append_dedupes_within_incoming_page() {
        let mut dogs = Vec::new();
        append_unique(&mut dogs, vec![dog("a", "1"), dog("a", "1")]);
        assert_eq!(dogs.len(), 1);
    }

    #[test]
    fn test_distinct_zip_codes() {
        let dogs = vec![dog("a", "10001"), dog("b", "02134"), dog("c", "10001")];
        assert_eq!(distinct_zip_codes(&dogs), vec!["10001", "02134"]);
        assert!(distinct_zip_codes(&Vec::<Dog>::new()).is_empty());
    }
}
