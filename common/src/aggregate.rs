use crate::api::{GetUsersResponse, RatingEntry};
use crate::location;
use crate::zone::{Zone, ZoneClass};
use std::collections::HashMap;

/// Latest rating per location name, as received from the backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateInputs {
    ratings: HashMap<String, Option<f64>>,
}

impl AggregateInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the mapping from raw entries. Later entries for the same
    /// location replace earlier ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = RatingEntry>,
    {
        let ratings = entries
            .into_iter()
            .map(|entry| (entry.location, entry.rating))
            .collect();
        Self { ratings }
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Rating for `location`; `None` when unrated or not a number.
    pub fn get(&self, location: &str) -> Option<f64> {
        self.ratings.get(location).copied().flatten()
    }

    pub fn classify(&self, location: &str) -> ZoneClass {
        ZoneClass::classify(self.get(location))
    }

    /// One zone per rated location that exists in the coordinate table,
    /// sorted by location name. Unknown names are skipped.
    pub fn zones(&self) -> Vec<Zone> {
        let mut zones: Vec<Zone> = self
            .ratings
            .iter()
            .filter_map(|(name, value)| match location::coordinate_of(name) {
                Some(center) => {
                    let class = ZoneClass::classify(*value);
                    log::debug!("Zone {:?} classified as {}", name, class.name());
                    Some(Zone {
                        location: name.clone(),
                        center,
                        class,
                    })
                }
                None => {
                    log::debug!("No coordinates for rated location {:?}, skipping zone", name);
                    None
                }
            })
            .collect();
        zones.sort_by(|a, b| a.location.cmp(&b.location));
        zones
    }
}

impl From<GetUsersResponse> for AggregateInputs {
    fn from(response: GetUsersResponse) -> Self {
        Self::from_entries(response.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(location: &str, rating: f64) -> RatingEntry {
        RatingEntry {
            location: location.to_string(),
            rating: Some(rating),
        }
    }

    #[test]
    fn last_rating_wins() {
        let inputs = AggregateInputs::from_entries(vec![
            entry("Doe Library", 1.0),
            entry("Sather Gate", 2.0),
            entry("Doe Library", 3.0),
        ]);
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs.get("Doe Library"), Some(3.0));
        assert_eq!(inputs.classify("Doe Library"), ZoneClass::Heavy);
    }

    #[test]
    fn unrated_location_has_no_class() {
        let inputs = AggregateInputs::new();
        assert!(inputs.is_empty());
        assert_eq!(inputs.classify("Moffitt Library"), ZoneClass::None);
        assert!(inputs.zones().is_empty());
    }

    #[test]
    fn unknown_locations_produce_no_zone() {
        let inputs = AggregateInputs::from_entries(vec![
            entry("Memorial Glade", 2.0),
            entry("Haas Courtyard", 1.0),
            entry("Default", 0.0),
        ]);
        let zones = inputs.zones();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].location, "Default");
        assert_eq!(zones[0].class, ZoneClass::None);
        assert_eq!(zones[1].location, "Haas Courtyard");
        assert_eq!(zones[1].class, ZoneClass::Light);
        assert_eq!(zones[1].center, location::coordinate_of("Haas Courtyard").unwrap());
    }

    #[test]
    fn non_numeric_rating_gets_uncolored_zone() {
        let inputs = AggregateInputs::from_entries(vec![
            RatingEntry {
                location: "Doe Library".to_string(),
                rating: None,
            },
            entry("Sather Gate", 2.0),
        ]);
        assert_eq!(inputs.get("Doe Library"), None);
        let zones = inputs.zones();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].class, ZoneClass::None);
        assert_eq!(zones[1].class, ZoneClass::Medium);
    }
}
