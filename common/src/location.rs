use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of the fallback entry in the coordinate table.
pub const DEFAULT_LOCATION: &str = "Default";

/// A latitude/longitude pair in degrees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Map centre used before the user has picked a location.
    pub const DEFAULT: Coordinate = Coordinate::new(37.8719, -122.2585);

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// A named point on campus that can be selected and rated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub coordinate: Coordinate,
    /// Popup text of the fixed map marker. `None` for entries without a marker.
    pub popup: Option<&'static str>,
    /// Label shown in the location picker. `None` for entries the picker omits.
    pub menu_label: Option<&'static str>,
}

const fn campus(
    name: &'static str,
    lat: f64,
    lon: f64,
    popup: &'static str,
    menu_label: &'static str,
) -> Location {
    Location {
        name,
        coordinate: Coordinate::new(lat, lon),
        popup: Some(popup),
        menu_label: Some(menu_label),
    }
}

/// The fixed coordinate table, in marker drawing order.
pub static LOCATIONS: [Location; 8] = [
    Location {
        name: DEFAULT_LOCATION,
        coordinate: Coordinate::DEFAULT,
        popup: None,
        menu_label: None,
    },
    campus("Sather Gate", 37.8703, -122.2595, "Sather Gate", "Sather Gate"),
    campus(
        "ASUC Student Union",
        37.8692,
        -122.2597,
        "ASUC Student Union (MLK Jr. Building)",
        "ASUC Student Union (MLK Jr. Building)",
    ),
    campus("Moffitt Library", 37.8725, -122.2608, "Moffitt Library", "Moffitt Library"),
    campus("Doe Library", 37.8722, -122.2592, "Doe Library", "Doe Library"),
    campus(
        "East Asian Library",
        37.8736,
        -122.2600,
        "East Asian Library",
        "East Asian Library",
    ),
    campus(
        "Kresge Engineering Library",
        37.8738,
        -122.2583,
        "Kresge Library",
        "Kresge Engineering Library",
    ),
    campus(
        "Haas Courtyard",
        37.8716,
        -122.2533,
        "Haas School of Business",
        "Haas Courtyard",
    ),
];

pub fn find(name: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|location| location.name == name)
}

pub fn coordinate_of(name: &str) -> Option<Coordinate> {
    find(name).map(|location| location.coordinate)
}

/// Locations that get a fixed marker on the map.
pub fn markers() -> impl Iterator<Item = &'static Location> {
    LOCATIONS.iter().filter(|location| location.popup.is_some())
}

/// Picker entries as `(name, label)`, sorted by name.
pub fn menu_entries() -> Vec<(&'static str, &'static str)> {
    let mut entries: Vec<_> = LOCATIONS
        .iter()
        .filter_map(|location| location.menu_label.map(|label| (location.name, label)))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_default_and_seven_campus_locations() {
        assert_eq!(LOCATIONS.len(), 8);
        assert_eq!(coordinate_of(DEFAULT_LOCATION), Some(Coordinate::DEFAULT));
        assert_eq!(markers().count(), 7);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(
            coordinate_of("Doe Library"),
            Some(Coordinate::new(37.8722, -122.2592))
        );
        assert_eq!(find("Kresge Engineering Library").and_then(|l| l.popup), Some("Kresge Library"));
        assert!(find("Memorial Glade").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn menu_is_alphabetical_and_skips_default() {
        let names: Vec<_> = menu_entries().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "ASUC Student Union",
                "Doe Library",
                "East Asian Library",
                "Haas Courtyard",
                "Kresge Engineering Library",
                "Moffitt Library",
                "Sather Gate",
            ]
        );
    }

    #[test]
    fn only_the_default_entry_is_default() {
        assert!(Coordinate::DEFAULT.is_default());
        assert_eq!(
            LOCATIONS.iter().filter(|l| l.coordinate.is_default()).count(),
            1
        );
    }
}
