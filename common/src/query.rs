use crate::location::Coordinate;

/// Identity used when the page is opened without a `uuid` parameter.
pub const ANONYMOUS: &str = "Anonymous";

/// Values the page reads from its query string.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchParams {
    pub initial: Coordinate,
    pub uuid: String,
}

impl Default for LaunchParams {
    fn default() -> Self {
        Self {
            initial: Coordinate::DEFAULT,
            uuid: ANONYMOUS.to_string(),
        }
    }
}

impl LaunchParams {
    /// Interprets raw `lat`, `lon` and `uuid` values. The initial coordinate
    /// falls back to the default unless both coordinates parse.
    pub fn from_raw(lat: Option<&str>, lon: Option<&str>, uuid: Option<&str>) -> Self {
        let initial = match (lat.and_then(parse_degrees), lon.and_then(parse_degrees)) {
            (Some(lat), Some(lon)) => Coordinate::new(lat, lon),
            _ => Coordinate::DEFAULT,
        };
        let uuid = uuid
            .filter(|uuid| !uuid.is_empty())
            .unwrap_or(ANONYMOUS)
            .to_string();
        Self { initial, uuid }
    }
}

fn parse_degrees(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_coordinates_required() {
        let params = LaunchParams::from_raw(Some("37.87"), Some("-122.26"), Some("abc"));
        assert_eq!(params.initial, Coordinate::new(37.87, -122.26));
        assert_eq!(params.uuid, "abc");

        let params = LaunchParams::from_raw(Some("37.87"), None, None);
        assert_eq!(params, LaunchParams::default());
    }

    #[test]
    fn unparseable_coordinates_fall_back() {
        let params = LaunchParams::from_raw(Some("north"), Some("-122.26"), None);
        assert_eq!(params.initial, Coordinate::DEFAULT);
        let params = LaunchParams::from_raw(Some("NaN"), Some("1"), None);
        assert_eq!(params.initial, Coordinate::DEFAULT);
    }

    #[test]
    fn empty_uuid_is_anonymous() {
        assert_eq!(LaunchParams::from_raw(None, None, Some("")).uuid, ANONYMOUS);
        assert_eq!(LaunchParams::from_raw(None, None, None).uuid, ANONYMOUS);
    }
}
