//! Wire types and endpoints of the ratings backend.

use crate::location::DEFAULT_LOCATION;
use serde::{Deserialize, Deserializer, Serialize};

pub const GET_USERS_PATH: &str = "get-users";
pub const ADD_USER_PATH: &str = "add-user";

/// One stored rating as returned by `GET /get-users`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RatingEntry {
    pub location: String,
    /// `None` when the backend sent something that is not a number.
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<f64>,
}

/// Accepts numbers and numeric strings; any other value reads as no rating.
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let rating = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(rating.filter(|r| !r.is_nan()))
}

/// Body of `GET /get-users`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct GetUsersResponse {
    pub results: Vec<RatingEntry>,
}

/// Body of `POST /add-user`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AddUserRequest {
    pub location: String,
    pub rating: u8,
}

impl AddUserRequest {
    /// An empty location is reported against the default entry.
    pub fn new(location: &str, rating: u8) -> Self {
        let location = if location.is_empty() {
            DEFAULT_LOCATION
        } else {
            location
        };
        Self {
            location: location.to_string(),
            rating,
        }
    }
}

/// Joins the API base URL and an endpoint path with exactly one slash.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
