use wifimap_common::api::RatingEntry;
use wifimap_common::AggregateInputs;

/// Ratings covering every zone color, for working on the page without a backend.
pub fn create_example_inputs() -> AggregateInputs {
    let entries = [
        ("Doe Library", 1.0),
        ("Moffitt Library", 2.0),
        ("Sather Gate", 3.0),
        ("East Asian Library", 1.0),
        ("Haas Courtyard", 0.0),
    ];
    AggregateInputs::from_entries(entries.into_iter().map(|(location, rating)| RatingEntry {
        location: location.to_string(),
        rating: Some(rating),
    }))
}
