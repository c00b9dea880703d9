use wifimap_common::api::{GetUsersResponse, ADD_USER_PATH, GET_USERS_PATH};
use wifimap_common::{location, AggregateInputs, Coordinate, HeatmapState, LaunchParams, Strength, ZoneClass};

const SAMPLE_RESPONSE: &str = r#"{
    "results": [
        {"location": "Doe Library", "rating": 1},
        {"location": "Moffitt Library", "rating": 2},
        {"location": "Doe Library", "rating": 3},
        {"location": "Sproul Plaza", "rating": 2},
        {"location": "Haas Courtyard", "rating": 0}
    ]
}"#;

#[test]
fn page_session_from_launch_to_submission() {
    let params = LaunchParams::from_raw(None, None, Some("user-42"));
    assert_eq!(params.uuid, "user-42");

    let mut state = HeatmapState::new(params.initial);
    assert!(state.default_warning());

    let response: GetUsersResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
    let inputs = AggregateInputs::from(response);
    let zones = inputs.zones();
    let classes: Vec<_> = zones.iter().map(|z| (z.location.as_str(), z.class)).collect();
    assert_eq!(
        classes,
        vec![
            ("Doe Library", ZoneClass::Heavy),
            ("Haas Courtyard", ZoneClass::None),
            ("Moffitt Library", ZoneClass::Medium),
        ]
    );

    assert!(!state.select_strength(Strength::Good));
    state.select_location("East Asian Library").unwrap();
    assert_eq!(state.current(), location::coordinate_of("East Asian Library").unwrap());
    assert!(state.select_strength(Strength::Good));

    let body = serde_json::to_string(&state.submission().unwrap()).unwrap();
    assert_eq!(body, r#"{"location":"East Asian Library","rating":1}"#);

    state.reset_location();
    assert_eq!(state.current(), Coordinate::DEFAULT);
    assert!(state.default_warning());
}

#[test]
fn launch_with_coordinates_allows_immediate_rating() {
    let params = LaunchParams::from_raw(Some("37.8700"), Some("-122.2600"), None);
    let mut state = HeatmapState::new(params.initial);
    assert!(!state.default_warning());
    assert!(state.select_strength(Strength::Down));
    let request = state.submission().unwrap();
    assert_eq!(request.location, "Default");
    assert_eq!(request.rating, 3);
}

#[test]
fn endpoints_are_relative_to_api_url() {
    use wifimap_common::api::endpoint;
    assert_eq!(endpoint("https://wifi.example.edu/", GET_USERS_PATH), "https://wifi.example.edu/get-users");
    assert_eq!(endpoint("https://wifi.example.edu", ADD_USER_PATH), "https://wifi.example.edu/add-user");
}

#[test]
fn malformed_ratings_do_not_hide_other_zones() {
    let response: GetUsersResponse = serde_json::from_str(
        r#"{"results":[
            {"location":"Doe Library","rating":2},
            {"location":"Sather Gate","rating":"3"},
            {"location":"Moffitt Library","rating":null}
        ]}"#,
    )
    .unwrap();
    let inputs = AggregateInputs::from(response);
    assert_eq!(inputs.classify("Doe Library"), ZoneClass::Medium);
    assert_eq!(inputs.classify("Sather Gate"), ZoneClass::Heavy);
    assert_eq!(inputs.classify("Moffitt Library"), ZoneClass::None);
    assert_eq!(inputs.zones().len(), 3);
}

#[test]
fn cleared_response_can_still_be_submitted() {
    let mut state = HeatmapState::default();
    state.select_location("Doe Library").unwrap();
    assert!(state.select_strength(Strength::Down));
    state.clear_response();
    assert!(state.default_warning());
    let body = serde_json::to_string(&state.submission().unwrap()).unwrap();
    assert_eq!(body, r#"{"location":"Doe Library","rating":3}"#);
}
