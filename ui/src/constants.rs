/// Backend base URL, fixed at build time through `WIFIMAP_API_URL`.
pub const API_URL: &str = match option_env!("WIFIMAP_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

pub const BUILD_TIMESTAMP_ISO: &str = env!("BUILD_TIMESTAMP_ISO");

/// DOM id of the element Leaflet renders into.
pub const MAP_CONTAINER_ID: &str = "campus-map";
pub const MAP_ZOOM: u8 = 17;
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const BULMA_CSS: &str = "https://cdn.jsdelivr.net/npm/bulma@1.0.2/css/bulma.min.css";
pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const MARKER_ICON_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png";

/// Marker icon size and anchor in pixels.
pub const MARKER_ICON_SIZE: (u32, u32) = (25, 41);
pub const MARKER_ICON_ANCHOR: (u32, u32) = (12, 41);

pub const DEFAULT_WARNING_TEXT: &str = "Please select your current location first.";
