use dioxus::logger::tracing::error;
use web_sys::{window, UrlSearchParams};
use wifimap_common::LaunchParams;

/// Reads `lat`, `lon` and `uuid` from the page's query string.
pub fn launch_params() -> LaunchParams {
    let Some(params) = window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| UrlSearchParams::new_with_str(&search).ok())
    else {
        return LaunchParams::default();
    };

    let lat = params.get("lat");
    let lon = params.get("lon");
    let uuid = params.get("uuid");
    LaunchParams::from_raw(lat.as_deref(), lon.as_deref(), uuid.as_deref())
}

pub fn reload_page() {
    if let Some(window) = window() {
        if let Err(e) = window.location().reload() {
            error!("Failed to reload page: {:?}", e);
        }
    }
}

/// Build time formatted for the footer, or the raw value if it does not parse.
pub fn build_time_label(iso: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(iso)
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

#[cfg(test)]
mod tests {
    use super::build_time_label;

    #[test]
    fn formats_build_time() {
        assert_eq!(build_time_label("2024-03-01T09:05:00Z"), "2024-03-01 09:05 UTC");
        assert_eq!(build_time_label("unknown"), "unknown");
    }
}
