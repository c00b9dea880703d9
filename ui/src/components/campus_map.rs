mod leaflet;

use crate::components::app::{HEATMAP, INPUTS};
use crate::constants::{
    MAP_CONTAINER_ID, MAP_ZOOM, MARKER_ICON_ANCHOR, MARKER_ICON_SIZE, MARKER_ICON_URL,
    TILE_ATTRIBUTION, TILE_URL,
};
use dioxus::logger::tracing::{debug, error, info};
use dioxus::prelude::*;
use serde::Serialize;
use wifimap_common::MapLayers;

#[derive(Serialize)]
struct MarkerIcon {
    url: &'static str,
    size: (u32, u32),
    anchor: (u32, u32),
}

const MARKER_ICON: MarkerIcon = MarkerIcon {
    url: MARKER_ICON_URL,
    size: MARKER_ICON_SIZE,
    anchor: MARKER_ICON_ANCHOR,
};

/// Leaflet map with the campus markers and rating zones.
#[component]
pub fn CampusMap() -> Element {
    // Redraw whenever the page state or the ratings change
    use_effect(move || {
        let layers = MapLayers::build(&HEATMAP.read(), &INPUTS.read());
        debug!(
            "Drawing {} markers and {} zones around {}",
            layers.markers.len(),
            layers.zones.len(),
            layers.center
        );
        match serde_json::to_string(&layers) {
            Ok(json) => leaflet::render_layers(&json),
            Err(e) => error!("Failed to serialize map layers: {}", e),
        }
    });

    use_drop(leaflet::unmount_map);

    let mount = move |_| {
        let center = HEATMAP.peek().current();
        let icon_json = match serde_json::to_string(&MARKER_ICON) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize marker icon: {}", e);
                return;
            }
        };
        info!("Mounting campus map at {}", center);
        leaflet::mount_map(
            MAP_CONTAINER_ID,
            center.lat,
            center.lon,
            MAP_ZOOM,
            TILE_URL,
            TILE_ATTRIBUTION,
            &icon_json,
        );
    };

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "leaflet-container",
            onmounted: mount,
        }
    }
}
