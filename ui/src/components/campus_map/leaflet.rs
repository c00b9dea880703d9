//! Thin bridge to the Leaflet global loaded from the CDN script tag.
//!
//! The map instance lives on the JS side. Layer updates that arrive before
//! Leaflet has loaded are kept and drawn once the map exists.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
const state = { map: null, group: null, icons: null, pending: null };

function whenLeafletReady(callback) {
    if (window.L) {
        callback(window.L);
    } else {
        setTimeout(() => whenLeafletReady(callback), 50);
    }
}

function draw(L, layers) {
    state.map.setView([layers.center.lat, layers.center.lon], state.map.getZoom());
    state.group.clearLayers();
    for (const m of layers.markers) {
        const popup = document.createElement('span');
        popup.textContent = m.popup;
        L.marker([m.lat, m.lon], { icon: m.highlighted ? state.icons.highlighted : state.icons.normal })
            .bindPopup(popup)
            .addTo(state.group);
    }
    for (const z of layers.zones) {
        L.circle([z.lat, z.lon], {
            radius: z.radius,
            color: z.color,
            fillColor: z.fillColor,
            fillOpacity: z.fillOpacity,
        }).addTo(state.group);
    }
}

export function mount_map(containerId, lat, lon, zoom, tileUrl, attribution, iconJson) {
    whenLeafletReady((L) => {
        if (state.map) {
            state.map.remove();
        }
        const icon = JSON.parse(iconJson);
        const base = { iconUrl: icon.url, iconSize: icon.size, iconAnchor: icon.anchor };
        state.icons = {
            normal: L.icon(base),
            highlighted: L.icon({ ...base, className: 'marker-highlight' }),
        };
        state.map = L.map(containerId, { scrollWheelZoom: true }).setView([lat, lon], zoom);
        L.tileLayer(tileUrl, { attribution }).addTo(state.map);
        state.group = L.layerGroup().addTo(state.map);
        if (state.pending) {
            const layers = state.pending;
            state.pending = null;
            draw(L, layers);
        }
    });
}

export function render_layers(layersJson) {
    const layers = JSON.parse(layersJson);
    if (!state.map || !window.L) {
        state.pending = layers;
        return;
    }
    draw(window.L, layers);
}

export function unmount_map() {
    if (state.map) {
        state.map.remove();
    }
    state.map = null;
    state.group = null;
    state.pending = null;
}
")]
extern "C" {
    pub fn mount_map(
        container_id: &str,
        lat: f64,
        lon: f64,
        zoom: u8,
        tile_url: &str,
        attribution: &str,
        icon_json: &str,
    );

    pub fn render_layers(layers_json: &str);

    pub fn unmount_map();
}
