//! Everything drawn on top of the base tiles, in a form the map shim can
//! consume directly.

use crate::aggregate::AggregateInputs;
use crate::location::{self, Coordinate};
use crate::state::HeatmapState;
use crate::zone::{ZONE_FILL_OPACITY, ZONE_RADIUS_M};
use serde::Serialize;

pub const CURRENT_USER_POPUP: &str = "Current User";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MarkerLayer {
    pub lat: f64,
    pub lon: f64,
    pub popup: String,
    pub highlighted: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneLayer {
    pub lat: f64,
    pub lon: f64,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub radius: f64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapLayers {
    pub center: Coordinate,
    pub markers: Vec<MarkerLayer>,
    pub zones: Vec<ZoneLayer>,
}

impl MapLayers {
    pub fn build(state: &HeatmapState, inputs: &AggregateInputs) -> Self {
        let current = state.current();
        let marker = |position: Coordinate, popup: &str| MarkerLayer {
            lat: position.lat,
            lon: position.lon,
            popup: popup.to_string(),
            highlighted: state.is_highlighted(position),
        };

        let mut markers: Vec<MarkerLayer> = location::markers()
            .filter_map(|l| l.popup.map(|popup| marker(l.coordinate, popup)))
            .collect();
        markers.push(marker(current, CURRENT_USER_POPUP));

        let zones = inputs
            .zones()
            .into_iter()
            .map(|zone| ZoneLayer {
                lat: zone.center.lat,
                lon: zone.center.lon,
                color: zone.stroke(),
                fill_color: zone.fill(),
                fill_opacity: ZONE_FILL_OPACITY,
                radius: ZONE_RADIUS_M,
            })
            .collect();

        Self {
            center: current,
            markers,
            zones,
        }
    }
}
