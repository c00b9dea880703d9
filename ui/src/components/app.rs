use super::{campus_map::CampusMap, feedback_form::FeedbackForm, location_picker::LocationPicker};
use crate::api;
use crate::constants::{BUILD_TIMESTAMP_ISO, BULMA_CSS, LEAFLET_CSS, LEAFLET_JS};
use crate::util::{build_time_label, launch_params};
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use document::{Script, Stylesheet};
use wasm_bindgen_futures::spawn_local;
use wifimap_common::{AggregateInputs, HeatmapState, LaunchParams};

pub static LAUNCH: GlobalSignal<LaunchParams> = Global::new(launch_params);
pub static HEATMAP: GlobalSignal<HeatmapState> =
    Global::new(|| HeatmapState::new(LAUNCH.peek().initial));
pub static INPUTS: GlobalSignal<AggregateInputs> = Global::new(initial_inputs);

#[component]
pub fn App() -> Element {
    info!("App component loaded");

    use_effect(move || {
        let launch = LAUNCH.peek();
        info!("Page opened by {} at {}", launch.uuid, launch.initial);

        if INPUTS.peek().is_empty() {
            info!("No input detected. Fetching inputs...");
            spawn_local(load_inputs());
        } else {
            info!("Current inputs: {:?}", *INPUTS.peek());
        }
    });

    let built = build_time_label(BUILD_TIMESTAMP_ISO);

    rsx! {
        Stylesheet { href: LEAFLET_CSS }
        Stylesheet { href: BULMA_CSS }
        Stylesheet { href: asset!("/assets/main.css") }
        Script { src: LEAFLET_JS }

        div { class: "page",
            CampusMap {}
            div { class: "columns is-variable is-5 mt-4",
                div { class: "column is-4",
                    LocationPicker {}
                }
                div { class: "column is-8",
                    FeedbackForm {}
                }
            }
            footer { class: "build-info",
                "Built {built}"
            }
        }
    }
}

async fn load_inputs() {
    match api::fetch_inputs().await {
        Ok(inputs) => {
            info!("Loaded ratings for {} locations", inputs.len());
            *INPUTS.write() = inputs;
        }
        Err(e) => error!("Failed to fetch ratings: {}", e),
    }
}

#[cfg(not(feature = "example-data"))]
fn initial_inputs() -> AggregateInputs {
    AggregateInputs::new()
}

#[cfg(feature = "example-data")]
fn initial_inputs() -> AggregateInputs {
    crate::example_data::create_example_inputs()
}
