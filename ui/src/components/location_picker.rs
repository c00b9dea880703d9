use crate::components::app::HEATMAP;
use crate::util::reload_page;
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use wifimap_common::location::menu_entries;

#[component]
pub fn LocationPicker() -> Element {
    let selected = HEATMAP.read().selected_location().to_string();

    rsx! {
        h6 { class: "title is-6 mb-2", "Where are you located?" }
        div { class: "field mb-5",
            label { class: "label", r#for: "location", "Select Current Location" }
            div { class: "control",
                div { class: "select is-fullwidth",
                    select {
                        id: "location",
                        value: "{selected}",
                        onchange: move |evt| {
                            let name = evt.value();
                            HEATMAP.with_mut(|state| match state.select_location(&name) {
                                Ok(coordinate) => info!("Selected {} at {}", name, coordinate),
                                Err(e) => warn!("Ignoring location selection: {}", e),
                            });
                        },
                        option { value: "", disabled: true, selected: selected.is_empty(), "Select Current Location" }
                        for (name, label) in menu_entries() {
                            option {
                                key: "{name}",
                                value: name,
                                selected: name == selected,
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
        div { class: "buttons",
            button {
                class: "button is-neutral",
                onclick: move |_| HEATMAP.with_mut(|state| state.reset_location()),
                "Reset Location"
            }
            button {
                class: "button is-neutral",
                onclick: move |_| reload_page(),
                "Refresh"
            }
        }
    }
}
