use crate::api;
use crate::components::app::HEATMAP;
use crate::constants::DEFAULT_WARNING_TEXT;
use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;
use wasm_bindgen_futures::spawn_local;
use wifimap_common::Strength;

#[component]
pub fn FeedbackForm() -> Element {
    let (strength, show_warning) = {
        let state = HEATMAP.read();
        (state.strength(), state.default_warning())
    };
    let strength_value = strength.map(Strength::label).unwrap_or("");

    let submit = move |_| {
        let Some(request) = HEATMAP.peek().submission() else {
            warn!("Nothing to submit yet");
            return;
        };
        spawn_local(async move {
            if let Err(e) = api::submit_rating(&request).await {
                error!("Failed to submit rating: {}", e);
            }
        });
    };

    rsx! {
        h6 { class: "title is-6 mb-2", "How is the campus WiFi at your current location?" }
        div { class: "field mb-5",
            label { class: "label", r#for: "strength", "Select your response" }
            div { class: "control",
                div { class: "select is-fullwidth",
                    select {
                        id: "strength",
                        value: "{strength_value}",
                        disabled: show_warning,
                        onchange: move |evt| {
                            let Ok(strength) = evt.value().parse::<Strength>() else {
                                warn!("Unknown response {:?}", evt.value());
                                return;
                            };
                            HEATMAP.with_mut(|state| {
                                if state.select_strength(strength) {
                                    info!("Pending report: {:?}", state.report());
                                }
                            });
                        },
                        option { value: "", disabled: true, selected: strength.is_none(), "Select your response" }
                        for option_strength in Strength::ALL {
                            option {
                                key: "{option_strength}",
                                value: option_strength.label(),
                                selected: strength == Some(option_strength),
                                "{option_strength}"
                            }
                        }
                    }
                }
            }
        }
        div { class: "buttons mb-2",
            button {
                class: "button is-neutral action-button",
                onclick: submit,
                "Submit Feedback"
            }
            button {
                class: "button is-neutral action-button",
                onclick: move |_| HEATMAP.with_mut(|state| state.clear_response()),
                "Clear Response"
            }
        }
        if show_warning {
            p { class: "default-warning", "{DEFAULT_WARNING_TEXT}" }
        }
    }
}
