#![allow(non_snake_case)]

use dioxus::prelude::*;

mod api;
mod components;
mod constants;
#[cfg(feature = "example-data")]
mod example_data;
mod util;

use components::app::App;

fn main() {
    dioxus::logger::initialize_default();

    launch(App);
}
