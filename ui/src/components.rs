pub mod app;
pub mod campus_map;
pub mod feedback_form;
pub mod location_picker;
