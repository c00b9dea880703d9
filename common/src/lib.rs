pub mod aggregate;
pub mod api;
pub mod layers;
pub mod location;
pub mod query;
pub mod rating;
pub mod state;
pub mod zone;

pub use aggregate::AggregateInputs;
pub use layers::MapLayers;
pub use location::{Coordinate, Location};
pub use query::LaunchParams;
pub use rating::Strength;
pub use state::HeatmapState;
pub use zone::{Zone, ZoneClass};
