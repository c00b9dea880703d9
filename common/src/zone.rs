//! Color coding of the aggregate rating overlays.

use crate::location::Coordinate;

pub const TRANSPARENT: &str = "#FFFFFF00";
pub const OUTLINE: &str = "#FFFFFF";
pub const LIGHT_FILL: &str = "#84F46D";
pub const MEDIUM_FILL: &str = "#F4CE6D";
pub const HEAVY_FILL: &str = "#F94F38";

/// Radius of a zone circle in metres.
pub const ZONE_RADIUS_M: f64 = 30.0;
pub const ZONE_FILL_OPACITY: f64 = 0.65;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneClass {
    None,
    Light,
    Medium,
    Heavy,
}

impl ZoneClass {
    /// Classifies an aggregate rating. Missing, non-positive and NaN values
    /// have no zone color.
    pub fn classify(value: Option<f64>) -> ZoneClass {
        match value {
            Some(v) if v > 0.0 => {
                if v <= 1.0 {
                    ZoneClass::Light
                } else if v <= 2.0 {
                    ZoneClass::Medium
                } else {
                    ZoneClass::Heavy
                }
            }
            _ => ZoneClass::None,
        }
    }

    pub fn stroke(self) -> &'static str {
        match self {
            ZoneClass::None => TRANSPARENT,
            _ => OUTLINE,
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            ZoneClass::None => TRANSPARENT,
            ZoneClass::Light => LIGHT_FILL,
            ZoneClass::Medium => MEDIUM_FILL,
            ZoneClass::Heavy => HEAVY_FILL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ZoneClass::None => "none",
            ZoneClass::Light => "light",
            ZoneClass::Medium => "medium",
            ZoneClass::Heavy => "heavy",
        }
    }
}

/// A circle overlay ready to be drawn on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    pub location: String,
    pub center: Coordinate,
    pub class: ZoneClass,
}

impl Zone {
    pub fn stroke(&self) -> &'static str {
        self.class.stroke()
    }

    pub fn fill(&self) -> &'static str {
        self.class.fill()
    }
}
