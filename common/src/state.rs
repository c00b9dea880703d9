//! Page state and the transitions the controls trigger.

use crate::api::AddUserRequest;
use crate::location::{self, Coordinate};
use crate::rating::Strength;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("location not in coordinate table: {0}")]
    UnknownLocation(String),
}

/// A rating waiting to be submitted. The location is captured when the
/// strength is chosen and may be empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReport {
    pub location: String,
    pub strength: Strength,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapState {
    current: Coordinate,
    selected_location: String,
    strength: Option<Strength>,
    report: Option<PendingReport>,
    default_warning: bool,
}

impl Default for HeatmapState {
    fn default() -> Self {
        Self::new(Coordinate::DEFAULT)
    }
}

impl HeatmapState {
    pub fn new(initial: Coordinate) -> Self {
        Self {
            current: initial,
            selected_location: String::new(),
            strength: None,
            report: None,
            default_warning: initial.is_default(),
        }
    }

    pub fn current(&self) -> Coordinate {
        self.current
    }

    /// Selected location name, empty when nothing is selected.
    pub fn selected_location(&self) -> &str {
        &self.selected_location
    }

    pub fn strength(&self) -> Option<Strength> {
        self.strength
    }

    pub fn report(&self) -> Option<&PendingReport> {
        self.report.as_ref()
    }

    /// True while the map still points at the default coordinate.
    pub fn default_warning(&self) -> bool {
        self.default_warning
    }

    /// Whether a marker at `position` should be drawn highlighted.
    pub fn is_highlighted(&self, position: Coordinate) -> bool {
        position == self.current
    }

    fn set_current(&mut self, coordinate: Coordinate) {
        self.current = coordinate;
        self.default_warning = coordinate.is_default();
    }

    pub fn select_location(&mut self, name: &str) -> Result<Coordinate, StateError> {
        let coordinate = location::coordinate_of(name)
            .ok_or_else(|| StateError::UnknownLocation(name.to_string()))?;
        self.selected_location = name.to_string();
        self.set_current(coordinate);
        Ok(coordinate)
    }

    pub fn reset_location(&mut self) {
        self.selected_location.clear();
        self.set_current(Coordinate::DEFAULT);
    }

    /// Records the chosen strength and the pending report. Returns false and
    /// changes nothing while the default-location warning is shown.
    pub fn select_strength(&mut self, strength: Strength) -> bool {
        if self.default_warning {
            return false;
        }
        self.strength = Some(strength);
        self.report = Some(PendingReport {
            location: self.selected_location.clone(),
            strength,
        });
        true
    }

    /// Resets location and strength. A pending report survives and can
    /// still be submitted.
    pub fn clear_response(&mut self) {
        self.reset_location();
        self.strength = None;
    }

    /// Body for `POST /add-user`, if a report is pending.
    pub fn submission(&self) -> Option<AddUserRequest> {
        self.report
            .as_ref()
            .map(|report| AddUserRequest::new(&report.location, report.strength.rating()))
    }
}
