//! Vehicle observation values.
//!
//! A vehicle is just an identity plus a category string supplied by the
//! caller. The monitor reads observations and never keeps them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single report that a vehicle was seen crossing the intersection.
///
/// # Example
///
/// ```rust
/// use crossroad::{VehicleKind, VehicleObservation};
///
/// let car = VehicleObservation::of_kind("ABC-012", VehicleKind::Car);
/// assert_eq!(car.identity(), "ABC-012");
/// assert_eq!(car.category(), "Car");
///
/// let tram = VehicleObservation::new("T-7", "Tram");
/// assert_eq!(tram.category(), "Tram");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleObservation {
    identity: String,
    category: String,
}

impl VehicleObservation {
    pub fn new(identity: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            category: category.into(),
        }
    }

    pub fn of_kind(identity: impl Into<String>, kind: VehicleKind) -> Self {
        Self::new(identity, kind.as_str())
    }

    /// Caller-assigned identity, not unique on its own.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Vehicle kinds seen at a typical crossroad.
///
/// Categories stay open strings; this is a convenience for the common ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Bicycle,
    Car,
    Scooter,
}

impl VehicleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bicycle => "Bicycle",
            Self::Car => "Car",
            Self::Scooter => "Scooter",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_sets_category_string() {
        let bike = VehicleObservation::of_kind("ABC-011", VehicleKind::Bicycle);
        assert_eq!(bike, VehicleObservation::new("ABC-011", "Bicycle"));
    }

    #[test]
    fn kind_display_matches_as_str() {
        for kind in [VehicleKind::Bicycle, VehicleKind::Car, VehicleKind::Scooter] {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn same_identity_different_category_are_distinct() {
        let a = VehicleObservation::of_kind("ABC-011", VehicleKind::Car);
        let b = VehicleObservation::of_kind("ABC-011", VehicleKind::Scooter);
        assert_ne!(a, b);
    }
}
