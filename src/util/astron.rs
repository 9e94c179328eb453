//! Tracked bodies and the labels shown for their positions.

#[cfg(test)]
#[path = "astron_test.rs"]
mod astron_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::angle::{CardinalDirection, deg_to_cardinal, rad_to_deg};

/// A body the tracker reports on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AstronObject {
    Mercury,
    Venus,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl AstronObject {
    /// Every tracked body, in display order.
    pub const ALL: [Self; 8] = [
        Self::Mercury,
        Self::Venus,
        Self::Moon,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }
}

impl fmt::Display for AstronObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compass point of an azimuth given in radians.
pub fn azimuth_direction(az_rad: f64) -> CardinalDirection {
    deg_to_cardinal(rad_to_deg(az_rad))
}

/// Elevation in radians as degrees with two decimals, e.g. `"45.00°"`.
pub fn format_elevation(el_rad: f64) -> String {
    format!("{:.2}°", rad_to_deg(el_rad))
}
