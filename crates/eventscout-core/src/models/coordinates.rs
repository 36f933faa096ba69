use serde::{Deserialize, Serialize};

/// A resolved geographic position
///
/// Only a successful location lookup produces one of these. A session that
/// has not resolved a position holds `None`, never a zeroed pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Rounded form for the status line. Requests always carry full
    /// precision.
    pub fn display(&self) -> String {
        format!("({:.3}, {:.3})", self.lat, self.lon)
    }
}
