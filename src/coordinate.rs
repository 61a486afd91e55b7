//! Geographic value types shared by the codec and the outline builder.
//!
//! Values are raw degrees. Nothing here clamps or validates ranges; corrupt
//! input passes through unchanged.

use serde::{Deserialize, Serialize};

/// A (latitude, longitude) pair in degrees.
///
/// Deserializes from either `{latitude, longitude}` or the `{lat, lng}` shape
/// used by Google place and directions responses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.latitude, coord.longitude)
    }
}

/// Axis-aligned bounding box given by its northeast and southwest corners.
///
/// Corner ordering is the caller's responsibility. Swapped corners are not
/// corrected and yield an inverted outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub northeast: Coordinate,
    pub southwest: Coordinate,
}

impl Bounds {
    pub const fn new(northeast: Coordinate, southwest: Coordinate) -> Self {
        Self {
            northeast,
            southwest,
        }
    }

    /// Planar midpoint of the box.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.northeast.latitude + self.southwest.latitude) / 2.0,
            (self.northeast.longitude + self.southwest.longitude) / 2.0,
        )
    }

    pub fn is_degenerate(&self) -> bool {
        self.northeast == self.southwest
    }
}
