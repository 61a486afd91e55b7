//! Approximate neighborhood outline from a rectangular bounds record.
//!
//! Used when a place lookup returns only a bounding box. The eight points are
//! the four corners followed by the four edge midpoints, in a fixed order that
//! renderers draw as a closed outline. The midpoints do not sit between their
//! neighboring corners, so the drawn shape self-intersects. Callers rely on
//! this exact sequence; keep it as is.

use tracing::trace;

use crate::coordinate::{Bounds, Coordinate};
use crate::polyline::Polyline;

/// Number of points in every outline.
pub const OUTLINE_POINTS: usize = 8;

/// Builds the 8-point outline for `bounds`.
///
/// Total over all inputs. Corner ordering is not checked; degenerate bounds
/// yield eight coincident points.
pub fn build(bounds: &Bounds) -> Polyline {
    let ne = bounds.northeast;
    let sw = bounds.southwest;
    let mid = bounds.center();

    if bounds.is_degenerate() {
        trace!(?ne, "outline from degenerate bounds");
    }

    Polyline::new(vec![
        Coordinate::new(ne.latitude, sw.longitude),
        Coordinate::new(ne.latitude, ne.longitude),
        Coordinate::new(sw.latitude, ne.longitude),
        Coordinate::new(sw.latitude, sw.longitude),
        Coordinate::new(mid.latitude, ne.longitude),
        Coordinate::new(sw.latitude, mid.longitude),
        Coordinate::new(mid.latitude, sw.longitude),
        Coordinate::new(ne.latitude, mid.longitude),
    ])
}

impl Bounds {
    /// Same as [`build`].
    pub fn outline(&self) -> Polyline {
        build(self)
    }
}
