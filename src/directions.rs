//! Response records from the directions and place-details services.
//!
//! Only the fields the codec and outline builder consume are modeled. Fetching
//! the JSON is the caller's job; these types take it from there.

use serde::Deserialize;

use crate::codec::{decode, decode_legs};
use crate::coordinate::Bounds;
use crate::error::PolylineError;
use crate::outline::build;
use crate::polyline::Polyline;

#[derive(Debug, Clone, Deserialize)]
pub struct EncodedPolyline {
    pub points: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    pub polyline: EncodedPolyline,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Leg {
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    pub overview_polyline: EncodedPolyline,
    #[serde(default)]
    pub legs: Vec<Leg>,
}

impl Route {
    /// Decodes the simplified overview geometry.
    pub fn overview(&self) -> Result<Polyline, PolylineError> {
        decode(&self.overview_polyline.points)
    }

    /// Decodes every step of every leg and joins them in travel order.
    pub fn detailed(&self) -> Result<Polyline, PolylineError> {
        let encoded: Vec<&str> = self
            .legs
            .iter()
            .flat_map(|leg| leg.steps.iter())
            .map(|step| step.polyline.points.as_str())
            .collect();
        decode_legs(&encoded)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl DirectionsResponse {
    /// Overview geometry of the first route, or `None` if no route was found.
    pub fn overview(&self) -> Result<Option<Polyline>, PolylineError> {
        self.routes.first().map(Route::overview).transpose()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub bounds: Option<Bounds>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetails {
    pub result: PlaceResult,
}

impl PlaceDetails {
    /// Outline approximated from the place's bounds, when it has any.
    pub fn outline(&self) -> Option<Polyline> {
        self.result
            .geometry
            .as_ref()
            .and_then(|geometry| geometry.bounds.as_ref())
            .map(build)
    }
}
