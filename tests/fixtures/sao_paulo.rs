//! São Paulo area locations and service payloads for realistic fixtures.
//!
//! The walking route follows the three stops of the downtown example map.
//! Encoded strings were produced from these coordinates at 1e-5 precision.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Destinations
// ============================================================================

pub const DESTINATIONS: &[Location] = &[
    Location::new("São Paulo", -23.550520, -46.633308),
    Location::new("Rio de Janeiro", -22.906847, -43.172897),
    Location::new("Belo Horizonte", -19.916681, -43.934493),
    Location::new("Liberdade", -23.5577, -46.6396),
    Location::new("Vila Mariana", -23.5882, -46.6324),
];

// ============================================================================
// Downtown walking route
// ============================================================================

pub const WALKING_ROUTE: &[Location] = &[
    Location::new("Starting Point", -23.55052, -46.63331),
    Location::new("Intermediate Point", -23.557, -46.639),
    Location::new("End Point", -23.56, -46.645),
];

pub const WALKING_ROUTE_ENCODED: &str = "vuvnCdas{Gng@pb@vQnd@";

/// Directions response with one route whose two legs cover the walking route.
pub const DIRECTIONS_JSON: &str = r#"{
  "status": "OK",
  "routes": [
    {
      "summary": "R. Galvão Bueno",
      "overview_polyline": { "points": "vuvnCdas{Gng@pb@vQnd@" },
      "legs": [
        {
          "distance": { "text": "0.9 km", "value": 912 },
          "steps": [
            { "polyline": { "points": "vuvnCdas{Gng@pb@" } }
          ]
        },
        {
          "distance": { "text": "0.7 km", "value": 688 },
          "steps": [
            { "polyline": { "points": "f~wnCvdt{GvQnd@" } }
          ]
        }
      ]
    }
  ]
}"#;

pub const NO_ROUTE_JSON: &str = r#"{ "status": "ZERO_RESULTS", "routes": [] }"#;

/// Place details for Liberdade with a bounds rectangle.
pub const LIBERDADE_DETAILS_JSON: &str = r#"{
  "status": "OK",
  "result": {
    "geometry": {
      "location": { "lat": -23.5605, "lng": -46.6392 },
      "bounds": {
        "northeast": { "lat": -23.55, "lng": -46.63 },
        "southwest": { "lat": -23.57, "lng": -46.65 }
      }
    }
  }
}"#;

pub const POINT_PLACE_DETAILS_JSON: &str = r#"{
  "status": "OK",
  "result": {
    "geometry": {
      "location": { "lat": -23.5605, "lng": -46.6392 }
    }
  }
}"#;
