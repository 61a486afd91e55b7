//! map-outline core
//!
//! Encoded polyline codec and bounds-to-outline geometry for map rendering.
//! Everything here is pure data in, data out; fetching and drawing belong to
//! the caller.

pub mod coordinate;
pub mod error;
pub mod polyline;
pub mod codec;
pub mod outline;
pub mod directions;

pub use codec::{decode, decode_legs, encode};
pub use coordinate::{Bounds, Coordinate};
pub use error::{MalformedReason, PolylineError};
pub use outline::build;
pub use polyline::Polyline;
