//! Test fixtures for map-outline.
//!
//! Provides:
//! - Real São Paulo area locations used as route stops
//! - Directions and place-details payloads shaped like the live services

pub mod sao_paulo;

pub use sao_paulo::*;
