//! Encoded polyline codec.
//!
//! Implements the standard polyline string format: each coordinate is stored
//! as latitude and longitude deltas from the previous point, scaled by 1e5,
//! zig-zag mapped to unsigned, split into 5-bit chunks least significant first
//! with bit `0x20` marking "more chunks follow", and offset by 63 into
//! printable ASCII.
//!
//! Decoding is strict. Truncated chains, stray bytes and an unpaired latitude
//! are reported as [`PolylineError::Malformed`] instead of being misparsed.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::coordinate::Coordinate;
use crate::error::{MalformedReason, PolylineError};
use crate::polyline::Polyline;

/// Fixed-point scale between degrees and encoded integers.
pub const PRECISION_FACTOR: f64 = 1e5;

const CHUNK_OFFSET: u8 = 63;
const CHUNK_MASK: u64 = 0x1f;
const CONTINUATION_BIT: u64 = 0x20;
/// Seven 5-bit chunks cover any zig-zagged 32-bit value.
const MAX_CHUNKS: u32 = 7;

/// Decodes an encoded polyline string into coordinates.
///
/// The empty string decodes to an empty polyline. Decoded values are not
/// checked against geographic ranges.
pub fn decode(encoded: &str) -> Result<Polyline, PolylineError> {
    decode_bytes(encoded.as_bytes())
        .inspect(|polyline| trace!(points = polyline.len(), "decoded polyline"))
        .inspect_err(|err| debug!(error = %err, len = encoded.len(), "polyline decode failed"))
}

/// Encodes coordinates into the polyline string format.
///
/// Fails with [`PolylineError::EncodingOverflow`] when a coordinate is not
/// finite, or when its scaled value or its delta from the previous point
/// leaves the 32-bit signed range.
pub fn encode(points: &[Coordinate]) -> Result<String, PolylineError> {
    let mut encoded = String::with_capacity(points.len() * 8);
    let mut prev_lat = 0i64;
    let mut prev_lng = 0i64;

    for (index, point) in points.iter().enumerate() {
        let overflow = || {
            debug!(index, ?point, "polyline encode overflow");
            PolylineError::EncodingOverflow { index }
        };

        let lat = scale(point.latitude).ok_or_else(overflow)?;
        let lng = scale(point.longitude).ok_or_else(overflow)?;
        let dlat = delta(lat, prev_lat).ok_or_else(overflow)?;
        let dlng = delta(lng, prev_lng).ok_or_else(overflow)?;

        push_value(&mut encoded, dlat);
        push_value(&mut encoded, dlng);

        prev_lat = lat;
        prev_lng = lng;
    }

    trace!(points = points.len(), len = encoded.len(), "encoded polyline");
    Ok(encoded)
}

/// Decodes independently encoded legs in parallel and concatenates them.
///
/// Each leg restarts its accumulators at zero. Output keeps input order. When
/// several legs are malformed, the error of the lowest-indexed one is returned.
pub fn decode_legs<S>(legs: &[S]) -> Result<Polyline, PolylineError>
where
    S: AsRef<str> + Sync,
{
    let decoded: Vec<Result<Polyline, PolylineError>> =
        legs.par_iter().map(|leg| decode(leg.as_ref())).collect();

    let mut joined = Polyline::default();
    for (index, leg) in decoded.into_iter().enumerate() {
        let leg = leg.inspect_err(|err| debug!(leg = index, error = %err, "leg decode failed"))?;
        joined.extend_from(leg);
    }
    Ok(joined)
}

fn decode_bytes(bytes: &[u8]) -> Result<Polyline, PolylineError> {
    let mut polyline = Polyline::default();
    let mut index = 0;
    let mut lat = 0i64;
    let mut lng = 0i64;

    while index < bytes.len() {
        let dlat = next_value(bytes, &mut index)?;
        if index >= bytes.len() {
            return Err(PolylineError::malformed(
                index,
                MalformedReason::MissingLongitude,
            ));
        }
        let dlng = next_value(bytes, &mut index)?;

        lat = lat
            .checked_add(dlat)
            .ok_or(PolylineError::malformed(index, MalformedReason::AccumulatorOverflow))?;
        lng = lng
            .checked_add(dlng)
            .ok_or(PolylineError::malformed(index, MalformedReason::AccumulatorOverflow))?;

        polyline.push(Coordinate::new(
            lat as f64 / PRECISION_FACTOR,
            lng as f64 / PRECISION_FACTOR,
        ));
    }

    Ok(polyline)
}

/// Reads one value group starting at `*index`, advancing past it.
fn next_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let start = *index;
    let mut result = 0u64;

    for chunk_index in 0..MAX_CHUNKS {
        let Some(&byte) = bytes.get(*index) else {
            return Err(PolylineError::malformed(
                *index,
                MalformedReason::TruncatedChain,
            ));
        };
        let chunk = match byte.checked_sub(CHUNK_OFFSET) {
            Some(chunk) if chunk < 64 => u64::from(chunk),
            _ => {
                return Err(PolylineError::malformed(
                    *index,
                    MalformedReason::InvalidCharacter(byte),
                ));
            }
        };

        result |= (chunk & CHUNK_MASK) << (5 * chunk_index);
        *index += 1;

        if chunk & CONTINUATION_BIT == 0 {
            return Ok(zigzag_decode(result));
        }
    }

    Err(PolylineError::malformed(start, MalformedReason::ValueTooLong))
}

fn zigzag_decode(value: u64) -> i64 {
    let magnitude = (value >> 1) as i64;
    if value & 1 == 1 { !magnitude } else { magnitude }
}

fn zigzag_encode(value: i64) -> u64 {
    let shifted = value << 1;
    (if value < 0 { !shifted } else { shifted }) as u64
}

fn push_value(out: &mut String, value: i64) {
    let mut remaining = zigzag_encode(value);
    while remaining >= CONTINUATION_BIT {
        let chunk = (CONTINUATION_BIT | (remaining & CHUNK_MASK)) as u8;
        out.push(char::from(chunk + CHUNK_OFFSET));
        remaining >>= 5;
    }
    out.push(char::from(remaining as u8 + CHUNK_OFFSET));
}

fn scale(degrees: f64) -> Option<i64> {
    let scaled = (degrees * PRECISION_FACTOR).round();
    if !scaled.is_finite() || scaled < f64::from(i32::MIN) || scaled > f64::from(i32::MAX) {
        return None;
    }
    Some(scaled as i64)
}

fn delta(current: i64, previous: i64) -> Option<i64> {
    i32::try_from(current - previous).ok().map(i64::from)
}
