//! Errors produced by the polyline codec.

use thiserror::Error;

/// Why an encoded polyline string could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Byte outside the `'?'..='~'` range used by the encoding.
    InvalidCharacter(u8),
    /// Input ended while the continuation bit was still set.
    TruncatedChain,
    /// A latitude group was not followed by a longitude group.
    MissingLongitude,
    /// A single value spanned more chunks than a 32-bit value needs.
    ValueTooLong,
    /// The running accumulator left the representable range.
    AccumulatorOverflow,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::InvalidCharacter(byte) => {
                write!(f, "invalid character 0x{:02x}", byte)
            }
            MalformedReason::TruncatedChain => write!(f, "input ends inside a value"),
            MalformedReason::MissingLongitude => write!(f, "latitude without a longitude"),
            MalformedReason::ValueTooLong => write!(f, "value exceeds 32 bits"),
            MalformedReason::AccumulatorOverflow => write!(f, "coordinate accumulator overflow"),
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolylineError {
    #[error("malformed polyline at byte {position}: {reason}")]
    Malformed {
        position: usize,
        reason: MalformedReason,
    },

    #[error("coordinate {index} does not fit the encoded integer range")]
    EncodingOverflow { index: usize },
}

impl PolylineError {
    pub(crate) fn malformed(position: usize, reason: MalformedReason) -> Self {
        PolylineError::Malformed { position, reason }
    }

    /// True for decode failures, regardless of the exact reason.
    pub fn is_malformed(&self) -> bool {
        matches!(self, PolylineError::Malformed { .. })
    }
}
