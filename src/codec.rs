//! Coordinate stream transcoder for polyline-encoded route geometries.
//!
//! Points are stored as deltas from the previous point, scaled to integers
//! at a fixed precision and packed with the [`crate::varint`] codec. This
//! module is the polyline6 variant (scale 10^6), the format OSRM emits for
//! `geometries=polyline6`; the classic five-decimal variant lives in
//! [`polyline5`].
//!
//! The scale is baked into each variant, not passed at runtime. Decoding a
//! string with the wrong variant silently yields plausible but wrong
//! coordinates; producer and consumer must agree on the variant by
//! convention, since nothing in the wire format identifies it.

use std::fmt;

use crate::varint;

const POLYLINE6_SCALE: f64 = 1e6;
const POLYLINE5_SCALE: f64 = 1e5;

/// Error returned by the encode path.
///
/// Decoding never fails: malformed input truncates the result instead
/// (see [`decode`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A coordinate component was NaN or infinite. A non-finite value has
    /// no scaled integer form, and because every later point is stored
    /// relative to it, emitting anything would corrupt the rest of the
    /// line.
    NonFiniteCoordinate { index: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::NonFiniteCoordinate { index } => {
                write!(f, "non-finite coordinate at index {}", index)
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Decodes a polyline6 string into (latitude, longitude) pairs.
///
/// An empty string yields an empty sequence. If the input ends partway
/// through an integer, or after a latitude delta whose longitude delta is
/// missing, the dangling fragment is dropped and the points decoded so far
/// are returned. No error is ever raised.
pub fn decode(encoded: &str) -> Vec<(f64, f64)> {
    decode_scaled(encoded, POLYLINE6_SCALE)
}

/// Encodes (latitude, longitude) pairs into a polyline6 string.
///
/// An empty slice yields an empty string. Non-finite components are
/// rejected with [`EncodeError::NonFiniteCoordinate`].
pub fn encode(points: &[(f64, f64)]) -> Result<String, EncodeError> {
    encode_scaled(points, POLYLINE6_SCALE)
}

/// Decodes many independent polyline6 strings in parallel.
///
/// Route responses usually carry one geometry per leg or sub-tour; each
/// string decodes independently, so the batch fans out across threads.
/// Output order matches input order.
pub fn decode_all<S: AsRef<str> + Sync>(encoded: &[S]) -> Vec<Vec<(f64, f64)>> {
    use rayon::prelude::*;

    encoded
        .par_iter()
        .map(|geometry| decode(geometry.as_ref()))
        .collect()
}

fn decode_scaled(encoded: &str, scale: f64) -> Vec<(f64, f64)> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut pos = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while pos < bytes.len() {
        let Some((delta_lat, after_lat)) = varint::decode(bytes, pos) else {
            tracing::debug!(consumed = pos, "dropping truncated latitude delta");
            break;
        };
        let Some((delta_lng, after_lng)) = varint::decode(bytes, after_lat) else {
            tracing::debug!(consumed = pos, "dropping latitude delta with no longitude");
            break;
        };
        pos = after_lng;
        lat += delta_lat;
        lng += delta_lng;
        points.push((lat as f64 / scale, lng as f64 / scale));
    }

    points
}

fn encode_scaled(points: &[(f64, f64)], scale: f64) -> Result<String, EncodeError> {
    let mut out = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for (index, &(lat, lng)) in points.iter().enumerate() {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(EncodeError::NonFiniteCoordinate { index });
        }

        let lat_scaled = (lat * scale).round() as i64;
        let lng_scaled = (lng * scale).round() as i64;

        varint::encode(lat_scaled - prev_lat, &mut out);
        varint::encode(lng_scaled - prev_lng, &mut out);

        // Track the rounded values, not the raw ones, so rounding error
        // never accumulates across the line: each point is exactly the
        // running sum of the deltas actually emitted.
        prev_lat = lat_scaled;
        prev_lng = lng_scaled;
    }

    Ok(out)
}

/// The classic five-decimal polyline variant (scale 10^5).
///
/// Same wire format and contracts as the module-level [`decode`] and
/// [`encode`], at one hundred-thousandth of a degree precision. This is
/// the default geometry format of OSRM and the one Leaflet et al. expect.
/// Mixing variants across encode and decode is undetectable.
pub mod polyline5 {
    use super::{decode_scaled, encode_scaled, EncodeError, POLYLINE5_SCALE};

    pub fn decode(encoded: &str) -> Vec<(f64, f64)> {
        decode_scaled(encoded, POLYLINE5_SCALE)
    }

    pub fn encode(points: &[(f64, f64)]) -> Result<String, EncodeError> {
        encode_scaled(points, POLYLINE5_SCALE)
    }
}
