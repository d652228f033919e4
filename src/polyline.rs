//! Polyline representation for route geometries.
//!
//! This module provides a type for working with polylines as decoded
//! coordinate sequences. The compact polyline6 wire format is handled by
//! [`crate::codec`]; this type wraps it with an owned value that internal
//! processing and serialization can pass around.

use serde::{Deserialize, Serialize};

use crate::codec::{self, EncodeError};

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores latitude/longitude points directly for internal processing.
/// Point order traces the path and is preserved through encode/decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Decodes a polyline6 geometry string.
    ///
    /// Follows the lenient contract of [`codec::decode`]: empty input
    /// yields an empty polyline and a truncated tail is dropped.
    pub fn decode(encoded: &str) -> Self {
        Self::new(codec::decode(encoded))
    }

    /// Decodes an optional polyline6 geometry string.
    ///
    /// Route responses carry geometry as an optional field; an absent
    /// geometry is an empty polyline, not an error.
    pub fn from_encoded(encoded: Option<&str>) -> Self {
        match encoded {
            Some(geometry) => Self::decode(geometry),
            None => Self::default(),
        }
    }

    /// Encodes the points as a polyline6 geometry string.
    pub fn encode(&self) -> Result<String, EncodeError> {
        codec::encode(&self.points)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
