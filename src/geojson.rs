//! GeoJSON adapter for polyline geometries.
//!
//! GeoJSON positions are longitude-first, while the rest of this crate
//! (and the polyline wire format) is latitude-first. This module owns
//! that swap in both directions and nothing else.

use std::fmt;

use geojson::{Geometry, Value};

use crate::codec;
use crate::polyline::Polyline;

/// Error returned when a GeoJSON geometry cannot be read back as a
/// polyline. These are failure modes of the input geometry itself; the
/// mapping adds none of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FromGeoJsonError {
    /// The geometry is not a `LineString`.
    NotALineString,
    /// A position had fewer than the two components a coordinate needs.
    InvalidPosition { index: usize },
}

impl fmt::Display for FromGeoJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FromGeoJsonError::NotALineString => write!(f, "geometry is not a LineString"),
            FromGeoJsonError::InvalidPosition { index } => {
                write!(f, "position {} has fewer than two components", index)
            }
        }
    }
}

impl std::error::Error for FromGeoJsonError {}

impl Polyline {
    /// Returns the polyline as a GeoJSON `LineString` geometry.
    ///
    /// Positions come out `[longitude, latitude]` per the GeoJSON
    /// convention.
    pub fn to_geojson(&self) -> Geometry {
        let positions = self
            .points()
            .iter()
            .map(|&(lat, lng)| vec![lng, lat])
            .collect();
        Geometry::new(Value::LineString(positions))
    }

    /// Reads a GeoJSON `LineString` geometry back into a polyline,
    /// swapping positions to (latitude, longitude).
    ///
    /// Extra position components beyond the first two (altitude, per
    /// RFC 7946) are ignored.
    pub fn from_geojson(geometry: &Geometry) -> Result<Self, FromGeoJsonError> {
        let Value::LineString(positions) = &geometry.value else {
            return Err(FromGeoJsonError::NotALineString);
        };

        let mut points = Vec::with_capacity(positions.len());
        for (index, position) in positions.iter().enumerate() {
            match position.as_slice() {
                [lng, lat, ..] => points.push((*lat, *lng)),
                _ => return Err(FromGeoJsonError::InvalidPosition { index }),
            }
        }

        Ok(Self::new(points))
    }
}

/// Decodes a polyline6 string straight to a GeoJSON `LineString`.
///
/// Shorthand for the common boundary case of handing a route geometry to
/// a map layer. Decoding is as lenient as [`codec::decode`].
pub fn to_geojson(encoded: &str) -> Geometry {
    Polyline::new(codec::decode(encoded)).to_geojson()
}
