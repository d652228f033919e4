//! route-polyline: compact codec for route geometries.
//!
//! Transcodes between polyline-encoded ASCII strings (as emitted by OSRM
//! and consumed by map layers) and ordered (latitude, longitude)
//! sequences, plus a GeoJSON `LineString` adapter for the frontend
//! boundary. The primary variant is polyline6 (six decimal places).

pub mod codec;
pub mod geojson;
pub mod polyline;
pub mod varint;
