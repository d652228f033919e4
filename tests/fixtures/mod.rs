//! Test fixtures for route-polyline.
//!
//! Provides realistic test data: real Dresden locations (from
//! OpenStreetMap) arranged as an ordered delivery tour.

pub mod dresden_route;

pub use dresden_route::*;
