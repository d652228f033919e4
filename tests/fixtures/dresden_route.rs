//! Real Dresden locations for realistic route fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Together they trace a
//! plausible delivery tour through the city, so order is meaningful.

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
// Altstadt landmarks (dense cluster, small deltas)
// ============================================================================

pub const ALTSTADT: &[Location] = &[
    Location::new("Frauenkirche", 51.051902, 13.741662),
    Location::new("Kreuzkirche", 51.048611, 13.738611),
    Location::new("Altmarkt", 51.049259, 13.738344),
    Location::new("Zwinger", 51.053333, 13.733889),
    Location::new("Semperoper", 51.054397, 13.735291),
];

// ============================================================================
// Neustadt (north of the Elbe)
// ============================================================================

pub const NEUSTADT: &[Location] = &[
    Location::new("Goldener Reiter", 51.056667, 13.740833),
    Location::new("Albertplatz", 51.063526, 13.746551),
    Location::new("Bahnhof Neustadt", 51.065602, 13.740744),
    Location::new("Pfunds Molkerei", 51.067778, 13.750833),
];

// ============================================================================
// Outliers (large deltas between consecutive points)
// ============================================================================

pub const OUTLIERS: &[Location] = &[
    Location::new("Hauptbahnhof", 51.039917, 13.733107),
    Location::new("Grosser Garten", 51.037778, 13.762222),
    Location::new("Blaues Wunder", 51.053055, 13.810833),
];

/// An ordered tour: Hauptbahnhof depot, through the Altstadt, across the
/// river into the Neustadt, then out east along the Elbe.
pub fn delivery_tour() -> Vec<(f64, f64)> {
    let mut tour = vec![OUTLIERS[0].coords()];
    tour.extend(ALTSTADT.iter().map(Location::coords));
    tour.extend(NEUSTADT.iter().map(Location::coords));
    tour.push(OUTLIERS[1].coords());
    tour.push(OUTLIERS[2].coords());
    tour
}
