//! Test fixtures for postal-route-planner.
//!
//! Provides:
//! - Real Singapore postal codes with coordinates, grouped by region
//! - A map-backed mock geocoder
//! - Parsing helpers for terse test bodies

pub mod singapore_codes;

use std::collections::HashMap;

use postal_route_planner::code::PostalCode;
use postal_route_planner::traits::Geocoder;

pub use singapore_codes::*;

/// Parses a raw code, panicking on bad fixture data.
pub fn code(raw: &str) -> PostalCode {
    PostalCode::parse(raw).unwrap()
}

/// Parses a batch of raw codes.
pub fn codes(raw: &[&str]) -> Vec<PostalCode> {
    raw.iter().map(|r| code(r)).collect()
}

/// Geocoder backed by a fixed code → coordinate map.
///
/// Codes absent from the map fail to resolve, which is how unresolvable
/// codes are simulated.
pub struct MockGeocoder {
    known: HashMap<PostalCode, (f64, f64)>,
}

impl MockGeocoder {
    pub fn new(entries: &[(&str, (f64, f64))]) -> Self {
        Self {
            known: entries
                .iter()
                .map(|(raw, coords)| (code(raw), *coords))
                .collect(),
        }
    }

    /// A geocoder that resolves nothing.
    pub fn empty() -> Self {
        Self::new(&[])
    }

    /// A geocoder seeded with every fixture location.
    pub fn with_fixture_locations() -> Self {
        let entries: Vec<(&str, (f64, f64))> = singapore_codes::ALL_LOCATIONS
            .iter()
            .map(|location| (location.code, location.coords()))
            .collect();
        Self::new(&entries)
    }
}

impl Geocoder for MockGeocoder {
    fn resolve(&self, code: &PostalCode) -> Option<(f64, f64)> {
        self.known.get(code).copied()
    }
}
