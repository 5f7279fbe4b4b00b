//! Real Singapore postal codes for realistic test fixtures.
//!
//! Coordinates are approximate building locations. The first two digits of
//! each code are its sector; codes in the same region share nearby sectors,
//! which is what the structural distance metric exploits.

/// A postal code with its geocoded location.
#[derive(Debug, Clone)]
pub struct CodedLocation {
    pub name: &'static str,
    pub code: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl CodedLocation {
    pub const fn new(name: &'static str, code: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            name,
            code,
            lat,
            lng,
        }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Central Business District (sectors 01-04, good start points)
// ============================================================================

pub const CBD: &[CodedLocation] = &[
    CodedLocation::new("Marina Bay Financial Centre", "018956", 1.2816, 103.8541),
    CodedLocation::new("Raffles Place", "048616", 1.2847, 103.8513),
    CodedLocation::new("Suntec City", "038983", 1.2944, 103.8585),
    CodedLocation::new("Tanjong Pagar Centre", "078885", 1.2766, 103.8456),
];

// ============================================================================
// East (Tampines / Bedok, sectors 46-52)
// ============================================================================

pub const EAST: &[CodedLocation] = &[
    CodedLocation::new("Tampines Mall", "529510", 1.3525, 103.9447),
    CodedLocation::new("Tampines Hub", "528523", 1.3532, 103.9404),
    CodedLocation::new("Bedok Mall", "467360", 1.3249, 103.9291),
    CodedLocation::new("Bedok North Ave 1", "460207", 1.3270, 103.9320),
];

// ============================================================================
// West (Jurong, sectors 60-64)
// ============================================================================

pub const WEST: &[CodedLocation] = &[
    CodedLocation::new("JEM", "608549", 1.3331, 103.7430),
    CodedLocation::new("Westgate", "608532", 1.3343, 103.7427),
    CodedLocation::new("Jurong Point", "648886", 1.3397, 103.7067),
    CodedLocation::new("Pioneer Mall", "638617", 1.3425, 103.6974),
];

// ============================================================================
// North (Woodlands, sectors 73-76)
// ============================================================================

pub const NORTH: &[CodedLocation] = &[
    CodedLocation::new("Causeway Point", "738099", 1.4360, 103.7861),
    CodedLocation::new("Woodlands MRT", "738343", 1.4369, 103.7864),
];

/// Every fixture location, all regions.
pub const ALL_LOCATIONS: &[CodedLocation] = &[
    CodedLocation::new("Marina Bay Financial Centre", "018956", 1.2816, 103.8541),
    CodedLocation::new("Raffles Place", "048616", 1.2847, 103.8513),
    CodedLocation::new("Suntec City", "038983", 1.2944, 103.8585),
    CodedLocation::new("Tanjong Pagar Centre", "078885", 1.2766, 103.8456),
    CodedLocation::new("Tampines Mall", "529510", 1.3525, 103.9447),
    CodedLocation::new("Tampines Hub", "528523", 1.3532, 103.9404),
    CodedLocation::new("Bedok Mall", "467360", 1.3249, 103.9291),
    CodedLocation::new("Bedok North Ave 1", "460207", 1.3270, 103.9320),
    CodedLocation::new("JEM", "608549", 1.3331, 103.7430),
    CodedLocation::new("Westgate", "608532", 1.3343, 103.7427),
    CodedLocation::new("Jurong Point", "648886", 1.3397, 103.7067),
    CodedLocation::new("Pioneer Mall", "638617", 1.3425, 103.6974),
    CodedLocation::new("Causeway Point", "738099", 1.4360, 103.7861),
    CodedLocation::new("Woodlands MRT", "738343", 1.4369, 103.7864),
];
