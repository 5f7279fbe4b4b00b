//! Collaborator seams for the planner.
//!
//! The planner core is synchronous and deterministic; everything slow or
//! non-deterministic sits behind these traits so concrete adapters (HTTP
//! geocoders, k-means) can be swapped for mocks in tests.

use crate::cluster::ClusterError;
use crate::code::PostalCode;

/// Resolves a postal code to a `(latitude, longitude)` coordinate.
///
/// Failure to resolve is an expected outcome, not an error: codes without a
/// coordinate are simply skipped by spatially-dependent steps.
pub trait Geocoder {
    fn resolve(&self, code: &PostalCode) -> Option<(f64, f64)>;
}

/// A geocoder that resolves nothing.
///
/// Capacity-mode planning never touches coordinates; sessions that only use
/// that mode can be built over `()` instead of a real geocoder.
impl Geocoder for () {
    fn resolve(&self, _code: &PostalCode) -> Option<(f64, f64)> {
        None
    }
}

/// Partitions a set of coordinates into `k` labeled groups.
///
/// Returns one cluster label per input point, in input order. Implementations
/// must be deterministic for a fixed configuration; see
/// [`crate::cluster::SeededKMeans`].
pub trait Clusterer {
    fn cluster(&self, points: &[(f64, f64)], k: usize) -> Result<Vec<usize>, ClusterError>;
}
