//! Seeded k-means clustering over geocoded coordinates.

use std::fmt;

use linfa::DatasetBase;
use linfa::prelude::*;
use linfa_clustering::KMeans;
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::traits::Clusterer;

/// K-means clusterer with an explicit seed.
///
/// K-means is randomized by its centroid initialization; seeding the RNG
/// makes plans reproducible across runs. The seed is plain configuration, not
/// a hidden constant, so callers can vary it deliberately.
#[derive(Debug, Clone)]
pub struct SeededKMeans {
    pub seed: u64,
    pub max_iterations: u64,
}

impl Default for SeededKMeans {
    fn default() -> Self {
        Self {
            seed: 0,
            max_iterations: 300,
        }
    }
}

impl SeededKMeans {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

impl Clusterer for SeededKMeans {
    fn cluster(&self, points: &[(f64, f64)], k: usize) -> Result<Vec<usize>, ClusterError> {
        if points.is_empty() {
            return Err(ClusterError::EmptyInput);
        }
        if k == 0 {
            return Err(ClusterError::ZeroClusters);
        }
        if k >= points.len() {
            // As many clusters as points: every point is its own cluster.
            return Ok((0..points.len()).collect());
        }

        let flat: Vec<f64> = points.iter().flat_map(|&(lat, lng)| [lat, lng]).collect();
        let observations = Array2::from_shape_vec((points.len(), 2), flat)
            .map_err(|err| ClusterError::Fit(err.to_string()))?;
        let dataset = DatasetBase::from(observations);

        let rng = StdRng::seed_from_u64(self.seed);
        let model = KMeans::params_with_rng(k, rng)
            .max_n_iterations(self.max_iterations)
            .fit(&dataset)
            .map_err(|err| ClusterError::Fit(err.to_string()))?;

        let labeled = model.predict(dataset);
        debug!(points = points.len(), k, seed = self.seed, "k-means assignment complete");
        Ok(labeled.targets.to_vec())
    }
}

/// Failures from the clustering primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    EmptyInput,
    ZeroClusters,
    Fit(String),
}

impl fmt::Display for ClusterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterError::EmptyInput => write!(f, "no points to cluster"),
            ClusterError::ZeroClusters => write!(f, "cluster count must be at least 1"),
            ClusterError::Fit(message) => write!(f, "k-means fit failed: {message}"),
        }
    }
}

impl std::error::Error for ClusterError {}
