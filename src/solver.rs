//! Day-route planning: capacity mode and cluster mode.
//!
//! One [`RouteOptimizer`] is built per optimization request and owns the full
//! code list plus the coordinate cache. Two strategies are exposed:
//!
//! - **Capacity mode** groups codes into routes of at most `group_size`
//!   stops, each route a fresh nearest-neighbor walk from the start code. No
//!   geocoding is involved; distance is the structural proxy metric.
//! - **Cluster mode** geocodes the pool, partitions it spatially with seeded
//!   k-means, orders each cluster with a continuous nearest-neighbor tour,
//!   and slices the tours into fixed-size day routes.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cluster::{ClusterError, SeededKMeans};
use crate::code::PostalCode;
use crate::distance::nearest;
use crate::geocode::CoordinateCache;
use crate::traits::{Clusterer, Geocoder};

/// One day's itinerary: an ordered list of stops with no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub stops: Vec<PostalCode>,
}

/// The outcome of one optimization pass.
///
/// `dropped` lists codes that could not be geocoded and were therefore left
/// out of cluster-mode routes. Capacity mode never drops anything. Dropping
/// is deliberate but must never be silent; callers decide how to surface it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResult {
    pub routes: Vec<Route>,
    pub dropped: Vec<PostalCode>,
}

impl PlanResult {
    /// Total stops across all routes.
    pub fn total_stops(&self) -> usize {
        self.routes.iter().map(|route| route.stops.len()).sum()
    }
}

/// Planning failures. Configuration problems fail fast before any work;
/// per-code geocoding failures are not errors (see [`PlanResult::dropped`]).
#[derive(Debug)]
pub enum PlanError {
    EmptyCodeList,
    InvalidGroupSize,
    InvalidClusterCount,
    Clustering(ClusterError),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::EmptyCodeList => write!(f, "no postal codes to plan"),
            PlanError::InvalidGroupSize => write!(f, "group size must be at least 1"),
            PlanError::InvalidClusterCount => write!(f, "cluster count must be at least 1"),
            PlanError::Clustering(err) => write!(f, "clustering failed: {err}"),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::Clustering(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ClusterError> for PlanError {
    fn from(err: ClusterError) -> Self {
        PlanError::Clustering(err)
    }
}

/// Session object for one optimization request.
///
/// Owns the input codes, the clustering configuration, and the coordinate
/// cache. The cache accumulates entries for the lifetime of the instance and
/// is never evicted, so a session must not be shared across requests — build
/// a fresh optimizer per request instead.
#[derive(Debug)]
pub struct RouteOptimizer<G> {
    codes: Vec<PostalCode>,
    cache: CoordinateCache<G>,
    clusterer: SeededKMeans,
}

impl<G: Geocoder> RouteOptimizer<G> {
    pub fn new(codes: Vec<PostalCode>, geocoder: G) -> Self {
        Self {
            codes,
            cache: CoordinateCache::new(geocoder),
            clusterer: SeededKMeans::default(),
        }
    }

    /// Overrides the k-means seed used by cluster mode.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.clusterer.seed = seed;
        self
    }

    pub fn codes(&self) -> &[PostalCode] {
        &self.codes
    }

    /// Groups the codes into day routes of at most `group_size` stops.
    ///
    /// Every route restarts its nearest-neighbor walk from `start`: the
    /// anchor resets at the top of each route rather than carrying over from
    /// the previous route's last stop, so each day reads as an itinerary
    /// leaving from the same origin. The start code itself is excluded from
    /// the output if it appears in the pool.
    pub fn optimize_by_capacity(
        &mut self,
        start: &PostalCode,
        group_size: usize,
    ) -> Result<PlanResult, PlanError> {
        if self.codes.is_empty() {
            return Err(PlanError::EmptyCodeList);
        }
        if group_size == 0 {
            return Err(PlanError::InvalidGroupSize);
        }

        let mut remaining = self.codes.clone();
        if let Some(position) = remaining.iter().position(|code| code == start) {
            remaining.remove(position);
        }

        let mut routes = Vec::new();
        while !remaining.is_empty() {
            let mut stops = Vec::with_capacity(group_size.min(remaining.len()));
            let mut anchor = start.clone();

            while stops.len() < group_size && !remaining.is_empty() {
                let Some(index) = nearest(&anchor, &remaining) else {
                    break;
                };
                let next = remaining.remove(index);
                anchor = next.clone();
                stops.push(next);
            }

            debug!(day = routes.len() + 1, stops = stops.len(), "closed day route");
            routes.push(Route { stops });
        }

        info!(days = routes.len(), "capacity plan complete");
        Ok(PlanResult {
            routes,
            dropped: Vec::new(),
        })
    }

    /// Groups the codes into roughly `num_groups` spatial clusters, then into
    /// day routes of `ceil(len / num_groups)` stops.
    ///
    /// The requested group count is advisory: a cluster whose size is not a
    /// multiple of the derived group size produces a short trailing route, so
    /// the total route count can exceed `num_groups`.
    pub fn optimize_by_cluster_count(
        &mut self,
        start: &PostalCode,
        num_groups: usize,
    ) -> Result<PlanResult, PlanError> {
        let clusterer = self.clusterer.clone();
        self.optimize_by_cluster_count_with(start, num_groups, &clusterer)
    }

    /// Cluster-mode planning with an explicit clustering primitive.
    pub fn optimize_by_cluster_count_with<C: Clusterer>(
        &mut self,
        start: &PostalCode,
        num_groups: usize,
        clusterer: &C,
    ) -> Result<PlanResult, PlanError> {
        if self.codes.is_empty() {
            return Err(PlanError::EmptyCodeList);
        }
        if num_groups == 0 {
            return Err(PlanError::InvalidClusterCount);
        }

        let group_size = self.codes.len().div_ceil(num_groups);

        // Geocode by original index; duplicates each resolve independently
        // (the cache absorbs the repeat lookups).
        let mut resolved: Vec<(usize, (f64, f64))> = Vec::new();
        for (index, code) in self.codes.iter().enumerate() {
            if let Some(coords) = self.cache.resolve(code) {
                resolved.push((index, coords));
            }
        }

        let mut dropped: Vec<PostalCode> = Vec::new();
        let clusters: Vec<Vec<PostalCode>> = if resolved.len() < num_groups {
            // Too few coordinates to cluster spatially: fall back to a single
            // cluster holding every input code, resolved or not.
            debug!(
                resolved = resolved.len(),
                requested = num_groups,
                "too few coordinates, using a single cluster"
            );
            vec![self.codes.clone()]
        } else {
            let points: Vec<(f64, f64)> = resolved.iter().map(|&(_, coords)| coords).collect();
            let labels = clusterer.cluster(&points, num_groups)?;

            let mut label_of: Vec<Option<usize>> = vec![None; self.codes.len()];
            for (&(index, _), &label) in resolved.iter().zip(labels.iter()) {
                label_of[index] = Some(label);
            }

            let slots = labels.iter().copied().max().unwrap_or(0) + 1;
            let mut clusters = vec![Vec::new(); slots.max(num_groups)];
            for (code, label) in self.codes.iter().zip(label_of.iter()) {
                match label {
                    Some(label) => clusters[*label].push(code.clone()),
                    None => dropped.push(code.clone()),
                }
            }
            clusters
        };

        if !dropped.is_empty() {
            warn!(
                count = dropped.len(),
                "codes without coordinates excluded from cluster plan"
            );
        }

        let mut routes = Vec::new();
        for cluster in clusters.into_iter().filter(|cluster| !cluster.is_empty()) {
            let tour = nearest_neighbor_tour(start, cluster);
            for chunk in tour.chunks(group_size) {
                routes.push(Route {
                    stops: chunk.to_vec(),
                });
            }
        }

        info!(
            days = routes.len(),
            dropped = dropped.len(),
            "cluster plan complete"
        );
        Ok(PlanResult { routes, dropped })
    }
}

/// Orders a cluster as a continuous nearest-neighbor tour.
///
/// The tour enters the cluster at the code structurally closest to `start`,
/// then always hops to the nearest unvisited code. Unlike capacity mode, the
/// anchor carries forward: this is the classic nearest-neighbor TSP
/// heuristic. The start code picks the entry point via the structural metric
/// even though the cluster was formed spatially.
fn nearest_neighbor_tour(start: &PostalCode, mut pool: Vec<PostalCode>) -> Vec<PostalCode> {
    let mut tour = Vec::with_capacity(pool.len());

    let Some(entry) = nearest(start, &pool) else {
        return tour;
    };

    let mut current = pool.remove(entry);
    loop {
        let next = nearest(&current, &pool);
        tour.push(current);
        match next {
            Some(index) => current = pool.remove(index),
            None => break,
        }
    }

    tour
}
