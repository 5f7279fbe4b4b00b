//! OneMap HTTP geocoder and the per-session coordinate cache.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, trace};

use crate::code::PostalCode;
use crate::traits::Geocoder;

/// Memoizing wrapper over a [`Geocoder`].
///
/// Each code is looked up at most once per cache lifetime; the outcome is
/// stored either way, so a failed lookup is never retried. The cache is owned
/// by one optimizer instance and lives exactly as long as it — there is no
/// expiry or invalidation. External geocoders are rate-limited and slow, so
/// eliminating duplicate calls within a session is worth the staleness risk.
#[derive(Debug)]
pub struct CoordinateCache<G> {
    geocoder: G,
    entries: HashMap<PostalCode, Option<(f64, f64)>>,
}

impl<G: Geocoder> CoordinateCache<G> {
    pub fn new(geocoder: G) -> Self {
        Self {
            geocoder,
            entries: HashMap::new(),
        }
    }

    /// Resolves a code to a coordinate, consulting the geocoder on first use.
    pub fn resolve(&mut self, code: &PostalCode) -> Option<(f64, f64)> {
        if let Some(cached) = self.entries.get(code) {
            trace!(code = code.as_str(), "coordinate cache hit");
            return *cached;
        }

        debug!(code = code.as_str(), "coordinate cache miss, querying geocoder");
        let resolved = self.geocoder.resolve(code);
        self.entries.insert(code.clone(), resolved);
        resolved
    }

    /// Number of codes looked up so far (resolved or not).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Connection settings for the OneMap search API.
#[derive(Debug, Clone)]
pub struct OneMapConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OneMapConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.onemap.gov.sg".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Geocoder backed by OneMap, Singapore's official geocoding service.
///
/// One GET per lookup, no retries: any transport error, non-2xx status, or
/// empty result set collapses to `None`. Retry and fallback policy belongs to
/// callers, not here.
#[derive(Debug, Clone)]
pub struct OneMapClient {
    config: OneMapConfig,
    client: reqwest::blocking::Client,
}

impl OneMapClient {
    pub fn new(config: OneMapConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for OneMapClient {
    fn resolve(&self, code: &PostalCode) -> Option<(f64, f64)> {
        let url = format!(
            "{}/api/common/elastic/search?searchVal={}&returnGeom=Y&getAddrDetails=N",
            self.config.base_url,
            code.as_str()
        );

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<SearchResponse>());

        match response {
            Ok(body) => {
                let hit = body.results.into_iter().next()?;
                let lat = hit.latitude.parse::<f64>().ok()?;
                let lng = hit.longitude.parse::<f64>().ok()?;
                Some((lat, lng))
            }
            Err(err) => {
                debug!(code = code.as_str(), error = %err, "geocoding request failed");
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

// OneMap serializes coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "LATITUDE")]
    latitude: String,
    #[serde(rename = "LONGITUDE")]
    longitude: String,
}
