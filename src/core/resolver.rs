use std::collections::HashMap;

use crate::core::fuzzy;
use crate::models::{ReferenceLocation, Resolution};

/// Resolves free-text queries to reference-location coordinates
///
/// Holds the fixed reference set in two shapes: a map for exact lookups and
/// the keys in lexicographic order for the fuzzy scan, which makes the
/// tie-break between equally distant candidates deterministic.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    coordinates: HashMap<String, (f64, f64)>,
    sorted_keys: Vec<String>,
    max_edit_distance: usize,
}

impl LocationResolver {
    pub fn new(locations: Vec<ReferenceLocation>, max_edit_distance: usize) -> Self {
        let coordinates: HashMap<String, (f64, f64)> = locations
            .into_iter()
            .map(|loc| (loc.key.to_lowercase(), (loc.latitude, loc.longitude)))
            .collect();

        let mut sorted_keys: Vec<String> = coordinates.keys().cloned().collect();
        sorted_keys.sort();

        Self {
            coordinates,
            sorted_keys,
            max_edit_distance,
        }
    }

    /// Resolve a raw query to target coordinates
    ///
    /// Normalizes the query (trim + lowercase), tries an exact key match,
    /// then falls back to the fuzzy scan. The returned resolution carries
    /// the key the computed response must be cached under: the matched
    /// reference key, or the normalized query itself when nothing matched.
    pub fn resolve(&self, query: &str) -> Resolution {
        let normalized = query.trim().to_lowercase();

        if let Some(&(latitude, longitude)) = self.coordinates.get(&normalized) {
            return Resolution::Resolved {
                latitude,
                longitude,
                cache_key: normalized,
            };
        }

        let matched = fuzzy::best_match(
            &normalized,
            self.sorted_keys.iter().map(String::as_str),
            self.max_edit_distance,
        );

        match matched {
            Some(key) => {
                tracing::debug!("Fuzzy matched '{}' to '{}'", query, key);
                let (latitude, longitude) = self.coordinates[key];
                Resolution::Resolved {
                    latitude,
                    longitude,
                    cache_key: key.to_string(),
                }
            }
            None => Resolution::Unresolved {
                cache_key: normalized,
            },
        }
    }
}
