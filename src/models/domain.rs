use serde::{Deserialize, Serialize};

/// A bookable property with a fixed geographic position
///
/// The full set forms the static catalog, loaded once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A known place name with canonical coordinates
///
/// Keys are lowercase canonical names; queries are matched against them
/// exactly first, then fuzzily.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceLocation {
    pub key: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Outcome of resolving a free-text query against the reference locations
///
/// Carries the cache key the response for this query must be stored under:
/// the matched reference key on success, the normalized raw query on a miss.
/// A miss is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved {
        latitude: f64,
        longitude: f64,
        cache_key: String,
    },
    Unresolved {
        cache_key: String,
    },
}

impl Resolution {
    pub fn cache_key(&self) -> &str {
        match self {
            Resolution::Resolved { cache_key, .. } => cache_key,
            Resolution::Unresolved { cache_key } => cache_key,
        }
    }
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}
