use serde::{Deserialize, Serialize};

/// A property within the search radius, annotated with its distance from
/// the resolved target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyMatch {
    pub name: String,
    pub distance_km: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Response body for the search endpoint; also the unit stored in the
/// response cache
///
/// `message` is omitted from the JSON when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub properties: Vec<PropertyMatch>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}
