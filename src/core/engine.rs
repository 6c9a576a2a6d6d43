use std::sync::Arc;

use crate::core::distance::{calculate_bounding_box, haversine_distance, is_within_bounding_box};
use crate::models::{Property, PropertyMatch};

/// Scans the property catalog around a target point
///
/// # Pipeline Stages
/// 1. Bounding box pre-filter
/// 2. Haversine distance + radius filter (inclusive)
/// 3. Stable ascending sort by distance
#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Arc<Vec<Property>>,
    radius_km: u16,
}

impl SearchEngine {
    pub fn new(catalog: Arc<Vec<Property>>, radius_km: u16) -> Self {
        Self { catalog, radius_km }
    }

    pub fn radius_km(&self) -> u16 {
        self.radius_km
    }

    /// Find all catalog properties within the radius of the target,
    /// closest first
    ///
    /// An empty result is a valid outcome, not an error. The sort is
    /// stable, so ties on distance keep catalog order.
    pub fn search(&self, latitude: f64, longitude: f64) -> Vec<PropertyMatch> {
        let radius = f64::from(self.radius_km);
        let bbox = calculate_bounding_box(latitude, longitude, radius);

        let mut matches: Vec<PropertyMatch> = self
            .catalog
            .iter()
            .filter(|property| {
                is_within_bounding_box(property.latitude, property.longitude, &bbox)
            })
            .filter_map(|property| {
                let distance_km =
                    haversine_distance(latitude, longitude, property.latitude, property.longitude);
                if distance_km <= radius {
                    Some(PropertyMatch {
                        name: property.name.clone(),
                        distance_km,
                        latitude: property.latitude,
                        longitude: property.longitude,
                    })
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matches
    }
}
