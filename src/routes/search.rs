use std::sync::Arc;
use std::time::Instant;

use actix_web::{web, HttpResponse, Responder};

use crate::core::{LocationResolver, SearchEngine};
use crate::models::{Resolution, SearchQuery, SearchResponse};
use crate::services::ResponseCache;

/// Application state shared across all handlers
///
/// Every component is constructed once at startup and shared by reference;
/// the cache is the only piece with interior mutability.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<LocationResolver>,
    pub engine: Arc<SearchEngine>,
    pub cache: Arc<ResponseCache>,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/search", web::get().to(search));
}

/// Property search endpoint
///
/// GET /search?q=<location>
///
/// Resolves the query to a reference location (exactly, or through a
/// one-edit fuzzy match) and returns all catalog properties within the
/// search radius, closest first. A missing or empty `q` is a plain-text
/// 400 and never touches the cache.
async fn search(state: web::Data<AppState>, query: web::Query<SearchQuery>) -> impl Responder {
    let raw = match query.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => q,
        _ => {
            return HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body("Query parameter 'q' is required");
        }
    };

    let response = handle_query(&state, raw);
    HttpResponse::Ok().json(response.as_ref())
}

/// Cache-then-compute orchestration for a single query
///
/// The cache is probed with the normalized raw query, but a computed
/// response is stored under the resolved reference key, so every
/// misspelling of one location lands on a single entry. A probe therefore
/// only hits when the query text equals a previously stored key; fuzzy
/// variants of a stored key recompute and overwrite the same entry.
pub fn handle_query(state: &AppState, raw_query: &str) -> Arc<SearchResponse> {
    let started = Instant::now();
    let probe_key = raw_query.trim().to_lowercase();

    if let Some(cached) = state.cache.get(&probe_key) {
        return cached;
    }

    let resolution = state.resolver.resolve(raw_query);

    let response = match &resolution {
        Resolution::Unresolved { .. } => SearchResponse {
            properties: Vec::new(),
            message: "Location not recognized".to_string(),
        },
        Resolution::Resolved {
            latitude,
            longitude,
            ..
        } => {
            let properties = state.engine.search(*latitude, *longitude);
            let radius_km = state.engine.radius_km();
            let message = if properties.is_empty() {
                format!("No properties found within {}km", radius_km)
            } else {
                format!("Found {} properties within {}km", properties.len(), radius_km)
            };
            SearchResponse {
                properties,
                message,
            }
        }
    };

    let response = Arc::new(response);
    state.cache.insert(resolution.cache_key(), Arc::clone(&response));

    tracing::debug!("Search for '{}' completed in {:?}", raw_query, started.elapsed());

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fuzzy;
    use crate::services::Catalog;

    fn test_state() -> AppState {
        let catalog = Catalog::load_embedded().unwrap();
        AppState {
            resolver: Arc::new(LocationResolver::new(
                catalog.reference_locations,
                fuzzy::MAX_EDIT_DISTANCE,
            )),
            engine: Arc::new(SearchEngine::new(Arc::new(catalog.properties), 50)),
            cache: Arc::new(ResponseCache::new()),
        }
    }

    #[test]
    fn test_resolved_query_reports_count() {
        let state = test_state();

        let response = handle_query(&state, "udaipur");

        assert_eq!(response.properties.len(), 3);
        assert_eq!(response.message, "Found 3 properties within 50km");
    }

    #[test]
    fn test_unresolved_query_is_cached() {
        let state = test_state();

        let response = handle_query(&state, "xyzzy");

        assert!(response.properties.is_empty());
        assert_eq!(response.message, "Location not recognized");
        assert!(state.cache.get("xyzzy").is_some());
    }

    #[test]
    fn test_repeat_query_served_from_cache() {
        let state = test_state();

        let first = handle_query(&state, "jaipur");
        let second = handle_query(&state, "jaipur");

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_fuzzy_variant_stored_under_reference_key() {
        let state = test_state();

        handle_query(&state, "udaipu");

        assert!(state.cache.get("udaipur").is_some());
        assert!(state.cache.get("udaipu").is_none());
    }
}
