// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BoundingBox, Property, ReferenceLocation, Resolution};
pub use requests::SearchQuery;
pub use responses::{PropertyMatch, SearchResponse};
