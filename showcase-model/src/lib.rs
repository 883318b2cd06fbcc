//! Core data model definitions shared across showcase crates.
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod events;
pub mod filter;
pub mod slide;

// Intentionally curated re-exports for downstream consumers.
pub use catalog::{CatalogItem, ItemId};
pub use error::ModelError;
pub use events::SlideChange;
pub use filter::{CategoryFilter, FilterState, SortMode, normalize_search};
pub use slide::Slide;
