//! Catalog filter engine: search, category filter, per-category sort and
//! URL state.

pub mod controller;
pub mod sorting;
pub mod source;
pub mod url_state;

pub use controller::{Catalog, CategoryGroup, RenderSummary};
pub use sorting::{CollationKey, compare_names};
pub use source::{load_items, parse_items};
pub use url_state::{
    CATEGORY_PARAM, SEARCH_PARAM, SORT_PARAM, apply_to_url, decode_query,
    encode_query, state_from_url,
};
