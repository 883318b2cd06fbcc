//! Filter state ⇄ URL query string.
//!
//! Only non-default fields are written: `search` (normalized term),
//! `category` (tag, omitted for "all") and `sort` (JSON object of category
//! to mode). Reading is forgiving: a `sort` value that is not a JSON object
//! of strings is dropped entirely, and entries naming an unknown mode are
//! dropped one by one.

use std::collections::BTreeMap;

use showcase_model::{CategoryFilter, FilterState, SortMode, normalize_search};
use url::Url;
use url::form_urlencoded;

pub const SEARCH_PARAM: &str = "search";
pub const CATEGORY_PARAM: &str = "category";
pub const SORT_PARAM: &str = "sort";

/// Serialize `state`; `None` when every field is at its default.
pub fn encode_query(state: &FilterState) -> Option<String> {
    if state.is_default() {
        return None;
    }
    let mut query = form_urlencoded::Serializer::new(String::new());
    if !state.search_term.is_empty() {
        query.append_pair(SEARCH_PARAM, &state.search_term);
    }
    if let CategoryFilter::Tag(tag) = &state.category {
        query.append_pair(CATEGORY_PARAM, tag);
    }
    if !state.sort.is_empty() {
        match serde_json::to_string(&state.sort) {
            Ok(json) => {
                query.append_pair(SORT_PARAM, &json);
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not serialize sort state")
            }
        }
    }
    Some(query.finish())
}

/// Parse a query string (with or without the leading `?`).
pub fn decode_query(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = FilterState::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            SEARCH_PARAM => state.search_term = normalize_search(&value),
            CATEGORY_PARAM => state.category = CategoryFilter::from_tag(&value),
            SORT_PARAM => state.sort = decode_sort(&value),
            _ => {}
        }
    }
    state
}

pub fn state_from_url(url: &Url) -> FilterState {
    url.query().map(decode_query).unwrap_or_default()
}

/// The same location with its query replaced by `state`. Path and fragment
/// are kept; the `?` disappears when the state is default.
pub fn apply_to_url(url: &Url, state: &FilterState) -> Url {
    let mut next = url.clone();
    next.set_query(encode_query(state).as_deref());
    next
}

fn decode_sort(raw: &str) -> BTreeMap<String, SortMode> {
    let entries: BTreeMap<String, String> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(error = %err, raw, "discarding malformed sort state");
            return BTreeMap::new();
        }
    };
    entries
        .into_iter()
        .filter_map(|(category, mode)| match mode.parse::<SortMode>() {
            Ok(mode) => Some((category, mode)),
            Err(err) => {
                tracing::warn!(%category, error = %err, "dropping sort entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(search: &str, category: &str) -> FilterState {
        let mut s = FilterState::default();
        s.set_search(search);
        s.category = CategoryFilter::from_tag(category);
        s
    }

    #[test]
    fn default_state_has_no_query() {
        assert_eq!(encode_query(&FilterState::default()), None);
        let url = Url::parse("https://example.com/catalog.html?search=x#top").unwrap();
        let cleared = apply_to_url(&url, &FilterState::default());
        assert_eq!(cleared.as_str(), "https://example.com/catalog.html#top");
    }

    #[test]
    fn only_non_default_fields_are_written() {
        assert_eq!(
            encode_query(&state("bolt", "all")).as_deref(),
            Some("search=bolt")
        );
        assert_eq!(
            encode_query(&state("", "fasteners")).as_deref(),
            Some("category=fasteners")
        );
    }

    #[test]
    fn search_and_category_survive_a_round_trip() {
        let original = state("Hex bolt", "fasteners");
        let query = encode_query(&original).unwrap();
        assert_eq!(query, "search=hex+bolt&category=fasteners");
        assert_eq!(decode_query(&query), original);
    }

    #[test]
    fn sort_is_json_encoded() {
        let mut s = FilterState::default();
        s.sort.insert("tools".into(), SortMode::NameDescending);
        s.sort.insert("fasteners".into(), SortMode::NameAscending);
        let query = encode_query(&s).unwrap();
        let decoded = decode_query(&format!("?{query}"));
        assert_eq!(decoded, s);
    }

    #[test]
    fn malformed_sort_is_treated_as_absent() {
        let decoded = decode_query("search=bolt&sort=%7Bnot-json");
        assert_eq!(decoded.search_term, "bolt");
        assert!(decoded.sort.is_empty());

        let decoded = decode_query("sort=%5B1%2C2%5D");
        assert!(decoded.sort.is_empty());
    }

    #[test]
    fn unknown_sort_modes_are_dropped_individually() {
        let decoded = decode_query(
            "sort=%7B%22tools%22%3A%22name-asc%22%2C%22pipes%22%3A%22price%22%7D",
        );
        assert_eq!(decoded.sort.len(), 1);
        assert_eq!(decoded.sort_for("tools"), SortMode::NameAscending);
        assert_eq!(decoded.sort_for("pipes"), SortMode::Original);
    }

    #[test]
    fn incoming_search_is_normalized() {
        let decoded = decode_query("search=%20%20BOLT%20&category=all");
        assert_eq!(decoded.search_term, "bolt");
        assert!(decoded.category.is_all());
    }

    #[test]
    fn url_without_query_yields_default_state() {
        let url = Url::parse("https://example.com/catalog.html").unwrap();
        assert!(state_from_url(&url).is_default());
    }
}
