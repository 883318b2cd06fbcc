//! Filter state for the catalog and the value types it is built from.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Sentinel used on the wire for "every category".
pub const ALL_CATEGORIES: &str = "all";

/// Presentation order applied to one category group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortMode {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "original"))]
    Original,
    #[cfg_attr(feature = "serde", serde(rename = "name-asc"))]
    NameAscending,
    #[cfg_attr(feature = "serde", serde(rename = "name-desc"))]
    NameDescending,
}

impl SortMode {
    pub fn all() -> &'static [SortMode] {
        &[
            SortMode::Original,
            SortMode::NameAscending,
            SortMode::NameDescending,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Original => "original",
            SortMode::NameAscending => "name-asc",
            SortMode::NameDescending => "name-desc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "original" => Ok(SortMode::Original),
            "name-asc" => Ok(SortMode::NameAscending),
            "name-desc" => Ok(SortMode::NameDescending),
            other => Err(ModelError::UnknownSortMode(other.to_string())),
        }
    }
}

/// Category selection: every group, or exactly one tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    /// `"all"` and blank input select every category.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() || tag == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Tag(tag.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Tag(tag) => tag == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Tag(tag) => tag,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(CategoryFilter::from_tag(&raw))
    }
}

/// Trim and lowercase a raw search string.
pub fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Everything the catalog needs to decide what is visible and in which
/// order. Always derivable from the address bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterState {
    pub search_term: String,
    pub category: CategoryFilter,
    pub sort: BTreeMap<String, SortMode>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored mode for `category`, `Original` when never set.
    pub fn sort_for(&self, category: &str) -> SortMode {
        self.sort.get(category).copied().unwrap_or_default()
    }

    pub fn set_search(&mut self, raw: &str) {
        self.search_term = normalize_search(raw);
    }

    pub fn is_default(&self) -> bool {
        self.search_term.is_empty()
            && self.category.is_all()
            && self.sort.is_empty()
    }

    pub fn reset(&mut self) {
        log::debug!("resetting catalog filter state");
        *self = Self::default();
    }
}
