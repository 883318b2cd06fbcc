use std::fmt;

/// Position of an item inside the catalog it was loaded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// A product card as read from the rendered page.
///
/// `original_position` is the item's index within its category group as
/// first rendered. It is assigned when the catalog is built and is the
/// baseline for [`SortMode::Original`](crate::SortMode::Original).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogItem {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub category: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub thumbnail: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing))]
    pub original_position: usize,
}

impl CatalogItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            thumbnail: None,
            original_position: 0,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Case-insensitive substring match against name and description.
    /// `needle` must already be normalized with
    /// [`normalize_search`](crate::normalize_search).
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle_matches_everything() {
        let item = CatalogItem::new("Hex bolt", "", "fasteners");
        assert!(item.matches_search(""));
    }

    #[test]
    fn search_looks_at_name_and_description() {
        let item = CatalogItem::new(
            "Anchor",
            "Zinc plated BOLT anchor for concrete",
            "fasteners",
        );
        assert!(item.matches_search("bolt"));
        assert!(item.matches_search("anchor"));
        assert!(!item.matches_search("washer"));
    }
}
