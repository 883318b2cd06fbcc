use std::cmp::Ordering;

use showcase_model::{CatalogItem, SortMode};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Approximates locale collation for product names: accents are ignored at
/// the primary level and only break ties afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    secondary: String,
}

impl CollationKey {
    pub fn new(name: &str) -> Self {
        let secondary = name.to_lowercase();
        let primary = secondary
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect();
        Self { primary, secondary }
    }
}

pub fn compare_names(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Order two items of the same category under `mode`. Equal names fall
/// back to original position so the result is deterministic.
pub fn compare_items(a: &CatalogItem, b: &CatalogItem, mode: SortMode) -> Ordering {
    let by_name = match mode {
        SortMode::Original => Ordering::Equal,
        SortMode::NameAscending => compare_names(&a.name, &b.name),
        SortMode::NameDescending => compare_names(&b.name, &a.name),
    };
    by_name.then_with(|| a.original_position.cmp(&b.original_position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_is_ignored() {
        assert_eq!(compare_names("bolt", "BOLT"), Ordering::Equal);
        assert_eq!(compare_names("anchor", "Bolt"), Ordering::Less);
    }

    #[test]
    fn accents_sort_with_their_base_letter() {
        assert_eq!(compare_names("Ángulo", "Brida"), Ordering::Less);
        assert_eq!(compare_names("émbolo", "eje"), Ordering::Greater);
        assert_eq!(compare_names("Tuerca", "Tuérca"), Ordering::Less);
    }

    #[test]
    fn ties_use_original_position() {
        let mut a = CatalogItem::new("Clamp", "", "tools");
        let mut b = CatalogItem::new("clamp", "", "tools");
        a.original_position = 1;
        b.original_position = 0;
        assert_eq!(compare_items(&a, &b, SortMode::NameAscending), Ordering::Greater);
        assert_eq!(compare_items(&a, &b, SortMode::NameDescending), Ordering::Greater);
        assert_eq!(compare_items(&a, &b, SortMode::Original), Ordering::Greater);
    }
}
