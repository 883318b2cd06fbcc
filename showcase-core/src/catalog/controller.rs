//! Catalog controller.
//!
//! Items are grouped by category in first-seen order. Every state change
//! goes through [`Catalog::reapply`] except a sort change, which only
//! reorders the visible items of the affected category. Presentation order
//! inside a group mirrors how the page re-appends cards: hidden cards keep
//! their relative place ahead of the visible ones, which are sorted.

use showcase_model::{CatalogItem, CategoryFilter, FilterState, ItemId, SortMode};
use url::Url;

use super::sorting::compare_items;
use super::url_state::{apply_to_url, state_from_url};
use crate::config::CatalogConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    tag: String,
    order: Vec<ItemId>,
    shown: bool,
}

impl CategoryGroup {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Presentation order, hidden items included.
    pub fn order(&self) -> &[ItemId] {
        &self.order
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Counters exposed to the results banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    pub visible: usize,
    pub total: usize,
    pub no_results: bool,
}

impl RenderSummary {
    /// The counter and the no-results notice are never shown together.
    pub fn show_results_counter(&self) -> bool {
        !self.no_results
    }
}

#[derive(Debug)]
pub struct Catalog {
    config: CatalogConfig,
    items: Vec<CatalogItem>,
    visible: Vec<bool>,
    thumbnail_hidden: Vec<bool>,
    groups: Vec<CategoryGroup>,
    state: FilterState,
    summary: RenderSummary,
    location: Option<Url>,
}

impl Catalog {
    /// Catalog with default filters and no address bar attached.
    pub fn new(items: Vec<CatalogItem>, config: CatalogConfig) -> Self {
        let mut catalog = Self::build(items, config, None);
        catalog.reapply();
        catalog
    }

    /// Page-load initialisation. When URL persistence is on, filter state
    /// is read from `location` before the first render.
    pub fn load(items: Vec<CatalogItem>, config: CatalogConfig, location: Option<Url>) -> Self {
        let mut catalog = Self::build(items, config, location);
        if catalog.config.persist_in_url {
            if let Some(url) = &catalog.location {
                catalog.state = state_from_url(url);
                tracing::debug!(state = ?catalog.state, "restored filters from url");
            }
        }
        catalog.reapply();
        catalog
    }

    fn build(mut items: Vec<CatalogItem>, config: CatalogConfig, location: Option<Url>) -> Self {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        for (index, item) in items.iter_mut().enumerate() {
            let pos = match groups.iter().position(|g| g.tag == item.category) {
                Some(pos) => pos,
                None => {
                    groups.push(CategoryGroup {
                        tag: item.category.clone(),
                        order: Vec::new(),
                        shown: true,
                    });
                    groups.len() - 1
                }
            };
            let group = &mut groups[pos];
            item.original_position = group.order.len();
            group.order.push(ItemId(index));
        }

        let len = items.len();
        Self {
            config,
            items,
            visible: vec![true; len],
            thumbnail_hidden: vec![false; len],
            groups,
            state: FilterState::default(),
            summary: RenderSummary::default(),
            location,
        }
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.state.set_search(term);
        self.reapply();
        self.sync_location();
    }

    pub fn set_category(&mut self, tag: &str) {
        self.state.category = CategoryFilter::from_tag(tag);
        self.reapply();
        self.sync_location();
    }

    /// Store `mode` for `category` and re-sort only that group's visible
    /// items.
    pub fn set_sort(&mut self, category: &str, mode: SortMode) {
        self.state.sort.insert(category.to_string(), mode);
        match self.groups.iter().position(|g| g.tag == category) {
            Some(index) => self.sort_group(index),
            None => tracing::debug!(category, "sort set for unknown category"),
        }
        self.sync_location();
    }

    pub fn clear_all(&mut self) {
        self.state.reset();
        self.reapply();
        self.sync_location();
    }

    /// Re-derive visibility, group display, per-group order and counters.
    pub fn reapply(&mut self) {
        let search = &self.state.search_term;
        let category = &self.state.category;

        for (item, visible) in self.items.iter().zip(self.visible.iter_mut()) {
            *visible = item.matches_search(search) && category.matches(&item.category);
        }

        for group in self.groups.iter_mut() {
            let has_visible = group.order.iter().any(|id| self.visible[id.0]);
            group.shown = category.matches(&group.tag) && has_visible;
        }

        for index in 0..self.groups.len() {
            if self.groups[index].shown {
                self.sort_group(index);
            }
        }

        let visible = self.visible.iter().filter(|v| **v).count();
        self.summary = RenderSummary {
            visible,
            total: self.items.len(),
            no_results: visible == 0,
        };
        tracing::debug!(
            visible,
            total = self.items.len(),
            search = %self.state.search_term,
            category = %self.state.category,
            "catalog reapplied"
        );
    }

    pub fn search(&mut self, term: &str) {
        self.set_search_term(term);
    }

    pub fn filter_by_category(&mut self, tag: &str) {
        self.set_category(tag);
    }

    pub fn clear_filters(&mut self) {
        self.clear_all();
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Snapshot of the current filters.
    pub fn get_state(&self) -> FilterState {
        self.state.clone()
    }

    pub fn summary(&self) -> RenderSummary {
        self.summary
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.get(id.0)
    }

    pub fn is_visible(&self, id: ItemId) -> bool {
        self.visible.get(id.0).copied().unwrap_or(false)
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    pub fn group(&self, tag: &str) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.tag == tag)
    }

    pub fn is_group_shown(&self, tag: &str) -> bool {
        self.group(tag).is_some_and(CategoryGroup::is_shown)
    }

    /// Visible items of `tag` in presentation order.
    pub fn visible_in(&self, tag: &str) -> Vec<&CatalogItem> {
        self.group(tag)
            .map(|group| {
                group
                    .order
                    .iter()
                    .filter(|id| self.visible[id.0])
                    .map(|id| &self.items[id.0])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every visible item, groups in page order.
    pub fn visible_items(&self) -> Vec<&CatalogItem> {
        self.groups
            .iter()
            .filter(|g| g.shown)
            .flat_map(|g| self.visible_in(&g.tag))
            .collect()
    }

    /// Current address bar, kept in step with the filters.
    pub fn location(&self) -> Option<&Url> {
        self.location.as_ref()
    }

    /// Hide the thumbnail of an item whose image failed to load.
    pub fn thumbnail_failed(&mut self, id: ItemId) {
        match self.thumbnail_hidden.get_mut(id.0) {
            Some(hidden) => *hidden = true,
            None => tracing::debug!(%id, "thumbnail failure for unknown item"),
        }
    }

    pub fn is_thumbnail_hidden(&self, id: ItemId) -> bool {
        self.thumbnail_hidden.get(id.0).copied().unwrap_or(false)
    }

    fn sort_group(&mut self, index: usize) {
        let mode = self.state.sort_for(&self.groups[index].tag);
        let items = &self.items;
        let visible = &self.visible;
        let group = &mut self.groups[index];

        let (mut shown, hidden): (Vec<ItemId>, Vec<ItemId>) =
            group.order.iter().copied().partition(|id| visible[id.0]);
        shown.sort_by(|a, b| compare_items(&items[a.0], &items[b.0], mode));
        group.order = hidden.into_iter().chain(shown).collect();
    }

    fn sync_location(&mut self) {
        if !self.config.persist_in_url {
            return;
        }
        if let Some(url) = &self.location {
            let next = apply_to_url(url, &self.state);
            tracing::trace!(url = %next, "replacing location");
            self.location = Some(next);
        }
    }
}
