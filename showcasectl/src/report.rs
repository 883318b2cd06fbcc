//! Human and JSON renderings of catalog state and carousel transcripts.

use std::fmt::Write as _;

use serde::Serialize;
use showcase_core::catalog::Catalog;
use showcase_model::FilterState;

use crate::script::StepRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupReport {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub visible: usize,
    pub total: usize,
    pub no_results: bool,
}

/// Everything the catalog page would show after the requested changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogReport {
    pub state: FilterState,
    pub groups: Vec<GroupReport>,
    pub summary: SummaryReport,
    pub url: Option<String>,
}

impl CatalogReport {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let groups = catalog
            .groups()
            .iter()
            .filter(|group| group.is_shown())
            .map(|group| GroupReport {
                category: group.tag().to_string(),
                items: catalog
                    .visible_in(group.tag())
                    .into_iter()
                    .map(|item| item.name.clone())
                    .collect(),
            })
            .collect();
        let summary = catalog.summary();
        Self {
            state: catalog.get_state(),
            groups,
            summary: SummaryReport {
                visible: summary.visible,
                total: summary.total,
                no_results: summary.no_results,
            },
            url: catalog.location().map(|url| url.to_string()),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for group in &self.groups {
            let _ = writeln!(out, "{}", group.category);
            for item in &group.items {
                let _ = writeln!(out, "  - {item}");
            }
        }
        if self.summary.no_results {
            out.push_str("No products match the current filters\n");
        } else {
            let _ = writeln!(
                out,
                "Showing {} of {} products",
                self.summary.visible, self.summary.total
            );
        }
        if let Some(url) = &self.url {
            let _ = writeln!(out, "url: {url}");
        }
        out
    }
}

/// One line per step: clock, step, resulting slide and playback state.
pub fn format_transcript(records: &[StepRecord], total: usize) -> String {
    let width = records.iter().map(|r| r.step.len()).max().unwrap_or(0);
    let mut out = String::new();
    for record in records {
        let _ = write!(
            out,
            "{:>9.3}s  {:<width$}  slide {}/{} [{}]",
            record.at_ms as f64 / 1000.0,
            record.step,
            record.current + 1,
            total,
            record.playback,
        );
        if record.changes.len() > 1 {
            let _ = write!(out, " ({} changes)", record.changes.len());
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::config::CatalogConfig;
    use showcase_model::{CatalogItem, SlideChange};
    use url::Url;

    fn catalog() -> Catalog {
        let items = vec![
            CatalogItem::new("Hex bolt", "M8", "fasteners"),
            CatalogItem::new("Wing nut", "Fits any bolt", "fasteners"),
            CatalogItem::new("Hammer", "Claw", "tools"),
        ];
        let url = Url::parse("https://shop.example/catalog.html").unwrap();
        Catalog::load(items, CatalogConfig::default(), Some(url))
    }

    #[test]
    fn text_lists_shown_groups_and_counter() {
        let mut c = catalog();
        c.search("bolt");
        let text = CatalogReport::from_catalog(&c).render_text();
        assert_eq!(
            text,
            "fasteners\n  - Hex bolt\n  - Wing nut\nShowing 2 of 3 products\n\
             url: https://shop.example/catalog.html?search=bolt\n"
        );
    }

    #[test]
    fn no_results_replaces_counter() {
        let mut c = catalog();
        c.search("titanium");
        let report = CatalogReport::from_catalog(&c);
        assert!(report.groups.is_empty());
        let text = report.render_text();
        assert!(text.starts_with("No products match"));
        assert!(!text.contains("Showing"));
    }

    #[test]
    fn json_report_carries_state() {
        let mut c = catalog();
        c.set_category("tools");
        let json = serde_json::to_value(CatalogReport::from_catalog(&c)).unwrap();
        assert_eq!(json["state"]["category"], "tools");
        assert_eq!(json["summary"]["visible"], 1);
        assert_eq!(json["groups"][0]["items"][0], "Hammer");
    }

    #[test]
    fn transcript_lines() {
        let records = vec![StepRecord {
            at_ms: 3_000,
            step: "wait:3s".into(),
            changes: vec![SlideChange { current: 1, total: 5 }],
            current: 1,
            playback: "auto-playing",
            prevent_default: false,
        }];
        assert_eq!(
            format_transcript(&records, 5),
            "    3.000s  wait:3s  slide 2/5 [auto-playing]\n"
        );
    }
}
