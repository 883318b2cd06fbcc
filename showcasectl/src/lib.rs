//! Library half of `showcasectl`: carousel scripts and the text/JSON
//! reports printed by the binary.

pub mod report;
pub mod script;

use showcase_model::SortMode;

pub use report::{CatalogReport, GroupReport, SummaryReport, format_transcript};
pub use script::{ScriptError, Step, StepRecord, parse_script, run_script};

/// Parse a `--sort category=mode` argument.
pub fn parse_sort_arg(raw: &str) -> Result<(String, SortMode), String> {
    let (category, mode) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=MODE, got `{raw}`"))?;
    let category = category.trim();
    if category.is_empty() {
        return Err(format!("missing category in `{raw}`"));
    }
    let mode = mode.trim().parse::<SortMode>().map_err(|err| err.to_string())?;
    Ok((category.to_string(), mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_args() {
        assert_eq!(
            parse_sort_arg("tools=name-desc"),
            Ok(("tools".to_string(), SortMode::NameDescending))
        );
        assert!(parse_sort_arg("tools").is_err());
        assert!(parse_sort_arg("=name-asc").is_err());
        assert!(parse_sort_arg("tools=price").is_err());
    }
}
