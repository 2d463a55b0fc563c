//! Page path mirroring.
//!
//! The selected language pair is reflected in the page path
//! (`/translate/{source}/{target}`) so a path can be shared and reopened with
//! the same selection. With either side unselected the path collapses to
//! `/translate`.

use std::sync::OnceLock;

use regex::Regex;

/// Base path of the translation page.
pub const PAGE_ROOT: &str = "/translate";

static PAGE_PATH_REGEX: OnceLock<Regex> = OnceLock::new();

fn page_path_regex() -> &'static Regex {
    PAGE_PATH_REGEX.get_or_init(|| {
        Regex::new(r"^/translate(?:/([^/?#]+)/([^/?#]+))?/?(?:[?#].*)?$")
            .unwrap_or_else(|e| panic!("invalid page path pattern: {}", e))
    })
}

/// Selections read back out of a page path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSelection {
    pub source_language: Option<String>,
    pub target_language: Option<String>,
}

/// Build the page path for a selection.
pub fn page_path(source_language: Option<&str>, target_language: Option<&str>) -> String {
    match (source_language, target_language) {
        (Some(src), Some(tgt)) if !src.is_empty() && !tgt.is_empty() => {
            format!("{}/{}/{}", PAGE_ROOT, src, tgt)
        }
        _ => PAGE_ROOT.to_string(),
    }
}

/// Read the selection out of a page path.
///
/// Paths that are not the translation page, or that carry only one language,
/// yield an empty selection; the page opens the same way for them.
pub fn parse_page_path(path: &str) -> PageSelection {
    page_path_regex()
        .captures(path.trim())
        .and_then(|caps| {
            let src = caps.get(1)?.as_str().to_string();
            let tgt = caps.get(2)?.as_str().to_string();
            Some(PageSelection {
                source_language: Some(src),
                target_language: Some(tgt),
            })
        })
        .unwrap_or_default()
}
