use std::sync::OnceLock;

use regex::{Captures, Regex};

pub const DEFAULT_MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

const MAP_MARKER_PATTERN: &str = r"\[(.*?)\]\(maps\)";
const ANCHOR_CLASSES: &str = "text-blue-600 hover:text-blue-800 underline";

/// Turns place markers in generated text into user-facing markup.
pub trait LinkRewriter: Send + Sync + std::fmt::Debug {
    fn rewrite_links(&self, text: &str) -> String;
}

/// Rewrites every `[Name](maps)` marker into an anchor pointing at a map search.
///
/// A single global pass: names are not escaped, deduplicated or checked.
#[derive(Debug, Clone)]
pub struct MapsLinkRewriter {
    search_url: String,
}

impl Default for MapsLinkRewriter {
    fn default() -> Self {
        Self::new()
    }
}

impl MapsLinkRewriter {
    pub fn new() -> Self {
        Self {
            search_url: DEFAULT_MAPS_SEARCH_URL.to_string(),
        }
    }

    pub fn with_search_url(mut self, search_url: impl Into<String>) -> Self {
        self.search_url = search_url.into();
        self
    }

    fn anchor(&self, location: &str) -> String {
        format!(
            r#"<a href="{}{}" target="_blank" class="{}">{}</a>"#,
            self.search_url,
            location.replace(' ', "+"),
            ANCHOR_CLASSES,
            location
        )
    }
}

impl LinkRewriter for MapsLinkRewriter {
    fn rewrite_links(&self, text: &str) -> String {
        marker_pattern()
            .replace_all(text, |caps: &Captures| self.anchor(&caps[1]))
            .into_owned()
    }
}

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(MAP_MARKER_PATTERN).expect("map marker pattern is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_single_marker() {
        let html = MapsLinkRewriter::new().rewrite_links("Visit [Eiffel Tower](maps) at dusk.");
        assert_eq!(
            html,
            "Visit <a href=\"https://www.google.com/maps/search/?api=1&query=Eiffel+Tower\" \
             target=\"_blank\" class=\"text-blue-600 hover:text-blue-800 underline\">Eiffel Tower</a> at dusk."
        );
    }

    #[test]
    fn text_without_markers_is_untouched() {
        let rewriter = MapsLinkRewriter::new();
        let text = "Day 1\n• Morning (9:00): [not a marker] (maps)\n• See [docs](https://x.y)";
        assert_eq!(rewriter.rewrite_links(text), text);
        assert_eq!(rewriter.rewrite_links(""), "");
    }

    #[test]
    fn rewrites_every_marker_non_greedily() {
        let rewriter = MapsLinkRewriter::new().with_search_url("https://maps.test/?q=");
        let html = rewriter.rewrite_links("[Colosseum](maps) then [Roman Forum](maps), [Colosseum](maps)");
        assert_eq!(
            html.matches("<a href=\"https://maps.test/?q=Colosseum\"").count(),
            2
        );
        assert!(html.contains("q=Roman+Forum\""));
        assert!(html.contains(">Roman Forum</a>"));
        assert!(!html.contains("(maps)"));
    }

    #[test]
    fn marker_does_not_span_lines() {
        let text = "[Start\nEnd](maps)";
        assert_eq!(MapsLinkRewriter::new().rewrite_links(text), text);
    }

    #[test]
    fn rewriting_is_stable_on_output() {
        let rewriter = MapsLinkRewriter::new();
        let once = rewriter.rewrite_links("Stay near [Trastevere](maps).");
        assert_eq!(rewriter.rewrite_links(&once), once);
    }
}
