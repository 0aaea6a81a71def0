use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;
use url::Url;

// The year is captured by the same match that checks the range, so the two can't disagree.
static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"State-to-State Migration Flows: (20(?:0[5-9]|1[0-9]|2[0-3]))").unwrap()
});

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// An anchor on the listing page whose text names a published year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateLink {
    pub text: String,
    pub href: String,
    pub year: u16,
    pub url: Url,
}

impl CandidateLink {
    /// File name used in progress output before the real format is known.
    pub fn provisional_file_name(&self) -> String {
        format!("migration_flows_{}.xlsx", self.year)
    }
}

pub fn matches_title(text: &str) -> bool {
    TITLE_PATTERN.is_match(text)
}

pub fn year_from_title(text: &str) -> Option<u16> {
    TITLE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|year| year.as_str().parse().ok())
}

/// Collect every matching anchor in document order.
///
/// Anchors with a matching title but no `href` are dropped without comment.
/// An href that can't be joined onto `base` is dropped with a warning.
pub fn extract_links(html: &str, base: &Url) -> Vec<CandidateLink> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        let text = anchor.text().collect::<String>().trim().to_string();
        let Some(year) = year_from_title(&text) else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        match base.join(href) {
            Ok(url) => {
                debug!("matched {:?} -> {}", text, url);
                links.push(CandidateLink {
                    text,
                    href: href.to_string(),
                    year,
                    url,
                });
            }
            Err(e) => warn!("skipping {:?}: cannot resolve href {:?}: {}", text, href, e),
        }
    }

    links
}
