//! Structural checks over server-rendered page markup.
//!
//! The page is generated by our own components, so the inspector relies on the
//! `data-role` markers they emit rather than on a general HTML parser.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use common::{Anchor, CONTACT, FEATURE_GROUPS, PROJECT_URL, TECH_STACK, copyright_line};
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Times the project URL is linked: hero, showcase, footer.
pub const PROJECT_LINK_COUNT: usize = 3;

/// Times the mailto link is used: contact section, footer.
pub const MAILTO_LINK_COUNT: usize = 2;

static ELEMENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sid="([^"]*)""#).expect("valid id regex"));
static NAV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<nav[\s>]").expect("valid nav regex"));
static FOOTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<footer[\s>]").expect("valid footer regex"));
static FEATURE_CARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<div[^>]*data-role="feature-card"[^>]*>(.*?)</ul>"#)
        .expect("valid feature card regex")
});
static FEATURE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<h3[^>]*data-role="feature-title"[^>]*>([^<]*)</h3>"#)
        .expect("valid feature title regex")
});
static FEATURE_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<li[^>]*data-role="feature-item"[^>]*>\s*<span[^>]*></span>([^<]*)</li>"#)
        .expect("valid feature item regex")
});
static TECH_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span[^>]*data-role="tech-tag"[^>]*>([^<]*)</span>"#)
        .expect("valid tech tag regex")
});
static HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\shref="([^"]*)""#).expect("valid href regex"));
static COPYRIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div[^>]*data-role="copyright"[^>]*>([^<]*)</div>"#)
        .expect("valid copyright regex")
});

/// A capability group as found in the markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityGroup {
    pub title: String,
    pub items: Vec<String>,
}

/// Everything the structural contract cares about, extracted from one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageReport {
    /// Occurrences of every element id
    pub ids: BTreeMap<String, usize>,
    pub nav_count: usize,
    pub footer_count: usize,
    pub capability_groups: Vec<CapabilityGroup>,
    pub tech_stack: Vec<String>,
    /// Every `href`, in document order
    pub links: Vec<String>,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("anchor #{id} appears {count} times, expected exactly once")]
    AnchorCount { id: &'static str, count: usize },

    #[error("expected exactly one <{tag}> landmark, found {count}")]
    LandmarkCount { tag: &'static str, count: usize },

    #[error("expected {expected} capability groups, found {found}")]
    CapabilityGroupCount { expected: usize, found: usize },

    #[error("capability group {index} is {found:?}, expected {expected:?}")]
    CapabilityGroupMismatch {
        index: usize,
        expected: CapabilityGroup,
        found: CapabilityGroup,
    },

    #[error("tech stack is {found:?}, expected {expected:?}")]
    TechStack {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("link {href} appears {count} times, expected {expected}")]
    LinkCount {
        href: String,
        count: usize,
        expected: usize,
    },

    #[error("unexpected mailto link {found}, expected {expected}")]
    MailtoMismatch { expected: String, found: String },

    #[error("copyright line is {found:?}, expected {expected:?}")]
    Copyright {
        expected: String,
        found: Option<String>,
    },
}

/// Extract a [`PageReport`] from rendered markup.
pub fn inspect(html: &str) -> PageReport {
    let mut ids = BTreeMap::new();
    for capture in ELEMENT_ID.captures_iter(html) {
        *ids.entry(capture[1].to_string()).or_insert(0) += 1;
    }

    let capability_groups = FEATURE_CARD
        .captures_iter(html)
        .map(|card| {
            let card = &card[1];
            CapabilityGroup {
                title: FEATURE_TITLE
                    .captures(card)
                    .map(|c| unescape(c[1].trim()))
                    .unwrap_or_default(),
                items: FEATURE_ITEM
                    .captures_iter(card)
                    .map(|c| unescape(c[1].trim()))
                    .collect(),
            }
        })
        .collect();

    PageReport {
        ids,
        nav_count: NAV.find_iter(html).count(),
        footer_count: FOOTER.find_iter(html).count(),
        capability_groups,
        tech_stack: TECH_TAG
            .captures_iter(html)
            .map(|c| unescape(c[1].trim()))
            .collect(),
        links: HREF.captures_iter(html).map(|c| unescape(&c[1])).collect(),
        copyright: COPYRIGHT.captures(html).map(|c| unescape(c[1].trim())),
    }
}

impl PageReport {
    pub fn id_count(&self, id: &str) -> usize {
        self.ids.get(id).copied().unwrap_or(0)
    }

    pub fn link_count(&self, href: &str) -> usize {
        self.links.iter().filter(|link| link.as_str() == href).count()
    }

    /// Compare the report against the fixed page content for `year`.
    pub fn violations(&self, year: i32) -> Vec<Violation> {
        let mut violations = Vec::new();

        for anchor in Anchor::ALL {
            let count = self.id_count(anchor.id());
            if count != 1 {
                violations.push(Violation::AnchorCount { id: anchor.id(), count });
            }
        }

        for (tag, count) in [("nav", self.nav_count), ("footer", self.footer_count)] {
            if count != 1 {
                violations.push(Violation::LandmarkCount { tag, count });
            }
        }

        if self.capability_groups.len() != FEATURE_GROUPS.len() {
            violations.push(Violation::CapabilityGroupCount {
                expected: FEATURE_GROUPS.len(),
                found: self.capability_groups.len(),
            });
        }
        for (index, (found, group)) in self.capability_groups.iter().zip(&FEATURE_GROUPS).enumerate() {
            let expected = CapabilityGroup {
                title: group.title.to_string(),
                items: group.items.iter().map(|item| item.to_string()).collect(),
            };
            if *found != expected {
                violations.push(Violation::CapabilityGroupMismatch {
                    index,
                    expected,
                    found: found.clone(),
                });
            }
        }

        let expected_stack: Vec<String> = TECH_STACK.iter().map(|tag| tag.to_string()).collect();
        if self.tech_stack != expected_stack {
            violations.push(Violation::TechStack {
                expected: expected_stack,
                found: self.tech_stack.clone(),
            });
        }

        let mailto = CONTACT.href();
        for (href, expected) in [(PROJECT_URL, PROJECT_LINK_COUNT), (mailto.as_str(), MAILTO_LINK_COUNT)] {
            let count = self.link_count(href);
            if count != expected {
                violations.push(Violation::LinkCount {
                    href: href.to_string(),
                    count,
                    expected,
                });
            }
        }
        for link in self.links.iter().filter(|link| link.starts_with("mailto:")) {
            if *link != mailto {
                violations.push(Violation::MailtoMismatch {
                    expected: mailto.clone(),
                    found: link.clone(),
                });
            }
        }

        let expected_copyright = copyright_line(year);
        if self.copyright.as_deref() != Some(expected_copyright.as_str()) {
            violations.push(Violation::Copyright {
                expected: expected_copyright,
                found: self.copyright.clone(),
            });
        }

        violations
    }
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
