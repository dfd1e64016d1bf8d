//! Link activation classifier.
//!
//! Every non-fragment link click maps to at most one category, checked in a
//! fixed order where the first match wins: downloads, known social networks,
//! `mailto:`/`tel:` schemes, then cross-origin links. Same-origin links
//! produce no event.
//!
//! URL resolution is done by the host (it owns the base URL); the classifier
//! only sees the resolved origin and hostname. An href the host could not
//! parse arrives with `resolved: None` and simply skips the cross-origin
//! check.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use crate::catalog::UNKNOWN_SECTION;
use crate::event::Event;

/// File name reported when the href has no usable last segment.
const UNKNOWN_FILE: &str = "unknown";

/// Host-resolved parts of a link URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedUrl {
    pub origin: String,
    pub hostname: String,
}

/// What the host knows about an activated link.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkTarget {
    /// Raw `href` attribute value.
    pub href: String,
    /// Whether the anchor carries a `download` attribute.
    pub download: bool,
    pub resolved: Option<ResolvedUrl>,
}

impl LinkTarget {
    #[must_use]
    pub fn new(href: &str) -> Self {
        Self { href: href.to_owned(), ..Self::default() }
    }

    #[must_use]
    pub fn with_download(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    #[must_use]
    pub fn resolved(mut self, origin: &str, hostname: &str) -> Self {
        self.resolved = Some(ResolvedUrl { origin: origin.to_owned(), hostname: hostname.to_owned() });
        self
    }

    /// In-page fragment links are instrumented as navigation, not here.
    #[must_use]
    pub fn is_fragment(&self) -> bool {
        self.href.starts_with('#')
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Github,
    Linkedin,
    Email,
    Phone,
}

impl Network {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

/// Classification result for a link activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkClass {
    Download { file_name: String },
    Social { network: Network },
    External { domain: String },
}

impl LinkClass {
    /// Build the analytics event for this classification.
    #[must_use]
    pub fn to_event(&self, href: &str, section: Option<&str>) -> Event {
        let section = section.unwrap_or(UNKNOWN_SECTION);
        match self {
            Self::Download { file_name } => {
                Event::new("cv_download").with("file_name", file_name.as_str()).with("section", section)
            }
            Self::Social { network } => Event::new("social_click")
                .with("network", network.as_str())
                .with("href", href)
                .with("section", section),
            Self::External { domain } => Event::new("external_link_click")
                .with("domain", domain.as_str())
                .with("href", href)
                .with("section", section),
        }
    }
}

/// Classify a link activation against the page origin.
///
/// Returns `None` for fragment links and for same-origin internal links.
#[must_use]
pub fn classify(link: &LinkTarget, page_origin: &str) -> Option<LinkClass> {
    if link.is_fragment() {
        return None;
    }

    if link.download || is_pdf(&link.href) {
        return Some(LinkClass::Download { file_name: file_name(&link.href) });
    }

    let lower = link.href.to_ascii_lowercase();
    let network = if lower.contains("github.com") {
        Some(Network::Github)
    } else if lower.contains("linkedin.com") {
        Some(Network::Linkedin)
    } else if lower.starts_with("mailto:") {
        Some(Network::Email)
    } else if lower.starts_with("tel:") {
        Some(Network::Phone)
    } else {
        None
    };
    if let Some(network) = network {
        return Some(LinkClass::Social { network });
    }

    let resolved = link.resolved.as_ref()?;
    if resolved.origin == page_origin {
        return None;
    }
    Some(LinkClass::External { domain: resolved.hostname.clone() })
}

/// `.pdf` at the end of the path, case-insensitive, before any query.
fn is_pdf(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    let mut rest = lower.as_str();
    while let Some(pos) = rest.find(".pdf") {
        let tail = &rest[pos + 4..];
        if tail.is_empty() || tail.starts_with('?') {
            return true;
        }
        rest = tail;
    }
    false
}

/// Last path segment with any query string removed.
fn file_name(href: &str) -> String {
    let last = href.rsplit('/').next().unwrap_or_default();
    let name = last.split('?').next().unwrap_or_default();
    if name.is_empty() { UNKNOWN_FILE.to_owned() } else { name.to_owned() }
}
