//! Enablement policy: whether analytics is dispatched at all for this page load.
//!
//! DESIGN
//! ======
//! Evaluated once at startup from the page URL and query string and never
//! re-evaluated. An explicit `analytics=1` query flag forces tracking on;
//! otherwise pages served from a local file or loopback host are excluded
//! so development sessions do not pollute production data.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

/// URL prefixes treated as local development contexts.
const LOCAL_PREFIXES: [&str; 3] = ["file:", "http://localhost", "http://127.0.0.1"];

/// Query flag that forces analytics on.
const FORCE_FLAG: &str = "analytics=1";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnablementPolicy {
    enabled: bool,
}

impl EnablementPolicy {
    /// Derive the policy from `location.href` and `location.search`.
    #[must_use]
    pub fn from_location(href: &str, search: &str) -> Self {
        let enabled = is_forced(search) || !is_local(href);
        Self { enabled }
    }

    #[must_use]
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.enabled
    }
}

/// Whether the page URL points at a local file or loopback host.
#[must_use]
pub fn is_local(href: &str) -> bool {
    LOCAL_PREFIXES.iter().any(|prefix| href.starts_with(prefix))
}

/// Whether the query string carries `analytics=1` as a whole parameter.
///
/// The flag must start the query (`?`) or follow `&`, and must not be
/// followed by another word character, so `analytics=10` does not match.
#[must_use]
pub fn is_forced(search: &str) -> bool {
    let mut rest = search;
    while let Some(pos) = rest.find(FORCE_FLAG) {
        let before = rest[..pos].chars().next_back();
        let after = rest[pos + FORCE_FLAG.len()..].chars().next();
        let leading_ok = matches!(before, Some('?' | '&'));
        let trailing_ok = after.is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '_'));
        if leading_ok && trailing_ok {
            return true;
        }
        rest = &rest[pos + FORCE_FLAG.len()..];
    }
    false
}
