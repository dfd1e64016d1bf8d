//! Constructors for every event the site emits.
//!
//! Keeping names and parameter keys in one place means the observation
//! sources and the DOM bindings cannot drift apart on spelling.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::event::Event;

/// Section label used when an element has no enclosing `section[id]`.
pub const UNKNOWN_SECTION: &str = "unknown";

#[must_use]
pub fn scroll_depth(percent: u8) -> Event {
    Event::new("scroll_depth").with("percent", percent)
}

#[must_use]
pub fn return_to_top_after_bottom(seconds: f64) -> Event {
    Event::new("return_to_top_after_bottom").with("seconds_since_bottom", seconds)
}

#[must_use]
pub fn section_view(section_id: &str) -> Event {
    Event::new("section_view").with("section_id", section_id)
}

#[must_use]
pub fn section_dwell(section_id: &str, seconds: f64) -> Event {
    Event::new("section_dwell").with("section_id", section_id).with("seconds", seconds)
}

#[must_use]
pub fn nav_click(target: &str, mobile: bool) -> Event {
    Event::new("nav_click")
        .with("target", target.trim_start_matches('#'))
        .with("location", if mobile { "mobile" } else { "desktop" })
}

#[must_use]
pub fn project_tab_select(tab: &str, section: &str) -> Event {
    Event::new("project_tab_select").with("tab", tab).with("section", section)
}

#[must_use]
pub fn theme_toggle(theme: &str) -> Event {
    Event::new("theme_toggle").with("theme", theme)
}

#[must_use]
pub fn back_to_top_click(section: &str) -> Event {
    Event::new("back_to_top_click").with("section", section)
}

/// Contact form submission. Carries shape only, never the message content.
#[must_use]
pub fn contact_submit(has_subject: bool, message_len: usize) -> Event {
    #[allow(clippy::cast_precision_loss)]
    let len = message_len as f64;
    Event::new("contact_submit").with("has_subject", has_subject).with("message_len", len)
}

#[must_use]
pub fn page_load_time(value_ms: f64) -> Event {
    Event::new("page_load_time").with("value_ms", value_ms.max(0.0).round())
}
