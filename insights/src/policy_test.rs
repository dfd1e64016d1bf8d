use super::*;

#[test]
fn production_origin_is_enabled() {
    let policy = EnablementPolicy::from_location("https://mysite.com/", "");
    assert!(policy.is_enabled());
}

#[test]
fn local_contexts_are_disabled() {
    for href in ["file:///home/me/index.html", "http://localhost:8080/", "http://127.0.0.1/index.html"] {
        assert!(!EnablementPolicy::from_location(href, "").is_enabled(), "{href}");
    }
}

#[test]
fn override_forces_enabled_on_local() {
    let policy = EnablementPolicy::from_location("http://localhost:8080/?analytics=1", "?analytics=1");
    assert!(policy.is_enabled());
}

#[test]
fn override_matches_after_ampersand() {
    assert!(is_forced("?lang=es&analytics=1"));
    assert!(is_forced("?analytics=1&lang=es"));
    assert!(is_forced("?analytics=1#top"));
}

#[test]
fn override_requires_whole_value() {
    assert!(!is_forced("?analytics=10"));
    assert!(!is_forced("?analytics=1_x"));
    assert!(!is_forced("?xanalytics=1"));
    assert!(!is_forced("?analytics=0"));
    assert!(!is_forced(""));
}

#[test]
fn override_found_after_earlier_partial_match() {
    assert!(is_forced("?xanalytics=1&analytics=1"));
}

#[test]
fn https_localhost_is_not_treated_as_local() {
    assert!(!is_local("https://localhost/"));
}
