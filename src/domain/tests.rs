// Domain module tests.

use super::*;

#[test]
fn test_trim_hostname_removes_root_dot() {
    assert_eq!(trim_hostname("aspmx.l.google.com."), "aspmx.l.google.com");
    assert_eq!(trim_hostname("example.com"), "example.com");
    assert_eq!(trim_hostname("."), "");
}

#[test]
fn test_trim_hostname_removes_only_one_dot() {
    assert_eq!(trim_hostname("example.com.."), "example.com.");
}

#[test]
fn test_normalize_domain_basic() {
    assert_eq!(normalize_domain("example.com").unwrap(), "example.com");
}

#[test]
fn test_normalize_domain_case_and_trailing_dot() {
    assert_eq!(normalize_domain("  Example.COM. ").unwrap(), "example.com");
}

#[test]
fn test_normalize_domain_from_url() {
    assert_eq!(
        normalize_domain("https://www.example.com:8443/path?q=1#top").unwrap(),
        "www.example.com"
    );
    assert_eq!(normalize_domain("http://example.org").unwrap(), "example.org");
}

#[test]
fn test_normalize_domain_rejects_empty() {
    assert!(normalize_domain("").is_err());
    assert!(normalize_domain("   ").is_err());
    assert!(normalize_domain(".").is_err());
    assert!(normalize_domain("https://").is_err());
}

#[test]
fn test_normalize_domain_rejects_ip_addresses() {
    let err = normalize_domain("34.194.118.33").unwrap_err();
    assert!(err.to_string().contains("IP address"));
    assert!(normalize_domain("2001:db8::1").is_err());
}

#[test]
fn test_normalize_domain_rejects_empty_labels() {
    assert!(normalize_domain("example..com").is_err());
    assert!(normalize_domain(".example.com").is_err());
}

#[test]
fn test_normalize_domain_rejects_whitespace() {
    assert!(normalize_domain("exa mple.com").is_err());
}

#[test]
fn test_normalize_domain_keeps_single_label() {
    // Single-label names are legal to query (e.g. "localhost")
    assert_eq!(normalize_domain("localhost").unwrap(), "localhost");
}
