//! Tests for layering CLI flags over configured defaults.

use crate::cli::RedirectArgs;
use qsr_core::{IgnoreKeys, RedirectorConfig};

#[test]
fn no_flags_keeps_config() {
    let base = RedirectorConfig {
        ignore: "c".into(),
        host: Some("example.com".to_string()),
        ..Default::default()
    };
    assert_eq!(RedirectArgs::default().merge(None, &base), base);
}

#[test]
fn flags_override_config() {
    let base = RedirectorConfig {
        ignore: "c".into(),
        host: Some("example.com".to_string()),
        ..Default::default()
    };
    let args = RedirectArgs {
        host: Some("example.net".to_string()),
        protocol: Some("http".to_string()),
        dest: Some("fixed".to_string()),
        key_dest: Some("to".to_string()),
        ignore: vec!["token".to_string()],
        no_sanitize: true,
    };
    let cfg = args.merge(Some("?to=a"), &base);
    assert_eq!(cfg.query.as_deref(), Some("?to=a"));
    assert_eq!(cfg.host.as_deref(), Some("example.net"));
    assert_eq!(cfg.protocol.as_deref(), Some("http"));
    assert_eq!(cfg.dest, "fixed");
    assert_eq!(cfg.key_destination, "to");
    assert_eq!(cfg.ignore, IgnoreKeys::Many(vec!["token".to_string()]));
    assert!(!cfg.should_sanitize);
}
