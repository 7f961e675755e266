//! Tests for get and params.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_get() {
    match parse(&["qsr", "get", "c", "?c=1&d=a"]) {
        CliCommand::Get { key, query, .. } => {
            assert_eq!(key, "c");
            assert_eq!(query.as_deref(), Some("?c=1&d=a"));
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_without_query() {
    match parse(&["qsr", "get", "c"]) {
        CliCommand::Get { key, query, .. } => {
            assert_eq!(key, "c");
            assert!(query.is_none());
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_params() {
    match parse(&["qsr", "params", "?d=a&x=1"]) {
        CliCommand::Params { query, all, .. } => {
            assert_eq!(query.as_deref(), Some("?d=a&x=1"));
            assert!(!all);
        }
        _ => panic!("expected Params"),
    }
}

#[test]
fn cli_parse_params_all() {
    match parse(&["qsr", "params", "--all", "--dest", "fixed"]) {
        CliCommand::Params {
            query,
            all,
            redirect,
        } => {
            assert!(query.is_none());
            assert!(all);
            assert_eq!(redirect.dest.as_deref(), Some("fixed"));
        }
        _ => panic!("expected Params"),
    }
}
