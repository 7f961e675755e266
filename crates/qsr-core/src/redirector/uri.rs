//! Pieces of the redirect URI: protocol, destination path and host join.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::RedirectError;

static DOT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.\.+").expect("valid dot pattern"));
static SLASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"/+").expect("valid slash pattern"));

/// Removes every `/` and guarantees a trailing `:`.
///
/// `http://` and `http` both become `http:`.
pub fn normalize_protocol(protocol: &str) -> String {
    let mut out: String = protocol.chars().filter(|&c| c != '/').collect();
    if !out.ends_with(':') {
        out.push(':');
    }
    out
}

/// Makes a destination path safe to append to a host.
///
/// Steps run in a fixed order, since each one can expose input for the next:
/// percent-decode, drop `\`, drop `:/`, drop runs of two or more `.`.
///
/// Decoded `?` and `#` are left in place, so `a%3Fb` yields `a?b` and the
/// finished URI then carries a second `?`.
pub fn sanitize_destination(raw: &str) -> Result<String, RedirectError> {
    let decoded =
        urlencoding::decode(raw).map_err(|_| RedirectError::Decode(raw.to_string()))?;
    let without_backslash = decoded.replace('\\', "");
    let without_scheme = without_backslash.replace(":/", "");
    Ok(DOT_RUN.replace_all(&without_scheme, "").into_owned())
}

/// `host/destination` with every run of slashes collapsed to one.
pub fn join_host_path(host: &str, destination: &str) -> String {
    SLASH_RUN
        .replace_all(&format!("{}/{}", host, destination), "/")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_gets_colon_and_loses_slashes() {
        assert_eq!(normalize_protocol("https:"), "https:");
        assert_eq!(normalize_protocol("http"), "http:");
        assert_eq!(normalize_protocol("http://"), "http:");
        assert_eq!(normalize_protocol("/h/t/t/p"), "http:");
        assert_eq!(normalize_protocol(""), ":");
    }

    #[test]
    fn traversal_removed() {
        assert_eq!(sanitize_destination("../../passwd").unwrap(), "//passwd");
        assert_eq!(sanitize_destination("a/.../b").unwrap(), "a//b");
        assert_eq!(sanitize_destination("file.html").unwrap(), "file.html");
    }

    #[test]
    fn decodes_before_stripping() {
        assert_eq!(
            sanitize_destination("//http%3A%2F%2Fexample.com").unwrap(),
            "//http/example.com"
        );
        assert_eq!(sanitize_destination("%2E%2E/etc").unwrap(), "/etc");
        assert_eq!(sanitize_destination("a+b%20c").unwrap(), "a+b c");
    }

    #[test]
    fn backslashes_removed_before_scheme_check() {
        assert_eq!(sanitize_destination(r"http:\//evil").unwrap(), "http/evil");
        assert_eq!(sanitize_destination(r"\/yyy/\/xxx").unwrap(), "/yyy//xxx");
    }

    #[test]
    fn encoded_query_and_fragment_marks_survive() {
        assert_eq!(sanitize_destination("a%3Fb").unwrap(), "a?b");
        assert_eq!(sanitize_destination("a%23b").unwrap(), "a#b");
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        assert_eq!(
            sanitize_destination("%FF%FE"),
            Err(RedirectError::Decode("%FF%FE".to_string()))
        );
    }

    #[test]
    fn host_join_collapses_slash_runs() {
        assert_eq!(join_host_path("example.com", "/yyy//xxx///yyy"), "example.com/yyy/xxx/yyy");
        assert_eq!(join_host_path("example.com", ""), "example.com/");
        assert_eq!(join_host_path("example.com", "subdir/"), "example.com/subdir/");
    }
}
