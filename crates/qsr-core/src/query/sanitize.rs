//! Construction-time removal of markup characters from a raw query.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<`, `>`, `(`, `)` and their upper-case percent encodings.
static MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[<>()]|%3C|%3E|%28|%29").expect("valid markup pattern"));

/// Deletes every markup character and its upper-case percent encoding.
///
/// This is a blunt removal pass, not an escaper. Lower-case encodings such as
/// `%3c` and double encodings pass through untouched.
pub fn strip_markup(query: &str) -> String {
    MARKUP.replace_all(query, "").into_owned()
}
