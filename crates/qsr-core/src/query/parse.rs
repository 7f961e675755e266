//! Query-string parsing.

use super::{Param, ParamSequence};
use crate::error::RedirectError;

/// Parses a raw query string (normally `location.search`) into parameters.
///
/// - `""` and `"?"` yield an empty sequence
/// - input starting with `http` is rejected as a full URL
/// - one leading `?` is dropped; any later `?` separates like `&`
/// - each segment splits on its first `=`; without `=` the value is absent
pub fn parse_query(query: &str) -> Result<ParamSequence, RedirectError> {
    if query.is_empty() || query == "?" {
        return Ok(ParamSequence::new());
    }

    if query.starts_with("http") {
        return Err(RedirectError::InvalidInput(query.to_string()));
    }

    let body = query.strip_prefix('?').unwrap_or(query);

    Ok(body
        .split(['&', '?'])
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) => Param::new(key, value),
            None => Param::bare(segment),
        })
        .collect())
}
