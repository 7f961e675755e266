//! Query-string model: ordered key/value parameters.
//!
//! Keys may repeat and are never deduplicated; lookups always return the
//! first entry in sequence order.

mod parse;
mod sanitize;

pub use parse::parse_query;
pub use sanitize::strip_markup;

use crate::config::AbsentValue;

/// A single `key=value` segment of a query string.
///
/// `value` is `None` when the segment had no `=` at all, which is distinct
/// from `key=` (an empty value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub key: String,
    pub value: Option<String>,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// A parameter without `=`.
    pub fn bare(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// Value as it appears in output, with absent values rendered by `policy`.
    pub fn rendered_value(&self, policy: AbsentValue) -> &str {
        match &self.value {
            Some(v) => v,
            None => policy.as_str(),
        }
    }
}

/// Parameters in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSequence {
    entries: Vec<Param>,
}

impl ParamSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Param> {
        self.entries.iter()
    }

    pub fn push(&mut self, param: Param) {
        self.entries.push(param);
    }

    /// Index of the first entry with `key`.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|p| p.key == key)
    }

    pub fn first(&self, key: &str) -> Option<&Param> {
        self.position(key).map(|i| &self.entries[i])
    }

    pub fn first_mut(&mut self, key: &str) -> Option<&mut Param> {
        self.position(key).map(move |i| &mut self.entries[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Entries whose key is not in `ignored`, order preserved.
    pub fn without<'a>(&'a self, ignored: &'a [String]) -> impl Iterator<Item = &'a Param> + 'a {
        self.entries
            .iter()
            .filter(move |p| !ignored.iter().any(|k| *k == p.key))
    }
}

impl FromIterator<Param> for ParamSequence {
    fn from_iter<I: IntoIterator<Item = Param>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ParamSequence {
    type Item = &'a Param;
    type IntoIter = std::slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Joins parameters as `key=value` pairs separated by `&`, without re-encoding.
pub fn join_params<'a, I>(params: I, policy: AbsentValue) -> String
where
    I: IntoIterator<Item = &'a Param>,
{
    params
        .into_iter()
        .map(|p| format!("{}={}", p.key, p.rendered_value(policy)))
        .collect::<Vec<_>>()
        .join("&")
}
