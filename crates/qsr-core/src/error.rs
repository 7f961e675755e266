//! Error taxonomy for parsing, mutation and URI building.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RedirectError {
    /// A full URL was passed where only the query part was expected.
    #[error("\"{0}\" is not a query string; pass only the part starting with `?`")]
    InvalidInput(String),

    /// `change_param` targeted a key that is not in the query.
    #[error("parameter \"{0}\" does not exist in the query string")]
    NotFound(String),

    /// The destination percent-decoded to bytes that are not UTF-8.
    #[error("destination \"{0}\" is not valid percent-encoded UTF-8")]
    Decode(String),
}
