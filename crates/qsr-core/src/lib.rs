//! Core engine for the QSR query-string redirector.
//!
//! Parses a query string into ordered parameters, lets callers inspect and
//! mutate them, and rebuilds a sanitized redirect URI from a destination
//! path, protocol and host.

pub mod config;
pub mod environment;
pub mod error;
pub mod logging;
pub mod query;
pub mod redirector;

pub use config::{AbsentValue, IgnoreKeys, RedirectorConfig};
pub use environment::{Location, Navigator, RecordingNavigator, StaticLocation};
pub use error::RedirectError;
pub use query::{Param, ParamSequence};
pub use redirector::Redirector;
