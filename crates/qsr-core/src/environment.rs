//! Ambient collaborators: where defaults come from and where the redirect goes.
//!
//! The redirector only depends on these traits and never touches a real
//! browser location or navigation API.

use serde::{Deserialize, Serialize};

/// Source of the current location's query, protocol and host.
pub trait Location {
    /// Query part including the leading `?`, e.g. `?d=index.html&x=1`.
    fn search(&self) -> String;
    /// Scheme with its colon, e.g. `https:`.
    fn protocol(&self) -> String;
    /// Host name with optional port.
    fn host(&self) -> String;
}

/// Fixed location values, e.g. from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticLocation {
    pub search: String,
    pub protocol: String,
    pub host: String,
}

impl StaticLocation {
    pub fn new(
        search: impl Into<String>,
        protocol: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            search: search.into(),
            protocol: protocol.into(),
            host: host.into(),
        }
    }
}

impl Location for StaticLocation {
    fn search(&self) -> String {
        self.search.clone()
    }

    fn protocol(&self) -> String {
        self.protocol.clone()
    }

    fn host(&self) -> String {
        self.host.clone()
    }
}

/// Performs the actual redirect once a URI has been built.
pub trait Navigator {
    fn navigate(&mut self, uri: &str) -> anyhow::Result<()>;
}

/// Navigator that only remembers where it was sent.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    pub visited: Vec<String>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, uri: &str) -> anyhow::Result<()> {
        self.visited.push(uri.to_string());
        Ok(())
    }
}
