//! The redirector: query state plus the rules for turning it into a URI.
//!
//! A [`Redirector`] is built once per redirect decision from a raw query
//! string and a [`RedirectorConfig`], mutated as needed, then serialized with
//! [`Redirector::build_uri`] or handed to a [`Navigator`] with
//! [`Redirector::redirect`].
//!
//! # Example
//!
//! Arriving at `https://example.com/redirect?d=public/index.html&c=12345&x=xyz`:
//!
//! ```
//! use qsr_core::{Redirector, RedirectorConfig, StaticLocation};
//!
//! let location = StaticLocation::new("?d=public/index.html&c=12345&x=xyz", "https:", "example.com");
//! let config = RedirectorConfig { ignore: "c".into(), ..Default::default() };
//! let r = Redirector::new(config, &location).unwrap();
//!
//! assert_eq!(r.get_value("c"), "12345");
//! assert_eq!(r.build_uri().unwrap(), "https://example.com/public/index.html?x=xyz");
//! ```

mod uri;

pub use uri::{join_host_path, normalize_protocol, sanitize_destination};

use crate::config::{AbsentValue, RedirectorConfig};
use crate::environment::{Location, Navigator, StaticLocation};
use crate::error::RedirectError;
use crate::query::{join_params, parse_query, strip_markup, Param, ParamSequence};

#[derive(Debug, Clone)]
pub struct Redirector {
    key_destination: String,
    ignored_keys: Vec<String>,
    protocol: String,
    host: String,
    fixed_destination: String,
    /// Protocol and host resolved at construction; used when an override is empty.
    base_protocol: String,
    base_host: String,
    sanitize: bool,
    absent_value: AbsentValue,
    params: ParamSequence,
}

impl Redirector {
    /// Builds the redirector, taking any value missing from `config` from `location`.
    pub fn new(config: RedirectorConfig, location: &dyn Location) -> Result<Self, RedirectError> {
        let RedirectorConfig {
            key_destination,
            ignore,
            query,
            protocol,
            host,
            dest,
            should_sanitize,
            absent_value,
        } = config;

        let raw_query = query.unwrap_or_else(|| location.search());
        let protocol = protocol.unwrap_or_else(|| location.protocol());
        let host = host.unwrap_or_else(|| location.host());

        let query = if should_sanitize {
            strip_markup(&raw_query)
        } else {
            raw_query
        };
        let params = parse_query(&query)?;

        tracing::debug!(
            params = params.len(),
            key_destination = %key_destination,
            sanitize = should_sanitize,
            "redirector initialized"
        );

        Ok(Self {
            ignored_keys: ignore.normalize(&key_destination),
            key_destination,
            base_protocol: protocol.clone(),
            base_host: host.clone(),
            protocol,
            host,
            fixed_destination: dest,
            sanitize: should_sanitize,
            absent_value,
            params,
        })
    }

    /// Builds the redirector with no ambient location: `query`, `protocol` and
    /// `host` default to empty strings.
    pub fn from_config(config: RedirectorConfig) -> Result<Self, RedirectError> {
        Self::new(config, &StaticLocation::default())
    }

    pub fn key_destination(&self) -> &str {
        &self.key_destination
    }

    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored_keys
    }

    pub fn params(&self) -> &ParamSequence {
        &self.params
    }

    pub fn sanitizes(&self) -> bool {
        self.sanitize
    }

    pub fn absent_value(&self) -> AbsentValue {
        self.absent_value
    }

    // ---- query ----

    /// First parameter named `key`. Later duplicates are never returned.
    pub fn get_param(&self, key: &str) -> Option<&Param> {
        self.params.first(key)
    }

    /// Value of the first parameter named `key`, or `""` when there is none.
    pub fn get_value(&self, key: &str) -> String {
        match self.params.first(key) {
            Some(param) => param.rendered_value(self.absent_value).to_string(),
            None => {
                tracing::debug!(key, "parameter does not exist in the query string, using empty value");
                String::new()
            }
        }
    }

    /// Whether `key` appears at all; its value is not checked.
    pub fn exists(&self, key: &str) -> bool {
        self.params.contains(key)
    }

    // ---- mutate ----

    /// Appends `param`. Duplicates are allowed; ignored keys are filtered only
    /// when the URI is built.
    pub fn add_param(&mut self, param: Param) {
        self.params.push(param);
    }

    /// Replaces the value of the first parameter with the same key.
    pub fn change_param(&mut self, param: Param) -> Result<(), RedirectError> {
        let Param { key, value } = param;
        match self.params.first_mut(&key) {
            Some(target) => {
                target.value = value;
                Ok(())
            }
            None => Err(RedirectError::NotFound(key)),
        }
    }

    /// Fixed destination path. Empty or `None` defers to the query value.
    pub fn set_destination(&mut self, dest: Option<&str>) {
        self.fixed_destination = dest.unwrap_or_default().to_string();
    }

    /// Empty or `None` reverts to the host known at construction.
    pub fn set_host(&mut self, host: Option<&str>) {
        self.host = host.unwrap_or_default().to_string();
    }

    /// Empty or `None` reverts to the protocol known at construction.
    pub fn set_protocol(&mut self, protocol: Option<&str>) {
        self.protocol = protocol.unwrap_or_default().to_string();
    }

    // ---- serialize ----

    /// Parameters that will be forwarded, i.e. everything not ignored.
    pub fn filtered_params(&self) -> impl Iterator<Item = &Param> + '_ {
        self.params.without(&self.ignored_keys)
    }

    fn effective_protocol(&self) -> &str {
        if self.protocol.is_empty() {
            &self.base_protocol
        } else {
            &self.protocol
        }
    }

    fn effective_host(&self) -> &str {
        if self.host.is_empty() {
            &self.base_host
        } else {
            &self.host
        }
    }

    fn raw_destination(&self) -> String {
        if self.fixed_destination.is_empty() {
            self.get_value(&self.key_destination)
        } else {
            self.fixed_destination.clone()
        }
    }

    /// Builds `protocol//host/destination?query` from the current state.
    ///
    /// The destination is decoded and stripped of backslashes, `:/` and dot
    /// runs; the query is the filtered parameters joined without re-encoding.
    pub fn build_uri(&self) -> Result<String, RedirectError> {
        let protocol = normalize_protocol(self.effective_protocol());
        let destination = sanitize_destination(&self.raw_destination())?;
        let host_and_path = join_host_path(self.effective_host(), &destination);
        let query = join_params(self.filtered_params(), self.absent_value);

        Ok(format!("{}//{}?{}", protocol, host_and_path, query))
    }

    /// Builds the URI and sends `navigator` there. Returns the URI on success.
    pub fn redirect(&self, navigator: &mut dyn Navigator) -> anyhow::Result<String> {
        let uri = self.build_uri()?;
        tracing::info!(uri = %uri, "redirecting");
        navigator.navigate(&uri)?;
        Ok(uri)
    }
}
