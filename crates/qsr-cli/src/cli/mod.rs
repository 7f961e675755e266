//! CLI for the QSR query-string redirector.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use qsr_core::config::{self, RedirectorConfig};

use commands::{run_get, run_params, run_uri};

/// Top-level CLI for the QSR redirector.
#[derive(Debug, Parser)]
#[command(name = "qsr")]
#[command(about = "QSR: filter a query string and build the redirect URI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options shared by every command; each overrides the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct RedirectArgs {
    /// Target host (and port), e.g. `example.com:8443`.
    #[arg(long)]
    pub host: Option<String>,
    /// Target protocol, e.g. `https:`.
    #[arg(long)]
    pub protocol: Option<String>,
    /// Fixed destination path; wins over the query's destination parameter.
    #[arg(long)]
    pub dest: Option<String>,
    /// Query parameter that carries the destination path.
    #[arg(long, value_name = "KEY")]
    pub key_dest: Option<String>,
    /// Parameter to drop from the forwarded query (repeatable).
    #[arg(long = "ignore", value_name = "KEY")]
    pub ignore: Vec<String>,
    /// Keep `<>()` and their encodings in the query.
    #[arg(long)]
    pub no_sanitize: bool,
}

impl RedirectArgs {
    /// Layers these flags and `query` over the configured defaults.
    pub fn merge(&self, query: Option<&str>, base: &RedirectorConfig) -> RedirectorConfig {
        let mut cfg = base.clone();
        if let Some(q) = query {
            cfg.query = Some(q.to_string());
        }
        if let Some(host) = &self.host {
            cfg.host = Some(host.clone());
        }
        if let Some(protocol) = &self.protocol {
            cfg.protocol = Some(protocol.clone());
        }
        if let Some(dest) = &self.dest {
            cfg.dest = dest.clone();
        }
        if let Some(key) = &self.key_dest {
            cfg.key_destination = key.clone();
        }
        if !self.ignore.is_empty() {
            cfg.ignore = self.ignore.clone().into();
        }
        if self.no_sanitize {
            cfg.should_sanitize = false;
        }
        cfg
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build the redirect URI and print it.
    Uri {
        /// Query string, e.g. `?d=index.html&x=1`. Defaults to the configured location.
        query: Option<String>,
        #[command(flatten)]
        redirect: RedirectArgs,
        /// Append a parameter before building (repeatable).
        #[arg(long = "add", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        add: Vec<(String, String)>,
        /// Change the first parameter with this key (repeatable); the key must exist.
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        set: Vec<(String, String)>,
    },

    /// Print the value of one query parameter (empty if missing).
    Get {
        /// Parameter name.
        key: String,
        /// Query string. Defaults to the configured location.
        query: Option<String>,
        #[command(flatten)]
        redirect: RedirectArgs,
    },

    /// List the parameters that would be forwarded, one `key=value` per line.
    Params {
        /// Query string. Defaults to the configured location.
        query: Option<String>,
        #[command(flatten)]
        redirect: RedirectArgs,
        /// Include ignored parameters and the destination.
        #[arg(long)]
        all: bool,
    },
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", s))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let location = &cfg.location;

        match cli.command {
            CliCommand::Uri {
                query,
                redirect,
                add,
                set,
            } => {
                let rcfg = redirect.merge(query.as_deref(), &cfg.redirector);
                run_uri(rcfg, location, &add, &set)?;
            }
            CliCommand::Get {
                key,
                query,
                redirect,
            } => {
                let rcfg = redirect.merge(query.as_deref(), &cfg.redirector);
                run_get(rcfg, location, &key)?;
            }
            CliCommand::Params {
                query,
                redirect,
                all,
            } => {
                let rcfg = redirect.merge(query.as_deref(), &cfg.redirector);
                run_params(rcfg, location, all)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
