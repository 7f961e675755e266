//! Uri command: build the redirect URI and "navigate" by printing it.

use anyhow::Result;
use qsr_core::{Location, Navigator, Param, Redirector, RedirectorConfig};

/// Navigation target of the CLI: stdout.
struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn navigate(&mut self, uri: &str) -> Result<()> {
        println!("{}", uri);
        Ok(())
    }
}

/// Builds the redirector and applies `--add` then `--set` edits.
fn build_with_edits(
    cfg: RedirectorConfig,
    location: &dyn Location,
    add: &[(String, String)],
    set: &[(String, String)],
) -> Result<Redirector> {
    let mut redirector = Redirector::new(cfg, location)?;
    for (key, value) in add {
        redirector.add_param(Param::new(key.as_str(), value.as_str()));
    }
    for (key, value) in set {
        redirector.change_param(Param::new(key.as_str(), value.as_str()))?;
    }
    Ok(redirector)
}

pub fn run_uri(
    cfg: RedirectorConfig,
    location: &dyn Location,
    add: &[(String, String)],
    set: &[(String, String)],
) -> Result<()> {
    let redirector = build_with_edits(cfg, location, add, set)?;
    redirector.redirect(&mut StdoutNavigator)?;
    Ok(())
}
