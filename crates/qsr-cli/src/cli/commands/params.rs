//! Params command: list forwarded (or all) parameters.

use anyhow::Result;
use qsr_core::{Location, Param, Redirector, RedirectorConfig};

/// `key=value` lines for the forwarded parameters, or every parameter with `all`.
fn param_lines(redirector: &Redirector, all: bool) -> Vec<String> {
    let absent = redirector.absent_value();
    let render = |p: &Param| format!("{}={}", p.key, p.rendered_value(absent));
    if all {
        redirector.params().iter().map(render).collect()
    } else {
        redirector.filtered_params().map(render).collect()
    }
}

pub fn run_params(cfg: RedirectorConfig, location: &dyn Location, all: bool) -> Result<()> {
    let redirector = Redirector::new(cfg, location)?;
    tracing::debug!(all, sanitize = redirector.sanitizes(), "listing parameters");
    for line in param_lines(&redirector, all) {
        println!("{}", line);
    }
    Ok(())
}
