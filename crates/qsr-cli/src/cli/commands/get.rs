//! Get command: print one parameter value.

use anyhow::Result;
use qsr_core::{Location, Redirector, RedirectorConfig};

pub fn run_get(cfg: RedirectorConfig, location: &dyn Location, key: &str) -> Result<()> {
    let redirector = Redirector::new(cfg, location)?;
    println!("{}", redirector.get_value(key));
    Ok(())
}
