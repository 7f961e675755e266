//! CLI command handlers. Each command is in its own file.

mod get;
mod params;
mod uri;

pub use get::run_get;
pub use params::run_params;
pub use uri::run_uri;
