//! Configuration loader and schema types.
//!
//! Settings are read-only: an optional TOML file plus `APLAY__` environment
//! overrides on top of struct defaults. Nothing is ever written back.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;
