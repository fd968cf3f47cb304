//! Application configuration
//!
//! Configuration is loaded once at startup from a TOML file and then
//! overridden by environment variables. Access goes through the global
//! `get_config()` accessor.

mod load;
mod structs;

pub use load::{get_config, init_config};
pub use structs::*;
