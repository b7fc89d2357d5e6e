//! Configuration loader and schema types.
//!
//! Both binaries read the same file, so the widget's refresh cadence and the
//! shared status paths always agree with the player's.

mod load;
mod schema;

pub use load::{default_config_path, default_status_dir, resolve_config_path};
pub use schema::*;
