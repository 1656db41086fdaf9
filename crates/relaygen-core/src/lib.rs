//! Core building blocks shared by the Relaygen crates.
//!
//! - [`types`] — OpenAI chat and Python backend wire formats
//! - [`config`] — `DispatcherConfig` schema, file loader, env overrides
//! - [`utils`] — data directory and string helpers

pub mod config;
pub mod types;
pub mod utils;
