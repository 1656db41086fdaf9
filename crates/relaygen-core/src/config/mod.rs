//! Configuration system — schema, loading, and env var overrides.
//!
//! # Usage
//! ```no_run
//! use relaygen_core::config;
//!
//! let cfg = config::load_config(None);
//! println!("Local LLM: {}", cfg.local.endpoint_url);
//! ```

pub mod loader;
pub mod schema;

// Re-export key types
pub use loader::{apply_env_overrides, get_config_path, load_config, save_config};
pub use schema::{DispatcherConfig, ProviderConfig};
