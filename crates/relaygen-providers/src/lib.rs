//! Provider layer for Relaygen.
//!
//! # Architecture
//!
//! - [`traits::TextProvider`] — one strategy per HTTP backend
//! - [`python_backend`], [`local_llm`], [`rapidapi`] — the three backends
//! - [`dispatcher::ProviderDispatcher`] — walks the chain until one succeeds
//! - [`messages`] — placeholder and diagnostic strings returned on failure

pub mod dispatcher;
pub mod error;
mod http;
pub mod local_llm;
pub mod messages;
pub mod python_backend;
pub mod rapidapi;
pub mod traits;

// Re-export main types for convenience
pub use dispatcher::{ProviderDispatcher, LOCAL_MODEL};
pub use error::ProviderError;
pub use local_llm::LocalLlmProvider;
pub use python_backend::PythonBackendProvider;
pub use rapidapi::RapidApiProvider;
pub use traits::{ProviderKind, TextProvider};
