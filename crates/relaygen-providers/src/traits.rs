//! Provider trait — one implementation per backend in the fallback chain.

use std::fmt;

use async_trait::async_trait;
use relaygen_core::types::GenerationRequest;

use crate::error::ProviderError;

/// The backends the dispatcher knows how to fall back between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Python,
    Local,
    Rapid,
}

impl ProviderKind {
    /// Human-readable name for logs and status output.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::Python => "Python Backend",
            ProviderKind::Local => "Local LLM",
            ProviderKind::Rapid => "RapidAPI",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single text-generation backend.
///
/// Implementations make exactly one HTTP exchange per call and never retry.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Which slot of the fallback chain this provider fills.
    fn kind(&self) -> ProviderKind;

    /// Display name for logging.
    fn display_name(&self) -> &str {
        self.kind().display_name()
    }

    /// Attempt one generation.
    ///
    /// Returns the generated text, or the reason this provider is unavailable.
    /// An empty completion counts as a failure.
    async fn try_generate(&self, request: &GenerationRequest) -> Result<String, ProviderError>;
}
