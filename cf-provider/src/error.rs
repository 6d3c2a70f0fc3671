use thiserror::Error;

use crate::diagnostics::Diagnostic;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error("invalid configuration ({} problem(s))", .0.len())]
    InvalidConfig(Vec<Diagnostic>),

    #[error("could not serialize manifest: {0}")]
    Serialization(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ProviderError {
    // How the error is reported back to the host: config problems keep their individual
    // diagnostics, everything else collapses into a single one.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        match self {
            ProviderError::UnknownResourceType(name) => vec![Diagnostic::error(
                "Unknown resource type",
                format!("This provider does not serve a resource type named {name:?}."),
            )],
            ProviderError::InvalidConfig(diags) => diags,
            ProviderError::Serialization(msg) => vec![Diagnostic::error("Manifest serialization failed", msg)],
            ProviderError::Internal(err) => vec![Diagnostic::error("Internal provider error", format!("{err:#}"))],
        }
    }
}
