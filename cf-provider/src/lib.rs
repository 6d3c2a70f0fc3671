#![cfg_attr(coverage, feature(coverage_attribute))]
mod config;
mod diagnostics;
mod error;
mod provider;
mod render;
mod resource;
mod value;

pub use crate::config::ProviderConfig;
pub use crate::diagnostics::{
    AttributePath,
    Diagnostic,
    PathStep,
    Severity,
    has_errors,
};
pub use crate::error::ProviderError;
pub use crate::provider::{
    PROVIDER_NAME,
    Provider,
    ProviderMetadata,
    ProviderService,
};
pub use crate::resource::{
    ManifestResource,
    PlanResult,
};
pub use crate::value::{
    DecodeMode,
    Decoder,
    Field,
    ManifestValue,
};

#[cfg(test)]
mod tests;
