use std::collections::BTreeMap;
use std::sync::Arc;

use cf_core::time::Clockable;
use cf_schema::{
    Catalog,
    ResourceSchema,
};
use serde::Serialize;
use serde_json::Value;
use tracing::*;

use crate::config::ProviderConfig;
use crate::diagnostics::Diagnostic;
use crate::error::ProviderError;
use crate::resource::{
    ManifestResource,
    PlanResult,
};

pub const PROVIDER_NAME: &str = "crdform";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    pub name: String,
    pub version: String,
    pub resource_types: Vec<String>,
}

// The calls a host runtime makes into a provider.  The wire protocol that carries these calls
// lives outside of this crate.
pub trait ProviderService {
    fn metadata(&self) -> ProviderMetadata;

    fn schema(&self, resource_type: &str) -> Result<Arc<ResourceSchema>, ProviderError>;

    fn validate(&self, resource_type: &str, config: &Value) -> Result<Vec<Diagnostic>, ProviderError>;

    fn plan(
        &self,
        resource_type: &str,
        prior_state: Option<&Value>,
        proposed_state: &Value,
    ) -> Result<PlanResult, ProviderError>;

    fn create(&self, resource_type: &str, planned_state: &Value) -> Result<Value, ProviderError>;

    fn read(&self, resource_type: &str, current_state: &Value) -> Result<Value, ProviderError>;

    fn update(&self, resource_type: &str, prior_state: &Value, planned_state: &Value) -> Result<Value, ProviderError>;

    fn delete(&self, resource_type: &str, current_state: &Value) -> Result<(), ProviderError>;
}

#[derive(Debug)]
pub struct Provider {
    resources: BTreeMap<String, ManifestResource>,
}

impl Provider {
    pub fn new(catalog: &Catalog) -> Provider {
        Provider::build(catalog, ManifestResource::new)
    }

    // Each resource type gets its own clock so ids stay independent between types
    pub fn with_clocks<F>(catalog: &Catalog, mut make_clock: F) -> Provider
    where
        F: FnMut() -> Box<dyn Clockable + Send + Sync>,
    {
        Provider::build(catalog, |schema| ManifestResource::with_clock(schema, make_clock()))
    }

    pub fn from_config(config: &ProviderConfig) -> anyhow::Result<Provider> {
        Ok(Provider::new(&config.build_catalog()?))
    }

    fn build<F: FnMut(Arc<ResourceSchema>) -> ManifestResource>(catalog: &Catalog, mut make: F) -> Provider {
        let resources: BTreeMap<_, _> =
            catalog.iter().map(|schema| (schema.type_name.clone(), make(schema.clone()))).collect();
        info!("provider serving {} resource types", resources.len());
        Provider { resources }
    }

    pub fn resource(&self, resource_type: &str) -> Result<&ManifestResource, ProviderError> {
        self.resources.get(resource_type).ok_or_else(|| {
            warn!("request for unknown resource type {resource_type}");
            ProviderError::UnknownResourceType(resource_type.into())
        })
    }

    pub fn resource_types(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }
}

impl ProviderService for Provider {
    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: PROVIDER_NAME.into(),
            version: env!("CARGO_PKG_VERSION").into(),
            resource_types: self.resource_types().map(String::from).collect(),
        }
    }

    fn schema(&self, resource_type: &str) -> Result<Arc<ResourceSchema>, ProviderError> {
        Ok(self.resource(resource_type)?.schema().clone())
    }

    fn validate(&self, resource_type: &str, config: &Value) -> Result<Vec<Diagnostic>, ProviderError> {
        Ok(self.resource(resource_type)?.validate(config))
    }

    fn plan(
        &self,
        resource_type: &str,
        prior_state: Option<&Value>,
        proposed_state: &Value,
    ) -> Result<PlanResult, ProviderError> {
        Ok(self.resource(resource_type)?.plan(prior_state, proposed_state))
    }

    fn create(&self, resource_type: &str, planned_state: &Value) -> Result<Value, ProviderError> {
        self.resource(resource_type)?.create(planned_state)
    }

    fn read(&self, resource_type: &str, current_state: &Value) -> Result<Value, ProviderError> {
        Ok(self.resource(resource_type)?.read(current_state))
    }

    fn update(&self, resource_type: &str, prior_state: &Value, planned_state: &Value) -> Result<Value, ProviderError> {
        self.resource(resource_type)?.update(prior_state, planned_state)
    }

    fn delete(&self, resource_type: &str, current_state: &Value) -> Result<(), ProviderError> {
        Ok(self.resource(resource_type)?.delete(current_state)?)
    }
}
