use std::fmt;
use std::sync::Arc;

use cf_core::prelude::*;
use cf_core::time::{
    Clockable,
    IdGenerator,
};
use cf_schema::ResourceSchema;
use serde::Serialize;
use serde_json::{
    Map,
    Value,
};
use tracing::*;

use crate::diagnostics::{
    AttributePath,
    Diagnostic,
    has_errors,
};
use crate::error::ProviderError;
use crate::render;
use crate::value::{
    DecodeMode,
    Decoder,
    ManifestValue,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    pub planned_state: Value,
    pub requires_replace: Vec<AttributePath>,
}

// One generic resource implementation that serves every CRD in the catalog; everything that
// differs between resource types lives in the schema.
pub struct ManifestResource {
    schema: Arc<ResourceSchema>,
    type_meta: TypeMeta,
    ids: IdGenerator,
}

impl ManifestResource {
    pub fn new(schema: Arc<ResourceSchema>) -> ManifestResource {
        ManifestResource::with_ids(schema, IdGenerator::new())
    }

    pub fn with_clock(schema: Arc<ResourceSchema>, clock: Box<dyn Clockable + Send + Sync>) -> ManifestResource {
        ManifestResource::with_ids(schema, IdGenerator::with_clock(clock))
    }

    fn with_ids(schema: Arc<ResourceSchema>, ids: IdGenerator) -> ManifestResource {
        let type_meta = schema.gvk.into_type_meta();
        ManifestResource { schema, type_meta, ids }
    }

    pub fn schema(&self) -> &Arc<ResourceSchema> {
        &self.schema
    }

    pub fn type_name(&self) -> &str {
        &self.schema.type_name
    }

    #[instrument(skip_all, fields(resource_type = %self.schema.type_name))]
    pub fn validate(&self, config: &Value) -> Vec<Diagnostic> {
        let (_, diags) = Decoder::new(DecodeMode::Validate).decode_root(&self.schema.attributes, config);
        debug!("validation produced {} diagnostics", diags.len());
        diags
    }

    #[instrument(skip_all, fields(resource_type = %self.schema.type_name))]
    pub fn plan(&self, prior_state: Option<&Value>, proposed_state: &Value) -> PlanResult {
        let mut planned_state = proposed_state.clone();
        let requires_replace = match prior_state {
            Some(prior) => self.replacements(prior, proposed_state),
            None => vec![],
        };

        let unchanged = prior_state.is_some_and(|prior| user_attrs(prior) == user_attrs(proposed_state));
        if let Value::Object(obj) = &mut planned_state {
            obj.insert(API_VERSION_ATTR.into(), self.type_meta.api_version.clone().into());
            obj.insert(KIND_ATTR.into(), self.type_meta.kind.clone().into());
            match prior_state {
                Some(Value::Object(prior)) if unchanged && requires_replace.is_empty() => {
                    for attr in [ID_ATTR, YAML_ATTR] {
                        obj.insert(attr.into(), prior.get(attr).cloned().unwrap_or(Value::Null));
                    }
                },
                _ => {
                    obj.insert(ID_ATTR.into(), Value::Null);
                    obj.insert(YAML_ATTR.into(), Value::Null);
                },
            }
        }

        if !requires_replace.is_empty() {
            info!("changes to {} attribute(s) force replacement", requires_replace.len());
        }
        PlanResult { planned_state, requires_replace }
    }

    #[instrument(skip_all, fields(resource_type = %self.schema.type_name))]
    pub fn create(&self, planned_state: &Value) -> Result<Value, ProviderError> {
        self.apply(planned_state)
    }

    #[instrument(skip_all, fields(resource_type = %self.schema.type_name))]
    pub fn update(&self, _prior_state: &Value, planned_state: &Value) -> Result<Value, ProviderError> {
        self.apply(planned_state)
    }

    // The state already holds everything there is to know about the resource
    pub fn read(&self, current_state: &Value) -> Value {
        current_state.clone()
    }

    // Nothing exists outside of the state, so there's nothing to clean up
    pub fn delete(&self, _current_state: &Value) -> EmptyResult {
        debug!("deleting {} is a no-op", self.schema.type_name);
        Ok(())
    }

    // The manifest a config produces, without touching the id generator
    pub fn render(&self, config: &Value) -> Result<String, ProviderError> {
        let decoded = self.decode(config)?;
        self.to_yaml(&decoded)
    }

    fn apply(&self, config: &Value) -> Result<Value, ProviderError> {
        let decoded = self.decode(config)?;
        let yaml = self.to_yaml(&decoded)?;
        let id = self.ids.next_id()?;
        debug!("rendered manifest with id {id}");

        let mut state = match config {
            Value::Object(obj) => obj.clone(),
            _ => Map::new(),
        };
        state.insert(ID_ATTR.into(), id.into());
        state.insert(YAML_ATTR.into(), yaml.into());
        state.insert(API_VERSION_ATTR.into(), self.type_meta.api_version.clone().into());
        state.insert(KIND_ATTR.into(), self.type_meta.kind.clone().into());
        Ok(Value::Object(state))
    }

    fn decode(&self, config: &Value) -> Result<ManifestValue, ProviderError> {
        let (decoded, diags) = Decoder::new(DecodeMode::Apply).decode_root(&self.schema.attributes, config);
        if has_errors(&diags) {
            warn!("config for {} could not be decoded", self.schema.type_name);
            return Err(ProviderError::InvalidConfig(diags));
        }
        Ok(decoded)
    }

    fn to_yaml(&self, decoded: &ManifestValue) -> Result<String, ProviderError> {
        let ManifestValue::Object(fields) = decoded else {
            return Err(ProviderError::Serialization("manifest root must be an object".into()));
        };
        render::manifest(&self.type_meta, fields)
            .and_then(|doc| render::to_yaml(&doc))
            .map_err(|e| ProviderError::Serialization(format!("{e:#}")))
    }

    fn replacements(&self, prior: &Value, proposed: &Value) -> Vec<AttributePath> {
        self.schema
            .replacement_paths()
            .into_iter()
            .filter(|path| lookup(prior, path) != lookup(proposed, path))
            .map(|path| AttributePath::from_attrs(&path))
            .collect()
    }
}

impl fmt::Debug for ManifestResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManifestResource")
            .field("type_name", &self.schema.type_name)
            .field("type_meta", &self.type_meta)
            .finish_non_exhaustive()
    }
}

fn lookup<'a>(value: &'a Value, path: &[String]) -> &'a Value {
    let mut current = value;
    for name in path {
        match current.get(name) {
            Some(v) => current = v,
            None => return &Value::Null,
        }
    }
    current
}

// Everything but the computed root attributes, which the provider fills in itself
fn user_attrs(state: &Value) -> Map<String, Value> {
    let mut attrs = state.as_object().cloned().unwrap_or_default();
    for attr in [ID_ATTR, YAML_ATTR, API_VERSION_ATTR, KIND_ATTR] {
        attrs.remove(attr);
    }
    attrs.retain(|_, v| !v.is_null());
    attrs
}
