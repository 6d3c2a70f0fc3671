use std::collections::HashSet;

use cf_core::prelude::*;
use lazy_static::lazy_static;
use regex::Regex;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::naming::resource_type_name;
use crate::{
    Attribute,
    AttributeType,
};

lazy_static! {
    static ref IDENTIFIER_RE: Regex = Regex::new("^[a-z_][a-z0-9_]*$").unwrap();
}

fn default_true() -> bool {
    true
}

// A ResourceDescriptor is the data for a single CRD-backed resource type: the fixed
// apiVersion/kind that go into every manifest, plus the attributes that come after `metadata`.
#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub api_version: String,
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    #[serde(default = "default_true")]
    pub namespaced: bool,

    #[serde(default = "default_true")]
    pub immutable_name: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl ResourceDescriptor {
    // Descriptor files can hold several YAML documents; JSON files work too since YAML is a
    // superset of JSON.
    pub fn from_yaml(contents: &str) -> anyhow::Result<Vec<ResourceDescriptor>> {
        let mut descriptors = vec![];
        for doc in serde_yaml::Deserializer::from_str(contents) {
            descriptors.push(ResourceDescriptor::deserialize(doc)?);
        }
        Ok(descriptors)
    }

    pub fn gvk(&self) -> anyhow::Result<GVK> {
        GVK::from_api_version_kind(&self.api_version, &self.kind)
    }

    pub fn type_name(&self) -> anyhow::Result<String> {
        match &self.resource_type {
            Some(name) => Ok(name.clone()),
            None => Ok(resource_type_name(&self.gvk()?)),
        }
    }

    // Everything that's wrong with this descriptor; an empty list means it can be served.
    pub fn problems(&self) -> Vec<String> {
        let mut errs = vec![];
        if let Err(e) = self.gvk() {
            errs.push(format!("{e}"));
        }

        if let Some(name) = &self.resource_type
            && !IDENTIFIER_RE.is_match(name)
        {
            errs.push(format!("resource type {name:?} must be a lowercase identifier"));
        }

        for attr in &self.attributes {
            let yaml_name = attr.yaml_name();
            if RESERVED_ROOT_ATTRS.contains(&attr.name.as_str()) {
                errs.push(format!("attribute {:?} is reserved", attr.name));
            } else if RESERVED_MANIFEST_KEYS.contains(&yaml_name.as_str()) {
                errs.push(format!("attribute {:?} can't use the manifest key {yaml_name:?}", attr.name));
            }
        }

        check_attributes("", &self.attributes, false, &mut errs);
        errs
    }
}

fn check_attributes(parent: &str, attrs: &[Attribute], in_collection: bool, errs: &mut Vec<String>) {
    let mut names = HashSet::new();
    let mut yaml_names = HashSet::new();

    for attr in attrs {
        let path = if parent.is_empty() { attr.name.clone() } else { format!("{parent}.{}", attr.name) };

        if !IDENTIFIER_RE.is_match(&attr.name) {
            errs.push(format!("{path}: attribute names must be lowercase identifiers"));
        }
        if !names.insert(attr.name.as_str()) {
            errs.push(format!("{path}: duplicate attribute name"));
        }
        if !yaml_names.insert(attr.yaml_name()) {
            errs.push(format!("{path}: duplicate yaml name {:?}", attr.yaml_name()));
        }
        if attr.required && attr.computed {
            errs.push(format!("{path}: attributes can't be both required and computed"));
        }
        // plan compares values by attribute path, and list or map elements don't have one
        if in_collection && attr.requires_replace {
            errs.push(format!("{path}: requiresReplace can't be used inside a list or map"));
        }
        for v in &attr.validators {
            if !v.applies_to(&attr.type_) {
                errs.push(format!("{path}: validator \"{v}\" can't be used on a {} attribute", attr.type_.name()));
            }
        }

        check_type(&path, &attr.type_, in_collection, errs);
    }
}

fn check_type(path: &str, type_: &AttributeType, in_collection: bool, errs: &mut Vec<String>) {
    match type_ {
        AttributeType::Object { attributes } => check_attributes(path, attributes, in_collection, errs),
        AttributeType::List { items: elem } | AttributeType::Map { values: elem } => {
            check_type(&format!("{path}[*]"), elem, true, errs)
        },
        _ => (),
    }
}
