use cf_core::prelude::*;
use serde::Serialize;

use crate::{
    Attribute,
    AttributeType,
    ResourceDescriptor,
    SchemaError,
    Validator,
};

// The full, Terraform-visible schema for one resource type: the computed root attributes, the
// standard Kubernetes metadata block, and then whatever the descriptor declares.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSchema {
    pub type_name: String,
    pub api_version: String,
    pub kind: String,
    pub namespaced: bool,
    pub immutable_name: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    pub attributes: Vec<Attribute>,

    #[serde(skip)]
    pub gvk: GVK,
}

impl ResourceSchema {
    pub fn from_descriptor(descriptor: ResourceDescriptor) -> anyhow::Result<ResourceSchema> {
        let problems = descriptor.problems();
        if !problems.is_empty() {
            return Err(SchemaError::invalid_descriptor(&format!(
                "{}/{}: {}",
                descriptor.api_version,
                descriptor.kind,
                problems.join("; ")
            )));
        }

        let gvk = descriptor.gvk()?;
        let type_name = descriptor.type_name()?;
        let mut attributes = root_attributes(&descriptor.api_version, &descriptor.kind);
        attributes.push(metadata_attribute(descriptor.namespaced, descriptor.immutable_name));
        attributes.extend(descriptor.attributes);

        Ok(ResourceSchema {
            type_name,
            api_version: descriptor.api_version,
            kind: descriptor.kind,
            namespaced: descriptor.namespaced,
            immutable_name: descriptor.immutable_name,
            description: descriptor.description,
            attributes,
            gvk,
        })
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    // Paths (through nested objects only) of every attribute whose change forces replacement
    pub fn replacement_paths(&self) -> Vec<Vec<String>> {
        let mut paths = vec![];
        collect_replacement_paths(&mut vec![], &self.attributes, &mut paths);
        paths
    }
}

fn collect_replacement_paths(prefix: &mut Vec<String>, attrs: &[Attribute], paths: &mut Vec<Vec<String>>) {
    for attr in attrs {
        prefix.push(attr.name.clone());
        if attr.requires_replace {
            paths.push(prefix.clone());
        }
        if let Some(nested) = attr.nested_attributes() {
            collect_replacement_paths(prefix, nested, paths);
        }
        prefix.pop();
    }
}

fn root_attributes(api_version: &str, kind: &str) -> Vec<Attribute> {
    vec![
        Attribute::computed(
            ID_ATTR,
            AttributeType::Int,
            "Unique identifier of this resource, derived from the time of the last create or update.",
        ),
        Attribute::computed(YAML_ATTR, AttributeType::String, "The generated manifest in YAML format."),
        Attribute::computed(
            API_VERSION_ATTR,
            AttributeType::String,
            &format!("The API group and version of the generated manifest, always '{api_version}'."),
        ),
        Attribute::computed(
            KIND_ATTR,
            AttributeType::String,
            &format!("The type of the generated manifest, always '{kind}'."),
        ),
    ]
}

fn metadata_attribute(namespaced: bool, immutable_name: bool) -> Attribute {
    let mut attributes = vec![
        Attribute::required(
            NAME_ATTR,
            AttributeType::String,
            "Unique name of this object within its namespace (or the cluster for cluster-scoped objects).",
        )
        .with_validator(Validator::ResourceName)
        .with_requires_replace(immutable_name),
    ];

    if namespaced {
        attributes.push(
            Attribute::optional(NAMESPACE_ATTR, AttributeType::String, "The namespace this object lives in.")
                .with_validator(Validator::NamespaceName),
        );
    }

    attributes.push(
        Attribute::optional(
            LABELS_ATTR,
            AttributeType::map_of(AttributeType::String),
            "Map of string keys and values that can be used to organize and categorize objects.",
        )
        .with_validator(Validator::Labels),
    );
    attributes.push(
        Attribute::optional(
            ANNOTATIONS_ATTR,
            AttributeType::map_of(AttributeType::String),
            "Unstructured key value map stored with the object that tools and libraries can read.",
        )
        .with_validator(Validator::Annotations),
    );

    Attribute::required(
        METADATA_ATTR,
        AttributeType::object(attributes),
        "Standard Kubernetes object metadata.",
    )
}
