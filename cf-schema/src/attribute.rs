use std::ops::Not;

use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use crate::naming::lower_camel_case;
use crate::validator::Validator;

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AttributeType {
    String,
    Int,
    Float,
    Bool,
    IntOrString,
    Dynamic,
    List { items: Box<AttributeType> },
    Map { values: Box<AttributeType> },
    Object { attributes: Vec<Attribute> },
}

impl AttributeType {
    pub fn list_of(items: AttributeType) -> AttributeType {
        AttributeType::List { items: Box::new(items) }
    }

    pub fn map_of(values: AttributeType) -> AttributeType {
        AttributeType::Map { values: Box::new(values) }
    }

    pub fn object(attributes: Vec<Attribute>) -> AttributeType {
        AttributeType::Object { attributes }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Int => "int",
            AttributeType::Float => "float",
            AttributeType::Bool => "bool",
            AttributeType::IntOrString => "intOrString",
            AttributeType::Dynamic => "dynamic",
            AttributeType::List { .. } => "list",
            AttributeType::Map { .. } => "map",
            AttributeType::Object { .. } => "object",
        }
    }
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaml_name: Option<String>,

    #[serde(flatten)]
    pub type_: AttributeType,

    #[serde(default, skip_serializing_if = "<&bool>::not")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "<&bool>::not")]
    pub computed: bool,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "<&bool>::not")]
    pub requires_replace: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl Attribute {
    fn new(name: &str, type_: AttributeType, description: &str) -> Attribute {
        Attribute {
            name: name.into(),
            yaml_name: None,
            type_,
            required: false,
            computed: false,
            description: description.into(),
            requires_replace: false,
            validators: vec![],
        }
    }

    pub fn required(name: &str, type_: AttributeType, description: &str) -> Attribute {
        Attribute { required: true, ..Attribute::new(name, type_, description) }
    }

    pub fn optional(name: &str, type_: AttributeType, description: &str) -> Attribute {
        Attribute::new(name, type_, description)
    }

    pub fn computed(name: &str, type_: AttributeType, description: &str) -> Attribute {
        Attribute { computed: true, ..Attribute::new(name, type_, description) }
    }

    pub fn with_validator(mut self, v: Validator) -> Attribute {
        self.validators.push(v);
        self
    }

    pub fn with_requires_replace(mut self, requires_replace: bool) -> Attribute {
        self.requires_replace = requires_replace;
        self
    }

    pub fn with_yaml_name(mut self, yaml_name: &str) -> Attribute {
        self.yaml_name = Some(yaml_name.into());
        self
    }

    // The key used for this attribute in the generated manifest
    pub fn yaml_name(&self) -> String {
        self.yaml_name.clone().unwrap_or_else(|| lower_camel_case(&self.name))
    }

    // Only attributes that the user can't set at all are skipped when reading a config
    pub fn is_computed_only(&self) -> bool {
        self.computed && !self.required
    }

    pub fn nested_attributes(&self) -> Option<&[Attribute]> {
        match &self.type_ {
            AttributeType::Object { attributes } => Some(attributes),
            _ => None,
        }
    }
}
