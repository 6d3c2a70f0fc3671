use std::collections::BTreeMap;

use cf_core::prelude::*;
use cf_schema::{
    Attribute,
    AttributeType,
    Validator,
};
use serde_json::{
    Map,
    Value,
};

use crate::diagnostics::{
    AttributePath,
    Diagnostic,
};

// The single internal representation of a manifest.  Objects keep their fields in declaration
// order under the key they'll have in the YAML output; absent optional fields are simply not
// there.
#[derive(Clone, Debug, PartialEq)]
pub enum ManifestValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    IntOrString(IntOrString),
    Dynamic(Value),
    List(Vec<ManifestValue>),
    Map(BTreeMap<String, ManifestValue>),
    Object(Vec<Field>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: ManifestValue,
}

impl ManifestValue {
    // What a required attribute turns into when the config doesn't say anything about it
    pub fn zero(type_: &AttributeType) -> ManifestValue {
        match type_ {
            AttributeType::String => ManifestValue::String(String::new()),
            AttributeType::Int => ManifestValue::Int(0),
            AttributeType::Float => ManifestValue::Float(0.0),
            AttributeType::Bool => ManifestValue::Bool(false),
            AttributeType::IntOrString => ManifestValue::IntOrString(IntOrString::Int(0)),
            AttributeType::Dynamic => ManifestValue::Dynamic(Value::Null),
            AttributeType::List { .. } => ManifestValue::List(vec![]),
            AttributeType::Map { .. } => ManifestValue::Map(BTreeMap::new()),
            AttributeType::Object { attributes } => ManifestValue::Object(
                attributes
                    .iter()
                    .filter(|a| a.required)
                    .map(|a| Field { key: a.yaml_name(), value: ManifestValue::zero(&a.type_) })
                    .collect(),
            ),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ManifestValue> {
        match self {
            ManifestValue::Object(fields) => fields.iter().find(|f| f.key == key).map(|f| &f.value),
            ManifestValue::Map(entries) => entries.get(key),
            _ => None,
        }
    }

    // Go-style omitempty: these never show up in a rendered manifest
    pub fn is_empty(&self) -> bool {
        match self {
            ManifestValue::List(items) => items.is_empty(),
            ManifestValue::Map(entries) => entries.is_empty(),
            ManifestValue::Dynamic(v) => v.is_null(),
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeMode {
    // Create/Update: types are checked, missing required attributes get their zero value
    Apply,

    // Validate: every validator runs and missing required attributes are reported
    Validate,
}

pub struct Decoder {
    mode: DecodeMode,
    diags: Vec<Diagnostic>,
}

impl Decoder {
    pub fn new(mode: DecodeMode) -> Decoder {
        Decoder { mode, diags: vec![] }
    }

    // Decodes a whole resource config; the result is always an object, possibly with gaps
    // wherever a diagnostic was recorded.
    pub fn decode_root(mut self, attrs: &[Attribute], config: &Value) -> (ManifestValue, Vec<Diagnostic>) {
        let fields = match config {
            Value::Object(obj) => self.decode_object(&AttributePath::root(), attrs, obj),
            other => {
                self.mismatch(&AttributePath::root(), "object", other);
                vec![]
            },
        };
        (ManifestValue::Object(fields), self.diags)
    }

    fn decode_object(&mut self, path: &AttributePath, attrs: &[Attribute], obj: &Map<String, Value>) -> Vec<Field> {
        for key in obj.keys() {
            if !attrs.iter().any(|a| a.name == *key) {
                self.diags.push(
                    Diagnostic::error("Unsupported attribute", format!("An attribute named {key:?} is not expected here."))
                        .at(&path.clone().attr(key)),
                );
            }
        }

        let mut fields = vec![];
        for attr in attrs {
            let attr_path = path.clone().attr(&attr.name);
            if attr.is_computed_only() {
                self.computed(&attr_path, obj.get(&attr.name));
                continue;
            }

            let value = match obj.get(&attr.name) {
                None | Some(Value::Null) => self.missing(&attr_path, attr),
                Some(v) => self.decode_attribute(&attr_path, attr, v),
            };
            if let Some(value) = value {
                fields.push(Field { key: attr.yaml_name(), value });
            }
        }
        fields
    }

    fn computed(&mut self, path: &AttributePath, value: Option<&Value>) {
        if self.mode == DecodeMode::Validate && value.is_some_and(|v| !v.is_null()) {
            self.diags.push(
                Diagnostic::warning("Value for computed attribute", "This value is set by the provider and will be ignored.")
                    .at(path),
            );
        }
    }

    fn missing(&mut self, path: &AttributePath, attr: &Attribute) -> Option<ManifestValue> {
        if !attr.required {
            return None;
        }

        match self.mode {
            DecodeMode::Apply => Some(ManifestValue::zero(&attr.type_)),
            DecodeMode::Validate => {
                self.diags.push(
                    Diagnostic::error(
                        "Missing required attribute",
                        format!("The attribute {:?} is required, but no definition was found.", attr.name),
                    )
                    .at(path),
                );
                None
            },
        }
    }

    fn decode_attribute(&mut self, path: &AttributePath, attr: &Attribute, v: &Value) -> Option<ManifestValue> {
        let value = self.decode_value(path, &attr.type_, v)?;
        if self.mode == DecodeMode::Validate {
            self.run_validators(path, &attr.validators, &value);
        }
        Some(value)
    }

    fn decode_value(&mut self, path: &AttributePath, type_: &AttributeType, v: &Value) -> Option<ManifestValue> {
        let decoded = match (type_, v) {
            (AttributeType::String, Value::String(s)) => ManifestValue::String(s.clone()),
            (AttributeType::Bool, Value::Bool(b)) => ManifestValue::Bool(*b),
            (AttributeType::Int, Value::Number(n)) => match n.as_i64() {
                Some(i) => ManifestValue::Int(i),
                None => {
                    self.mismatch(path, "a whole number", v);
                    return None;
                },
            },
            (AttributeType::Float, Value::Number(n)) => ManifestValue::Float(n.as_f64()?),
            (AttributeType::IntOrString, Value::Number(n)) => match n.as_i64().and_then(|i| i32::try_from(i).ok()) {
                Some(i) => ManifestValue::IntOrString(IntOrString::Int(i)),
                None => {
                    self.mismatch(path, "a 32-bit integer or a string", v);
                    return None;
                },
            },
            (AttributeType::IntOrString, Value::String(s)) => ManifestValue::IntOrString(int_or_string(s)),
            (AttributeType::Dynamic, _) => ManifestValue::Dynamic(v.clone()),
            (AttributeType::List { items }, Value::Array(elems)) => {
                let mut out = vec![];
                for (i, elem) in elems.iter().enumerate() {
                    let elem_path = path.clone().index(i);
                    if elem.is_null() {
                        self.diags.push(
                            Diagnostic::error("Invalid list element", "List elements can't be null.").at(&elem_path),
                        );
                    } else if let Some(value) = self.decode_value(&elem_path, items, elem) {
                        out.push(value);
                    }
                }
                ManifestValue::List(out)
            },
            (AttributeType::Map { values }, Value::Object(entries)) => {
                let mut out = BTreeMap::new();
                for (key, elem) in entries {
                    let elem_path = path.clone().key(key);
                    if elem.is_null() {
                        self.diags
                            .push(Diagnostic::error("Invalid map element", "Map values can't be null.").at(&elem_path));
                    } else if let Some(value) = self.decode_value(&elem_path, values, elem) {
                        out.insert(key.clone(), value);
                    }
                }
                ManifestValue::Map(out)
            },
            (AttributeType::Object { attributes }, Value::Object(obj)) => {
                ManifestValue::Object(self.decode_object(path, attributes, obj))
            },
            (type_, v) => {
                self.mismatch(path, &describe_type(type_), v);
                return None;
            },
        };
        Some(decoded)
    }

    fn run_validators(&mut self, path: &AttributePath, validators: &[Validator], value: &ManifestValue) {
        for validator in validators {
            let errs = match value {
                ManifestValue::String(s) => validator.check_str(s),
                ManifestValue::Map(entries) => validator.check_map(&string_entries(entries)),
                _ => vec![],
            };
            for err in errs {
                self.diags.push(Diagnostic::error("Invalid attribute value", err).at(path));
            }
        }
    }

    fn mismatch(&mut self, path: &AttributePath, expected: &str, got: &Value) {
        self.diags.push(
            Diagnostic::error(
                "Incorrect attribute value type",
                format!("Expected {expected}, got {}.", describe_json(got)),
            )
            .at(path),
        );
    }
}

// A string only becomes an int when it's the plain decimal spelling of one, so the rendered
// value always reads back the same; "007" or "+5" stay strings.
fn int_or_string(s: &str) -> IntOrString {
    match s.parse::<i32>() {
        Ok(i) if i.to_string() == s => IntOrString::Int(i),
        _ => IntOrString::String(s.into()),
    }
}

fn string_entries(entries: &BTreeMap<String, ManifestValue>) -> BTreeMap<String, String> {
    entries
        .iter()
        .filter_map(|(k, v)| match v {
            ManifestValue::String(s) => Some((k.clone(), s.clone())),
            _ => None,
        })
        .collect()
}

fn describe_type(type_: &AttributeType) -> String {
    match type_ {
        AttributeType::String => "a string".into(),
        AttributeType::Int => "a whole number".into(),
        AttributeType::Float => "a number".into(),
        AttributeType::Bool => "a bool".into(),
        AttributeType::IntOrString => "a number or a string".into(),
        AttributeType::Dynamic => "any value".into(),
        AttributeType::List { items } => format!("a list of {}", plural(items)),
        AttributeType::Map { values } => format!("a map of {}", plural(values)),
        AttributeType::Object { .. } => "an object".into(),
    }
}

fn plural(type_: &AttributeType) -> String {
    match type_ {
        AttributeType::String => "strings".into(),
        AttributeType::Int | AttributeType::Float => "numbers".into(),
        AttributeType::Bool => "bools".into(),
        AttributeType::Object { .. } => "objects".into(),
        other => other.name().into(),
    }
}

fn describe_json(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
