use anyhow::bail;
use cf_core::prelude::*;
use serde_yaml::{
    Mapping,
    Number,
    Value as YamlValue,
};

use crate::value::{
    Field,
    ManifestValue,
};

// Builds the manifest document: apiVersion and kind come first and are always the fixed values
// for the resource type, followed by the decoded fields in declaration order.
pub fn manifest(type_meta: &TypeMeta, fields: &[Field]) -> anyhow::Result<Mapping> {
    let mut doc = Mapping::new();
    doc.insert(API_VERSION_KEY.into(), type_meta.api_version.clone().into());
    doc.insert(KIND_KEY.into(), type_meta.kind.clone().into());

    for field in fields {
        if let Some(value) = render_field(&field.value)? {
            insert_unique(&mut doc, &field.key, value)?;
        }
    }
    Ok(doc)
}

pub fn to_yaml(doc: &Mapping) -> anyhow::Result<String> {
    Ok(serde_yaml::to_string(doc)?)
}

fn render_field(value: &ManifestValue) -> anyhow::Result<Option<YamlValue>> {
    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some(render(value)?))
}

fn render(value: &ManifestValue) -> anyhow::Result<YamlValue> {
    let rendered = match value {
        ManifestValue::Bool(b) => YamlValue::Bool(*b),
        ManifestValue::Int(i) => YamlValue::Number(Number::from(*i)),
        ManifestValue::Float(f) => YamlValue::Number(Number::from(*f)),
        ManifestValue::String(s) => YamlValue::String(s.clone()),
        ManifestValue::IntOrString(IntOrString::Int(i)) => YamlValue::Number(Number::from(*i)),
        ManifestValue::IntOrString(IntOrString::String(s)) => YamlValue::String(s.clone()),
        ManifestValue::Dynamic(v) => serde_yaml::to_value(v)?,
        ManifestValue::List(items) => YamlValue::Sequence(items.iter().map(render).collect::<anyhow::Result<_>>()?),
        ManifestValue::Map(entries) => {
            let mut out = Mapping::new();
            for (k, v) in entries {
                out.insert(k.clone().into(), render(v)?);
            }
            YamlValue::Mapping(out)
        },
        ManifestValue::Object(fields) => {
            let mut out = Mapping::new();
            for field in fields {
                if let Some(v) = render_field(&field.value)? {
                    insert_unique(&mut out, &field.key, v)?;
                }
            }
            YamlValue::Mapping(out)
        },
    };
    Ok(rendered)
}

// Two fields landing on the same key would silently drop one of them
fn insert_unique(doc: &mut Mapping, key: &str, value: YamlValue) -> EmptyResult {
    if doc.contains_key(key) {
        bail!("manifest key {key:?} is set more than once");
    }
    doc.insert(key.into(), value);
    Ok(())
}
