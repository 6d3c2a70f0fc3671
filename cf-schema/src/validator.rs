use std::collections::BTreeMap;
use std::fmt;

use cf_core::k8s::{
    annotation_errors,
    dns1123_label_errors,
    dns1123_subdomain_errors,
    label_errors,
};
use lazy_static::lazy_static;
use regex::Regex;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
    de,
};

use crate::AttributeType;

lazy_static! {
    // Go-style durations as used throughout Kubernetes APIs, e.g. "1h30m", "90s", "250ms"
    static ref DURATION_RE: Regex = Regex::new(r"^([0-9]+(\.[0-9]+)?(ns|us|µs|ms|s|m|h))+$").unwrap();
}

// A regex that is compiled when the descriptor is loaded, so a bad pattern is a load error
// instead of something we find out about when a user applies a config.
#[derive(Clone, Debug)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(pattern: &str) -> anyhow::Result<Pattern> {
        Ok(Pattern(Regex::new(pattern)?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Pattern, D::Error> {
        let s = String::deserialize(deserializer)?;
        Regex::new(&s).map(Pattern).map_err(de::Error::custom)
    }
}

#[derive(Clone, Debug, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Validator {
    Length {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
    },
    Regex {
        #[schemars(with = "String")]
        pattern: Pattern,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    OneOf {
        values: Vec<String>,
    },
    Duration,
    ResourceName,
    NamespaceName,
    Labels,
    Annotations,
}

impl Validator {
    pub fn applies_to(&self, type_: &AttributeType) -> bool {
        match self {
            Validator::Labels | Validator::Annotations => {
                matches!(type_, AttributeType::Map { values } if **values == AttributeType::String)
            },
            _ => *type_ == AttributeType::String,
        }
    }

    pub fn check_str(&self, value: &str) -> Vec<String> {
        match self {
            Validator::Length { min, max } => {
                let len = value.chars().count();
                let mut errs = vec![];
                if let Some(min) = min
                    && len < *min
                {
                    errs.push(format!("string length must be at least {min}, got {len}"));
                }
                if let Some(max) = max
                    && len > *max
                {
                    errs.push(format!("string length must be at most {max}, got {len}"));
                }
                errs
            },
            Validator::Regex { pattern, message } => {
                if pattern.is_match(value) {
                    vec![]
                } else {
                    vec![message.clone().unwrap_or(format!("value must match the pattern {}", pattern.as_str()))]
                }
            },
            Validator::OneOf { values } => {
                if values.iter().any(|v| v == value) {
                    vec![]
                } else {
                    vec![format!("value must be one of: {}", values.join(", "))]
                }
            },
            Validator::Duration => {
                if DURATION_RE.is_match(value) {
                    vec![]
                } else {
                    vec!["value must be a duration such as \"300ms\", \"1.5h\" or \"2h45m\"".into()]
                }
            },
            Validator::ResourceName => dns1123_subdomain_errors(value),
            Validator::NamespaceName => dns1123_label_errors(value),
            Validator::Labels | Validator::Annotations => vec![],
        }
    }

    pub fn check_map(&self, value: &BTreeMap<String, String>) -> Vec<String> {
        match self {
            Validator::Labels => label_errors(value),
            Validator::Annotations => annotation_errors(value),
            _ => vec![],
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Validator::Length { min: Some(min), max: Some(max) } => write!(f, "length between {min} and {max}"),
            Validator::Length { min: Some(min), max: None } => write!(f, "length at least {min}"),
            Validator::Length { min: None, max: Some(max) } => write!(f, "length at most {max}"),
            Validator::Length { min: None, max: None } => write!(f, "any length"),
            Validator::Regex { pattern, .. } => write!(f, "matches {}", pattern.as_str()),
            Validator::OneOf { values } => write!(f, "one of [{}]", values.join(", ")),
            Validator::Duration => write!(f, "a duration"),
            Validator::ResourceName => write!(f, "a valid resource name"),
            Validator::NamespaceName => write!(f, "a valid namespace name"),
            Validator::Labels => write!(f, "valid labels"),
            Validator::Annotations => write!(f, "valid annotations"),
        }
    }
}
