use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use kube::core::{
    GroupVersionKind,
    TypeMeta,
};
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
    de,
};

use super::*;

// GVK is a "newtype" wrapper around the kube GroupVersionKind object that lets us provide
// custom serialization methods, plus conversions to and from the apiVersion/kind pair that
// ends up in a manifest.
//
// Serialized as "group/version.kind", or "version.kind" for the core group, which is the form used
// for keys in config files.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct GVK(GroupVersionKind);

impl GVK {
    pub fn new(group: &str, version: &str, kind: &str) -> GVK {
        GVK(GroupVersionKind::gvk(group, version, kind))
    }

    pub fn from_api_version_kind(api_version: &str, kind: &str) -> anyhow::Result<GVK> {
        if kind.is_empty() {
            return Err(KubernetesError::invalid_api_version(&format!("{api_version} (empty kind)")));
        }

        let parts: Vec<_> = api_version.split('/').collect();
        match parts[..] {
            [version] if !version.is_empty() => Ok(GVK::new("", version, kind)),
            [group, version] if !group.is_empty() && !version.is_empty() => Ok(GVK::new(group, version, kind)),
            _ => Err(KubernetesError::invalid_api_version(api_version)),
        }
    }

    pub fn into_type_meta(&self) -> TypeMeta {
        TypeMeta {
            api_version: self.0.api_version(),
            kind: self.0.kind.clone(),
        }
    }
}

// Impl Deref lets a GVK act like a GroupVersionKind anywhere one of those is expected
impl Deref for GVK {
    type Target = GroupVersionKind;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for GVK {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.0.api_version(), self.0.kind)
    }
}

// Parses the "group/version.kind" form written by Display; "/version.kind" is accepted for
// core types as well.
impl FromStr for GVK {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<GVK> {
        let invalid = || anyhow!("invalid format for gvk: {s}");
        let (group, rest) = s.split_once('/').unwrap_or(("", s));
        let (version, kind) = rest.split_once('.').ok_or_else(invalid)?;
        if version.is_empty() || kind.is_empty() || kind.contains(['.', '/']) {
            return Err(invalid());
        }
        Ok(GVK::new(group, version, kind))
    }
}

impl Serialize for GVK {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GVK {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<GVK, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
