use std::fs::File;
use std::path::PathBuf;

use cf_core::prelude::*;
use cf_schema::Catalog;
use serde::{
    Deserialize,
    Serialize,
};
use tracing::*;

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    #[serde(default = "default_true")]
    pub include_builtin: bool,

    #[serde(default)]
    pub catalog_paths: Vec<PathBuf>,

    // Resource types to hide from the host, written as "group/version.Kind"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<GVK>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            include_builtin: true,
            catalog_paths: vec![],
            exclude: vec![],
        }
    }
}

impl ProviderConfig {
    pub fn load(filename: &str) -> anyhow::Result<ProviderConfig> {
        let config: ProviderConfig = serde_yaml::from_reader(File::open(filename)?)?;
        info!("loaded provider config from {filename}");
        Ok(config)
    }

    // A broken descriptor anywhere in the catalog is fatal; the provider refuses to start
    // rather than serve a partial set of resource types.
    pub fn build_catalog(&self) -> anyhow::Result<Catalog> {
        let mut catalog = if self.include_builtin { Catalog::builtin()? } else { Catalog::new() };
        for path in &self.catalog_paths {
            catalog.load_path(path)?;
        }

        if !self.exclude.is_empty() {
            catalog.retain(|schema| !self.exclude.contains(&schema.gvk));
        }
        info!("serving {} resource types", catalog.len());
        Ok(catalog)
    }
}
