use std::collections::BTreeMap; // BTreeMap sorts by key, HashMap doesn't
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::*;

use crate::{
    ResourceDescriptor,
    ResourceSchema,
    SchemaError,
};

const DESCRIPTOR_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

const BUILTIN_DESCRIPTORS: [(&str, &str); 3] = [
    ("argoproj.yaml", include_str!("../catalog/argoproj.yaml")),
    ("cert-manager.yaml", include_str!("../catalog/cert-manager.yaml")),
    ("monitoring-coreos.yaml", include_str!("../catalog/monitoring-coreos.yaml")),
];

// The catalog is the data table that drives the provider: one validated schema per resource
// type, keyed by the resource type name.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    schemas: BTreeMap<String, Arc<ResourceSchema>>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    pub fn builtin() -> anyhow::Result<Catalog> {
        let mut catalog = Catalog::new();
        for (name, contents) in BUILTIN_DESCRIPTORS {
            catalog
                .load_str(contents)
                .with_context(|| format!("loading built-in descriptors from {name}"))?;
        }
        debug!("loaded {} built-in resource types", catalog.len());
        Ok(catalog)
    }

    pub fn register(&mut self, descriptor: ResourceDescriptor) -> anyhow::Result<Arc<ResourceSchema>> {
        let schema = Arc::new(ResourceSchema::from_descriptor(descriptor)?);
        if self.schemas.contains_key(&schema.type_name) {
            return Err(SchemaError::duplicate_resource_type(&schema.type_name));
        }

        debug!("registering {} ({})", schema.type_name, schema.gvk);
        self.schemas.insert(schema.type_name.clone(), schema.clone());
        Ok(schema)
    }

    pub fn load_str(&mut self, contents: &str) -> anyhow::Result<usize> {
        let descriptors = ResourceDescriptor::from_yaml(contents)?;
        let count = descriptors.len();
        for d in descriptors {
            self.register(d)?;
        }
        Ok(count)
    }

    // Loads a single descriptor file, or every descriptor file under a directory
    pub fn load_path(&mut self, path: &Path) -> anyhow::Result<usize> {
        if path.is_dir() {
            let mut entries = fs::read_dir(path)
                .with_context(|| format!("reading descriptor directory {}", path.display()))?
                .map(|e| e.map(|e| e.path()))
                .collect::<Result<Vec<_>, _>>()?;
            entries.sort();

            let mut count = 0;
            for entry in entries {
                if entry.is_dir() || is_descriptor_file(&entry) {
                    count += self.load_path(&entry)?;
                }
            }
            info!("loaded {count} resource types from {}", path.display());
            Ok(count)
        } else {
            let contents =
                fs::read_to_string(path).with_context(|| format!("reading descriptor file {}", path.display()))?;
            self.load_str(&contents)
                .with_context(|| format!("loading descriptors from {}", path.display()))
        }
    }

    pub fn retain<F: FnMut(&ResourceSchema) -> bool>(&mut self, mut f: F) {
        self.schemas.retain(|_, schema| f(schema));
    }

    pub fn get(&self, type_name: &str) -> Option<&Arc<ResourceSchema>> {
        self.schemas.get(type_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ResourceSchema>> {
        self.schemas.values()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

fn is_descriptor_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DESCRIPTOR_EXTENSIONS.contains(&ext))
}
