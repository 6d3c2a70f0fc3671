
use std::sync::Arc;

use cf_core::prelude::*;
use cf_core::time::mock::MockUtcClock;
use cf_schema::*;
use cf_testutils::*;
use rstest::*;
use serde_json::{
    Value,
    json,
};

use super::*;

#[fixture]
fn widget(widget_schema: ResourceSchema) -> ManifestResource {
    ManifestResource::with_clock(Arc::new(widget_schema), MockUtcClock::new(TEST_NOW_NANOS))
}

#[fixture]
fn gadget(gadget_schema: ResourceSchema) -> ManifestResource {
    ManifestResource::with_clock(Arc::new(gadget_schema), MockUtcClock::new(TEST_NOW_NANOS))
}

#[fixture]
fn catalog(widget_descriptor: ResourceDescriptor, gadget_descriptor: ResourceDescriptor) -> Catalog {
    let mut catalog = Catalog::new();
    catalog.register(widget_descriptor).unwrap();
    catalog.register(gadget_descriptor).unwrap();
    catalog
}

#[fixture]
fn provider(catalog: Catalog) -> Provider {
    Provider::with_clocks(&catalog, || MockUtcClock::new(TEST_NOW_NANOS))
}

fn paths(diags: &[Diagnostic]) -> Vec<String> {
    let mut out: Vec<String> = vec![];
    for d in diags {
        let path = d.attribute.as_ref().map(|p| p.to_string()).unwrap_or_default();
        if out.last() != Some(&path) {
            out.push(path);
        }
    }
    out
}
