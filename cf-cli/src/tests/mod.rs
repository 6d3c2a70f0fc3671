mod completions_test;

use assertables::*;
use cf_provider::Provider;
use cf_schema::{
    Catalog,
    ResourceDescriptor,
};
use cf_testutils::*;
use rstest::*;

#[fixture]
fn provider(widget_descriptor: ResourceDescriptor, gadget_descriptor: ResourceDescriptor) -> Provider {
    let mut catalog = Catalog::new();
    catalog.register(widget_descriptor).unwrap();
    catalog.register(gadget_descriptor).unwrap();
    Provider::new(&catalog)
}

fn output_of(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> (anyhow::Result<()>, String) {
    let mut buf = vec![];
    let res = f(&mut buf);
    (res, String::from_utf8(buf).unwrap())
}
