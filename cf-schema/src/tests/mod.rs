mod catalog_test;
mod descriptor_test;

use cf_testutils::*;
use rstest::*;

use super::*;

// The testutils fixtures are built against their own copy of this crate, so the unit tests
// here parse the raw descriptor text instead.
fn parse(contents: &str) -> ResourceDescriptor {
    ResourceDescriptor::from_yaml(contents).unwrap().remove(0)
}

#[fixture]
fn widget() -> ResourceDescriptor {
    parse(WIDGET_DESCRIPTOR)
}

#[fixture]
fn gadget() -> ResourceDescriptor {
    parse(GADGET_DESCRIPTOR)
}

// Walks nested objects by attribute name, e.g. ["spec", "issuer_ref", "name"]
fn lookup<'a>(schema: &'a ResourceSchema, path: &[&str]) -> Option<&'a Attribute> {
    let (first, rest) = path.split_first()?;
    let mut attr = schema.attribute(first)?;
    for name in rest {
        attr = attr.nested_attributes()?.iter().find(|a| a.name == *name)?;
    }
    Some(attr)
}
