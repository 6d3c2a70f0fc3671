use cf_schema::{
    ResourceDescriptor,
    ResourceSchema,
};
use rstest::fixture;

// A namespaced resource with an immutable name and one of every attribute type
pub const WIDGET_DESCRIPTOR: &str = r#"
apiVersion: example.com/v1
kind: Widget
description: A widget for testing.
attributes:
  - name: spec
    type: object
    required: true
    attributes:
      - name: foo
        type: string
        required: true
      - name: replica_count
        type: int
      - name: ratio
        type: float
      - name: enabled
        type: bool
      - name: port
        type: intOrString
      - name: extra
        type: dynamic
      - name: tags
        type: list
        items:
          type: string
      - name: settings
        type: map
        values:
          type: string
      - name: owner_ref
        type: object
        attributes:
          - name: name
            type: string
            required: true
          - name: kind
            type: string
            validators:
              - kind: oneOf
                values: [Team, User]
      - name: rules
        type: list
        items:
          type: object
          attributes:
            - name: host
              type: string
              required: true
            - name: timeout
              type: string
              validators:
                - kind: duration
      - name: storage_class
        type: string
        requiresReplace: true
        validators:
          - kind: length
            min: 1
            max: 10
"#;

// A cluster-scoped resource with a mutable name, an explicit type name, and a top-level
// attribute that isn't `spec`
pub const GADGET_DESCRIPTOR: &str = r#"
apiVersion: v1
kind: Gadget
resourceType: k8s_gadget
namespaced: false
immutableName: false
attributes:
  - name: data
    type: map
    values:
      type: string
  - name: spec
    type: object
    attributes:
      - name: size
        type: int
"#;

pub fn parse_descriptor(contents: &str) -> ResourceDescriptor {
    ResourceDescriptor::from_yaml(contents).unwrap().remove(0)
}

#[fixture]
pub fn widget_descriptor() -> ResourceDescriptor {
    parse_descriptor(WIDGET_DESCRIPTOR)
}

#[fixture]
pub fn gadget_descriptor() -> ResourceDescriptor {
    parse_descriptor(GADGET_DESCRIPTOR)
}

#[fixture]
pub fn widget_schema(widget_descriptor: ResourceDescriptor) -> ResourceSchema {
    ResourceSchema::from_descriptor(widget_descriptor).unwrap()
}

#[fixture]
pub fn gadget_schema(gadget_descriptor: ResourceDescriptor) -> ResourceSchema {
    ResourceSchema::from_descriptor(gadget_descriptor).unwrap()
}
