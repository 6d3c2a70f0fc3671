use assertables::*;

use super::*;

#[rstest]
fn test_parse_widget(widget: ResourceDescriptor) {
    assert_eq!(widget.api_version, WIDGET_API_VERSION);
    assert_eq!(widget.kind, WIDGET_KIND);
    assert!(widget.namespaced);
    assert!(widget.immutable_name);
    assert_none!(widget.resource_type);

    let spec = &widget.attributes[0];
    assert_eq!(spec.name, "spec");
    assert!(spec.required);

    let nested = spec.nested_attributes().unwrap();
    let names: Vec<_> = nested.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "foo",
            "replica_count",
            "ratio",
            "enabled",
            "port",
            "extra",
            "tags",
            "settings",
            "owner_ref",
            "rules",
            "storage_class"
        ]
    );
    assert_eq!(nested[4].type_, AttributeType::IntOrString);
    assert_eq!(nested[6].type_, AttributeType::list_of(AttributeType::String));
    assert_eq!(nested[7].type_, AttributeType::map_of(AttributeType::String));
    assert!(nested[10].requires_replace);
    assert_eq!(nested[10].validators, vec![Validator::Length { min: Some(1), max: Some(10) }]);
}

#[rstest]
fn test_parse_list_of_objects(widget: ResourceDescriptor) {
    let rules = &widget.attributes[0].nested_attributes().unwrap()[9];
    let AttributeType::List { items } = &rules.type_ else {
        panic!("expected a list, got {:?}", rules.type_);
    };
    let AttributeType::Object { attributes } = items.as_ref() else {
        panic!("expected list items to be objects, got {items:?}");
    };
    assert_eq!(attributes[0].name, "host");
    assert_eq!(attributes[1].validators, vec![Validator::Duration]);
}

#[rstest]
fn test_type_names(widget: ResourceDescriptor, gadget: ResourceDescriptor) {
    assert_eq!(widget.type_name().unwrap(), WIDGET_TYPE_NAME);
    assert_eq!(gadget.type_name().unwrap(), GADGET_TYPE_NAME);
}

#[rstest]
fn test_yaml_names(widget: ResourceDescriptor) {
    let nested = widget.attributes[0].nested_attributes().unwrap();
    assert_eq!(nested[1].yaml_name(), "replicaCount");
    assert_eq!(nested[8].yaml_name(), "ownerRef");
    assert_eq!(nested[8].clone().with_yaml_name("ownerREF").yaml_name(), "ownerREF");
}

#[rstest]
fn test_multi_document() {
    let descriptors = ResourceDescriptor::from_yaml(&format!("---\n{WIDGET_DESCRIPTOR}\n---\n{GADGET_DESCRIPTOR}")).unwrap();
    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[1].kind, GADGET_KIND);
}

#[rstest]
fn test_json_descriptor() {
    let descriptors = ResourceDescriptor::from_yaml(
        r#"{"apiVersion": "example.com/v1", "kind": "Thing", "attributes": [{"name": "spec", "type": "object", "attributes": []}]}"#,
    )
    .unwrap();
    assert_eq!(descriptors[0].attributes[0].type_, AttributeType::object(vec![]));
    assert_is_empty!(descriptors[0].problems());
}

#[rstest]
fn test_problems_valid(widget: ResourceDescriptor, gadget: ResourceDescriptor) {
    assert_is_empty!(widget.problems());
    assert_is_empty!(gadget.problems());
}

#[rstest]
fn test_problems_bad_api_version(mut widget: ResourceDescriptor) {
    widget.api_version = "a/b/c".into();
    let problems = widget.problems();
    assert_eq!(problems.len(), 1);
    assert_contains!(problems[0], "invalid apiVersion");
}

#[rstest]
fn test_problems_bad_resource_type(mut widget: ResourceDescriptor) {
    widget.resource_type = Some("Not-An-Identifier".into());
    assert_eq!(widget.problems().len(), 1);
}

#[rstest]
#[case::id("id")]
#[case::yaml("yaml")]
#[case::metadata("metadata")]
fn test_problems_reserved_name(mut widget: ResourceDescriptor, #[case] name: &str) {
    widget.attributes[0].name = name.into();
    let problems = widget.problems();
    assert_eq!(problems, vec![format!("attribute {name:?} is reserved")]);
}

#[rstest]
fn test_problems_nested(mut widget: ResourceDescriptor) {
    let AttributeType::Object { attributes } = &mut widget.attributes[0].type_ else {
        panic!("spec should be an object");
    };
    attributes[1].name = "foo".into();
    attributes[2].validators.push(Validator::Duration);
    attributes[3].required = true;
    attributes[3].computed = true;
    attributes[5].name = "Extra".into();

    let problems = widget.problems();
    assert_eq!(
        problems,
        vec![
            "spec.foo: duplicate attribute name".to_string(),
            "spec.foo: duplicate yaml name \"foo\"".to_string(),
            "spec.ratio: validator \"a duration\" can't be used on a float attribute".to_string(),
            "spec.enabled: attributes can't be both required and computed".to_string(),
            "spec.Extra: attribute names must be lowercase identifiers".to_string(),
        ]
    );
}

#[rstest]
fn test_problems_inside_list_items() {
    let descriptor = parse(
        r#"
apiVersion: example.com/v1
kind: Thing
attributes:
  - name: items
    type: list
    items:
      type: object
      attributes:
        - name: count
          type: int
          validators:
            - kind: labels
"#,
    );
    assert_eq!(
        descriptor.problems(),
        vec!["items[*].count: validator \"valid labels\" can't be used on a int attribute".to_string()]
    );
}

#[rstest]
#[case::api_version("api_version_", None, "apiVersion")]
#[case::kind("kind_", None, "kind")]
#[case::metadata("metadata_", None, "metadata")]
#[case::explicit_yaml_name("labels", Some("metadata"), "metadata")]
fn test_problems_manifest_key(
    mut widget: ResourceDescriptor,
    #[case] name: &str,
    #[case] yaml_name: Option<&str>,
    #[case] key: &str,
) {
    let mut attr = Attribute::optional(name, AttributeType::map_of(AttributeType::String), "");
    if let Some(yaml_name) = yaml_name {
        attr = attr.with_yaml_name(yaml_name);
    }
    widget.attributes.push(attr);

    assert_eq!(widget.problems(), vec![format!("attribute {name:?} can't use the manifest key {key:?}")]);
}

#[rstest]
fn test_problems_manifest_key_nested_is_fine(mut widget: ResourceDescriptor) {
    let AttributeType::Object { attributes } = &mut widget.attributes[0].type_ else {
        panic!("spec should be an object");
    };
    attributes.push(Attribute::optional("kind_", AttributeType::String, ""));
    assert_is_empty!(widget.problems());
}

#[rstest]
#[case::list_items("list", "items")]
#[case::map_values("map", "values")]
fn test_problems_requires_replace_in_collection(#[case] type_: &str, #[case] elem_key: &str) {
    let descriptor = parse(&format!(
        r#"
apiVersion: example.com/v1
kind: Thing
attributes:
  - name: things
    type: {type_}
    {elem_key}:
      type: object
      attributes:
        - name: id
          type: string
          requiresReplace: true
"#
    ));
    assert_eq!(
        descriptor.problems(),
        vec!["things[*].id: requiresReplace can't be used inside a list or map".to_string()]
    );
}
