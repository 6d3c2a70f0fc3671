use assert_fs::prelude::*;
use assertables::*;
use tracing_test::traced_test;

use super::*;

#[rstest]
#[traced_test]
fn test_builtin_catalog() {
    let catalog = Catalog::builtin().unwrap();
    let names: Vec<_> = catalog.iter().map(|s| s.type_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "k8s_argoproj_io_application_v1alpha1",
            "k8s_cert_manager_io_certificate_v1",
            "k8s_cert_manager_io_cluster_issuer_v1",
            "k8s_cert_manager_io_issuer_v1",
            "k8s_monitoring_coreos_com_prometheus_rule_v1",
            "k8s_monitoring_coreos_com_service_monitor_v1",
        ]
    );
    assert!(logs_contain("loaded 6 built-in resource types"));

    let issuer = catalog.get("k8s_cert_manager_io_cluster_issuer_v1").unwrap();
    assert_eq!(issuer.api_version, "cert-manager.io/v1");
    assert!(!issuer.namespaced);
}

#[rstest]
fn test_register_duplicate(widget: ResourceDescriptor) {
    let mut catalog = Catalog::new();
    catalog.register(widget.clone()).unwrap();

    let err = catalog.register(widget).unwrap_err();
    let err = err.downcast::<SchemaError>().unwrap();
    assert!(matches!(err, SchemaError::DuplicateResourceType(ref name) if name == WIDGET_TYPE_NAME));
    assert_eq!(catalog.len(), 1);
}

#[rstest]
fn test_register_invalid(mut widget: ResourceDescriptor) {
    widget.attributes[0].name = "kind".into();

    let mut catalog = Catalog::new();
    let err = catalog.register(widget).unwrap_err();
    assert!(matches!(err.downcast::<SchemaError>().unwrap(), SchemaError::InvalidDescriptor(..)));
    assert!(catalog.is_empty());
}

#[rstest]
fn test_load_str_multi_document() {
    let mut catalog = Catalog::new();
    let count = catalog.load_str(&format!("{WIDGET_DESCRIPTOR}\n---\n{GADGET_DESCRIPTOR}")).unwrap();
    assert_eq!(count, 2);
    assert_some!(catalog.get(WIDGET_TYPE_NAME));
    assert_some!(catalog.get(GADGET_TYPE_NAME));
}

#[rstest]
fn test_load_path_directory() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("widget.yaml").write_str(WIDGET_DESCRIPTOR).unwrap();
    dir.child("nested/gadget.yml").write_str(GADGET_DESCRIPTOR).unwrap();
    dir.child("README.md").write_str("not a descriptor").unwrap();

    let mut catalog = Catalog::new();
    assert_eq!(catalog.load_path(dir.path()).unwrap(), 2);
    assert_eq!(catalog.len(), 2);
}

#[rstest]
fn test_load_path_reports_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    let file = dir.child("broken.yaml");
    file.write_str("apiVersion: example.com/v1\nkind: Broken\nattributes:\n  - name: id\n    type: string\n")
        .unwrap();

    let mut catalog = Catalog::new();
    let err = catalog.load_path(file.path()).unwrap_err();
    assert_contains!(format!("{err:#}"), "broken.yaml");
    assert_contains!(format!("{err:#}"), "attribute \"id\" is reserved");
}

#[rstest]
fn test_load_path_missing() {
    let mut catalog = Catalog::new();
    assert_err!(catalog.load_path(std::path::Path::new("/does/not/exist.yaml")));
}

#[rstest]
fn test_retain() {
    let mut catalog = Catalog::builtin().unwrap();
    catalog.retain(|s| s.gvk.group != "cert-manager.io");
    assert_eq!(catalog.len(), 3);
    assert_none!(catalog.get("k8s_cert_manager_io_certificate_v1"));
}
