use rstest::fixture;
use serde_json::{
    Value,
    json,
};

use crate::constants::*;

// The smallest config a widget accepts, shaped the way the host runtime hands it over: every
// attribute present, unset ones null.
#[fixture]
pub fn widget_config(#[default(TEST_NAME)] name: &str) -> Value {
    json!({
        "id": null,
        "yaml": null,
        "api_version": null,
        "kind": null,
        "metadata": {
            "name": name,
            "namespace": null,
            "labels": null,
            "annotations": null,
        },
        "spec": {
            "foo": "bar",
            "replica_count": null,
            "ratio": null,
            "enabled": null,
            "port": null,
            "extra": null,
            "tags": null,
            "settings": null,
            "owner_ref": null,
            "rules": null,
            "storage_class": null,
        },
    })
}

#[fixture]
pub fn full_widget_config() -> Value {
    json!({
        "metadata": {
            "name": TEST_NAME,
            "namespace": TEST_NAMESPACE,
            "labels": {"app.kubernetes.io/name": "widget"},
            "annotations": {"example.com/note": "hello"},
        },
        "spec": {
            "foo": "bar",
            "replica_count": 3,
            "ratio": 0.5,
            "enabled": true,
            "port": "http",
            "extra": {"nested": [1, 2]},
            "tags": ["a", "b"],
            "settings": {"mode": "fast"},
            "owner_ref": {"name": "platform", "kind": "Team"},
            "rules": [{"host": "example.com", "timeout": "30s"}],
            "storage_class": "ssd",
        },
    })
}

#[fixture]
pub fn gadget_config(#[default(TEST_NAME)] name: &str) -> Value {
    json!({
        "metadata": {"name": name},
        "data": {"color": "blue"},
        "spec": {"size": 7},
    })
}
