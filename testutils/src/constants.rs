pub const TEST_NAME: &str = "example";
pub const TEST_NAMESPACE: &str = "test-namespace";

pub const WIDGET_API_VERSION: &str = "example.com/v1";
pub const WIDGET_KIND: &str = "Widget";
pub const WIDGET_TYPE_NAME: &str = "k8s_example_com_widget_v1";

pub const GADGET_API_VERSION: &str = "v1";
pub const GADGET_KIND: &str = "Gadget";
pub const GADGET_TYPE_NAME: &str = "k8s_gadget";

// 2023-11-14T22:13:20.123456789Z
pub const TEST_NOW_NANOS: i64 = 1_700_000_000_123_456_789;
