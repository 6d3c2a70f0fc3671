// Resource type naming
pub const RESOURCE_TYPE_PREFIX: &str = "k8s";

// Root attributes every manifest resource exposes
pub const ID_ATTR: &str = "id";
pub const YAML_ATTR: &str = "yaml";
pub const API_VERSION_ATTR: &str = "api_version";
pub const KIND_ATTR: &str = "kind";
pub const METADATA_ATTR: &str = "metadata";
pub const RESERVED_ROOT_ATTRS: [&str; 5] = [ID_ATTR, YAML_ATTR, API_VERSION_ATTR, KIND_ATTR, METADATA_ATTR];

// Metadata attributes
pub const NAME_ATTR: &str = "name";
pub const NAMESPACE_ATTR: &str = "namespace";
pub const LABELS_ATTR: &str = "labels";
pub const ANNOTATIONS_ATTR: &str = "annotations";

// Manifest keys
pub const API_VERSION_KEY: &str = "apiVersion";
pub const KIND_KEY: &str = "kind";
pub const METADATA_KEY: &str = "metadata";
pub const RESERVED_MANIFEST_KEYS: [&str; 3] = [API_VERSION_KEY, KIND_KEY, METADATA_KEY];

// Kubernetes object name limits
pub const DNS_SUBDOMAIN_MAX_LEN: usize = 253;
pub const DNS_LABEL_MAX_LEN: usize = 63;
pub const LABEL_VALUE_MAX_LEN: usize = 63;
pub const QUALIFIED_NAME_MAX_LEN: usize = 63;
pub const ANNOTATIONS_MAX_TOTAL_LEN: usize = 256 * 1024;

// Defaults
pub const DEFAULT_CLI_VERBOSITY: &str = "warn";
