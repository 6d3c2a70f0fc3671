use cf_core::prelude::*;

// "ClusterIssuer" -> "cluster_issuer", "HTTPRoute" -> "http_route"
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() || (prev.is_ascii_uppercase() && next_is_lower) {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

// "secret_name" -> "secretName"
pub fn lower_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

pub fn resource_type_name(gvk: &GVK) -> String {
    let kind = snake_case(&gvk.kind);
    if gvk.group.is_empty() {
        format!("{RESOURCE_TYPE_PREFIX}_{kind}_{}", gvk.version)
    } else {
        let group = gvk.group.replace(['.', '-'], "_");
        format!("{RESOURCE_TYPE_PREFIX}_{group}_{kind}_{}", gvk.version)
    }
}
