use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::*;

const DNS1123_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";
const QUALIFIED_NAME_FMT: &str = "([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]";

lazy_static! {
    static ref DNS1123_LABEL_RE: Regex = Regex::new(&format!("^{DNS1123_LABEL_FMT}$")).unwrap();
    static ref DNS1123_SUBDOMAIN_RE: Regex =
        Regex::new(&format!(r"^{DNS1123_LABEL_FMT}(\.{DNS1123_LABEL_FMT})*$")).unwrap();
    static ref QUALIFIED_NAME_RE: Regex = Regex::new(&format!("^{QUALIFIED_NAME_FMT}$")).unwrap();
}

// The functions in this file mirror the apimachinery validation helpers: each one returns a list
// of human-readable problems, and an empty list means the value is fine.

pub fn dns1123_label_errors(value: &str) -> Vec<String> {
    let mut errs = vec![];
    if value.len() > DNS_LABEL_MAX_LEN {
        errs.push(format!("must be no more than {DNS_LABEL_MAX_LEN} characters"));
    }
    if !DNS1123_LABEL_RE.is_match(value) {
        errs.push(
            "a lowercase RFC 1123 label must consist of lower case alphanumeric characters or '-', \
                and must start and end with an alphanumeric character"
                .into(),
        );
    }
    errs
}

pub fn dns1123_subdomain_errors(value: &str) -> Vec<String> {
    let mut errs = vec![];
    if value.len() > DNS_SUBDOMAIN_MAX_LEN {
        errs.push(format!("must be no more than {DNS_SUBDOMAIN_MAX_LEN} characters"));
    }
    if !DNS1123_SUBDOMAIN_RE.is_match(value) {
        errs.push(
            "a lowercase RFC 1123 subdomain must consist of lower case alphanumeric characters, '-' \
                or '.', and must start and end with an alphanumeric character"
                .into(),
        );
    }
    errs
}

pub fn qualified_name_errors(value: &str) -> Vec<String> {
    let (prefix, name) = match value.split_once('/') {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, value),
    };

    let mut errs = vec![];
    if let Some(prefix) = prefix {
        if prefix.is_empty() {
            errs.push("prefix part must be non-empty".into());
        } else {
            errs.extend(dns1123_subdomain_errors(prefix).into_iter().map(|e| format!("prefix part {e}")));
        }
    }

    if name.is_empty() {
        errs.push("name part must be non-empty".into());
    } else {
        if name.len() > QUALIFIED_NAME_MAX_LEN {
            errs.push(format!("name part must be no more than {QUALIFIED_NAME_MAX_LEN} characters"));
        }
        if !QUALIFIED_NAME_RE.is_match(name) {
            errs.push(
                "name part must consist of alphanumeric characters, '-', '_' or '.', and must start \
                    and end with an alphanumeric character"
                    .into(),
            );
        }
    }
    errs
}

pub fn label_value_errors(value: &str) -> Vec<String> {
    let mut errs = vec![];
    if value.len() > LABEL_VALUE_MAX_LEN {
        errs.push(format!("must be no more than {LABEL_VALUE_MAX_LEN} characters"));
    }
    if !value.is_empty() && !QUALIFIED_NAME_RE.is_match(value) {
        errs.push(
            "a valid label must be an empty string or consist of alphanumeric characters, '-', '_' \
                or '.', and must start and end with an alphanumeric character"
                .into(),
        );
    }
    errs
}

pub fn label_errors(labels: &BTreeMap<String, String>) -> Vec<String> {
    let mut errs = vec![];
    for (k, v) in labels {
        errs.extend(qualified_name_errors(k).into_iter().map(|e| format!("label key {k:?}: {e}")));
        errs.extend(label_value_errors(v).into_iter().map(|e| format!("label value {v:?}: {e}")));
    }
    errs
}

pub fn annotation_errors(annotations: &BTreeMap<String, String>) -> Vec<String> {
    let mut errs = vec![];
    let mut total_size = 0;
    for (k, v) in annotations {
        errs.extend(
            qualified_name_errors(&k.to_lowercase())
                .into_iter()
                .map(|e| format!("annotation key {k:?}: {e}")),
        );
        total_size += k.len() + v.len();
    }

    if total_size > ANNOTATIONS_MAX_TOTAL_LEN {
        errs.push(format!("annotations size {total_size} exceeds the limit of {ANNOTATIONS_MAX_TOTAL_LEN} bytes"));
    }
    errs
}
