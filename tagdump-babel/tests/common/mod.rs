//! Shared helpers for the integration tests.

use std::path::PathBuf;
use tagdump_babel::formats::{HtmlFormat, HtmlMode, XmlFormat};
use tagdump_babel::{flatten_document, ConvertOptions, Format, Node, TokenStyle};

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

pub fn html(source: &str, mode: HtmlMode) -> Node {
    HtmlFormat::new(mode).parse(source).expect("html always parses")
}

pub fn xml(source: &str) -> Node {
    XmlFormat.parse(source).expect("Should parse xml")
}

pub fn dump(root: &Node, style: TokenStyle) -> serde_yaml::Value {
    flatten_document(root, &ConvertOptions { style, ..Default::default() })
}

pub fn to_json(value: &serde_yaml::Value) -> String {
    serde_json::to_string_pretty(value).expect("flattened values are json-compatible")
}

pub fn yaml(source: &str) -> serde_yaml::Value {
    serde_yaml::from_str(source).expect("expected value is valid yaml")
}
