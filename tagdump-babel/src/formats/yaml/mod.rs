//! YAML output
//!
//! The flattened document already is a `serde_yaml::Value`, so rendering is a direct
//! `serde_yaml::to_string`: block style, keys in insertion order, omitted keys absent.

use crate::error::FormatError;
use crate::format::Format;
use serde_yaml::Value;

pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "YAML dump (default output)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, value: &Value) -> Result<String, FormatError> {
        Ok(serde_yaml::to_string(value)?)
    }
}
