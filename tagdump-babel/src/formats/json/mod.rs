//! JSON output
//!
//! Same tree as the YAML dump, rendered with `serde_json`. Mapping keys produced by the
//! flatteners are always strings, so every flattened value is representable.

use crate::error::FormatError;
use crate::format::Format;
use serde_yaml::Value;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON dump"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, value: &Value) -> Result<String, FormatError> {
        let mut json = serde_json::to_string_pretty(value)?;
        json.push('\n');
        Ok(json)
    }
}
