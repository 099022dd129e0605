//! Format trait definition
//!
//! Input formats adapt a third-party parser's tree into [`Node`]; output formats render
//! the flattened [`Value`] as text. Conversion is one-directional, so a format normally
//! supports exactly one of the two directions.

use crate::error::FormatError;
use crate::node::Node;
use serde_yaml::Value;
use std::collections::HashMap;

/// Trait for markup and dump formats
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse(&self, source: &str) -> Result<Node, FormatError> {
///         // Adapt the parser's tree into Node, with an Element::root on top
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "yaml")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// File extensions without the leading dot, used for detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Node)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Value → text)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a node tree rooted at a synthetic document element.
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Node, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Parse with format-specific parameters.
    ///
    /// Formats without parameters rely on the default, which delegates to
    /// [`Format::parse`] and rejects any non-empty option map.
    fn parse_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<Node, FormatError> {
        if options.is_empty() {
            self.parse(source)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }

    /// Render a flattened document as text.
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _value: &Value) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
