//! XML format implementation
//!
//! Import only, through `roxmltree`. Unlike HTML, XML input must be well-formed: any
//! syntax error is reported as [`FormatError::ParseError`] and nothing is walked.

mod parser;

pub use parser::parse_to_nodes;

use crate::error::FormatError;
use crate::format::Format;
use crate::node::Node;

pub struct XmlFormat;

impl Format for XmlFormat {
    fn name(&self) -> &str {
        "xml"
    }

    fn description(&self) -> &str {
        "Well-formed XML (roxmltree)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["xml", "xhtml", "svg"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        parser::parse_to_nodes(source)
    }
}
