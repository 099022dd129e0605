//! Format implementations
//!
//! Input formats (`html`, `xml`) adapt a parser's tree into [`crate::node::Node`].
//! Output formats (`yaml`, `json`) render the flattened value as text.

pub mod html;
pub mod json;
pub mod xml;
pub mod yaml;

pub use html::{HtmlFormat, HtmlMode};
pub use json::JsonFormat;
pub use xml::XmlFormat;
pub use yaml::YamlFormat;
