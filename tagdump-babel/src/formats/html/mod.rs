//! HTML format implementation
//!
//! Import only: HTML source is parsed into a [`Node`] tree.
//!
//! # Library Choice
//!
//! We use `html5ever` for both ways of reading HTML:
//! - its tokenizer drives a small open-element stack (`source.rs`) that keeps the markup's
//!   own nesting: `<x/>` closes `x`, no wrapper elements are invented
//! - its WHATWG tree builder, with `markup5ever_rcdom` as the DOM (`parser.rs`), rebuilds
//!   the tree a browser would see
//!
//! Neither fails on malformed markup. Recovered errors are reported at debug level on the
//! `tagdump::format` log target.
//!
//! # Node Mapping
//!
//! | HTML                       | Node                                      |
//! |----------------------------|-------------------------------------------|
//! | Document                   | `Element::root` (no parent, never output) |
//! | Element                    | `Node::Element` (local name, attributes)  |
//! | `<template>` (tree builder)| element whose children are its contents   |
//! | Text                       | `Node::Text` (raw, untrimmed)             |
//! | Comment                    | `Node::Opaque(Comment)`                   |
//! | Doctype                    | `Node::Opaque(Doctype)`                   |
//! | Processing instruction     | `Node::Opaque(ProcessingInstruction)`     |
//!
//! # Modes
//!
//! [`HtmlMode::Source`] (default) keeps the tree as written. [`HtmlMode::Document`] uses
//! the tree builder, which inserts `<html>`, `<head>` and `<body>` when the source omits
//! them and reparents misnested elements. [`HtmlMode::Fragment`] does the same, then
//! replaces the three wrappers by their contents.

mod parser;
mod source;

use crate::error::FormatError;
use crate::format::Format;
use crate::node::Node;
use html5ever::QualName;
use std::collections::HashMap;

/// How HTML source is turned into a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HtmlMode {
    /// The nesting as written, without tree construction
    #[default]
    Source,
    /// The browser tree, including implied wrappers
    Document,
    /// Only the contents of `<head>` and `<body>`
    Fragment,
}

impl HtmlMode {
    pub fn name(&self) -> &'static str {
        match self {
            HtmlMode::Source => "source",
            HtmlMode::Document => "document",
            HtmlMode::Fragment => "fragment",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "source" => Some(HtmlMode::Source),
            "document" => Some(HtmlMode::Document),
            "fragment" => Some(HtmlMode::Fragment),
            _ => None,
        }
    }
}

/// Parse HTML source into a node tree rooted at a synthetic document element.
pub fn parse_to_nodes(source: &str, mode: HtmlMode) -> Node {
    match mode {
        HtmlMode::Source => source::parse_to_nodes(source),
        HtmlMode::Document => parser::parse_to_nodes(source, false),
        HtmlMode::Fragment => parser::parse_to_nodes(source, true),
    }
}

/// `xlink:href` style names keep their prefix, plain names are just the local part.
fn qualified_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{prefix}:{}", name.local),
        None => name.local.to_string(),
    }
}

/// Format implementation for HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    mode: HtmlMode,
}

impl HtmlFormat {
    pub fn new(mode: HtmlMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> HtmlMode {
        self.mode
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML5 markup (html5ever)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Node, FormatError> {
        Ok(parse_to_nodes(source, self.mode))
    }

    fn parse_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<Node, FormatError> {
        let mut mode = self.mode;
        if let Some(mode_str) = options.get("mode") {
            mode = HtmlMode::from_name(mode_str).ok_or_else(|| {
                FormatError::NotSupported(format!(
                    "Unknown HTML mode '{mode_str}' (expected 'source', 'document' or 'fragment')"
                ))
            })?;
        }
        if let Some(unknown) = options.keys().find(|key| key.as_str() != "mode") {
            return Err(FormatError::NotSupported(format!(
                "Format 'html' does not support parameter '{unknown}'"
            )));
        }

        Ok(parse_to_nodes(source, mode))
    }
}
