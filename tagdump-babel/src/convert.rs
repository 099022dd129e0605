//! End-to-end conversion: source → Node → Token tree → flattened value → text.
//!
//! Everything a conversion needs is created per call, so independent conversions share no
//! state and may run on different threads.

use crate::error::FormatError;
use crate::flatten::{flatten, TokenStyle};
use crate::node::Node;
use crate::registry::FormatRegistry;
use crate::token::TokenTree;
use crate::token_visitor::TokenVisitor;
use crate::visitor::Traversal;
use serde_yaml::Value;
use std::collections::HashMap;

/// Knobs fixed for the duration of one conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    pub style: TokenStyle,
    pub traversal: Traversal,
}

impl ConvertOptions {
    pub fn new(style: TokenStyle, traversal: Traversal) -> Self {
        Self { style, traversal }
    }

    pub fn explicit() -> Self {
        Self {
            style: TokenStyle::Explicit,
            ..Self::default()
        }
    }
}

/// Walks `root` and returns the finished token tree.
pub fn to_tokens(root: &Node, traversal: Traversal) -> TokenTree {
    let mut visitor = TokenVisitor::default();
    traversal.run(&mut visitor, root);
    visitor.into_tree()
}

/// Walks `root` and flattens the result with the configured style.
pub fn flatten_document(root: &Node, options: &ConvertOptions) -> Value {
    let mut visitor = TokenVisitor::new(options.style);
    options.traversal.run(&mut visitor, root);
    log::debug!(
        target: "tagdump::walk",
        "built {} tokens ({} linked)",
        visitor.tree().len(),
        visitor.tree().linked_count()
    );
    visitor.flattened()
}

/// Flattens an already built token tree from its root.
pub fn flatten_tree(tree: &TokenTree, style: TokenStyle) -> Value {
    flatten(tree, tree.root(), &style)
}

/// Converts `source` from one registered format to another.
///
/// `parse_options` are handed to the input format (for example `mode` for HTML).
pub fn convert(
    registry: &FormatRegistry,
    source: &str,
    from: &str,
    to: &str,
    options: &ConvertOptions,
    parse_options: &HashMap<String, String>,
) -> Result<String, FormatError> {
    // Fail on an unusable target before doing any parsing work.
    let target = registry.get(to)?;
    if !target.supports_serialization() {
        return Err(FormatError::NotSupported(format!(
            "Format '{to}' does not support serialization"
        )));
    }

    let root = registry.parse_with_options(source, from, parse_options)?;
    let value = flatten_document(&root, options);
    registry.serialize(&value, to)
}
