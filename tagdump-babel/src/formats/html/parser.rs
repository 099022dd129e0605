//! HTML import through the WHATWG tree builder (HTML → Node)
//!
//! html5ever builds an `RcDom`; this module walks it once and adapts every DOM node into
//! the closed [`Node`] shape. Used by the `document` and `fragment` modes.

use super::qualified_name;
use crate::node::{Element, Node, OpaqueKind};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse HTML source the way a browser would, rooted at a synthetic document element.
///
/// With `fragment`, the implied `html`, `head` and `body` wrappers are replaced by their
/// contents.
pub fn parse_to_nodes(source: &str, fragment: bool) -> Node {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(source);

    let recovered = dom.errors.borrow().len();
    if recovered > 0 {
        log::debug!(target: "tagdump::format", "html5ever recovered from {recovered} parse errors");
    }

    let children = convert_children(&dom.document);
    let children = if fragment {
        unwrap_sections(children)
    } else {
        children
    };
    Element::root(children).into()
}

fn convert_children(handle: &Handle) -> Vec<Node> {
    handle.children.borrow().iter().map(convert_node).collect()
}

fn convert_node(handle: &Handle) -> Node {
    match &handle.data {
        NodeData::Document => Element::root(convert_children(handle)).into(),
        NodeData::Text { contents } => Node::Text(contents.borrow().to_string()),
        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            let mut children = convert_children(handle);
            // <template> keeps its content in a separate document fragment.
            if let Some(content) = template_contents.borrow().as_ref() {
                children.extend(convert_children(content));
            }
            let attributes = attrs
                .borrow()
                .iter()
                .map(|attr| (qualified_name(&attr.name), attr.value.to_string()))
                .collect();

            Element {
                name: name.local.to_string(),
                attributes,
                children,
                has_parent: true,
            }
            .into()
        }
        NodeData::Comment { .. } => Node::Opaque(OpaqueKind::Comment),
        NodeData::Doctype { .. } => Node::Opaque(OpaqueKind::Doctype),
        NodeData::ProcessingInstruction { .. } => Node::Opaque(OpaqueKind::ProcessingInstruction),
    }
}

/// Replace the implied `<html>`, `<head>` and `<body>` wrappers by their contents.
fn unwrap_sections(nodes: Vec<Node>) -> Vec<Node> {
    let mut unwrapped = Vec::new();
    for node in nodes {
        match node {
            Node::Element(html) if html.name == "html" => {
                for section in html.children {
                    match section {
                        Node::Element(part) if part.name == "head" || part.name == "body" => {
                            unwrapped.extend(part.children)
                        }
                        other => unwrapped.push(other),
                    }
                }
            }
            Node::Opaque(OpaqueKind::Doctype) => {}
            other => unwrapped.push(other),
        }
    }
    unwrapped
}
