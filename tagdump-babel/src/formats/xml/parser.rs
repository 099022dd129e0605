use crate::error::FormatError;
use crate::node::{Element, Node, OpaqueKind};
use roxmltree::{NodeType, ParsingOptions};

/// Parse well-formed XML into a node tree rooted at a synthetic document element.
///
/// Element names are local names. Attribute names keep their namespace prefix
/// (`xlink:href`), so `href` and `xlink:href` on one element stay two attributes.
/// Document type declarations are accepted so that XHTML and SVG files with a DOCTYPE
/// parse.
pub fn parse_to_nodes(source: &str) -> Result<Node, FormatError> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    let doc = roxmltree::Document::parse_with_options(source, options)?;

    Ok(Element::root(convert_children(doc.root())).into())
}

fn convert_children(node: roxmltree::Node) -> Vec<Node> {
    node.children().map(convert_node).collect()
}

fn convert_node(node: roxmltree::Node) -> Node {
    match node.node_type() {
        NodeType::Element => Element {
            name: node.tag_name().name().to_string(),
            attributes: node
                .attributes()
                .map(|attr| (attribute_name(node, &attr), attr.value().to_string()))
                .collect(),
            children: convert_children(node),
            has_parent: true,
        }
        .into(),
        NodeType::Text => Node::Text(node.text().unwrap_or_default().to_string()),
        NodeType::Comment => Node::Opaque(OpaqueKind::Comment),
        NodeType::PI => Node::Opaque(OpaqueKind::ProcessingInstruction),
        // A nested root cannot occur; keep the shape total.
        NodeType::Root => Element::root(convert_children(node)).into(),
    }
}

/// `prefix:name` for a namespaced attribute, the bare name otherwise.
fn attribute_name(node: roxmltree::Node, attr: &roxmltree::Attribute) -> String {
    let prefix = attr.namespace().and_then(|uri| {
        // The same URI may also be the default namespace, which has no prefix.
        node.lookup_prefix(uri).or_else(|| {
            node.namespaces()
                .filter(|ns| ns.uri() == uri)
                .find_map(|ns| ns.name())
        })
    });
    match prefix {
        Some(prefix) => format!("{prefix}:{}", attr.name()),
        None => attr.name().to_string(),
    }
}
