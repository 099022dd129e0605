//! Builds a [`TokenTree`] in lock-step with a walk.
//!
//! The visitor keeps one cursor into the tree. Entering a branch creates a token under
//! the cursor and moves the cursor onto it; leaving a branch moves the cursor back to
//! the parent; visiting a text leaf stores its trimmed content on the token under the
//! cursor. Because the walkers guarantee bracket-paired callbacks, the cursor always
//! returns to the root once a walk completes.
//!
//! Only nodes that can hold children are linked into their parent's children. Opaque
//! nodes still get a token and still move the cursor, but that token is abandoned when
//! the branch closes, so nothing they carry reaches the output.
//!
//! Text is last-write-wins: an element with several non-blank text children keeps only
//! the last one in document order.

use crate::flatten::{flatten, TokenStyle};
use crate::node::Node;
use crate::token::{TokenId, TokenTree};
use crate::visitor::Visitor;
use serde_yaml::Value;

#[derive(Debug, Clone)]
pub struct TokenVisitor {
    style: TokenStyle,
    tree: TokenTree,
    current: TokenId,
}

impl TokenVisitor {
    pub fn new(style: TokenStyle) -> Self {
        let tree = TokenTree::new();
        let current = tree.root();
        TokenVisitor {
            style,
            tree,
            current,
        }
    }

    /// The token under the cursor.
    pub fn current(&self) -> TokenId {
        self.current
    }

    pub fn tree(&self) -> &TokenTree {
        &self.tree
    }

    pub fn into_tree(self) -> TokenTree {
        self.tree
    }

    /// Flattens the token under the cursor with this visitor's style.
    ///
    /// After a complete walk the cursor is back on the root, so this yields the whole
    /// document as a sequence of top-level elements.
    pub fn flattened(&self) -> Value {
        flatten(&self.tree, self.current, &self.style)
    }
}

impl Default for TokenVisitor {
    fn default() -> Self {
        Self::new(TokenStyle::default())
    }
}

impl Visitor for TokenVisitor {
    fn on_start_branch(&mut self, node: &Node) {
        let token = self.tree.create(
            self.current,
            node.name().map(str::to_string),
            node.attributes().to_vec(),
        );
        if node.can_have_children() {
            self.tree.link(token);
        } else {
            log::trace!(target: "tagdump::walk", "unlinked token {}", token.index());
        }
        self.current = token;
    }

    fn on_end_branch(&mut self, _node: &Node) {
        if let Some(parent) = self.tree.parent(self.current) {
            self.current = parent;
        }
    }

    fn on_leaf(&mut self, node: &Node) {
        if let Node::Text(content) = node {
            let text = content.trim();
            if !text.is_empty() {
                self.tree.set_text(self.current, text.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Element, OpaqueKind};
    use crate::visitor::walk_iterative;

    fn build(node: &Node) -> TokenVisitor {
        let mut visitor = TokenVisitor::default();
        visitor.walk(node);
        visitor
    }

    #[test]
    fn test_cursor_returns_to_root() {
        let doc: Node = Element::root(vec![Element::new("div")
            .with_child(Element::new("span"))
            .into()])
        .into();
        let visitor = build(&doc);
        assert_eq!(visitor.current(), visitor.tree().root());
    }

    #[test]
    fn test_last_text_wins() {
        // <p>A<b/>B</p>
        let doc: Node = Element::root(vec![Element::new("p")
            .with_child(Node::text("A"))
            .with_child(Element::new("b"))
            .with_child(Node::text("B"))
            .into()])
        .into();
        let visitor = build(&doc);
        let tree = visitor.tree();
        let p = tree.children(tree.root()).next().unwrap();
        assert_eq!(p.text.as_deref(), Some("B"));
        let b = tree.get(p.children[0]);
        assert_eq!(b.text, None);
    }

    #[test]
    fn test_whitespace_leaves_are_ignored() {
        let doc: Node = Element::root(vec![Element::new("ul")
            .with_child(Node::text("\n   "))
            .with_child(Element::new("li").with_child(Node::text("  item \n")))
            .with_child(Node::text(" \n"))
            .into()])
        .into();
        let visitor = build(&doc);
        let tree = visitor.tree();
        let ul = tree.children(tree.root()).next().unwrap();
        assert_eq!(ul.text, None);
        assert_eq!(tree.get(ul.children[0]).text.as_deref(), Some("item"));
    }

    #[test]
    fn test_attributes_copied_in_order() {
        let doc: Node = Element::root(vec![Element::new("img")
            .with_attribute("src", "x")
            .with_attribute("alt", "y")
            .into()])
        .into();
        let visitor = build(&doc);
        let tree = visitor.tree();
        let img = tree.children(tree.root()).next().unwrap();
        assert_eq!(
            img.attributes,
            vec![
                ("src".to_string(), "x".to_string()),
                ("alt".to_string(), "y".to_string())
            ]
        );
    }

    #[test]
    fn test_opaque_nodes_are_not_linked() {
        let doc: Node = Element::root(vec![
            Node::Opaque(OpaqueKind::Doctype),
            Element::new("html")
                .with_child(Node::Opaque(OpaqueKind::Comment))
                .into(),
        ])
        .into();
        let visitor = build(&doc);
        let tree = visitor.tree();

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.linked_count(), 1);
        let html = tree.children(tree.root()).next().unwrap();
        assert!(html.children.is_empty());
    }

    #[test]
    fn test_end_branch_at_root_is_tolerated() {
        let mut visitor = TokenVisitor::default();
        let stray: Node = Element::new("p").into();
        visitor.on_end_branch(&stray);
        visitor.on_end_branch(&stray);
        assert_eq!(visitor.current(), visitor.tree().root());
    }

    #[test]
    fn test_text_at_top_level_lands_on_root() {
        let doc: Node = Element::root(vec![Node::text("loose")]).into();
        let visitor = build(&doc);
        let tree = visitor.tree();
        assert_eq!(tree.get(tree.root()).text.as_deref(), Some("loose"));
        assert_eq!(visitor.flattened(), Value::Sequence(vec![]));
    }

    #[test]
    fn test_iterative_walk_builds_same_tree() {
        let doc: Node = Element::root(vec![
            Element::new("h1").with_child(Node::text("Title")).into(),
            Element::new("p")
                .with_attribute("class", "lead")
                .with_child(Node::text("Body"))
                .into(),
        ])
        .into();
        let recursive = build(&doc);
        let mut iterative = TokenVisitor::default();
        walk_iterative(&mut iterative, &doc);

        assert_eq!(recursive.tree(), iterative.tree());
        assert_eq!(recursive.flattened(), iterative.flattened());
    }

    #[test]
    fn test_flattened_uses_configured_style() {
        let doc: Node = Element::root(vec![Element::new("p")
            .with_child(Node::text("hi"))
            .into()])
        .into();

        let mut explicit = TokenVisitor::new(TokenStyle::Explicit);
        explicit.walk(&doc);
        let expected: Value = serde_yaml::from_str("[{_name: p}]").unwrap();
        assert_eq!(explicit.flattened(), expected);

        let shorthand = build(&doc);
        let expected: Value = serde_yaml::from_str("[{p: {text: hi}}]").unwrap();
        assert_eq!(shorthand.flattened(), expected);
    }
}
