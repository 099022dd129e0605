//! Core data structures for the parsed markup tree.
//!
//! Every input format adapts its parser's DOM into [`Node`] once, at parse time. The
//! walker only ever sees these three shapes, so there is no capability probing during
//! traversal: text leaves carry content, elements carry a name, attributes and children,
//! and everything else (comments, doctypes, processing instructions) is opaque.

/// A node of the parsed input tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A run of character data, possibly all whitespace.
    Text(String),
    /// A named element with attributes and children.
    Element(Element),
    /// A node that is neither text nor able to hold children.
    Opaque(OpaqueKind),
}

/// An element node.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
    /// False only for the synthetic document root.
    pub has_parent: bool,
}

/// What an opaque node was in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpaqueKind {
    Comment,
    Doctype,
    ProcessingInstruction,
}

/// Name given to the synthetic root produced by the built-in parsers.
pub const DOCUMENT_ROOT_NAME: &str = "[document]";

impl Element {
    /// Creates a regular (parented) element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            has_parent: true,
        }
    }

    /// Creates the synthetic document root holding the top-level nodes.
    pub fn root(children: Vec<Node>) -> Self {
        Element {
            name: DOCUMENT_ROOT_NAME.to_string(),
            attributes: Vec::new(),
            children,
            has_parent: false,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.children.extend(children);
        self
    }
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Whether this node has a parent; only the document root answers false.
    pub fn has_parent(&self) -> bool {
        match self {
            Node::Element(element) => element.has_parent,
            Node::Text(_) | Node::Opaque(_) => true,
        }
    }

    /// Whether tokens built from this node may be linked into the tree.
    pub fn can_have_children(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element(element) => Some(&element.name),
            Node::Text(_) | Node::Opaque(_) => None,
        }
    }

    /// Attributes of an element; empty for every other node shape.
    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            Node::Element(element) => &element.attributes,
            Node::Text(_) | Node::Opaque(_) => &[],
        }
    }

    /// Children of an element; empty for every other node shape.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) | Node::Opaque(_) => &[],
        }
    }

    /// Number of element and opaque nodes below (and including) this node.
    pub fn branch_count(&self) -> usize {
        match self {
            Node::Text(_) => 0,
            Node::Opaque(_) => 1,
            Node::Element(element) => {
                let own = usize::from(element.has_parent);
                own + element.children.iter().map(Node::branch_count).sum::<usize>()
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}
