//! Generic depth-first traversal over the markup tree.
//!
//! # The Algorithm
//!
//! The walk is pre-order:
//!
//! 1. **Text leaves:** fire `on_leaf` and stop.
//! 2. **Elements:** fire `on_start_branch`, walk every child in order, then fire
//!    `on_end_branch`. The synthetic document root (the only element without a parent)
//!    fires neither callback; only its children are bracketed.
//! 3. **Opaque nodes:** bracketed like a childless element.
//!
//! Start and end callbacks for a node are always paired, and every descendant callback
//! happens strictly between them. Visitors rely on this to keep a single cursor instead of
//! an explicit stack.
//!
//! Two walkers share that contract: [`walk`] recurses on the call stack, [`walk_iterative`]
//! keeps its own heap stack, so its depth is bounded by memory rather than by the thread
//! stack. Both emit the exact same callback sequence. Flattening never recurses either,
//! so an iterative walk plus flatten handles any depth the input itself fits in.

use crate::node::Node;

/// Extension points fired by the walkers. Every callback is a no-op by default.
pub trait Visitor {
    fn on_start_branch(&mut self, _node: &Node) {}

    fn on_end_branch(&mut self, _node: &Node) {}

    fn on_leaf(&mut self, _node: &Node) {}

    /// Walks `node` recursively, firing this visitor's callbacks.
    fn walk(&mut self, node: &Node) {
        walk(self, node)
    }
}

/// Which walker drives a visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Recursion on the call stack; depth bounded by the thread stack.
    #[default]
    Recursive,
    /// Explicit heap stack; depth bounded by memory.
    Iterative,
}

impl Traversal {
    pub fn name(&self) -> &'static str {
        match self {
            Traversal::Recursive => "recursive",
            Traversal::Iterative => "iterative",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "recursive" => Some(Traversal::Recursive),
            "iterative" => Some(Traversal::Iterative),
            _ => None,
        }
    }

    pub fn run<V: Visitor + ?Sized>(&self, visitor: &mut V, node: &Node) {
        log::trace!(target: "tagdump::walk", "{} walk", self.name());
        match self {
            Traversal::Recursive => walk(visitor, node),
            Traversal::Iterative => walk_iterative(visitor, node),
        }
    }
}

/// Recursive pre-order walk.
pub fn walk<V: Visitor + ?Sized>(visitor: &mut V, node: &Node) {
    if node.is_text() {
        visitor.on_leaf(node);
        return;
    }

    let bracketed = node.has_parent();
    if bracketed {
        visitor.on_start_branch(node);
    }
    for child in node.children() {
        walk(visitor, child);
    }
    if bracketed {
        visitor.on_end_branch(node);
    }
}

enum Step<'a> {
    Enter(&'a Node),
    Exit(&'a Node),
}

/// Pre-order walk driven by an explicit stack.
pub fn walk_iterative<V: Visitor + ?Sized>(visitor: &mut V, node: &Node) {
    let mut stack = vec![Step::Enter(node)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(current) if current.is_text() => visitor.on_leaf(current),
            Step::Enter(current) => {
                if current.has_parent() {
                    visitor.on_start_branch(current);
                    stack.push(Step::Exit(current));
                }
                // Reversed so the first child is popped first.
                stack.extend(current.children().iter().rev().map(Step::Enter));
            }
            Step::Exit(current) => visitor.on_end_branch(current),
        }
    }
}
