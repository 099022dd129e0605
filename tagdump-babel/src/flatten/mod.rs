//! Flattening a finished token tree into nested mappings and sequences.
//!
//! Both strategies share the traversal and the root special case: a token with no name,
//! no parent and no attributes flattens to the sequence of its children, because a
//! document is a forest of top-level elements. Every other token is handed to the
//! strategy together with its already flattened children.
//!
//! The result is a [`serde_yaml::Value`] built only from mappings (insertion ordered),
//! sequences, strings and null. Optional keys are omitted, never set to null.

mod explicit;
mod shorthand;

pub use explicit::Explicit;
pub use shorthand::Shorthand;

use crate::token::{Token, TokenId, TokenTree};
use serde_yaml::{Mapping, Value};

pub const NAME_KEY: &str = "_name";
pub const TEXT_KEY: &str = "text";
pub const ATTRIBS_KEY: &str = "attribs";
pub const SUBS_KEY: &str = "subs";

/// Renders one non-root token.
pub trait FlattenStrategy {
    /// `subs` holds the flattened children in order; it may be empty.
    fn render(&self, token: &Token, subs: Vec<Value>) -> Value;
}

/// Selects the flattening strategy for a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenStyle {
    /// `{_name: .., attribs: .., subs: ..}` per element, text dropped.
    Explicit,
    /// `{<name>: {text: .., attribs: .., subs: ..}}` per element.
    #[default]
    Shorthand,
}

impl TokenStyle {
    pub fn from_explicit(explicit: bool) -> Self {
        if explicit {
            TokenStyle::Explicit
        } else {
            TokenStyle::Shorthand
        }
    }
}

impl FlattenStrategy for TokenStyle {
    fn render(&self, token: &Token, subs: Vec<Value>) -> Value {
        match self {
            TokenStyle::Explicit => Explicit.render(token, subs),
            TokenStyle::Shorthand => Shorthand.render(token, subs),
        }
    }
}

/// Flattens the subtree rooted at `id`.
///
/// Post-order over an explicit stack of frames, so depth is bounded by memory rather
/// than by the thread stack.
pub fn flatten<S: FlattenStrategy + ?Sized>(
    tree: &TokenTree,
    id: TokenId,
    strategy: &S,
) -> Value {
    let mut frames = vec![Frame::new(id)];
    while let Some(frame) = frames.last_mut() {
        if let Some(&child) = tree.get(frame.id).children.get(frame.next) {
            frame.next += 1;
            frames.push(Frame::new(child));
            continue;
        }

        let Some(Frame { id, subs, .. }) = frames.pop() else {
            break;
        };
        let token = tree.get(id);
        let value = if token.is_root() {
            Value::Sequence(subs)
        } else {
            strategy.render(token, subs)
        };
        match frames.last_mut() {
            Some(parent) => parent.subs.push(value),
            None => return value,
        }
    }
    Value::Sequence(Vec::new())
}

/// A token whose children are being flattened.
struct Frame {
    id: TokenId,
    /// Index of the next child to flatten.
    next: usize,
    subs: Vec<Value>,
}

impl Frame {
    fn new(id: TokenId) -> Self {
        Frame {
            id,
            next: 0,
            subs: Vec::new(),
        }
    }
}

fn name_value(token: &Token) -> Value {
    token
        .name
        .as_ref()
        .map_or(Value::Null, |name| Value::String(name.clone()))
}

fn attributes_value(attributes: &[(String, String)]) -> Value {
    let mut mapping = Mapping::with_capacity(attributes.len());
    for (key, value) in attributes {
        mapping.insert(Value::String(key.clone()), Value::String(value.clone()));
    }
    Value::Mapping(mapping)
}

/// Adds the `attribs` and `subs` keys shared by both strategies, when non-empty.
fn insert_structure(mapping: &mut Mapping, token: &Token, subs: Vec<Value>) {
    if !token.attributes.is_empty() {
        mapping.insert(ATTRIBS_KEY.into(), attributes_value(&token.attributes));
    }
    if !subs.is_empty() {
        mapping.insert(SUBS_KEY.into(), Value::Sequence(subs));
    }
}
