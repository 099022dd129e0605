//! HTML import without tree construction (HTML → Node)
//!
//! html5ever's tokenizer drives a small open-element stack instead of the WHATWG tree
//! builder, so the tree mirrors the markup as written:
//!
//! - no implied `html`, `head` or `body` wrappers
//! - `<x/>` closes `x` immediately, for any element
//! - void elements (`br`, `img`, ...) never take children
//! - an end tag closes the nearest open element with that name, and everything opened
//!   after it; an end tag with no open match is ignored
//! - `script` and `style` content is raw text
//! - elements still open at the end of input are closed there
//!
//! Adjacent character data is merged into one text node, so entity references never
//! split a run of text.

use super::qualified_name;
use crate::node::{Element, Node, OpaqueKind};
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use std::cell::{Cell, RefCell};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "command", "embed", "frame", "hr",
    "image", "img", "input", "keygen", "link", "menuitem", "meta", "param", "source", "spacer",
    "track", "wbr",
];

/// Parse HTML source into a node tree that keeps the source nesting.
pub fn parse_to_nodes(source: &str) -> Node {
    let tokenizer = Tokenizer::new(SourceTreeSink::default(), TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(source));
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    let sink = tokenizer.sink;
    let recovered = sink.errors.get();
    if recovered > 0 {
        log::debug!(target: "tagdump::format", "html tokenizer reported {recovered} parse errors");
    }
    sink.finish()
}

/// Open elements, innermost last. Index 0 is the document root and is never closed.
struct SourceTreeSink {
    open: RefCell<Vec<Element>>,
    errors: Cell<usize>,
}

impl Default for SourceTreeSink {
    fn default() -> Self {
        SourceTreeSink {
            open: RefCell::new(vec![Element::root(Vec::new())]),
            errors: Cell::new(0),
        }
    }
}

impl SourceTreeSink {
    fn append(&self, node: Node) {
        if let Some(current) = self.open.borrow_mut().last_mut() {
            current.children.push(node);
        }
    }

    fn append_text(&self, text: &str) {
        let mut open = self.open.borrow_mut();
        let Some(current) = open.last_mut() else {
            return;
        };
        match current.children.last_mut() {
            Some(Node::Text(previous)) => previous.push_str(text),
            _ => current.children.push(Node::Text(text.to_string())),
        }
    }

    fn start_tag(&self, tag: Tag) -> TokenSinkResult<()> {
        let name = tag.name.to_string();
        let attributes = tag
            .attrs
            .iter()
            .map(|attr| (qualified_name(&attr.name), attr.value.to_string()))
            .collect();
        let element = Element {
            name,
            attributes,
            children: Vec::new(),
            has_parent: true,
        };

        if tag.self_closing || VOID_ELEMENTS.contains(&element.name.as_str()) {
            self.append(element.into());
            return TokenSinkResult::Continue;
        }

        let raw = match element.name.as_str() {
            "script" => Some(RawKind::ScriptData),
            "style" => Some(RawKind::Rawtext),
            _ => None,
        };
        self.open.borrow_mut().push(element);
        match raw {
            Some(kind) => TokenSinkResult::RawData(kind),
            None => TokenSinkResult::Continue,
        }
    }

    fn end_tag(&self, tag: Tag) {
        let target = {
            let open = self.open.borrow();
            open.iter()
                .skip(1)
                .rposition(|element| *element.name == *tag.name)
                .map(|position| position + 1)
        };
        match target {
            Some(position) => self.close_down_to(position),
            None => self.errors.set(self.errors.get() + 1),
        }
    }

    /// Closes every open element at `position` and above, innermost first.
    fn close_down_to(&self, position: usize) {
        let mut open = self.open.borrow_mut();
        while open.len() > position.max(1) {
            let Some(closed) = open.pop() else {
                break;
            };
            if let Some(parent) = open.last_mut() {
                parent.children.push(closed.into());
            }
        }
    }

    fn finish(self) -> Node {
        self.close_down_to(1);
        let mut open = self.open.into_inner();
        match open.pop() {
            Some(root) => root.into(),
            None => Element::root(Vec::new()).into(),
        }
    }
}

impl TokenSink for SourceTreeSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => return self.start_tag(tag),
                TagKind::EndTag => self.end_tag(tag),
            },
            Token::CharacterTokens(text) => self.append_text(&text),
            Token::CommentToken(_) => self.append(Node::Opaque(OpaqueKind::Comment)),
            Token::DoctypeToken(_) => self.append(Node::Opaque(OpaqueKind::Doctype)),
            Token::ParseError(_) => self.errors.set(self.errors.get() + 1),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}
