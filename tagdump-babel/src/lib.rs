//! Markup trees as nested mappings
//!
//!     This crate turns a parsed markup document (HTML or XML) into a plain structure of
//!     ordered mappings, sequences and strings that dumps well as YAML or JSON.
//!
//!     TLDR: For format authors:
//!         - Babel never parses or serializes any format itself, it relies on the format's libraries
//!         - An input format adapts its parser's DOM into `Node` once, at parse time
//!         - An output format renders a `serde_yaml::Value`, nothing else
//!         - Everything in between is format agnostic and lives in visitor / token / flatten
//!
//! Architecture
//!
//!     The conversion is one-directional and runs in four steps:
//!
//!         source ──parse──▶ Node ──walk──▶ TokenTree ──flatten──▶ Value ──serialize──▶ text
//!
//!     The walk is the only interesting part. A generic depth-first walker (./visitor.rs)
//!     fires branch-entry, branch-exit and leaf callbacks; the TokenVisitor
//!     (./token_visitor.rs) rebuilds the tree shape in an arena of tokens (./token.rs) with
//!     a single cursor; then one of two flattening strategies (./flatten) renders the token
//!     tree. Traversal and rendering are fully decoupled: the walk never knows which
//!     strategy will be used.
//!
//!     This is a pure lib: no code here supposes a shell environment, be it std print, env
//!     vars or files. The tagdump-cli crate does that.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── node.rs                 # Parsed input tree (text / element / opaque)
//!     ├── visitor.rs              # Recursive and iterative walkers
//!     ├── token.rs                # Token arena
//!     ├── token_visitor.rs        # Cursor-driven token building
//!     ├── flatten
//!     │   ├── explicit.rs         # {_name, attribs, subs}
//!     │   └── shorthand.rs        # {<name>: {text, attribs, subs}}
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   └── <format>/mod.rs
//!     └── convert.rs              # The whole pipeline
//!
//! Output Shapes
//!
//!     For `<p class="x">Hi <b>there</b></p>` the shorthand strategy (default) gives
//!
//!         - p:
//!             text: Hi
//!             attribs:
//!               class: x
//!             subs:
//!             - b:
//!                 text: there
//!
//!     and the explicit strategy spells the name out instead, without any text:
//!
//!         - _name: p
//!           attribs:
//!             class: x
//!           subs:
//!           - _name: b
//!
//!     The top level is always a sequence: a document is a forest of top-level elements.
//!
//! Library Choices
//!
//!     - HTML: html5ever. Its tokenizer feeds a source-faithful tree builder (default);
//!       its tree builder with markup5ever_rcdom gives the browser view.
//!     - XML: roxmltree, strict and read-only, which is all a one-way dump needs.
//!     - YAML / JSON: serde_yaml and serde_json. The flattened value is a serde_yaml::Value
//!       since its Mapping keeps insertion order.
//!
pub mod convert;
pub mod error;
pub mod flatten;
pub mod format;
pub mod formats;
pub mod node;
pub mod registry;
pub mod token;
pub mod token_visitor;
pub mod visitor;

pub use convert::{convert, flatten_document, ConvertOptions};
pub use error::FormatError;
pub use flatten::TokenStyle;
pub use format::Format;
pub use node::{Element, Node, OpaqueKind};
pub use registry::FormatRegistry;
pub use token::{Token, TokenId, TokenTree};
pub use token_visitor::TokenVisitor;
pub use visitor::{Traversal, Visitor};
