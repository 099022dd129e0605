//! Arena-backed token tree built during a walk.
//!
//! Tokens never own their parent: the [`TokenTree`] owns every token, children are
//! stored as [`TokenId`]s in append order, and each token keeps the id of its parent for
//! moving a cursor upwards. The root token (index 0) exists before traversal begins.

/// Index of a token inside its [`TokenTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(usize);

impl TokenId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A node of the result tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Token {
    /// Absent only for the root and for tokens built from opaque nodes.
    pub name: Option<String>,
    /// Last non-empty trimmed text seen while this token was current.
    pub text: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<TokenId>,
    pub parent: Option<TokenId>,
}

impl Token {
    /// The document root: no name, no parent, no attributes.
    pub fn is_root(&self) -> bool {
        self.name.is_none() && self.parent.is_none() && self.attributes.is_empty()
    }
}

/// Owner of every token produced by one walk.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenTree {
    tokens: Vec<Token>,
}

#[allow(clippy::len_without_is_empty)]
impl TokenTree {
    /// Creates a tree holding only the root token.
    pub fn new() -> Self {
        TokenTree {
            tokens: vec![Token::default()],
        }
    }

    pub fn root(&self) -> TokenId {
        TokenId(0)
    }

    /// Looks up a token. Ids are only handed out by this tree, so lookups cannot miss.
    pub fn get(&self, id: TokenId) -> &Token {
        &self.tokens[id.0]
    }

    /// Creates a token under `parent` without linking it into the parent's children.
    pub fn create(
        &mut self,
        parent: TokenId,
        name: Option<String>,
        attributes: Vec<(String, String)>,
    ) -> TokenId {
        let id = TokenId(self.tokens.len());
        self.tokens.push(Token {
            name,
            text: None,
            attributes,
            children: Vec::new(),
            parent: Some(parent),
        });
        id
    }

    /// Appends `child` to its parent's children.
    pub fn link(&mut self, child: TokenId) {
        if let Some(parent) = self.tokens[child.0].parent {
            self.tokens[parent.0].children.push(child);
        }
    }

    pub fn set_text(&mut self, id: TokenId, text: String) {
        self.tokens[id.0].text = Some(text);
    }

    pub fn parent(&self, id: TokenId) -> Option<TokenId> {
        self.get(id).parent
    }

    pub fn children(&self, id: TokenId) -> impl Iterator<Item = &Token> + '_ {
        self.get(id).children.iter().map(move |child| self.get(*child))
    }

    /// Total number of tokens, linked or not, including the root.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Number of tokens reachable from the root through children links, root excluded.
    pub fn linked_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self.root()];
        while let Some(id) = pending.pop() {
            let children = &self.get(id).children;
            count += children.len();
            pending.extend(children.iter().copied());
        }
        count
    }
}

impl Default for TokenTree {
    fn default() -> Self {
        Self::new()
    }
}
