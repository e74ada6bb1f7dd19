use std::fmt::Display;

use crate::Span;

/// Classification attached to every emitted token.
///
/// Categories form a tree rooted at `Token`; a renderer that has no style
/// for `KeywordConstant` falls back to the style of `Keyword`, and so on up
/// the tree. The engine itself never looks at the hierarchy.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
    Text,
    Whitespace,
    Error,

    Comment,
    CommentSingle,

    Keyword,
    KeywordConstant,
    KeywordType,

    Name,
    NameFunction,

    Operator,
    Punctuation,

    String,
    StringDouble,
    StringSingle,

    Number,
    NumberFloat,
    NumberInteger,
}

impl TokenType {
    pub const ALL: [TokenType; 18] = [
        TokenType::Text,
        TokenType::Whitespace,
        TokenType::Error,
        TokenType::Comment,
        TokenType::CommentSingle,
        TokenType::Keyword,
        TokenType::KeywordConstant,
        TokenType::KeywordType,
        TokenType::Name,
        TokenType::NameFunction,
        TokenType::Operator,
        TokenType::Punctuation,
        TokenType::String,
        TokenType::StringDouble,
        TokenType::StringSingle,
        TokenType::Number,
        TokenType::NumberFloat,
        TokenType::NumberInteger,
    ];

    /// The category this one refines, or `None` for top-level categories.
    pub fn parent(self) -> Option<TokenType> {
        match self {
            TokenType::Whitespace => Some(TokenType::Text),
            TokenType::CommentSingle => Some(TokenType::Comment),
            TokenType::KeywordConstant | TokenType::KeywordType => Some(TokenType::Keyword),
            TokenType::NameFunction => Some(TokenType::Name),
            TokenType::StringDouble | TokenType::StringSingle => Some(TokenType::String),
            TokenType::NumberFloat | TokenType::NumberInteger => Some(TokenType::Number),
            _ => None,
        }
    }

    /// Returns true if `self` is `ancestor` or refines it.
    pub fn is_a(self, ancestor: TokenType) -> bool {
        let mut current = Some(self);

        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }

        false
    }

    /// Last component of the dotted name.
    pub fn leaf_name(self) -> &'static str {
        match self {
            TokenType::Text => "Text",
            TokenType::Whitespace => "Whitespace",
            TokenType::Error => "Error",
            TokenType::Comment => "Comment",
            TokenType::CommentSingle => "Single",
            TokenType::Keyword => "Keyword",
            TokenType::KeywordConstant => "Constant",
            TokenType::KeywordType => "Type",
            TokenType::Name => "Name",
            TokenType::NameFunction => "Function",
            TokenType::Operator => "Operator",
            TokenType::Punctuation => "Punctuation",
            TokenType::String => "String",
            TokenType::StringDouble => "Double",
            TokenType::StringSingle => "Single",
            TokenType::Number => "Number",
            TokenType::NumberFloat => "Float",
            TokenType::NumberInteger => "Integer",
        }
    }

    /// Parses a dotted name such as `Keyword.Constant` (an optional leading
    /// `Token.` is accepted). A bare leaf name like `Whitespace` is accepted
    /// when exactly one category carries it.
    pub fn from_dotted(name: &str) -> Option<TokenType> {
        let name = name.strip_prefix("Token.").unwrap_or(name);
        if let Some(kind) = TokenType::ALL.into_iter().find(|kind| kind.to_string() == name) {
            return Some(kind);
        }

        let mut leaves = TokenType::ALL.into_iter().filter(|kind| kind.leaf_name() == name);
        match (leaves.next(), leaves.next()) {
            (Some(kind), None) => Some(kind),
            _ => None,
        }
    }
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(parent) = self.parent() {
            write!(f, "{}.{}", parent, self.leaf_name())
        } else {
            write!(f, "{}", self.leaf_name())
        }
    }
}

/// A classified slice of the input. `value` borrows from the text that was
/// tokenized; `span` holds byte offsets into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenType,
    pub value: &'s str,
    pub span: Span,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {:?}}}", self.kind, self.value)
    }
}

impl<'s> Token<'s> {
    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }
}
