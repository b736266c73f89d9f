//! Token type and the type vocabulary shared by all languages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token type names.
///
/// The first block is common to every language; the rest are produced by one or two
/// built-in tables only. User-declared languages may use any other name.
pub mod kinds {
    pub const TEXT: &str = "text";
    pub const KEYWORD: &str = "keyword";
    pub const STRING: &str = "string";
    pub const NUMBER: &str = "number";
    pub const COMMENT: &str = "comment";
    pub const PUNCTUATION: &str = "punctuation";
    pub const OPERATOR: &str = "operator";
    pub const IDENTIFIER: &str = "identifier";

    // markup
    pub const TAG: &str = "tag";
    pub const ATTRIBUTE: &str = "attribute";
    pub const ENTITY: &str = "entity";
    pub const DOCTYPE: &str = "doctype";

    // stylesheets
    pub const SELECTOR: &str = "selector";
    pub const PROPERTY: &str = "property";
    pub const VALUE: &str = "value";
    pub const PSEUDO: &str = "pseudo";

    // prose
    pub const HEADING: &str = "heading";
    pub const CODE: &str = "code";
    pub const LINK: &str = "link";
    pub const EMPHASIS: &str = "emphasis";
    pub const BLOCKQUOTE: &str = "blockquote";
    pub const LIST: &str = "list";
}

/// A typed, contiguous span of the input.
///
/// Serializes as `{"type": ..., "content": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

impl Token {
    pub fn new(kind: impl Into<String>, content: impl Into<String>) -> Self {
        Token {
            kind: kind.into(),
            content: content.into(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Token::new(kinds::TEXT, content)
    }

    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.content)
    }
}

/// Joins token contents back into the source they were cut from.
pub fn detokenize<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens.into_iter().map(|t| t.content.as_str()).collect()
}
