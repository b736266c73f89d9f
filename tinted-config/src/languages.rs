//! User-declared languages
//!
//! A `[[languages]]` entry mirrors the built-in tables: ordered groups, each
//! naming the token type it produces and listing its patterns in priority
//! order. A pattern is either a bare regex source or a table with optional
//! lookahead guards:
//!
//! ```toml
//! [[languages]]
//! name = "ini"
//! extensions = ["ini"]
//! groups = [
//!   { kind = "comment", patterns = ['[;#][^\n]*'] },
//!   { kind = "property", patterns = [{ pattern = '\w+', followed_by = '\s*=' }] },
//! ]
//! ```

use serde::Deserialize;
use tinted_lexer::{Grammar, GrammarError, RuleSpec};

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    pub name: String,
    /// Keep `identifier` tokens instead of folding them into `text`.
    #[serde(default)]
    pub keep_identifiers: bool,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupConfig {
    pub kind: String,
    pub patterns: Vec<PatternConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PatternConfig {
    Source(String),
    Guarded {
        pattern: String,
        #[serde(default)]
        followed_by: Option<String>,
        #[serde(default)]
        not_followed_by: Option<String>,
    },
}

impl PatternConfig {
    pub fn to_rule_spec(&self) -> RuleSpec {
        match self {
            PatternConfig::Source(source) => RuleSpec::pattern(source.as_str()),
            PatternConfig::Guarded {
                pattern,
                followed_by,
                not_followed_by,
            } => {
                let mut spec = RuleSpec::pattern(pattern.as_str());
                if let Some(guard) = followed_by {
                    spec = spec.followed_by(guard.as_str());
                }
                if let Some(guard) = not_followed_by {
                    spec = spec.not_followed_by(guard.as_str());
                }
                spec
            }
        }
    }
}

impl LanguageConfig {
    pub fn to_grammar(&self) -> Result<Grammar, GrammarError> {
        let builder = Grammar::builder(self.name.as_str())
            .keep_identifiers(self.keep_identifiers)
            .extensions(self.extensions.iter().map(String::as_str));
        self.groups
            .iter()
            .flat_map(|group| {
                group
                    .patterns
                    .iter()
                    .map(move |pattern| (group.kind.as_str(), pattern.to_rule_spec()))
            })
            .fold(builder, |builder, (kind, spec)| builder.rule(kind, spec))
            .build()
    }
}
