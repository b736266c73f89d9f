//! Pattern tables
//!
//!     A [Grammar] is the per-language table consumed by the matcher: an ordered list of
//!     [RuleGroup]s, each pairing a token type with its rules. Both orders are load-bearing.
//!     The first group with a matching rule wins, and inside a group the first matching rule
//!     wins. That is why the table is a `Vec` of groups and not a map.
//!
//!     Grammars are built once through [GrammarBuilder], which compiles every pattern up
//!     front, and are immutable afterwards. They hold nothing but compiled regexes and
//!     function pointers, so they are `Send + Sync` and can be shared across threads.

use crate::rule::{Rule, RuleSpec, ScanFn};
use crate::token::Token;
use std::fmt;

/// Errors raised while compiling a grammar.
#[derive(Debug, Clone)]
pub enum GrammarError {
    /// A pattern (or one of its guards) is not a valid regular expression.
    InvalidPattern {
        language: String,
        kind: String,
        message: String,
    },
    /// The grammar has no name.
    MissingName,
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::InvalidPattern {
                language,
                kind,
                message,
            } => write!(
                f,
                "Invalid pattern for '{}' in language '{}': {}",
                kind, language, message
            ),
            GrammarError::MissingName => write!(f, "Grammar name must not be empty"),
        }
    }
}

impl std::error::Error for GrammarError {}

/// All rules producing one token type, in declaration order.
#[derive(Debug, Clone)]
pub struct RuleGroup {
    kind: String,
    rules: Vec<Rule>,
}

impl RuleGroup {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// A compiled, immutable language table.
#[derive(Debug, Clone)]
pub struct Grammar {
    name: String,
    keep_identifiers: bool,
    extensions: Vec<String>,
    groups: Vec<RuleGroup>,
}

impl Grammar {
    pub fn builder(name: impl Into<String>) -> GrammarBuilder {
        GrammarBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `identifier` matches keep their own type instead of being reported as `text`.
    pub fn keeps_identifiers(&self) -> bool {
        self.keep_identifiers
    }

    /// File extensions (without the dot) this language is registered for.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn groups(&self) -> &[RuleGroup] {
        &self.groups
    }

    pub fn group(&self, kind: &str) -> Option<&RuleGroup> {
        self.groups.iter().find(|g| g.kind == kind)
    }

    /// Tokenize `input` with this table.
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        crate::tokenizer::tokenize_with(self, input)
    }
}

/// Collects rule specs in order and compiles them into a [Grammar].
///
/// Adding a rule for a type that already has a group appends to that group, so the group
/// keeps the position of its first declaration.
///
/// ```ignore
/// let grammar = Grammar::builder("ini")
///     .pattern("comment", r"[;#][^\n]*")
///     .rule("property", RuleSpec::pattern(r"[\w.-]+").followed_by(r"\s*="))
///     .pattern("punctuation", r"[\[\]=]")
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct GrammarBuilder {
    name: String,
    keep_identifiers: bool,
    extensions: Vec<String>,
    groups: Vec<(String, Vec<RuleSpec>)>,
}

impl GrammarBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        GrammarBuilder {
            name: name.into(),
            keep_identifiers: false,
            extensions: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub fn keep_identifiers(mut self, keep: bool) -> Self {
        self.keep_identifiers = keep;
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions
            .extend(extensions.into_iter().map(|ext| ext.into()));
        self
    }

    pub fn rule(mut self, kind: impl Into<String>, spec: RuleSpec) -> Self {
        let kind = kind.into();
        match self.groups.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, specs)) => specs.push(spec),
            None => self.groups.push((kind, vec![spec])),
        }
        self
    }

    pub fn pattern(self, kind: impl Into<String>, source: impl Into<String>) -> Self {
        self.rule(kind, RuleSpec::pattern(source))
    }

    pub fn patterns<I, S>(self, kind: &str, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        sources
            .into_iter()
            .fold(self, |builder, source| builder.pattern(kind, source))
    }

    pub fn scan(self, kind: impl Into<String>, scan: ScanFn) -> Self {
        self.rule(kind, RuleSpec::scan(scan))
    }

    pub fn build(self) -> Result<Grammar, GrammarError> {
        if self.name.is_empty() {
            return Err(GrammarError::MissingName);
        }

        let mut groups = Vec::with_capacity(self.groups.len());
        for (kind, specs) in self.groups {
            let rules = specs
                .iter()
                .map(|spec| spec.compile())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| GrammarError::InvalidPattern {
                    language: self.name.clone(),
                    kind: kind.clone(),
                    message: e.to_string(),
                })?;
            groups.push(RuleGroup { kind, rules });
        }

        Ok(Grammar {
            name: self.name,
            keep_identifiers: self.keep_identifiers,
            extensions: self.extensions,
            groups,
        })
    }
}
