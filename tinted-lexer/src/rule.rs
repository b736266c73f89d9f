//! Match rules
//!
//!     A rule answers one question: how many bytes of `rest` does it recognize, starting at
//!     offset 0? Two variants exist:
//!
//!         - [PatternRule]: a regular expression compiled with a leading `^`, plus optional
//!           guards checked against the text right after the match. The `regex` crate has no
//!           lookaround, so `(?=...)` and `(?!...)` are expressed as `followed_by` and
//!           `not_followed_by` guards instead.
//!         - [Rule::Scan]: a hand-written recognizer, for constructs that need manual
//!           lookahead such as balanced triple quotes or nested brackets.
//!
//!     Rules are described by a [RuleSpec] (plain strings, cheap to write in tables and
//!     deserializable from configuration) and compiled once into a [Rule].

use regex::Regex;

/// Signature of a hand-written recognizer: byte length matched at the start of `rest`.
pub type ScanFn = fn(&str) -> Option<usize>;

/// Uncompiled description of a rule.
#[derive(Debug, Clone)]
pub enum RuleSpec {
    Pattern {
        source: String,
        followed_by: Option<String>,
        not_followed_by: Option<String>,
    },
    Scan(ScanFn),
}

impl RuleSpec {
    pub fn pattern(source: impl Into<String>) -> Self {
        RuleSpec::Pattern {
            source: source.into(),
            followed_by: None,
            not_followed_by: None,
        }
    }

    pub fn scan(scan: ScanFn) -> Self {
        RuleSpec::Scan(scan)
    }

    /// Require the text after the match to start with `guard`.
    ///
    /// Has no effect on [RuleSpec::Scan].
    pub fn followed_by(mut self, guard: impl Into<String>) -> Self {
        if let RuleSpec::Pattern {
            ref mut followed_by,
            ..
        } = self
        {
            *followed_by = Some(guard.into());
        }
        self
    }

    /// Reject the match when the text after it starts with `guard`.
    ///
    /// Has no effect on [RuleSpec::Scan].
    pub fn not_followed_by(mut self, guard: impl Into<String>) -> Self {
        if let RuleSpec::Pattern {
            ref mut not_followed_by,
            ..
        } = self
        {
            *not_followed_by = Some(guard.into());
        }
        self
    }

    pub fn compile(&self) -> Result<Rule, regex::Error> {
        match self {
            RuleSpec::Pattern {
                source,
                followed_by,
                not_followed_by,
            } => Ok(Rule::Pattern(PatternRule {
                regex: anchored(source)?,
                followed_by: followed_by.as_deref().map(anchored).transpose()?,
                not_followed_by: not_followed_by.as_deref().map(anchored).transpose()?,
            })),
            RuleSpec::Scan(scan) => Ok(Rule::Scan(*scan)),
        }
    }
}

impl From<&str> for RuleSpec {
    fn from(source: &str) -> Self {
        RuleSpec::pattern(source)
    }
}

fn anchored(source: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{})", source))
}

/// A regular expression anchored at the current position, with optional guards.
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    followed_by: Option<Regex>,
    not_followed_by: Option<Regex>,
}

impl PatternRule {
    pub fn try_match(&self, rest: &str) -> Option<usize> {
        let found = self.regex.find(rest)?;
        // Only a match at offset 0 counts, never a later occurrence.
        if found.start() != 0 {
            return None;
        }
        let tail = &rest[found.end()..];
        if let Some(guard) = &self.followed_by {
            if !guard.is_match(tail) {
                return None;
            }
        }
        if let Some(guard) = &self.not_followed_by {
            if guard.is_match(tail) {
                return None;
            }
        }
        Some(found.end())
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub enum Rule {
    Pattern(PatternRule),
    Scan(ScanFn),
}

impl Rule {
    /// Length in bytes of the match at the start of `rest`, if any.
    ///
    /// Zero-length results and lengths that do not land on a char boundary are discarded.
    pub fn try_match(&self, rest: &str) -> Option<usize> {
        let len = match self {
            Rule::Pattern(pattern) => pattern.try_match(rest)?,
            Rule::Scan(scan) => scan(rest)?,
        };
        if len == 0 || len > rest.len() || !rest.is_char_boundary(len) {
            return None;
        }
        Some(len)
    }
}
