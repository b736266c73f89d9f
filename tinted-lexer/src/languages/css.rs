//! CSS
//!
//! Without block tracking, declarations and selectors are told apart by what follows them:
//! a declaration runs into `;` or `}` before any `{`, a selector runs into `{`.

use super::common::{css_dimension, BLOCK_COMMENT};
use crate::grammar::{Grammar, GrammarError};
use crate::rule::RuleSpec;
use crate::token::kinds;

pub const NAME: &str = "css";

/// Rest of a declaration: no `{` before the closing `;`/`}` (or end of input).
const IN_DECLARATION: &str = r"[^{};]*(?:[;}]|\z)";

pub fn grammar() -> Result<Grammar, GrammarError> {
    Grammar::builder(NAME)
        .extensions(["css"])
        .pattern(kinds::COMMENT, BLOCK_COMMENT)
        .patterns(
            kinds::STRING,
            [r#""(?:\\(?s:.)|[^"\\\n])*"?"#, r"'(?:\\(?s:.)|[^'\\\n])*'?"],
        )
        .patterns(kinds::KEYWORD, [r"@[a-zA-Z-]+", r"!\s*important\b"])
        .rule(
            kinds::PROPERTY,
            RuleSpec::pattern(r"-?[a-zA-Z][a-zA-Z0-9-]*").followed_by(r"\s*:[^{;]*(?:[;}]|\z)"),
        )
        .rule(
            kinds::VALUE,
            RuleSpec::pattern(r"#[0-9a-fA-F]{3,8}")
                .followed_by(IN_DECLARATION)
                .not_followed_by(r"[\w-]"),
        )
        .scan(kinds::VALUE, css_dimension)
        .rule(
            kinds::VALUE,
            RuleSpec::pattern(r"[a-zA-Z-]+").followed_by(IN_DECLARATION),
        )
        .pattern(kinds::SELECTOR, r"[.#]?[a-zA-Z0-9_-]+|\*")
        .rule(
            kinds::PSEUDO,
            RuleSpec::pattern(r"::?[a-zA-Z-]+").not_followed_by(r"[^{};]*[;}]"),
        )
        .pattern(kinds::PUNCTUATION, r"[{};:,()]")
        .build()
}
