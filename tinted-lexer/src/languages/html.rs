//! HTML

use crate::grammar::{Grammar, GrammarError};
use crate::rule::RuleSpec;
use crate::token::kinds;

pub const NAME: &str = "html";

pub fn grammar() -> Result<Grammar, GrammarError> {
    Grammar::builder(NAME)
        .extensions(["html", "htm", "xhtml"])
        .pattern(kinds::COMMENT, r"<!--(?s:.*?)(?:-->|\z)")
        .patterns(kinds::TAG, [r"</?[a-zA-Z][a-zA-Z0-9-]*", r"/?>"])
        .rule(
            kinds::ATTRIBUTE,
            RuleSpec::pattern(r"[a-zA-Z_:@][a-zA-Z0-9_:.-]*").followed_by(r#"\s*=\s*["']"#),
        )
        .patterns(kinds::STRING, [r#""[^"]*""#, r"'[^']*'"])
        .pattern(kinds::ENTITY, r"&[a-zA-Z0-9#]+;")
        .pattern(kinds::DOCTYPE, r"(?i:<!DOCTYPE[^>]*>)")
        .build()
}
