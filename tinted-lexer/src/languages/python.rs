//! Python

use super::common::{triple_quoted, words, HEX_NUMBER};
use crate::grammar::{Grammar, GrammarError};
use crate::token::kinds;

pub const NAME: &str = "python";

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

pub fn grammar() -> Result<Grammar, GrammarError> {
    Grammar::builder(NAME)
        .extensions(["py", "pyi", "pyw"])
        .pattern(kinds::COMMENT, r"#[^\n]*")
        .scan(kinds::STRING, triple_quoted)
        .patterns(
            kinds::STRING,
            [
                r#"(?i:[rbfu]{1,2})?"(?:\\(?s:.)|[^"\\\n])*"?"#,
                r#"(?i:[rbfu]{1,2})?'(?:\\(?s:.)|[^'\\\n])*'?"#,
            ],
        )
        .patterns(
            kinds::NUMBER,
            [HEX_NUMBER, r"\d*\.?\d+(?:[eE][+-]?\d+)?j?"],
        )
        .pattern(kinds::KEYWORD, words(KEYWORDS))
        .pattern(kinds::PUNCTUATION, r"[\[\]{}(),.;:]")
        .pattern(kinds::OPERATOR, r"[+\-*/%@<>=!&|^~]+")
        .pattern(kinds::IDENTIFIER, r"[A-Za-z_][A-Za-z0-9_]*")
        .build()
}
