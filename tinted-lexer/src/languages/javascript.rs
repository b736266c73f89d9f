//! JavaScript

use super::common::*;
use crate::grammar::{Grammar, GrammarError};
use crate::token::kinds;

pub const NAME: &str = "javascript";

const KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "default", "delete",
    "do", "else", "export", "extends", "false", "finally", "for", "from", "function", "if",
    "import", "in", "instanceof", "let", "new", "null", "of", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "undefined", "var", "void", "while",
    "yield",
];

pub fn grammar() -> Result<Grammar, GrammarError> {
    Grammar::builder(NAME)
        .extensions(["js", "mjs", "cjs", "jsx"])
        .patterns(kinds::COMMENT, [LINE_COMMENT, BLOCK_COMMENT])
        .patterns(
            kinds::STRING,
            [
                STRING_DOUBLE,
                STRING_SINGLE,
                STRING_BACKTICK,
                OPEN_STRING_DOUBLE,
                OPEN_STRING_SINGLE,
                OPEN_STRING_BACKTICK,
            ],
        )
        .patterns(kinds::NUMBER, [HEX_NUMBER, NUMBER])
        .pattern(kinds::KEYWORD, words(KEYWORDS))
        .pattern(kinds::PUNCTUATION, r"[{}\[\](),.;]")
        .pattern(kinds::OPERATOR, r"[+\-*/%=<>!&|^~?:]+")
        .pattern(kinds::IDENTIFIER, IDENTIFIER)
        .build()
}
