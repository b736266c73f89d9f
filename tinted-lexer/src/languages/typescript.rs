//! TypeScript
//!
//! The only built-in language that keeps `identifier` tokens.

use super::common::*;
use crate::grammar::{Grammar, GrammarError};
use crate::token::kinds;

pub const NAME: &str = "typescript";

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "break", "case", "catch", "class", "const", "continue",
    "debugger", "declare", "default", "delete", "do", "else", "enum", "export", "extends",
    "false", "finally", "for", "from", "function", "get", "if", "implements", "import", "in",
    "instanceof", "interface", "keyof", "let", "new", "null", "package", "private", "protected",
    "public", "readonly", "return", "set", "static", "super", "switch", "this", "throw", "true",
    "try", "type", "typeof", "var", "void", "while", "with", "yield",
];

pub fn grammar() -> Result<Grammar, GrammarError> {
    Grammar::builder(NAME)
        .keep_identifiers(true)
        .extensions(["ts", "tsx", "mts", "cts"])
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
        .pattern(kinds::PUNCTUATION, r"[{}\[\](),.;:]")
        .pattern(kinds::OPERATOR, r"[+\-*/%=<>!&|^~?]+")
        .pattern(kinds::IDENTIFIER, IDENTIFIER)
        .build()
}
