//! JSON

use crate::grammar::{Grammar, GrammarError};
use crate::token::kinds;

pub const NAME: &str = "json";

pub fn grammar() -> Result<Grammar, GrammarError> {
    Grammar::builder(NAME)
        .extensions(["json"])
        .patterns(
            kinds::STRING,
            [r#""(?:\\.|[^"\\])*""#, r#""(?:\\.|[^"\\\n])*"#],
        )
        .pattern(kinds::NUMBER, r"-?\d+\.?\d*(?:[eE][+-]?\d+)?")
        .pattern(kinds::KEYWORD, r"(?:true|false|null)\b")
        .pattern(kinds::PUNCTUATION, r"[{}\[\],:]")
        .build()
}

#[cfg(test)]
mod tests {
    use crate::token::Token;
    use crate::tokenize;

    fn t(kind: &str, content: &str) -> Token {
        Token::new(kind, content)
    }

    #[test]
    fn object_with_string_and_number() {
        assert_eq!(
            tokenize(r#"{"name": "John", "age": 30}"#, super::NAME),
            vec![
                t("punctuation", "{"),
                t("string", "\"name\""),
                t("punctuation", ":"),
                t("text", " "),
                t("string", "\"John\""),
                t("punctuation", ","),
                t("text", " "),
                t("string", "\"age\""),
                t("punctuation", ":"),
                t("text", " "),
                t("number", "30"),
                t("punctuation", "}"),
            ]
        );
    }

    #[test]
    fn literals_and_negative_numbers() {
        assert_eq!(
            tokenize("[true,null,-1.5e3]", super::NAME),
            vec![
                t("punctuation", "["),
                t("keyword", "true"),
                t("punctuation", ","),
                t("keyword", "null"),
                t("punctuation", ","),
                t("number", "-1.5e3"),
                t("punctuation", "]"),
            ]
        );
    }

    #[test]
    fn escaped_quote_stays_inside_string() {
        assert_eq!(
            tokenize(r#""a\"b""#, super::NAME),
            vec![t("string", r#""a\"b""#)]
        );
    }

    #[test]
    fn trueish_word_is_text() {
        assert_eq!(tokenize("trueish", super::NAME), vec![t("text", "trueish")]);
    }
}
