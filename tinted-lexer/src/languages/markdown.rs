//! Markdown
//!
//! Inline and block markers only. Rules see the remaining input without left context, so
//! block markers such as `#` or `>` are recognized wherever they appear.

use super::common::markdown_link;
use crate::grammar::{Grammar, GrammarError};
use crate::rule::RuleSpec;
use crate::token::kinds;

pub const NAME: &str = "markdown";

pub fn grammar() -> Result<Grammar, GrammarError> {
    Grammar::builder(NAME)
        .extensions(["md", "markdown"])
        .pattern(kinds::HEADING, r"#{1,6}[ \t][^\n]*")
        .rule(kinds::HEADING, RuleSpec::pattern(r"#{1,6}").followed_by(r"\n|\z"))
        .patterns(kinds::CODE, [r"(?s:```.*?(?:```|\z))", r"`[^`\n]*`?"])
        .scan(kinds::LINK, markdown_link)
        .patterns(
            kinds::EMPHASIS,
            [r"\*\*[^\n]*?\*\*", r"__[^\n]*?__", r"\*[^*\n]+\*", r"_[^_\n]+_"],
        )
        .pattern(kinds::BLOCKQUOTE, r"> ?")
        .patterns(kinds::LIST, [r"[*+-][ \t]", r"\d+\.\s"])
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
    fn heading_and_emphasis() {
        assert_eq!(
            tokenize("# Title\n**bold** *italic*", super::NAME),
            vec![
                t("heading", "# Title"),
                t("text", "\n"),
                t("emphasis", "**bold**"),
                t("text", " "),
                t("emphasis", "*italic*"),
            ]
        );
    }

    #[test]
    fn hash_without_space_is_text() {
        assert_eq!(tokenize("#tag", super::NAME), vec![t("text", "#tag")]);
        assert_eq!(tokenize("##", super::NAME), vec![t("heading", "##")]);
    }

    #[test]
    fn link_with_nested_brackets() {
        assert_eq!(
            tokenize("[a [b]](http://x) tail", super::NAME),
            vec![t("link", "[a [b]](http://x)"), t("text", " tail")]
        );
    }

    #[test]
    fn unclosed_link_is_text() {
        assert_eq!(tokenize("[open", super::NAME), vec![t("text", "[open")]);
    }

    #[test]
    fn inline_code_and_fence() {
        assert_eq!(
            tokenize("`x` and ```\nfn\n```", super::NAME),
            vec![
                t("code", "`x`"),
                t("text", " and "),
                t("code", "```\nfn\n```"),
            ]
        );
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        assert_eq!(
            tokenize("```\nlet x", super::NAME),
            vec![t("code", "```\nlet x")]
        );
    }

    #[test]
    fn quote_and_list_markers() {
        assert_eq!(
            tokenize("> quote\n- item\n1. one", super::NAME),
            vec![
                t("blockquote", "> "),
                t("text", "quote\n"),
                t("list", "- "),
                t("text", "item\n"),
                t("list", "1. "),
                t("text", "one"),
            ]
        );
    }
}
