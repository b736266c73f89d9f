//! Matcher
//!
//!     Finds the token starting at the current position. Groups are tried in table order
//!     and rules in list order; the first rule that recognizes a non-empty prefix of the
//!     remaining input wins. Nothing is backtracked: a group without a match simply hands
//!     over to the next one.
//!
//!     Matches of the `identifier` group are reported as `text`, unless the grammar keeps
//!     identifiers (only TypeScript among the built-ins). Highlighting stays quiet on plain
//!     names in every other language.
//!
//!     When no rule matches, [fallback] consumes either a maximal whitespace run or exactly
//!     one character, so every step makes progress.

use crate::grammar::Grammar;
use crate::token::kinds;

/// The winning type and the byte length it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'g> {
    pub kind: &'g str,
    pub len: usize,
}

/// First group/rule pair matching at offset 0 of `rest`.
pub fn match_at<'g>(grammar: &'g Grammar, rest: &str) -> Option<Match<'g>> {
    for group in grammar.groups() {
        for rule in group.rules() {
            if let Some(len) = rule.try_match(rest) {
                let kind = if group.kind() == kinds::IDENTIFIER && !grammar.keeps_identifiers() {
                    kinds::TEXT
                } else {
                    group.kind()
                };
                return Some(Match { kind, len });
            }
        }
    }
    None
}

/// Default step when no rule matches: a whitespace run, else one character, as `text`.
///
/// Returns `None` only for empty input.
pub fn fallback(rest: &str) -> Option<Match<'static>> {
    let whitespace: usize = rest
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    let len = if whitespace > 0 {
        whitespace
    } else {
        rest.chars().next()?.len_utf8()
    };
    Some(Match {
        kind: kinds::TEXT,
        len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleSpec;

    fn demo(keep_identifiers: bool) -> Grammar {
        Grammar::builder("demo")
            .keep_identifiers(keep_identifiers)
            .pattern(kinds::KEYWORD, r"let\b")
            .pattern(kinds::NUMBER, r"\d+")
            .pattern(kinds::IDENTIFIER, r"[a-z]+")
            .build()
            .unwrap()
    }

    #[test]
    fn first_group_in_table_order_wins() {
        let grammar = demo(false);
        assert_eq!(
            match_at(&grammar, "let x"),
            Some(Match {
                kind: kinds::KEYWORD,
                len: 3
            })
        );
    }

    #[test]
    fn later_group_matches_when_earlier_fail() {
        let grammar = demo(false);
        assert_eq!(match_at(&grammar, "42;").map(|m| m.kind), Some(kinds::NUMBER));
    }

    #[test]
    fn first_rule_in_group_wins() {
        let grammar = Grammar::builder("demo")
            .pattern(kinds::STRING, r#""[^"]*""#)
            .pattern(kinds::STRING, r#""[^"\n]*"#)
            .build()
            .unwrap();
        assert_eq!(match_at(&grammar, r#""ab" x"#).map(|m| m.len), Some(4));
        assert_eq!(match_at(&grammar, "\"ab\nx").map(|m| m.len), Some(3));
    }

    #[test]
    fn identifier_reported_as_text_by_default() {
        let grammar = demo(false);
        assert_eq!(match_at(&grammar, "letter").map(|m| m.kind), Some(kinds::TEXT));
    }

    #[test]
    fn identifier_kept_when_flag_set() {
        let grammar = demo(true);
        assert_eq!(
            match_at(&grammar, "letter").map(|m| m.kind),
            Some(kinds::IDENTIFIER)
        );
    }

    #[test]
    fn no_match_returns_none() {
        let grammar = demo(false);
        assert_eq!(match_at(&grammar, "+ 1"), None);
    }

    #[test]
    fn empty_table_never_matches() {
        let grammar = Grammar::builder("plain").build().unwrap();
        assert_eq!(match_at(&grammar, "anything"), None);
    }

    #[test]
    fn guarded_rule_falls_through_to_next_group() {
        let grammar = Grammar::builder("demo")
            .rule(
                kinds::PROPERTY,
                RuleSpec::pattern("[a-z]+").followed_by(r"\s*:"),
            )
            .pattern(kinds::VALUE, "[a-z]+")
            .build()
            .unwrap();
        assert_eq!(match_at(&grammar, "red;").map(|m| m.kind), Some(kinds::VALUE));
        assert_eq!(
            match_at(&grammar, "color: red").map(|m| m.kind),
            Some(kinds::PROPERTY)
        );
    }

    #[test]
    fn fallback_takes_whole_whitespace_run() {
        assert_eq!(fallback(" \t\n x").map(|m| m.len), Some(4));
    }

    #[test]
    fn fallback_takes_one_character() {
        assert_eq!(fallback("@@").map(|m| m.len), Some(1));
        assert_eq!(fallback("€x").map(|m| m.len), Some(3));
    }

    #[test]
    fn fallback_on_empty_input() {
        assert_eq!(fallback(""), None);
    }
}
