//! Pattern sources and scanners shared across the built-in tables.
//!
//! Unterminated constructs must still terminate: strings stop at the end of the line,
//! block comments and fenced blocks at the end of the input.

pub(crate) const STRING_DOUBLE: &str = r#""(?:\\(?s:.)|[^"\\])*""#;
pub(crate) const STRING_SINGLE: &str = r#"'(?:\\(?s:.)|[^'\\])*'"#;
pub(crate) const STRING_BACKTICK: &str = r#"`(?:\\(?s:.)|[^`\\])*`"#;

pub(crate) const OPEN_STRING_DOUBLE: &str = r#""(?:\\.|[^"\\\n])*"#;
pub(crate) const OPEN_STRING_SINGLE: &str = r#"'(?:\\.|[^'\\\n])*"#;
pub(crate) const OPEN_STRING_BACKTICK: &str = r#"`(?:\\(?s:.)|[^`\\])*"#;

pub(crate) const HEX_NUMBER: &str = r"0[xX][0-9a-fA-F_]+\b";
pub(crate) const NUMBER: &str = r"(?:\b\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?\b";

pub(crate) const LINE_COMMENT: &str = r"//[^\n]*";
pub(crate) const BLOCK_COMMENT: &str = r"/\*(?s:.*?)(?:\*/|\z)";

pub(crate) const IDENTIFIER: &str = r"[A-Za-z_$][A-Za-z0-9_$]*";

/// `(?:a|b|c)\b` for a keyword list.
pub(crate) fn words(list: &[&str]) -> String {
    format!(r"(?:{})\b", list.join("|"))
}

/// Python-style triple-quoted string, `"""..."""` or `'''...'''`.
///
/// Backslash escapes are skipped; an unterminated string runs to the end of the input.
pub(crate) fn triple_quoted(rest: &str) -> Option<usize> {
    let fence = if rest.starts_with(r#"""""#) {
        r#"""""#
    } else if rest.starts_with("'''") {
        "'''"
    } else {
        return None;
    };

    let mut chars = rest.char_indices().skip(3);
    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            chars.next();
            continue;
        }
        if rest[i..].starts_with(fence) {
            return Some(i + fence.len());
        }
    }
    Some(rest.len())
}

/// Markdown link: `[text]` with nested brackets, optionally followed by `(target)`.
///
/// The bracket text must close; the target, once opened, runs to `)` or the end of the
/// input.
pub(crate) fn markdown_link(rest: &str) -> Option<usize> {
    if !rest.starts_with('[') {
        return None;
    }

    let mut depth = 0usize;
    let mut close = None;
    for (i, c) in rest.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(i + 1);
                    break;
                }
            }
            _ => {}
        }
    }
    let end = close?;

    let target = &rest[end..];
    if !target.starts_with('(') {
        return Some(end);
    }
    match target.find(')') {
        Some(paren) => Some(end + paren + 1),
        None => Some(rest.len()),
    }
}

const CSS_UNITS: &[&str] = &[
    "px", "em", "rem", "vh", "vw", "vmin", "vmax", "%", "ch", "ex", "cm", "mm", "in", "pt", "pc",
    "fr", "deg", "rad", "grad", "turn", "s", "ms", "Hz", "kHz",
];

/// CSS number with an optional unit; unknown units are left out of the match.
pub(crate) fn css_dimension(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut end = if i > int_start { Some(i) } else { None };
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start {
            end = Some(j);
        }
    }
    let number_end = end?;

    let unit_len = bytes[number_end..]
        .iter()
        .take_while(|b| b.is_ascii_alphabetic() || **b == b'%')
        .count();
    let unit = &rest[number_end..number_end + unit_len];
    if unit.is_empty() || CSS_UNITS.contains(&unit) {
        Some(number_end + unit_len)
    } else {
        Some(number_end)
    }
}
