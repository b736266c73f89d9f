//! Built-in language tables
//!
//!     Each module exposes a `NAME` and a `grammar()` constructor. Rule order inside a table
//!     is significant: the first group (and within it the first rule) that matches wins.

mod common;

pub mod css;
pub mod html;
pub mod javascript;
pub mod json;
pub mod markdown;
pub mod python;
pub mod typescript;

use crate::grammar::Grammar;

/// Compile every built-in grammar.
///
/// The tables are static, so a failure here is a bug in this crate rather than bad input.
pub fn builtin() -> Vec<Grammar> {
    [
        javascript::grammar,
        typescript::grammar,
        python::grammar,
        html::grammar,
        css::grammar,
        json::grammar,
        markdown::grammar,
    ]
    .iter()
    .map(|build| build().expect("built-in grammar compiles"))
    .collect()
}
