//! # tinted-lexer
//!
//! Table-driven tokenizer for syntax highlighting.
//!
//! Layout
//!
//!     A language is a [Grammar]: an ordered list of rule groups, each group naming the token
//!     type it produces. The [matcher] walks that list at the current position and the
//!     [tokenizer] drives it over the whole input, merging neighbours of the same type. The
//!     [stream] module does the same work in chunks for large inputs.
//!
//!     src/
//!       ├── token.rs       Token and the type vocabulary
//!       ├── rule.rs        Anchored pattern rules and hand-written scanners
//!       ├── grammar.rs     Ordered rule tables and their builder
//!       ├── registry.rs    Name -> grammar lookup, built-in registry
//!       ├── matcher.rs     First-match-wins lookup plus the fallback
//!       ├── tokenizer.rs   Single-pass tokenization with adjacent merge
//!       ├── stream.rs      Chunked tokenization at safe break points
//!       └── languages/     Built-in tables
//!
//! Invariant
//!
//!     For every input and every language, concatenating the `content` of the produced tokens
//!     yields the input back, byte for byte. This holds for the streaming path as well.

pub mod grammar;
pub mod languages;
pub mod matcher;
pub mod registry;
pub mod rule;
pub mod stream;
pub mod token;
pub mod tokenizer;

pub use grammar::{Grammar, GrammarBuilder, GrammarError, RuleGroup};
pub use matcher::{fallback, match_at, Match};
pub use registry::Registry;
pub use rule::{PatternRule, Rule, RuleSpec, ScanFn};
pub use stream::{tokenize_stream, StreamOptions, TokenStream, DEFAULT_CHUNK_SIZE, DEFAULT_LOOKBACK};
pub use token::{detokenize, kinds, Token};
pub use tokenizer::tokenize;
