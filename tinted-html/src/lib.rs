//! HTML rendering for tinted tokens
//!
//!     Turns the token sequences produced by `tinted-lexer` into `<span>` markup, one span per
//!     token, classed `{prefix}-token {prefix}-{type}`. Styling is left to the host page.
//!
//!     This is a pure lib: it never prints, reads env vars or touches the filesystem. The
//!     `tinted` binary is the shell around it.
//!
//!     The file structure :
//!     .
//!     ├── escape.rs       # Single pass HTML escaping
//!     ├── highlighter.rs  # Highlighter, options, streaming renderer
//!     ├── element.rs      # Element trait and the in-memory CodeBlock
//!     ├── batch.rs        # Slice-at-a-time highlighting of many elements
//!     └── lib.rs
//!
//! Free functions
//!
//!     The free functions ([highlight], [highlight_stream], [highlight_large],
//!     [highlight_element], [highlight_elements]) use a process-wide highlighter over the
//!     built-in registry with default options. Build a [Highlighter] for anything else
//!     (custom registry, class prefix, chunk sizes).

pub mod batch;
pub mod element;
pub mod escape;
pub mod highlighter;

pub use batch::{Batch, DEFAULT_SLICE_SIZE};
pub use element::{CodeBlock, Element};
pub use escape::escape_html;
pub use highlighter::{
    HighlightStream, Highlighter, HtmlOptions, DEFAULT_CLASS_PREFIX, DEFAULT_LANGUAGE,
    DEFAULT_LANGUAGE_ATTRIBUTE, LARGE_CHUNK_SIZE,
};

use once_cell::sync::Lazy;

static DEFAULT: Lazy<Highlighter<'static>> = Lazy::new(Highlighter::default);

/// Render `code` as spans, one per token.
pub fn highlight(code: &str, language: &str) -> String {
    DEFAULT.highlight(code, language)
}

/// Render `code` lazily, one markup string per stream chunk.
pub fn highlight_stream<'a>(code: &'a str, language: &str, chunk_size: usize) -> HighlightStream<'a> {
    DEFAULT.highlight_stream(code, language, chunk_size)
}

/// Render `code` through the streaming path with the large-input chunk size.
pub fn highlight_large(code: &str, language: &str) -> String {
    DEFAULT.highlight_large(code, language)
}

/// Highlight one element in place.
pub fn highlight_element<E: Element + ?Sized>(element: &mut E) {
    DEFAULT.highlight_element(element)
}

/// Highlight every element, yielding to the tokio scheduler between slices.
pub async fn highlight_elements<E: Element>(elements: &mut [E]) {
    DEFAULT.highlight_elements(elements).await
}
