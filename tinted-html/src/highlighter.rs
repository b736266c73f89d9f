//! Highlighter
//!
//!     A [Highlighter] pairs a language registry with [HtmlOptions]. Every rendering entry
//!     point goes through it: single shot, streamed, and element based.
//!
//!     Markup for one token is
//!
//!         <span class="{prefix}-token {prefix}-{type}">{escaped content}</span>
//!
//!     and nothing else is emitted between spans, so the text content of the output is the
//!     input again.

use crate::element::Element;
use crate::escape::escape_html;
use tinted_lexer::{Registry, StreamOptions, Token, TokenStream, DEFAULT_LOOKBACK};
use tracing::debug;

pub const DEFAULT_CLASS_PREFIX: &str = "tinted";
pub const DEFAULT_LANGUAGE_ATTRIBUTE: &str = "data-language";
/// Not a registered language: elements without a language attribute pass through as text.
pub const DEFAULT_LANGUAGE: &str = "text";
pub const LARGE_CHUNK_SIZE: usize = 10_000;

/// Rendering knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    pub class_prefix: String,
    /// Element attribute holding the language name.
    pub language_attribute: String,
    /// Language used when an element carries no language attribute.
    pub default_language: String,
    /// Chunk size of [Highlighter::highlight_large].
    pub large_chunk_size: usize,
    /// Break point search window of the streaming renderers.
    pub lookback: usize,
    /// Elements highlighted per batch step.
    pub slice_size: usize,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        HtmlOptions {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            language_attribute: DEFAULT_LANGUAGE_ATTRIBUTE.to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            large_chunk_size: LARGE_CHUNK_SIZE,
            lookback: DEFAULT_LOOKBACK,
            slice_size: crate::batch::DEFAULT_SLICE_SIZE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Highlighter<'r> {
    registry: &'r Registry,
    options: HtmlOptions,
}

impl Default for Highlighter<'static> {
    fn default() -> Self {
        Highlighter::new(Registry::builtin(), HtmlOptions::default())
    }
}

impl<'r> Highlighter<'r> {
    pub fn new(registry: &'r Registry, options: HtmlOptions) -> Self {
        Highlighter { registry, options }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    /// Append the markup of `tokens` to `out`.
    pub fn write_tokens(&self, out: &mut String, tokens: &[Token]) {
        let prefix = &self.options.class_prefix;
        for token in tokens {
            write_span(out, prefix, token);
        }
    }

    pub fn render_tokens(&self, tokens: &[Token]) -> String {
        let mut out = String::new();
        self.write_tokens(&mut out, tokens);
        out
    }

    pub fn highlight(&self, code: &str, language: &str) -> String {
        self.render_tokens(&self.registry.tokenize(code, language))
    }

    /// Lazily render `code` in chunks; see [tinted_lexer::stream] for where chunks are cut.
    pub fn highlight_stream<'a>(
        &'a self,
        code: &'a str,
        language: &str,
        chunk_size: usize,
    ) -> HighlightStream<'a> {
        let grammar = self.registry.get(language);
        if grammar.is_none() {
            debug!(language, "no grammar registered, streaming as plain text");
        }
        let options = StreamOptions {
            chunk_size,
            lookback: self.options.lookback,
        };
        HighlightStream {
            tokens: TokenStream::new(grammar, code, options),
            prefix: &self.options.class_prefix,
        }
    }

    /// Streamed rendering with the large-input chunk size, concatenated.
    ///
    /// Identical to [Highlighter::highlight] whenever `code` fits in one chunk.
    pub fn highlight_large(&self, code: &str, language: &str) -> String {
        if code.len() <= self.options.large_chunk_size {
            return self.highlight(code, language);
        }
        self.highlight_stream(code, language, self.options.large_chunk_size)
            .collect()
    }

    /// Replace the element's inner HTML with its highlighted text and flag it with
    /// `{prefix}-highlight`.
    pub fn highlight_element<E: Element + ?Sized>(&self, element: &mut E) {
        let language = element
            .attribute(&self.options.language_attribute)
            .unwrap_or(&self.options.default_language)
            .to_string();
        let html = self.highlight(&element.text_content(), &language);
        element.set_inner_html(html);
        element.add_class(&format!("{}-highlight", self.options.class_prefix));
    }
}

fn write_span(out: &mut String, prefix: &str, token: &Token) {
    out.push_str("<span class=\"");
    out.push_str(prefix);
    out.push_str("-token ");
    out.push_str(prefix);
    out.push('-');
    out.push_str(&token.kind);
    out.push_str("\">");
    out.push_str(&escape_html(&token.content));
    out.push_str("</span>");
}

/// Iterator over rendered chunks, see [Highlighter::highlight_stream].
#[derive(Debug, Clone)]
pub struct HighlightStream<'a> {
    tokens: TokenStream<'a>,
    prefix: &'a str,
}

impl<'a> Iterator for HighlightStream<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let tokens = self.tokens.next()?;
        let mut out = String::new();
        for token in &tokens {
            write_span(&mut out, self.prefix, token);
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinted_lexer::Grammar;

    #[test]
    fn test_span_markup() {
        let html = Highlighter::default().highlight("const x = 42;", "javascript");
        assert!(html.starts_with(
            r#"<span class="tinted-token tinted-keyword">const</span><span class="tinted-token tinted-text"> x </span>"#
        ));
        assert!(html.contains(r#"<span class="tinted-token tinted-number">42</span>"#));
        assert!(html.ends_with(r#"<span class="tinted-token tinted-punctuation">;</span>"#));
    }

    #[test]
    fn test_custom_prefix() {
        let options = HtmlOptions {
            class_prefix: "hl".to_string(),
            ..HtmlOptions::default()
        };
        let highlighter = Highlighter::new(Registry::builtin(), options);
        assert_eq!(
            highlighter.highlight("x", "unknown"),
            r#"<span class="hl-token hl-text">x</span>"#
        );
    }

    #[test]
    fn test_known_language_empty_input_renders_nothing() {
        assert_eq!(Highlighter::default().highlight("", "python"), "");
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = Registry::new();
        registry.register(
            Grammar::builder("ini")
                .pattern("comment", r";[^\n]*")
                .build()
                .unwrap(),
        );
        let highlighter = Highlighter::new(&registry, HtmlOptions::default());
        assert_eq!(
            highlighter.highlight("; hi", "ini"),
            r#"<span class="tinted-token tinted-comment">; hi</span>"#
        );
    }

    #[test]
    fn test_large_on_empty_input_matches_single_shot() {
        let highlighter = Highlighter::default();
        assert_eq!(
            highlighter.highlight_large("", "unknown"),
            r#"<span class="tinted-token tinted-text"></span>"#
        );
        assert_eq!(highlighter.highlight_large("", "javascript"), "");
    }

    #[test]
    fn test_large_streams_above_threshold() {
        let options = HtmlOptions {
            large_chunk_size: 8,
            ..HtmlOptions::default()
        };
        let highlighter = Highlighter::new(Registry::builtin(), options);
        let code = "aaaa bbbb cccc dddd";
        assert_eq!(
            highlighter.highlight_large(code, "unknown"),
            highlighter
                .highlight_stream(code, "unknown", 8)
                .collect::<String>()
        );
        assert_ne!(
            highlighter.highlight_large(code, "unknown"),
            highlighter.highlight(code, "unknown")
        );
    }

    #[test]
    fn test_stream_yields_several_chunks() {
        let code = "let a = 1;\nlet b = 2;\nlet c = a + b;\n";
        let highlighter = Highlighter::default();
        let chunks: Vec<String> = highlighter.highlight_stream(code, "javascript", 8).collect();
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.starts_with("<span")));
    }
}
