//! Stream tokenizer
//!
//!     Tokenizes large inputs chunk by chunk, lazily. Slices of `chunk_size` bytes are
//!     appended to a carry-over buffer; the buffer is cut after the last newline, space or
//!     tab found within `lookback` characters of its end, and everything up to the cut is
//!     tokenized and yielded. When no such character is found the whole buffer is yielded
//!     as is (except on the last slice, where it stays in the buffer and is yielded once the
//!     slices run out).
//!
//!     Break points are best effort. The tokenizer only looks at local text, so a cut in
//!     the middle of a token splits it into two tokens but never loses or duplicates
//!     content: the chunks always concatenate back to the input.

use crate::grammar::Grammar;
use crate::registry::Registry;
use crate::token::Token;
use tracing::trace;

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_LOOKBACK: usize = 100;

/// Chunking knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamOptions {
    /// Bytes appended to the buffer per step. Zero is treated as one.
    pub chunk_size: usize,
    /// How many characters back from the buffer end to look for a break point.
    pub lookback: usize,
}

impl Default for StreamOptions {
    fn default() -> Self {
        StreamOptions {
            chunk_size: DEFAULT_CHUNK_SIZE,
            lookback: DEFAULT_LOOKBACK,
        }
    }
}

impl StreamOptions {
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        StreamOptions {
            chunk_size,
            ..Self::default()
        }
    }
}

/// Tokenize `input` as `language` in chunks of `chunk_size` bytes, using the built-in
/// registry.
pub fn tokenize_stream<'a>(input: &'a str, language: &str, chunk_size: usize) -> TokenStream<'a> {
    TokenStream::new(
        Registry::builtin().get(language),
        input,
        StreamOptions::with_chunk_size(chunk_size),
    )
}

/// Iterator over the token chunks of one input.
///
/// `grammar == None` means an unknown language: every chunk passes through as one `text`
/// token.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    grammar: Option<&'a Grammar>,
    input: &'a str,
    options: StreamOptions,
    pos: usize,
    carry: String,
    single: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(grammar: Option<&'a Grammar>, input: &'a str, options: StreamOptions) -> Self {
        let options = StreamOptions {
            chunk_size: options.chunk_size.max(1),
            ..options
        };
        TokenStream {
            grammar,
            input,
            options,
            pos: 0,
            carry: String::new(),
            single: input.len() <= options.chunk_size,
        }
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        match self.grammar {
            Some(grammar) => grammar.tokenize(text),
            None => vec![Token::text(text)],
        }
    }

    /// Next slice end at or after `pos + chunk_size`, on a char boundary.
    fn slice_end(&self) -> usize {
        let mut end = (self.pos + self.options.chunk_size).min(self.input.len());
        while !self.input.is_char_boundary(end) {
            end += 1;
        }
        end
    }

    /// Byte index just past the last break character within the lookback window.
    fn break_point(&self) -> Option<usize> {
        self.carry
            .char_indices()
            .rev()
            .take(self.options.lookback)
            .find(|(_, c)| matches!(c, '\n' | ' ' | '\t'))
            .map(|(i, c)| i + c.len_utf8())
    }

    /// Advance one slice; returns the text that became safe to tokenize, if any.
    fn step(&mut self) -> Option<String> {
        let end = self.slice_end();
        self.carry.push_str(&self.input[self.pos..end]);
        self.pos = end;
        let last = end >= self.input.len();

        match self.break_point() {
            Some(cut) => {
                let rest = self.carry.split_off(cut);
                Some(std::mem::replace(&mut self.carry, rest))
            }
            None if !last => Some(std::mem::take(&mut self.carry)),
            None => None,
        }
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Vec<Token>;

    fn next(&mut self) -> Option<Vec<Token>> {
        if self.single {
            if self.pos > 0 || self.input.is_empty() {
                return None;
            }
            self.pos = self.input.len();
            let tokens = self.tokenize(self.input);
            return (!tokens.is_empty()).then_some(tokens);
        }

        while self.pos < self.input.len() {
            if let Some(chunk) = self.step() {
                trace!(bytes = chunk.len(), offset = self.pos, "stream chunk");
                let tokens = self.tokenize(&chunk);
                if !tokens.is_empty() {
                    return Some(tokens);
                }
            }
        }

        if self.carry.is_empty() {
            return None;
        }
        let rest = std::mem::take(&mut self.carry);
        trace!(bytes = rest.len(), "stream remainder");
        Some(self.tokenize(&rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{detokenize, kinds};
    use crate::tokenizer::tokenize;

    fn joined(chunks: &[Vec<Token>]) -> String {
        chunks.iter().map(|c| detokenize(c)).collect()
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert_eq!(tokenize_stream("", "javascript", 1000).count(), 0);
        assert_eq!(tokenize_stream("", "unknown", 1000).count(), 0);
    }

    #[test]
    fn small_input_yields_single_chunk() {
        let code = "const x = 42;";
        let chunks: Vec<_> = tokenize_stream(code, "javascript", DEFAULT_CHUNK_SIZE).collect();
        assert_eq!(chunks, vec![tokenize(code, "javascript")]);
    }

    #[test]
    fn input_of_exactly_chunk_size_is_single_chunk() {
        let code = "let a = 1;";
        let chunks: Vec<_> = tokenize_stream(code, "javascript", code.len()).collect();
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn input_without_whitespace_is_passed_through_in_slices() {
        let code = "abcdefghijklmnopqrstuvwxyz0";
        let chunks: Vec<_> = tokenize_stream(code, "javascript", 10).collect();

        assert_eq!(chunks.len(), 3);
        assert_eq!(detokenize(&chunks[0]), "abcdefghij");
        assert_eq!(detokenize(&chunks[1]), "klmnopqrst");
        assert_eq!(detokenize(&chunks[2]), "uvwxyz0");
        assert_eq!(joined(&chunks), code);
    }

    #[test]
    fn cuts_after_last_whitespace() {
        let code = "function test() {\n  return 42;\n}";
        let chunks: Vec<_> = tokenize_stream(code, "javascript", 10).collect();

        assert!(chunks.len() > 1);
        assert_eq!(detokenize(&chunks[0]), "function ");
        assert_eq!(joined(&chunks), code);
    }

    #[test]
    fn remainder_is_flushed() {
        let code = "const a = 1; const b = 2; const c = 3;";
        let chunks: Vec<_> = tokenize_stream(code, "javascript", 15).collect();

        assert!(chunks.len() > 1);
        assert_eq!(joined(&chunks), code);
        let last = chunks.last().unwrap();
        assert_eq!(last.last().map(|t| t.content.as_str()), Some(";"));
    }

    #[test]
    fn lookback_limits_break_search() {
        let options = StreamOptions {
            chunk_size: 8,
            lookback: 2,
        };
        let grammar = Registry::builtin().get("javascript");
        let chunks: Vec<_> = TokenStream::new(grammar, "ab cdefgh ijklmnop", options).collect();

        // The space at index 2 is out of reach for the first slice.
        assert_eq!(detokenize(&chunks[0]), "ab cdefg");
        assert_eq!(joined(&chunks), "ab cdefgh ijklmnop");
    }

    #[test]
    fn zero_chunk_size_still_terminates() {
        let code = "let x";
        let chunks: Vec<_> = tokenize_stream(code, "javascript", 0).collect();
        assert_eq!(joined(&chunks), code);
    }

    #[test]
    fn slices_never_split_characters() {
        let code = "ααααα ββββ γγγ";
        let chunks: Vec<_> = tokenize_stream(code, "markdown", 3).collect();
        assert_eq!(joined(&chunks), code);
    }

    #[test]
    fn unknown_language_chunks_are_text() {
        let code = "one two three four";
        let chunks: Vec<_> = tokenize_stream(code, "nope", 5).collect();

        assert!(chunks.len() > 1);
        assert!(chunks.iter().flatten().all(|t| t.is(kinds::TEXT)));
        assert_eq!(joined(&chunks), code);
    }
}
