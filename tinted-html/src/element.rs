//! Elements
//!
//!     [Element] is the seam between the highlighter and whatever holds code on the host side
//!     (a DOM binding, a document model, a template engine). The highlighter only needs to
//!     read the text and one attribute, replace the inner HTML and add a class.
//!
//!     [CodeBlock] is the in-memory implementation, used by the CLI and by tests.

use crate::escape::escape_html;
use crate::highlighter::DEFAULT_LANGUAGE_ATTRIBUTE;
use std::borrow::Cow;

pub trait Element {
    /// Source code held by the element, unescaped.
    fn text_content(&self) -> Cow<'_, str>;

    fn attribute(&self, name: &str) -> Option<&str>;

    fn set_inner_html(&mut self, html: String);

    /// Add `class` unless already present.
    fn add_class(&mut self, class: &str);
}

/// A code block held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    text: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    inner_html: Option<String>,
}

impl CodeBlock {
    pub fn new(text: impl Into<String>) -> Self {
        CodeBlock {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the `data-language` attribute.
    pub fn with_language(self, language: impl Into<String>) -> Self {
        self.with_attribute(DEFAULT_LANGUAGE_ATTRIBUTE, language)
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Markup set by the highlighter, if it ran.
    pub fn inner_html(&self) -> Option<&str> {
        self.inner_html.as_deref()
    }

    /// Render as a `<pre>` element: classes first, then attributes in insertion order.
    /// Before highlighting the body is the escaped text.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<pre");
        if !self.classes.is_empty() {
            html.push_str(" class=\"");
            html.push_str(&escape_html(&self.classes.join(" ")));
            html.push('"');
        }
        for (name, value) in &self.attributes {
            html.push(' ');
            html.push_str(name);
            html.push_str("=\"");
            html.push_str(&escape_html(value));
            html.push('"');
        }
        html.push('>');
        match &self.inner_html {
            Some(inner) => html.push_str(inner),
            None => html.push_str(&escape_html(&self.text)),
        }
        html.push_str("</pre>");
        html
    }
}

impl Element for CodeBlock {
    fn text_content(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn set_inner_html(&mut self, html: String) {
        self.inner_html = Some(html);
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_lookup() {
        let block = CodeBlock::new("x").with_language("python").with_attribute("id", "a");
        assert_eq!(block.attribute("data-language"), Some("python"));
        assert_eq!(block.attribute("id"), Some("a"));
        assert_eq!(block.attribute("title"), None);
    }

    #[test]
    fn test_set_attribute_replaces() {
        let mut block = CodeBlock::new("x").with_language("python");
        block.set_attribute("data-language", "json");
        assert_eq!(block.attribute("data-language"), Some("json"));
        assert_eq!(block.to_html(), r#"<pre data-language="json">x</pre>"#);
    }

    #[test]
    fn test_add_class_is_idempotent() {
        let mut block = CodeBlock::new("");
        block.add_class("a");
        block.add_class("a");
        block.add_class("b");
        assert_eq!(block.classes(), ["a", "b"]);
    }

    #[test]
    fn test_unhighlighted_block_escapes_text() {
        let block = CodeBlock::new("a < b");
        assert_eq!(block.inner_html(), None);
        assert_eq!(block.to_html(), "<pre>a &lt; b</pre>");
    }
}
