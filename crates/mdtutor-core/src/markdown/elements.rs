//! Markdown element types

use serde::Serialize;

/// Block-level markdown elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkdownElement {
    /// Heading with level (1-3) and content
    Heading {
        level: u8,
        content: Vec<InlineContent>,
    },
    /// Flat list (ordered or unordered)
    ///
    /// `start` is the numeral of the first ordered item; later numerals are
    /// not kept, items render sequentially from it.
    List {
        ordered: bool,
        start: Option<u64>,
        items: Vec<ListItem>,
    },
    /// Paragraph of one or more source lines joined by soft breaks
    Paragraph { lines: Vec<Vec<InlineContent>> },
    /// Fenced code block with optional language tag as written
    CodeBlock { lang: Option<String>, code: String },
}

/// A single list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub content: Vec<InlineContent>,
}

/// Inline markdown content (text formatting)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineContent {
    /// Plain text
    Text(String),
    /// Bold text
    Bold(String),
    /// Italic text
    Italic(String),
    /// Inline code
    Code(String),
    /// Hyperlink, only ever http(s)
    Link { label: String, url: String },
}
