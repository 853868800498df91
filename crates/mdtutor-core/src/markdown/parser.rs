//! Prose block parser
//!
//! A single forward scan over lines with two accumulation buffers: the
//! pending paragraph and the pending list. A change of line category
//! flushes them. Headings are never buffered.

use once_cell::sync::Lazy;
use regex::Regex;

use super::elements::{InlineContent, ListItem, MarkdownElement};
use super::inline::tokenize;

/// `#`, `##` or `###`, whitespace, content
static HEADING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,3})\s+(.+)$").unwrap());

/// `-` or `*`, whitespace, content
static UNORDERED_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s+(.+)$").unwrap());

/// Decimal numeral, `.`, whitespace, content
static ORDERED_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)\.\s+(.+)$").unwrap());

/// Category of a single trimmed prose line
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Heading { level: u8, content: &'a str },
    Unordered(&'a str),
    Ordered { number: u64, content: &'a str },
    Blank,
    Text(&'a str),
}

fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }

    if let Some(caps) = HEADING_REGEX.captures(line) {
        if let (Some(hashes), Some(content)) = (caps.get(1), caps.get(2)) {
            return LineKind::Heading {
                level: hashes.as_str().len() as u8,
                content: content.as_str(),
            };
        }
    }

    if let Some(content) = UNORDERED_REGEX.captures(line).and_then(|caps| caps.get(1)) {
        return LineKind::Unordered(content.as_str());
    }

    if let Some(caps) = ORDERED_REGEX.captures(line) {
        if let (Some(number), Some(content)) = (caps.get(1), caps.get(2)) {
            // Numerals that overflow are not list markers
            if let Ok(number) = number.as_str().parse::<u64>() {
                return LineKind::Ordered {
                    number,
                    content: content.as_str(),
                };
            }
        }
    }

    LineKind::Text(line)
}

/// List being accumulated
struct PendingList {
    ordered: bool,
    start: Option<u64>,
    items: Vec<ListItem>,
}

/// Scanner state: emitted elements plus the two buffers
#[derive(Default)]
struct BlockParser {
    elements: Vec<MarkdownElement>,
    paragraph: Vec<Vec<InlineContent>>,
    list: Option<PendingList>,
}

impl BlockParser {
    fn push_line(&mut self, line: &str) {
        match classify(line) {
            LineKind::Heading { level, content } => {
                self.flush();
                self.elements.push(MarkdownElement::Heading {
                    level,
                    content: tokenize(content),
                });
            }
            LineKind::Unordered(content) => self.push_item(false, None, content),
            LineKind::Ordered { number, content } => self.push_item(true, Some(number), content),
            LineKind::Blank => self.flush(),
            LineKind::Text(text) => {
                self.flush_list();
                self.paragraph.push(tokenize(text));
            }
        }
    }

    /// Append to the pending list, or start a new one when the family differs
    fn push_item(&mut self, ordered: bool, start: Option<u64>, content: &str) {
        let item = ListItem {
            content: tokenize(content),
        };

        if let Some(list) = self.list.as_mut().filter(|list| list.ordered == ordered) {
            list.items.push(item);
            return;
        }

        self.flush();
        self.list = Some(PendingList {
            ordered,
            start,
            items: vec![item],
        });
    }

    fn flush(&mut self) {
        self.flush_paragraph();
        self.flush_list();
    }

    fn flush_paragraph(&mut self) {
        if !self.paragraph.is_empty() {
            let lines = std::mem::take(&mut self.paragraph);
            self.elements.push(MarkdownElement::Paragraph { lines });
        }
    }

    fn flush_list(&mut self) {
        if let Some(list) = self.list.take() {
            if !list.items.is_empty() {
                self.elements.push(MarkdownElement::List {
                    ordered: list.ordered,
                    start: list.start,
                    items: list.items,
                });
            }
        }
    }

    fn finish(mut self) -> Vec<MarkdownElement> {
        self.flush();
        self.elements
    }
}

/// Parse one prose segment into heading, list and paragraph blocks
pub fn parse_prose(text: &str) -> Vec<MarkdownElement> {
    let mut parser = BlockParser::default();
    for line in text.lines() {
        parser.push_line(line.trim());
    }
    parser.finish()
}
