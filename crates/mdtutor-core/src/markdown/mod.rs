//! Markdown parsing for tutor messages
//!
//! A deliberately small subset: ATX headings up to depth 3, flat lists,
//! paragraphs with soft breaks, inline emphasis/code/links, and fenced code.

mod elements;
mod fence;
mod inline;
mod language;
mod parser;

pub use elements::{InlineContent, ListItem, MarkdownElement};
pub use fence::{split_fences, Segment, SegmentKind};
pub use inline::tokenize;
pub use language::{normalize_language, resolve_language, DEFAULT_LANGUAGE};
pub use parser::parse_prose;

/// Parse a whole message into elements, preserving segment order
///
/// Never fails: malformed constructs degrade to a more literal reading.
pub fn parse(text: &str) -> Vec<MarkdownElement> {
    let mut elements = Vec::new();

    for segment in split_fences(text) {
        match segment.kind {
            SegmentKind::Prose => elements.extend(parse_prose(&segment.text)),
            SegmentKind::Code => elements.push(MarkdownElement::CodeBlock {
                lang: segment.language,
                code: segment.text,
            }),
        }
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> InlineContent {
        InlineContent::Text(s.to_string())
    }

    #[test]
    fn test_prose_and_code_interleave_in_order() {
        let elements = parse("Intro\n```python\nprint(1)\n```\n# After");
        assert_eq!(
            elements,
            vec![
                MarkdownElement::Paragraph {
                    lines: vec![vec![text("Intro")]],
                },
                MarkdownElement::CodeBlock {
                    lang: Some("python".to_string()),
                    code: "print(1)".to_string(),
                },
                MarkdownElement::Heading {
                    level: 1,
                    content: vec![text("After")],
                },
            ]
        );
    }

    #[test]
    fn test_empty_message() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
    }

    #[test]
    fn test_message_starting_with_fence_has_no_leading_prose() {
        let elements = parse("```\nlet x = 1;\n```");
        assert_eq!(
            elements,
            vec![MarkdownElement::CodeBlock {
                lang: None,
                code: "let x = 1;".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        let inputs = [
            "",
            "# Title\n- a\n- b\n\n1. one\n2. two\ntext **b** *i* `c`",
            "```rust\nfn main() {}\n``` trailing ``` unterminated",
            "[x](https://a.b) [y](ftp://c) ***",
            "**\n*\n`\n[\n](\n",
        ];
        for input in inputs {
            assert_eq!(parse(input), parse(input), "input: {:?}", input);
        }
    }

    #[test]
    fn test_adversarial_input_terminates() {
        let stars = "*".repeat(50_000);
        let brackets = "[".repeat(50_000);
        let ticks = "`".repeat(50_001);
        let mixed = "**a*[b](http://".repeat(5_000);
        for input in [&stars, &brackets, &ticks, &mixed] {
            let elements = parse(input);
            assert!(!elements.is_empty());
        }
    }

    #[test]
    fn test_ast_serializes_to_json() {
        let elements = parse("## Hi\n\n- **x**");
        let json = serde_json::to_value(&elements).unwrap();
        assert_eq!(json[0]["heading"]["level"], 2);
        assert_eq!(json[1]["list"]["items"][0]["content"][0]["bold"], "x");
    }
}
