//! Fence segmentation
//!
//! Splits a message on the triple backtick fence. Even segments are prose,
//! odd segments are code. An unterminated fence is not repaired: whatever
//! follows the last fence is classified by parity alone.

use serde::Serialize;

/// The fence delimiter
const FENCE: &str = "```";

/// Kind of a message segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Prose,
    Code,
}

/// One contiguous run of prose or code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
    /// Language tag for code segments, as written (not normalized)
    pub language: Option<String>,
}

impl Segment {
    fn prose(raw: &str) -> Self {
        Self {
            kind: SegmentKind::Prose,
            text: trim_blank_lines(raw).to_string(),
            language: None,
        }
    }

    fn code(raw: &str) -> Self {
        let (first, rest) = match raw.split_once('\n') {
            Some((first, rest)) => (first, Some(rest)),
            None => (raw, None),
        };

        match rest {
            Some(rest) if !first.trim().is_empty() => Self {
                kind: SegmentKind::Code,
                text: trim_blank_lines(rest).to_string(),
                language: Some(first.trim().to_string()),
            },
            _ => Self {
                kind: SegmentKind::Code,
                text: trim_blank_lines(raw).to_string(),
                language: None,
            },
        }
    }
}

/// Split raw message text into ordered prose and code segments
///
/// Empty prose segments are dropped since they yield no blocks; code
/// segments are always kept, even when empty.
pub fn split_fences(text: &str) -> Vec<Segment> {
    let text = normalize_newlines(text);
    let fence_count = text.matches(FENCE).count();
    if fence_count % 2 == 1 {
        tracing::debug!(fence_count, "Unterminated code fence, classifying by parity");
    }

    text.split(FENCE)
        .enumerate()
        .filter_map(|(idx, raw)| {
            if idx % 2 == 0 {
                let segment = Segment::prose(raw);
                (!segment.text.is_empty()).then_some(segment)
            } else {
                Some(Segment::code(raw))
            }
        })
        .collect()
}

/// Convert CRLF and lone CR line endings to LF
fn normalize_newlines(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_string()
    }
}

/// Drop whitespace-only lines from both ends, keeping interior indentation
fn trim_blank_lines(text: &str) -> &str {
    let mut start = 0;
    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }

    let rest = &text[start..];
    let mut end = rest.len();
    while let Some(newline) = rest[..end].rfind('\n') {
        if !rest[newline + 1..end].trim().is_empty() {
            break;
        }
        end = newline;
    }
    if rest[..end].trim().is_empty() {
        return "";
    }

    &rest[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prose(text: &str) -> Segment {
        Segment {
            kind: SegmentKind::Prose,
            text: text.to_string(),
            language: None,
        }
    }

    fn code(text: &str, language: Option<&str>) -> Segment {
        Segment {
            kind: SegmentKind::Code,
            text: text.to_string(),
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn test_fence_with_language() {
        let segments = split_fences("a```python\nprint(1)\n```b");
        assert_eq!(
            segments,
            vec![prose("a"), code("print(1)", Some("python")), prose("b")]
        );
    }

    #[test]
    fn test_fence_without_language() {
        let segments = split_fences("```\n  indented()\n\n```");
        assert_eq!(segments, vec![code("  indented()", None)]);
    }

    #[test]
    fn test_single_line_code_segment_has_no_language() {
        let segments = split_fences("run ```ls -la``` now");
        assert_eq!(
            segments,
            vec![prose("run "), code("ls -la", None), prose(" now")]
        );
    }

    #[test]
    fn test_language_tag_is_trimmed() {
        let segments = split_fences("```  Rust  \nfn main() {}\n```");
        assert_eq!(segments, vec![code("fn main() {}", Some("Rust"))]);
    }

    #[test]
    fn test_body_blank_lines_trimmed_interior_kept() {
        let segments = split_fences("```js\n\n\nconst a = 1;\n\nconst b = 2;\n  \n```");
        assert_eq!(
            segments,
            vec![code("const a = 1;\n\nconst b = 2;", Some("js"))]
        );
    }

    #[test]
    fn test_unterminated_fence_classified_by_parity() {
        // One fence: everything after it is code
        let segments = split_fences("Look:\n```python\nprint(1)");
        assert_eq!(
            segments,
            vec![prose("Look:"), code("print(1)", Some("python"))]
        );

        // Three fences: the trailing text lands at an odd index and is code
        let segments = split_fences("```\nx\n```\nmiddle\n```\ntail text");
        assert_eq!(
            segments,
            vec![code("x", None), prose("middle"), code("tail text", None)]
        );
    }

    #[test]
    fn test_empty_code_segment_kept() {
        let segments = split_fences("a``````b");
        assert_eq!(segments, vec![prose("a"), code("", None), prose("b")]);
    }

    #[test]
    fn test_crlf_normalized() {
        let segments = split_fences("Hi\r\n```py\r\nx = 1\r\n```\r\n");
        assert_eq!(segments, vec![prose("Hi"), code("x = 1", Some("py"))]);
    }

    #[test]
    fn test_trim_blank_lines() {
        assert_eq!(trim_blank_lines(""), "");
        assert_eq!(trim_blank_lines("\n \n\t\n"), "");
        assert_eq!(trim_blank_lines("\n\n  a\n b \n\n"), "  a\n b ");
        assert_eq!(trim_blank_lines("a"), "a");
    }
}
