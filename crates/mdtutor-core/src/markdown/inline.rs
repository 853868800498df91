//! Inline span tokenizer
//!
//! Recognized forms, tried in this order at every position:
//! bold `**x**`, code `` `x` ``, italic `*x*`, link `[label](http(s)://url)`.
//! Bold goes before italic so `**x**` is never eaten as two italic markers.
//! The leftmost position wins, then the first form that matches there.
//!
//! Matching is a forward scan over a table of "next delimiter" positions
//! built once per line, so every match attempt is O(1) and a whole line is
//! linear in its length whatever the input looks like (long runs of `*`,
//! unclosed `[` or backticks).

use super::elements::InlineContent;

/// Next occurrence of each delimiter at or after a byte offset
struct DelimiterIndex {
    star: Vec<usize>,
    backtick: Vec<usize>,
    close_bracket: Vec<usize>,
    close_paren: Vec<usize>,
}

impl DelimiterIndex {
    fn build(bytes: &[u8]) -> Self {
        let len = bytes.len();
        let mut index = Self {
            star: vec![len; len + 1],
            backtick: vec![len; len + 1],
            close_bracket: vec![len; len + 1],
            close_paren: vec![len; len + 1],
        };

        for i in (0..len).rev() {
            let b = bytes[i];
            index.star[i] = if b == b'*' { i } else { index.star[i + 1] };
            index.backtick[i] = if b == b'`' { i } else { index.backtick[i + 1] };
            index.close_bracket[i] = if b == b']' { i } else { index.close_bracket[i + 1] };
            index.close_paren[i] = if b == b')' { i } else { index.close_paren[i + 1] };
        }

        index
    }

    /// Position of the next delimiter in `table` at or after `from`
    fn next(table: &[usize], from: usize) -> Option<usize> {
        let len = table.len() - 1;
        table.get(from).copied().filter(|&pos| pos < len)
    }
}

/// Tokenize a single line into inline spans
///
/// Spans are ordered, non-overlapping and cover the whole line. An empty
/// line yields no spans.
pub fn tokenize(line: &str) -> Vec<InlineContent> {
    let bytes = line.as_bytes();
    let index = DelimiterIndex::build(bytes);

    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match match_at(line, &index, pos) {
            Some((span, end)) => {
                if pos > plain_start {
                    spans.push(InlineContent::Text(line[plain_start..pos].to_string()));
                }
                spans.push(span);
                pos = end;
                plain_start = end;
            }
            None => pos += 1,
        }
    }

    if plain_start < line.len() {
        spans.push(InlineContent::Text(line[plain_start..].to_string()));
    }

    spans
}

/// Try every form at `pos` in priority order; returns the span and its end
///
/// All delimiters are ASCII, so every slice boundary here is a char boundary.
fn match_at(line: &str, index: &DelimiterIndex, pos: usize) -> Option<(InlineContent, usize)> {
    let bytes = line.as_bytes();

    match bytes[pos] {
        b'*' => match_bold(line, index, pos).or_else(|| match_italic(line, index, pos)),
        b'`' => {
            let close = DelimiterIndex::next(&index.backtick, pos + 1)?;
            (close > pos + 1).then(|| {
                (
                    InlineContent::Code(line[pos + 1..close].to_string()),
                    close + 1,
                )
            })
        }
        b'[' => match_link(line, index, pos),
        _ => None,
    }
}

fn match_bold(line: &str, index: &DelimiterIndex, pos: usize) -> Option<(InlineContent, usize)> {
    let bytes = line.as_bytes();
    if bytes.get(pos + 1) != Some(&b'*') {
        return None;
    }

    let close = DelimiterIndex::next(&index.star, pos + 2)?;
    if close == pos + 2 || bytes.get(close + 1) != Some(&b'*') {
        return None;
    }

    Some((InlineContent::Bold(line[pos + 2..close].to_string()), close + 2))
}

fn match_italic(line: &str, index: &DelimiterIndex, pos: usize) -> Option<(InlineContent, usize)> {
    let close = DelimiterIndex::next(&index.star, pos + 1)?;
    if close == pos + 1 {
        return None;
    }

    Some((InlineContent::Italic(line[pos + 1..close].to_string()), close + 1))
}

fn match_link(line: &str, index: &DelimiterIndex, pos: usize) -> Option<(InlineContent, usize)> {
    let bytes = line.as_bytes();

    let label_end = DelimiterIndex::next(&index.close_bracket, pos + 1)?;
    if label_end == pos + 1 || bytes.get(label_end + 1) != Some(&b'(') {
        return None;
    }

    let url_start = label_end + 2;
    let rest = &line[url_start..];
    let scheme_len = if rest.starts_with("https://") {
        "https://".len()
    } else if rest.starts_with("http://") {
        "http://".len()
    } else {
        return None;
    };

    let url_end = DelimiterIndex::next(&index.close_paren, url_start + scheme_len)?;
    if url_end == url_start + scheme_len {
        return None;
    }

    Some((
        InlineContent::Link {
            label: line[pos + 1..label_end].to_string(),
            url: line[url_start..url_end].to_string(),
        },
        url_end + 1,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> InlineContent {
        InlineContent::Text(s.to_string())
    }

    #[test]
    fn test_priority_order() {
        let spans = tokenize("**bold** and *italic* and `code`");
        assert_eq!(
            spans,
            vec![
                InlineContent::Bold("bold".to_string()),
                text(" and "),
                InlineContent::Italic("italic".to_string()),
                text(" and "),
                InlineContent::Code("code".to_string()),
            ]
        );
    }

    #[test]
    fn test_plain_line() {
        assert_eq!(tokenize("just words"), vec![text("just words")]);
    }

    #[test]
    fn test_empty_line() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_link() {
        let spans = tokenize("See [the docs](https://docs.rs/regex) now");
        assert_eq!(
            spans,
            vec![
                text("See "),
                InlineContent::Link {
                    label: "the docs".to_string(),
                    url: "https://docs.rs/regex".to_string(),
                },
                text(" now"),
            ]
        );
    }

    #[test]
    fn test_link_url_may_contain_open_paren() {
        let spans = tokenize("[wiki](https://en.wikipedia.org/wiki/Rust_(language))");
        assert_eq!(
            spans,
            vec![
                InlineContent::Link {
                    label: "wiki".to_string(),
                    url: "https://en.wikipedia.org/wiki/Rust_(language".to_string(),
                },
                text(")"),
            ]
        );
    }

    #[test]
    fn test_link_scheme_gate() {
        assert_eq!(tokenize("[click](ftp://x)"), vec![text("[click](ftp://x)")]);
        assert_eq!(
            tokenize("[a](javascript:alert(1))"),
            vec![text("[a](javascript:alert(1))")]
        );
        // Scheme alone is not a url
        assert_eq!(tokenize("[a](http://)"), vec![text("[a](http://)")]);
    }

    #[test]
    fn test_rejected_link_still_allows_later_forms() {
        let spans = tokenize("[x](ftp://y) then **z**");
        assert_eq!(
            spans,
            vec![
                text("[x](ftp://y) then "),
                InlineContent::Bold("z".to_string()),
            ]
        );
    }

    #[test]
    fn test_unmatched_markers_are_plain() {
        assert_eq!(tokenize("2 * 3 = 6"), vec![text("2 * 3 = 6")]);
        assert_eq!(tokenize("a ` b"), vec![text("a ` b")]);
        assert_eq!(tokenize("**"), vec![text("**")]);
        assert_eq!(tokenize("``"), vec![text("``")]);
        assert_eq!(tokenize("[]()"), vec![text("[]()")]);
    }

    #[test]
    fn test_code_wins_over_italic_inside_backticks() {
        let spans = tokenize("`a*b*c` and *x*");
        assert_eq!(
            spans,
            vec![
                InlineContent::Code("a*b*c".to_string()),
                text(" and "),
                InlineContent::Italic("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_leftmost_match_wins_over_priority() {
        // Italic starts before the code span, so it is taken first
        let spans = tokenize("*a `b* c`");
        assert_eq!(
            spans,
            vec![InlineContent::Italic("a `b".to_string()), text(" c`")]
        );
    }

    #[test]
    fn test_triple_star_resolves_to_bold_inside() {
        let spans = tokenize("***x***");
        assert_eq!(
            spans,
            vec![text("*"), InlineContent::Bold("x".to_string()), text("*")]
        );
    }

    #[test]
    fn test_bold_with_inner_star_falls_back_to_italic() {
        // `**a*b**`: bold needs `**` right after the content, so italic wins
        let spans = tokenize("**a*b**");
        assert_eq!(
            spans,
            vec![
                text("*"),
                InlineContent::Italic("a".to_string()),
                text("b**"),
            ]
        );
    }

    #[test]
    fn test_unicode_text_slices_cleanly() {
        let spans = tokenize("héllo **wörld** ✓");
        assert_eq!(
            spans,
            vec![
                text("héllo "),
                InlineContent::Bold("wörld".to_string()),
                text(" ✓"),
            ]
        );
    }

    #[test]
    fn test_long_star_run_is_plain() {
        let line = "*".repeat(100_000);
        let spans = tokenize(&line);
        assert_eq!(spans, vec![text(&line)]);
    }

    #[test]
    fn test_unclosed_bracket_with_many_matches() {
        let line = format!("[{}", "*a* ".repeat(20_000));
        let spans = tokenize(&line);
        assert_eq!(spans.len(), 1 + 2 * 20_000);
        assert_eq!(spans[0], text("["));
    }
}
