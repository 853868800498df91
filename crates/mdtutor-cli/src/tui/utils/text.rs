//! Text Utilities - wrapping styled spans to a width
//!
//! IMPORTANT: All width calculations use unicode display width, not byte length.
//! This correctly handles multi-byte UTF-8 characters and wide characters (CJK, emoji).

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Get display width of a string (handles unicode properly)
#[inline]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Display width of a run of spans
pub fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| display_width(&s.content)).sum()
}

/// A word (possibly spanning several styles) or a whitespace run
enum Token {
    Word(Vec<Span<'static>>),
    Space(Span<'static>),
}

fn tokenize_spans(spans: &[Span<'static>]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word: Vec<Span<'static>> = Vec::new();

    for span in spans {
        let mut piece = String::new();
        let mut piece_is_space = false;

        for ch in span.content.chars() {
            let is_space = ch.is_whitespace();
            if is_space != piece_is_space && !piece.is_empty() {
                let text = std::mem::take(&mut piece);
                if piece_is_space {
                    tokens.push(Token::Space(Span::styled(text, span.style)));
                } else {
                    word.push(Span::styled(text, span.style));
                }
            }
            if is_space && !word.is_empty() {
                tokens.push(Token::Word(std::mem::take(&mut word)));
            }
            piece_is_space = is_space;
            piece.push(ch);
        }

        if !piece.is_empty() {
            if piece_is_space {
                tokens.push(Token::Space(Span::styled(piece, span.style)));
            } else {
                word.push(Span::styled(piece, span.style));
            }
        }
    }

    if !word.is_empty() {
        tokens.push(Token::Word(word));
    }

    tokens
}

/// Wrap styled spans at word boundaries to fit within max_width
///
/// Words that continue across span boundaries (e.g. `foo**bar**`) are kept
/// together. Words longer than max_width are force-broken by character.
/// Whitespace at a wrap point is dropped.
pub fn wrap_spans(spans: &[Span<'static>], max_width: usize) -> Vec<Line<'static>> {
    if max_width == 0 {
        return vec![Line::from(spans.to_vec())];
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0usize;
    let mut pending_space: Vec<Span<'static>> = Vec::new();

    for token in tokenize_spans(spans) {
        match token {
            Token::Space(space) => {
                // Leading whitespace only survives on the first line
                if current_width > 0 || lines.is_empty() {
                    pending_space.push(space);
                }
            }
            Token::Word(word) => {
                let word_width = spans_width(&word);
                let space_width = spans_width(&pending_space);

                if current_width + space_width + word_width <= max_width {
                    current.append(&mut pending_space);
                    current.extend(word);
                    current_width += space_width + word_width;
                    continue;
                }

                pending_space.clear();
                if current_width > 0 {
                    lines.push(Line::from(std::mem::take(&mut current)));
                    current_width = 0;
                }

                if word_width <= max_width {
                    current = word;
                    current_width = word_width;
                } else {
                    let mut chunks = hard_wrap_spans(&word, max_width);
                    if let Some(last) = chunks.pop() {
                        lines.extend(chunks.into_iter().map(Line::from));
                        current_width = spans_width(&last);
                        current = last;
                    }
                }
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

/// Break spans purely by display width, keeping every character
///
/// Used for code, where indentation and spacing must survive wrapping.
pub fn hard_wrap_spans(spans: &[Span<'static>], max_width: usize) -> Vec<Vec<Span<'static>>> {
    if max_width == 0 {
        return vec![spans.to_vec()];
    }

    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0usize;

    for span in spans {
        let mut chunk = String::new();
        for c in span.content.chars() {
            let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
            if current_width + char_width > max_width && current_width > 0 {
                if !chunk.is_empty() {
                    current.push(Span::styled(std::mem::take(&mut chunk), span.style));
                }
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            chunk.push(c);
            current_width += char_width;
        }
        if !chunk.is_empty() {
            current.push(Span::styled(chunk, span.style));
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Cut `s` to at most `max_width` columns, marking the cut with `…`
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Pad spans with styled spaces out to `width`
pub fn pad_spans(mut spans: Vec<Span<'static>>, width: usize, style: Style) -> Vec<Span<'static>> {
    let used = spans_width(&spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn raw(s: &str) -> Span<'static> {
        Span::raw(s.to_string())
    }

    #[test]
    fn test_short_line_unchanged() {
        let lines = wrap_spans(&[raw("hello world")], 20);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "hello world");
    }

    #[test]
    fn test_wraps_at_word_boundary() {
        let lines = wrap_spans(&[raw("the quick brown fox")], 10);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_styles_survive_wrapping() {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let spans = vec![raw("plain "), Span::styled("bold words".to_string(), bold)];
        let lines = wrap_spans(&spans, 11);
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), "plain bold");
        assert_eq!(lines[1].spans[0].style, bold);
        assert_eq!(line_text(&lines[1]), "words");
    }

    #[test]
    fn test_word_across_spans_stays_together() {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let spans = vec![raw("aaaa foo"), Span::styled("bar".to_string(), bold)];
        let lines = wrap_spans(&spans, 7);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["aaaa", "foobar"]);
    }

    #[test]
    fn test_long_word_force_broken() {
        let lines = wrap_spans(&[raw("abcdefghij")], 4);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wide_characters_use_display_width() {
        // Each CJK character is two columns wide
        let lines = wrap_spans(&[raw("你好 世界")], 4);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["你好", "世界"]);
    }

    #[test]
    fn test_hard_wrap_keeps_indentation() {
        let lines = hard_wrap_spans(&[raw("    let x = 1;")], 8);
        let texts: Vec<String> = lines
            .iter()
            .map(|l| l.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(texts, vec!["    let ", "x = 1;"]);
    }

    #[test]
    fn test_empty_input_yields_one_line() {
        assert_eq!(wrap_spans(&[], 10).len(), 1);
        assert_eq!(hard_wrap_spans(&[], 10).len(), 1);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("python", 10), "python");
        assert_eq!(truncate_to_width("python", 6), "python");
        assert_eq!(truncate_to_width("python", 4), "pyt…");
        assert_eq!(truncate_to_width("你好世界", 5), "你好…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_pad_spans() {
        let padded = pad_spans(vec![raw("ab")], 5, Style::default());
        assert_eq!(spans_width(&padded), 5);
        let untouched = pad_spans(vec![raw("abcdef")], 5, Style::default());
        assert_eq!(spans_width(&untouched), 6);
    }
}
