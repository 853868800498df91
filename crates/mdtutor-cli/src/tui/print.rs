//! Non-interactive output - styled lines written straight to the scrollback

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

/// Write lines to `out`, with terminal styling when `styled` is set
pub fn write_lines<W: Write>(out: &mut W, lines: &[Line<'_>], styled: bool) -> io::Result<()> {
    for line in lines {
        for span in &line.spans {
            if styled {
                write_styled(out, span)?;
            } else {
                queue!(out, Print(span.content.as_ref()))?;
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

fn write_styled<W: Write>(out: &mut W, span: &Span<'_>) -> io::Result<()> {
    let style = span.style;
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(fg.into()))?;
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(bg.into()))?;
    }
    for (modifier, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
    ] {
        if style.add_modifier.contains(modifier) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    queue!(
        out,
        Print(span.content.as_ref()),
        SetAttribute(Attribute::Reset),
        ResetColor
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    fn sample() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::raw("plain "),
                Span::styled(
                    "bold",
                    Style::default()
                        .fg(Color::Rgb(1, 2, 3))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
        ]
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        let mut out = Vec::new();
        write_lines(&mut out, &sample(), false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "plain bold\n\n");
    }

    #[test]
    fn test_styled_output_keeps_text() {
        let mut out = Vec::new();
        write_lines(&mut out, &sample(), true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("bold"));
        assert!(text.ends_with("\n\n"));
    }
}
