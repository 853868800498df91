//! Prose element rendering to wrapped lines

use mdtutor_core::{InlineContent, ListItem, MarkdownElement, Role};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::inline::render_inline;
use crate::tui::themes::Theme;
use crate::tui::utils::text::{display_width, wrap_spans};

/// Base text style for a message role
pub fn role_style(role: Role, theme: &Theme) -> Style {
    match role {
        Role::User => Style::default().fg(theme.user_msg_color),
        Role::Assistant => Style::default().fg(theme.text_color),
    }
}

/// Header line naming the message author
pub fn render_header(role: Role, theme: &Theme) -> Line<'static> {
    let color = match role {
        Role::User => theme.user_msg_color,
        Role::Assistant => theme.assistant_msg_color,
    };
    Line::from(Span::styled(
        role.label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// Render prose elements, one blank line between blocks
///
/// Code blocks are skipped; they render through their own block.
pub fn render_elements(
    elements: &[MarkdownElement],
    width: usize,
    theme: &Theme,
    role: Role,
) -> Vec<Line<'static>> {
    let base = role_style(role, theme);
    let mut lines = Vec::new();

    for element in elements {
        let rendered = match element {
            MarkdownElement::Heading { level, content } => {
                render_heading(*level, content, width, theme)
            }
            MarkdownElement::List {
                ordered,
                start,
                items,
            } => render_list(*ordered, *start, items, width, theme, base),
            MarkdownElement::Paragraph { lines } => render_paragraph(lines, width, theme, base),
            MarkdownElement::CodeBlock { .. } => continue,
        };

        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.extend(rendered);
    }

    lines
}

fn render_heading(
    level: u8,
    content: &[InlineContent],
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut style = Style::default()
        .fg(theme.heading_color(level))
        .add_modifier(Modifier::BOLD);
    if level == 1 {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    wrap_spans(&render_inline(content, theme, style), width)
}

fn render_paragraph(
    source_lines: &[Vec<InlineContent>],
    width: usize,
    theme: &Theme,
    base: Style,
) -> Vec<Line<'static>> {
    // Soft breaks: each source line starts a new row, no blank separator
    source_lines
        .iter()
        .flat_map(|line| wrap_spans(&render_inline(line, theme, base), width))
        .collect()
}

fn render_list(
    ordered: bool,
    start: Option<u64>,
    items: &[ListItem],
    width: usize,
    theme: &Theme,
    base: Style,
) -> Vec<Line<'static>> {
    let start = start.unwrap_or(1);
    let marker_for = |index: usize| -> String {
        if ordered {
            format!("{}.", start.saturating_add(index as u64))
        } else {
            "•".to_string()
        }
    };

    // Right-align numerals so item text lines up
    let marker_width = items
        .len()
        .checked_sub(1)
        .map(|last| display_width(&marker_for(last)))
        .unwrap_or(0);
    let indent = marker_width + 1;
    let marker_style = Style::default().fg(theme.accent_color);

    let mut lines = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let spans = render_inline(&item.content, theme, base);
        let wrapped = wrap_spans(&spans, width.saturating_sub(indent).max(1));

        for (row, line) in wrapped.into_iter().enumerate() {
            let prefix = if row == 0 {
                Span::styled(
                    format!("{:>w$} ", marker_for(index), w = marker_width),
                    marker_style,
                )
            } else {
                Span::raw(" ".repeat(indent))
            };
            let mut spans = vec![prefix];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::ThemeMode;
    use mdtutor_core::parse;

    fn texts(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn render(text: &str, width: usize) -> Vec<String> {
        let theme = Theme::for_mode(ThemeMode::Dark);
        texts(&render_elements(&parse(text), width, &theme, Role::Assistant))
    }

    #[test]
    fn test_heading_has_no_marker_prefix() {
        assert_eq!(render("## Setup", 40), vec!["Setup"]);
    }

    #[test]
    fn test_heading_style_by_level() {
        let theme = Theme::for_mode(ThemeMode::Dark);
        let lines = render_elements(&parse("# One\n### Three"), 40, &theme, Role::User);
        let one = lines[0].spans[0].style;
        let three = lines[2].spans[0].style;
        assert_eq!(one.fg, Some(theme.title_color));
        assert!(one.add_modifier.contains(Modifier::UNDERLINED));
        assert_eq!(three.fg, Some(theme.info_color));
        assert!(!three.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_blank_line_between_blocks() {
        assert_eq!(
            render("# T\n- a\n- b\ntext", 40),
            vec!["T", "", "• a", "• b", "", "text"]
        );
    }

    #[test]
    fn test_ordered_list_renders_sequentially_from_start() {
        assert_eq!(render("5. five\n9. six", 40), vec!["5. five", "6. six"]);
    }

    #[test]
    fn test_ordered_markers_right_aligned() {
        let source: String = (1..=10).map(|n| format!("{}. item\n", n)).collect();
        let lines = render(&source, 40);
        assert_eq!(lines[0], " 1. item");
        assert_eq!(lines[9], "10. item");
    }

    #[test]
    fn test_list_item_wraps_under_text() {
        assert_eq!(
            render("- alpha beta gamma", 12),
            vec!["• alpha beta", "  gamma"]
        );
    }

    #[test]
    fn test_paragraph_soft_breaks_keep_rows() {
        assert_eq!(
            render("Input: 5\nOutput: 10", 80),
            vec!["Input: 5", "Output: 10"]
        );
        // each source line wraps on its own
        assert_eq!(
            render("one\ntwo three", 8),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn test_code_elements_skipped() {
        assert_eq!(render("a\n```\nx\n```", 40), vec!["a"]);
    }

    #[test]
    fn test_role_changes_styling_only() {
        let theme = Theme::for_mode(ThemeMode::Dark);
        let elements = parse("plain words");
        let user = render_elements(&elements, 40, &theme, Role::User);
        let assistant = render_elements(&elements, 40, &theme, Role::Assistant);
        assert_eq!(texts(&user), texts(&assistant));
        assert_ne!(user[0].spans[0].style, assistant[0].spans[0].style);
        assert_eq!(texts(&[render_header(Role::User, &theme)]), vec!["You"]);
    }
}
