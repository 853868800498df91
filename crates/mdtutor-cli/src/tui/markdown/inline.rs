//! Inline content rendering to Ratatui Spans

use mdtutor_core::InlineContent;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::tui::themes::Theme;

/// Convert inline content to styled spans on top of `base_style`
pub fn render_inline(
    content: &[InlineContent],
    theme: &Theme,
    base_style: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(content.len());
    for item in content {
        render_inline_item(item, theme, base_style, &mut spans);
    }
    spans
}

fn render_inline_item(
    item: &InlineContent,
    theme: &Theme,
    base_style: Style,
    spans: &mut Vec<Span<'static>>,
) {
    match item {
        InlineContent::Text(text) => {
            spans.push(Span::styled(text.clone(), base_style));
        }
        InlineContent::Bold(text) => {
            spans.push(Span::styled(
                text.clone(),
                base_style.add_modifier(Modifier::BOLD),
            ));
        }
        InlineContent::Italic(text) => {
            spans.push(Span::styled(
                text.clone(),
                base_style.add_modifier(Modifier::ITALIC),
            ));
        }
        InlineContent::Code(code) => {
            let style = Style::default()
                .fg(theme.accent_color)
                .bg(theme.code_bg_color);
            spans.push(Span::styled(format!(" {} ", code), style));
        }
        InlineContent::Link { label, url } => {
            let style = base_style
                .fg(theme.link_color)
                .add_modifier(Modifier::UNDERLINED);
            spans.push(Span::styled(label.clone(), style));
            // Terminals can't be relied on for OSC 8, so the target is shown
            spans.push(Span::styled(
                format!(" ({})", url),
                Style::default().fg(theme.dim_color),
            ));
        }
    }
}
