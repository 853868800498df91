//! Message layout - header and blocks stacked into one column of lines

use mdtutor_core::Role;
use ratatui::text::Line;

use super::blocks::MessageBlock;
use super::markdown::render_header;
use super::themes::Theme;

/// Rows occupied by one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    pub start: usize,
    pub height: usize,
}

impl BlockSpan {
    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && line < self.start + self.height
    }
}

pub struct MessageLayout {
    pub lines: Vec<Line<'static>>,
    /// One entry per block, same order as the blocks
    pub spans: Vec<BlockSpan>,
}

/// Lay out a message: role header, blank line, blocks separated by blank lines
pub fn layout_message(
    role: Role,
    blocks: &[MessageBlock],
    theme: &Theme,
    width: u16,
    focus: Option<usize>,
) -> MessageLayout {
    let mut lines = vec![render_header(role, theme), Line::default()];
    let mut spans = Vec::with_capacity(blocks.len());

    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        let rendered = block.as_block().lines(width, theme, focus == Some(index));
        spans.push(BlockSpan {
            start: lines.len(),
            height: rendered.len(),
        });
        lines.extend(rendered);
    }

    MessageLayout { lines, spans }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::markdown::{build_blocks, BlockOptions};
    use crate::tui::themes::ThemeMode;
    use mdtutor_core::parse;

    #[test]
    fn test_block_spans_index_into_lines() {
        let blocks = build_blocks(
            &parse("intro\n```py\nprint(1)\n```\noutro"),
            Role::Assistant,
            &BlockOptions::default(),
        );
        let theme = Theme::for_mode(ThemeMode::Dark);
        let layout = layout_message(Role::Assistant, &blocks, &theme, 40, None);

        assert_eq!(layout.spans.len(), 3);
        assert_eq!(layout.spans[0], BlockSpan { start: 2, height: 1 });
        // blank separator, then the boxed code block: header, body, footer
        assert_eq!(layout.spans[1], BlockSpan { start: 4, height: 3 });
        assert_eq!(layout.spans[2].start, 8);
        assert_eq!(layout.lines.len(), 9);

        let header: String = layout.lines[4]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(header.starts_with("╭─ python"));
        assert!(layout.spans[1].contains(6));
        assert!(!layout.spans[1].contains(7));
    }
}
