//! Prose block - headings, lists and paragraphs between code fences

use mdtutor_core::{MarkdownElement, Role};
use ratatui::text::Line;

use super::StreamBlock;
use crate::tui::markdown::render_elements;
use crate::tui::themes::Theme;

pub struct ProseBlock {
    elements: Vec<MarkdownElement>,
    role: Role,
}

impl ProseBlock {
    pub fn new(elements: Vec<MarkdownElement>, role: Role) -> Self {
        Self { elements, role }
    }
}

impl StreamBlock for ProseBlock {
    fn lines(&self, width: u16, theme: &Theme, _focused: bool) -> Vec<Line<'static>> {
        render_elements(&self.elements, width as usize, theme, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::ThemeMode;
    use mdtutor_core::parse;

    #[test]
    fn test_prose_lines_follow_elements() {
        let block = ProseBlock::new(parse("# Title\n\nsome text"), Role::Assistant);
        let theme = Theme::for_mode(ThemeMode::Dark);
        let lines = block.lines(40, &theme, false);
        // heading, separator, paragraph
        assert_eq!(lines.len(), 3);
        assert_eq!(block.lines(12, &theme, true).len(), 3);
    }
}
