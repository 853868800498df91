//! Message blocks - the renderable pieces of one chat message
//!
//! A message is split into prose blocks (headings, lists, paragraphs) and
//! code blocks. Each implements StreamBlock and handles its own rendering,
//! interaction and transient state. Code blocks keep their copy feedback
//! independently of each other.

pub mod code;
pub mod prose;

use crossterm::event::Event;
use ratatui::text::Line;

use crate::tui::themes::Theme;

pub use code::CodeBlock;
pub use prose::ProseBlock;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Block ignored the event, pass to parent
    Ignored,
    /// Block triggered an action
    Action(BlockEvent),
}

/// Events that blocks can emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent {
    /// Request focus on this block
    RequestFocus,
    /// Copy this block's text to the clipboard
    CopyRequested,
}

/// Core trait for all message blocks
pub trait StreamBlock {
    /// Render to styled lines for the given width
    fn lines(&self, width: u16, theme: &Theme, focused: bool) -> Vec<Line<'static>>;

    /// Handle input events
    ///
    /// `row` is the event's row relative to the block's first line.
    fn handle_event(&mut self, event: &Event, row: u16) -> EventResult {
        let _ = (event, row);
        EventResult::Ignored
    }

    /// Update transient state, returns true if needs redraw
    fn tick(&mut self) -> bool {
        false
    }
}

/// One block of a rendered message
pub enum MessageBlock {
    Prose(ProseBlock),
    Code(CodeBlock),
}

impl MessageBlock {
    pub fn as_block(&self) -> &dyn StreamBlock {
        match self {
            MessageBlock::Prose(block) => block,
            MessageBlock::Code(block) => block,
        }
    }

    pub fn as_block_mut(&mut self) -> &mut dyn StreamBlock {
        match self {
            MessageBlock::Prose(block) => block,
            MessageBlock::Code(block) => block,
        }
    }

    pub fn as_code_mut(&mut self) -> Option<&mut CodeBlock> {
        match self {
            MessageBlock::Code(block) => Some(block),
            MessageBlock::Prose(_) => None,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, MessageBlock::Code(_))
    }
}
