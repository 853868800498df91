//! Markdown rendering for chat messages
//!
//! Parsing lives in mdtutor-core; this module turns the parsed elements
//! into message blocks and styled terminal lines.

mod inline;
mod renderer;

use std::time::Duration;

use mdtutor_core::{MarkdownElement, Role, DEFAULT_LANGUAGE};

use crate::tui::blocks::code::COPY_FEEDBACK;
use crate::tui::blocks::{CodeBlock, MessageBlock, ProseBlock};

pub use renderer::{render_elements, render_header};

/// Settings applied to every block built from a message
#[derive(Debug, Clone)]
pub struct BlockOptions {
    pub default_language: String,
    pub copy_feedback: Duration,
}

impl Default for BlockOptions {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            copy_feedback: COPY_FEEDBACK,
        }
    }
}

/// Group parsed elements into blocks, keeping source order
///
/// Consecutive prose elements share one prose block; every fenced code
/// segment becomes its own code block with independent copy state.
pub fn build_blocks(
    elements: &[MarkdownElement],
    role: Role,
    options: &BlockOptions,
) -> Vec<MessageBlock> {
    let mut blocks = Vec::new();
    let mut prose: Vec<MarkdownElement> = Vec::new();

    for element in elements {
        match element {
            MarkdownElement::CodeBlock { lang, code } => {
                if !prose.is_empty() {
                    blocks.push(MessageBlock::Prose(ProseBlock::new(
                        std::mem::take(&mut prose),
                        role,
                    )));
                }
                let block = CodeBlock::new(lang.as_deref(), code.clone(), &options.default_language)
                    .with_feedback_window(options.copy_feedback);
                blocks.push(MessageBlock::Code(block));
            }
            other => prose.push(other.clone()),
        }
    }

    if !prose.is_empty() {
        blocks.push(MessageBlock::Prose(ProseBlock::new(prose, role)));
    }

    blocks
}
