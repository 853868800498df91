//! Code block - highlighted fenced code with a copy control
//!
//! Shows the normalized language in the header next to the copy control.
//! Copy feedback ("copied" / "copy failed") is local to each block and
//! clears itself after the feedback window; copying again restarts it.

use std::cell::Cell;
use std::time::{Duration, Instant};

use crossterm::event::{Event, MouseButton, MouseEventKind};
use mdtutor_core::resolve_language;
use once_cell::sync::OnceCell;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::{BlockEvent, EventResult, StreamBlock};
use crate::clipboard::ClipboardSink;
use crate::tui::themes::{Theme, ThemeMode};
use crate::tui::utils::syntax::highlight_code;
use crate::tui::utils::text::{display_width, hard_wrap_spans, pad_spans, truncate_to_width};

/// Default time the copy acknowledgment stays visible
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Below this width the border is dropped and code is shown bare
const MIN_BOXED_WIDTH: usize = 12;

/// State of the copy control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    fn label(&self) -> &'static str {
        match self {
            CopyStatus::Idle => "[copy]",
            CopyStatus::Copied => "✓ copied",
            CopyStatus::Failed => "✗ copy failed",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CopyFeedback {
    status: CopyStatus,
    since: Instant,
}

pub struct CodeBlock {
    code: String,
    language: String,
    feedback_window: Duration,
    feedback: Option<CopyFeedback>,
    highlighted_light: OnceCell<Vec<Vec<Span<'static>>>>,
    highlighted_dark: OnceCell<Vec<Vec<Span<'static>>>>,
    /// Whether the last render drew the header row
    boxed: Cell<bool>,
}

impl CodeBlock {
    /// Create a block from a fence's tag and body
    ///
    /// A missing tag resolves to `default_language` for highlighting.
    pub fn new(lang: Option<&str>, code: impl Into<String>, default_language: &str) -> Self {
        Self {
            code: code.into(),
            language: resolve_language(lang, default_language),
            feedback_window: COPY_FEEDBACK,
            feedback: None,
            highlighted_light: OnceCell::new(),
            highlighted_dark: OnceCell::new(),
            boxed: Cell::new(true),
        }
    }

    pub fn with_feedback_window(mut self, window: Duration) -> Self {
        self.feedback_window = window;
        self
    }

    /// Normalized language shown in the header
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn copy_status(&self) -> CopyStatus {
        self.feedback.map_or(CopyStatus::Idle, |f| f.status)
    }

    /// Copy the raw code to the clipboard, recording feedback at `now`
    ///
    /// Never fails: clipboard errors become a transient notice.
    pub fn copy_to(&mut self, clipboard: &mut dyn ClipboardSink, now: Instant) {
        let status = match clipboard.set_text(&self.code) {
            Ok(()) => {
                tracing::debug!(language = %self.language, bytes = self.code.len(), "Copied code block");
                CopyStatus::Copied
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to copy code block");
                CopyStatus::Failed
            }
        };
        self.feedback = Some(CopyFeedback { status, since: now });
    }

    /// Expire feedback older than the window; returns true if it changed
    pub fn tick_at(&mut self, now: Instant) -> bool {
        match self.feedback {
            Some(f) if now.saturating_duration_since(f.since) >= self.feedback_window => {
                self.feedback = None;
                true
            }
            _ => false,
        }
    }

    fn highlighted(&self, theme: &Theme) -> &Vec<Vec<Span<'static>>> {
        let cell = match theme.mode {
            ThemeMode::Light => &self.highlighted_light,
            ThemeMode::Dark => &self.highlighted_dark,
        };
        cell.get_or_init(|| highlight_code(&self.code, &self.language, theme))
    }

    fn header(&self, width: usize, border: Style, theme: &Theme) -> Line<'static> {
        let status = self.copy_status();
        let status_style = match status {
            CopyStatus::Idle => Style::default().fg(theme.dim_color),
            CopyStatus::Copied => Style::default()
                .fg(theme.success_color)
                .add_modifier(Modifier::BOLD),
            CopyStatus::Failed => Style::default()
                .fg(theme.error_color)
                .add_modifier(Modifier::BOLD),
        };

        // Borders and separators take 8 columns; the status wins over the language
        let status_label = truncate_to_width(status.label(), width.saturating_sub(8));
        let right = format!(" {} ─╮", status_label);
        let room = width.saturating_sub(display_width(&right) + 4);
        let left = format!("╭─ {} ", truncate_to_width(self.language(), room));
        let fill = width.saturating_sub(display_width(&left) + display_width(&right));

        let (label, rest) = left.split_at("╭─ ".len());
        Line::from(vec![
            Span::styled(label.to_string(), border),
            Span::styled(
                rest.to_string(),
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("─".repeat(fill), border),
            Span::styled(" ", border),
            Span::styled(status_label, status_style),
            Span::styled(" ─╮", border),
        ])
    }
}

impl StreamBlock for CodeBlock {
    fn lines(&self, width: u16, theme: &Theme, focused: bool) -> Vec<Line<'static>> {
        let width = width as usize;
        let code_style = Style::default().bg(theme.code_bg_color);
        let highlighted = self.highlighted(theme);

        self.boxed.set(width >= MIN_BOXED_WIDTH);
        if width < MIN_BOXED_WIDTH {
            return highlighted
                .iter()
                .flat_map(|line| hard_wrap_spans(line, width))
                .map(Line::from)
                .collect();
        }

        let border = Style::default().fg(if focused {
            theme.highlight_color
        } else {
            theme.border_color
        });
        let inner = width - 4;

        let mut lines = vec![self.header(width, border, theme)];
        for line in highlighted {
            for chunk in hard_wrap_spans(line, inner) {
                let chunk: Vec<Span<'static>> = chunk
                    .into_iter()
                    .map(|span| span.patch_style(code_style))
                    .collect();
                let mut spans = vec![Span::styled("│ ", border)];
                spans.extend(pad_spans(chunk, inner, code_style));
                spans.push(Span::styled(" │", border));
                lines.push(Line::from(spans));
            }
        }
        lines.push(Line::from(Span::styled(
            format!("╰{}╯", "─".repeat(width - 2)),
            border,
        )));

        lines
    }

    fn handle_event(&mut self, event: &Event, row: u16) -> EventResult {
        match event {
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if row == 0 && self.boxed.get() {
                    EventResult::Action(BlockEvent::CopyRequested)
                } else {
                    EventResult::Action(BlockEvent::RequestFocus)
                }
            }
            _ => EventResult::Ignored,
        }
    }

    fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }
}
