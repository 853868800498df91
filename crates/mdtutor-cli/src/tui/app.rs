//! Viewer state - one message, scrollable, with focusable code blocks

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use mdtutor_core::Role;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::blocks::{BlockEvent, EventResult, MessageBlock};
use super::themes::{Theme, ThemeMode};
use super::view::{layout_message, BlockSpan};
use crate::clipboard::ClipboardSink;

const MOUSE_SCROLL_LINES: usize = 3;

pub struct App {
    role: Role,
    blocks: Vec<MessageBlock>,
    theme: Theme,
    clipboard: Box<dyn ClipboardSink>,
    wrap_width: Option<u16>,
    focus: Option<usize>,
    scroll: usize,
    /// Block positions from the last draw, used for hit-testing
    layout: Vec<BlockSpan>,
    total_lines: usize,
    viewport: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(
        role: Role,
        blocks: Vec<MessageBlock>,
        theme: Theme,
        clipboard: Box<dyn ClipboardSink>,
        wrap_width: Option<u16>,
    ) -> Self {
        Self {
            role,
            blocks,
            theme,
            clipboard,
            wrap_width,
            focus: None,
            scroll: 0,
            layout: Vec::new(),
            total_lines: 0,
            viewport: Rect::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let [content, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
        self.viewport = content;

        let width = self
            .wrap_width
            .map_or(content.width, |w| w.min(content.width))
            .max(1);
        let layout = layout_message(self.role, &self.blocks, &self.theme, width, self.focus);
        self.layout = layout.spans;
        self.total_lines = layout.lines.len();
        self.scroll = self.scroll.min(self.max_scroll());

        let visible: Vec<Line<'static>> = layout
            .lines
            .into_iter()
            .skip(self.scroll)
            .take(content.height as usize)
            .collect();
        frame.render_widget(
            Paragraph::new(visible).style(Style::default().bg(self.theme.bg_color)),
            content,
        );
        frame.render_widget(Paragraph::new(self.footer_line()), footer);
    }

    fn footer_line(&self) -> Line<'static> {
        let dim = Style::default().fg(self.theme.dim_color);
        let mut spans = vec![Span::styled(
            " q quit · j/k scroll · tab focus · y copy · t theme",
            dim,
        )];
        if self.total_lines > self.viewport.height as usize {
            let percent = if self.max_scroll() == 0 {
                100
            } else {
                self.scroll * 100 / self.max_scroll()
            };
            spans.push(Span::styled(format!("  {}%", percent), dim));
        }
        Line::from(spans)
    }

    fn max_scroll(&self) -> usize {
        self.total_lines
            .saturating_sub(self.viewport.height as usize)
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll = (self.scroll + lines).min(self.max_scroll());
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let page = (self.viewport.height as usize).saturating_sub(1).max(1);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_down(page),
            KeyCode::PageUp => self.scroll_up(page),
            KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
            KeyCode::End | KeyCode::Char('G') => self.scroll = self.max_scroll(),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Char('y') | KeyCode::Char('c') => self.copy_focused(Instant::now()),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_down(MOUSE_SCROLL_LINES),
            MouseEventKind::ScrollUp => self.scroll_up(MOUSE_SCROLL_LINES),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse, Instant::now()),
            _ => {}
        }
    }

    fn handle_click(&mut self, mouse: MouseEvent, now: Instant) {
        let area = self.viewport;
        if mouse.row < area.y || mouse.row >= area.bottom() {
            return;
        }

        let line = self.scroll + (mouse.row - area.y) as usize;
        let Some(index) = self.layout.iter().position(|span| span.contains(line)) else {
            return;
        };
        let row = u16::try_from(line - self.layout[index].start).unwrap_or(u16::MAX);

        let Some(block) = self.blocks.get_mut(index) else {
            return;
        };
        let result = block.as_block_mut().handle_event(&Event::Mouse(mouse), row);
        match result {
            EventResult::Action(BlockEvent::CopyRequested) => {
                self.focus = Some(index);
                self.copy_block(index, now);
            }
            EventResult::Action(BlockEvent::RequestFocus) => self.focus = Some(index),
            EventResult::Ignored => {}
        }
    }

    fn code_indices(&self) -> Vec<usize> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| block.is_code())
            .map(|(index, _)| index)
            .collect()
    }

    fn focus_next(&mut self) {
        let codes = self.code_indices();
        let next = self
            .focus
            .and_then(|current| codes.iter().copied().find(|&i| i > current))
            .or_else(|| codes.first().copied());
        self.set_focus(next);
    }

    fn focus_prev(&mut self) {
        let codes = self.code_indices();
        let prev = self
            .focus
            .and_then(|current| codes.iter().rev().copied().find(|&i| i < current))
            .or_else(|| codes.last().copied());
        self.set_focus(prev);
    }

    fn set_focus(&mut self, focus: Option<usize>) {
        self.focus = focus;
        if let Some(index) = focus {
            self.ensure_visible(index);
        }
    }

    /// Scroll so the block is on screen, preferring its header
    fn ensure_visible(&mut self, index: usize) {
        let Some(span) = self.layout.get(index).copied() else {
            return;
        };
        let height = self.viewport.height as usize;
        let end = span.start + span.height;

        if span.start < self.scroll {
            self.scroll = span.start;
        } else if end > self.scroll + height {
            self.scroll = end.saturating_sub(height).min(span.start);
        }
    }

    fn copy_focused(&mut self, now: Instant) {
        match self.focus {
            Some(index) => self.copy_block(index, now),
            None => tracing::debug!("Copy requested with no focused code block"),
        }
    }

    fn copy_block(&mut self, index: usize, now: Instant) {
        if let Some(code) = self.blocks.get_mut(index).and_then(MessageBlock::as_code_mut) {
            code.copy_to(self.clipboard.as_mut(), now);
        }
    }

    fn toggle_theme(&mut self) {
        let mode = match self.theme.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.theme = Theme::for_mode(mode);
        tracing::debug!(theme = %self.theme.name, "Switched theme");
    }

    /// Advance block timers; returns true if a redraw is needed
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for block in &mut self.blocks {
            changed |= block.as_block_mut().tick();
        }
        changed
    }
}
