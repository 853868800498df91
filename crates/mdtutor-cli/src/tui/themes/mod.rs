//! Theme system for the mdtutor viewer
//!
//! Two palettes, light and dark, selected by the ambient theme mode. The
//! mode is passed down explicitly; nothing reads a global toggle.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub mod definitions;

/// Ambient light/dark selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// A complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub mode: ThemeMode,

    // Core colors
    pub bg_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    pub accent_color: Color,
    pub text_color: Color,
    pub success_color: Color,
    pub dim_color: Color,
    pub info_color: Color,
    pub error_color: Color,
    pub highlight_color: Color,

    // Code display
    pub code_bg_color: Color,
    pub link_color: Color,

    // Message role colors (text)
    pub user_msg_color: Color,
    pub assistant_msg_color: Color,

    // Syntax Highlighting Colors
    pub syntax_keyword_color: Color,
    pub syntax_function_color: Color,
    pub syntax_string_color: Color,
    pub syntax_number_color: Color,
    pub syntax_comment_color: Color,
    pub syntax_type_color: Color,
    pub syntax_variable_color: Color,
    pub syntax_punctuation_color: Color,
}

impl Theme {
    /// Built-in theme for the given mode
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => definitions::light(),
            ThemeMode::Dark => definitions::dark(),
        }
    }

    /// Heading color by level (1-3)
    pub fn heading_color(&self, level: u8) -> Color {
        match level {
            1 => self.title_color,
            2 => self.accent_color,
            _ => self.info_color,
        }
    }
}
