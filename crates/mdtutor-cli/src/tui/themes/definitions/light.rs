use super::super::{Theme, ThemeMode};
use ratatui::style::Color;

/// Light theme - GitHub-like palette for light terminal backgrounds
pub fn light() -> Theme {
    Theme {
        name: "light".to_string(),
        mode: ThemeMode::Light,
        // Core colors
        bg_color: Color::Rgb(255, 255, 255),
        border_color: Color::Rgb(208, 215, 222),
        title_color: Color::Rgb(9, 105, 218),    // Blue for h1
        accent_color: Color::Rgb(130, 80, 223),  // Purple accent
        text_color: Color::Rgb(31, 35, 40),      // Near-black text
        success_color: Color::Rgb(26, 127, 55),  // Green
        dim_color: Color::Rgb(101, 109, 118),    // Muted gray
        info_color: Color::Rgb(188, 76, 0),      // Burnt orange for h3
        error_color: Color::Rgb(207, 34, 46),
        highlight_color: Color::Rgb(191, 135, 0), // Focused block border
        // Code display
        code_bg_color: Color::Rgb(246, 248, 250),
        link_color: Color::Rgb(9, 105, 218),
        // Message role colors
        user_msg_color: Color::Rgb(26, 127, 55),
        assistant_msg_color: Color::Rgb(130, 80, 223),
        // Syntax Highlighting Colors
        syntax_keyword_color: Color::Rgb(207, 34, 46),    // Red for keywords
        syntax_function_color: Color::Rgb(130, 80, 223),  // Purple for functions
        syntax_string_color: Color::Rgb(10, 48, 105),     // Navy for strings
        syntax_number_color: Color::Rgb(5, 80, 174),      // Blue for numbers
        syntax_comment_color: Color::Rgb(110, 119, 129),  // Gray for comments
        syntax_type_color: Color::Rgb(149, 56, 0),        // Brown for types
        syntax_variable_color: Color::Rgb(149, 56, 0),
        syntax_punctuation_color: Color::Rgb(31, 35, 40),
    }
}
