use super::super::{Theme, ThemeMode};
use ratatui::style::Color;

/// Dark theme - the default, tuned for dark terminal backgrounds
pub fn dark() -> Theme {
    Theme {
        name: "dark".to_string(),
        mode: ThemeMode::Dark,
        // Core colors
        bg_color: Color::Rgb(24, 24, 37),        // Dark blue-gray background
        border_color: Color::Rgb(88, 91, 112),   // Muted purple-gray
        title_color: Color::Rgb(139, 233, 253),  // Bright cyan for h1
        accent_color: Color::Rgb(189, 147, 249), // Purple accent
        text_color: Color::Rgb(203, 213, 225),   // Light gray text
        success_color: Color::Rgb(80, 250, 123), // Green
        dim_color: Color::Rgb(148, 163, 184),    // Dimmed text
        info_color: Color::Rgb(255, 184, 108),   // Orange for h3
        error_color: Color::Rgb(255, 85, 85),
        highlight_color: Color::Rgb(255, 203, 107), // Focused block border
        // Code display
        code_bg_color: Color::Rgb(30, 30, 45), // Slightly lighter than main bg
        link_color: Color::Rgb(139, 233, 253),
        // Message role colors
        user_msg_color: Color::Rgb(80, 250, 123),
        assistant_msg_color: Color::Rgb(189, 147, 249),
        // Syntax Highlighting Colors
        syntax_keyword_color: Color::Rgb(255, 121, 198), // Pink for keywords
        syntax_function_color: Color::Rgb(80, 250, 123), // Green for functions
        syntax_string_color: Color::Rgb(241, 250, 140),  // Light yellow for strings
        syntax_number_color: Color::Rgb(189, 147, 249),  // Purple for numbers
        syntax_comment_color: Color::Rgb(98, 114, 164),  // Blue-gray for comments
        syntax_type_color: Color::Rgb(139, 233, 253),    // Cyan for types
        syntax_variable_color: Color::Rgb(255, 184, 108), // Orange for variables
        syntax_punctuation_color: Color::Rgb(203, 213, 225),
    }
}
