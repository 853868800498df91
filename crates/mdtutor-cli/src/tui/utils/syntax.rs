//! Syntax highlighting using syntect

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::tui::themes::Theme;

/// Global syntax set - loaded once at startup
static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// Global theme set for syntect (we'll use our own theme mapping instead)
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// syntect theme used only for scope detection; colors are remapped below
const SCOPE_THEME: &str = "base16-ocean.dark";

/// Map a normalized language id to a token syntect's default set knows
fn syntect_token(lang: &str) -> &str {
    match lang {
        "csharp" => "cs",
        "bash" => "sh",
        "javascript" => "js",
        // No TypeScript grammar in the default set; JavaScript is close enough
        "typescript" => "js",
        "text" => "txt",
        other => other,
    }
}

fn find_syntax(lang: &str) -> &'static SyntaxReference {
    let token = syntect_token(lang);
    SYNTAX_SET
        .find_syntax_by_token(token)
        .or_else(|| SYNTAX_SET.find_syntax_by_extension(token))
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text())
}

/// Highlight a code block and return styled spans for each line
///
/// `lang` should already be normalized. Unknown languages render as plain
/// text in the theme's text color.
pub fn highlight_code(code: &str, lang: &str, theme: &Theme) -> Vec<Vec<Span<'static>>> {
    let syntax = find_syntax(lang);

    let Some(syntect_theme) = THEME_SET.themes.get(SCOPE_THEME) else {
        tracing::warn!(theme = SCOPE_THEME, "syntect theme missing, rendering plain");
        return plain_lines(code, theme);
    };
    let mut highlighter = HighlightLines::new(syntax, syntect_theme);

    let mut result = Vec::new();

    for line in LinesWithEndings::from(code) {
        let ranges = match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => ranges,
            Err(e) => {
                tracing::debug!(error = %e, lang, "highlighting failed, line kept plain");
                result.push(plain_line(line, theme));
                continue;
            }
        };

        let spans: Vec<Span<'static>> = ranges
            .into_iter()
            .filter_map(|(style, text)| {
                // Remove trailing newline from text for cleaner output
                let clean_text = text.trim_end_matches(['\n', '\r']);
                if clean_text.is_empty() {
                    return None;
                }

                let color = map_syntect_color_to_theme(style.foreground, theme);
                let mut ratatui_style = Style::default().fg(color);
                if style.font_style.contains(FontStyle::BOLD) {
                    ratatui_style = ratatui_style.add_modifier(Modifier::BOLD);
                }
                if style.font_style.contains(FontStyle::ITALIC) {
                    ratatui_style = ratatui_style.add_modifier(Modifier::ITALIC);
                }

                Some(Span::styled(clean_text.to_string(), ratatui_style))
            })
            .collect();

        result.push(spans);
    }

    // Handle empty code
    if result.is_empty() {
        result.push(vec![Span::raw("")]);
    }

    result
}

fn plain_lines(code: &str, theme: &Theme) -> Vec<Vec<Span<'static>>> {
    let mut lines: Vec<Vec<Span<'static>>> =
        code.lines().map(|line| plain_line(line, theme)).collect();
    if lines.is_empty() {
        lines.push(vec![Span::raw("")]);
    }
    lines
}

/// One unhighlighted line in the theme's text color
fn plain_line(line: &str, theme: &Theme) -> Vec<Span<'static>> {
    vec![Span::styled(
        line.trim_end_matches(['\n', '\r']).to_string(),
        Style::default().fg(theme.text_color),
    )]
}

/// Map syntect's color to our theme colors based on the base16-ocean palette
/// This gives us semantic highlighting that follows the light/dark palette
fn map_syntect_color_to_theme(syntect_color: syntect::highlighting::Color, theme: &Theme) -> Color {
    let (r, g, b) = (syntect_color.r, syntect_color.g, syntect_color.b);

    match (r, g, b) {
        // Comments (gray)
        (101, 115, 126) => theme.syntax_comment_color,
        // Strings (green)
        (163, 190, 140) => theme.syntax_string_color,
        // Numbers (orange)
        (208, 135, 112) => theme.syntax_number_color,
        // Keywords (purple)
        (180, 142, 173) => theme.syntax_keyword_color,
        // Functions (blue)
        (143, 161, 179) => theme.syntax_function_color,
        // Types/Classes (yellow), support/constants (cyan)
        (235, 203, 139) | (150, 181, 180) => theme.syntax_type_color,
        // Variables (red)
        (191, 97, 106) => theme.syntax_variable_color,
        // Operators and punctuation (light gray)
        (192, 197, 206) | (167, 173, 186) => theme.syntax_punctuation_color,
        // Default foreground and anything else
        _ => theme.text_color,
    }
}
