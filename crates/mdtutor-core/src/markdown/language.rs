//! Code block language tags
//!
//! Models write fence tags inconsistently (`Python`, `py`, `JS`, `c++`).
//! Tags are matched case-insensitively against known identifiers and their
//! aliases; anything unknown is passed through exactly as written.

/// Language used for highlighting when a fence has no tag
pub const DEFAULT_LANGUAGE: &str = "python";

/// Known languages: (canonical id, aliases)
const KNOWN_LANGUAGES: &[(&str, &[&str])] = &[
    ("python", &["py", "python3", "py3"]),
    ("javascript", &["js", "node", "nodejs", "jsx"]),
    ("typescript", &["ts", "tsx"]),
    ("java", &[]),
    ("c", &["h"]),
    ("cpp", &["c++", "cc", "cxx", "hpp"]),
    ("csharp", &["c#", "cs"]),
    ("go", &["golang"]),
    ("rust", &["rs"]),
    ("ruby", &["rb"]),
    ("php", &[]),
    ("kotlin", &["kt"]),
    ("swift", &[]),
    ("scala", &[]),
    ("haskell", &["hs"]),
    ("lua", &[]),
    ("r", &[]),
    ("sql", &["mysql", "postgresql", "sqlite"]),
    ("bash", &["sh", "shell", "zsh", "console", "shell-session"]),
    ("powershell", &["ps1", "pwsh"]),
    ("html", &["htm", "xhtml"]),
    ("css", &[]),
    ("scss", &["sass"]),
    ("json", &[]),
    ("yaml", &["yml"]),
    ("toml", &[]),
    ("xml", &["svg"]),
    ("markdown", &["md"]),
    ("dockerfile", &["docker"]),
    ("makefile", &["make"]),
    ("latex", &["tex"]),
    ("text", &["txt", "plaintext", "plain"]),
];

/// Normalize a fence tag for display and highlighting
///
/// Known identifiers and aliases map to their canonical lowercase id.
/// Unrecognized tags pass through verbatim.
pub fn normalize_language(tag: &str) -> String {
    let lowered = tag.trim().to_lowercase();

    KNOWN_LANGUAGES
        .iter()
        .find(|(canonical, aliases)| *canonical == lowered || aliases.contains(&lowered.as_str()))
        .map(|(canonical, _)| (*canonical).to_string())
        .unwrap_or_else(|| tag.to_string())
}

/// Resolve an optional tag, falling back to `default` when absent or blank
pub fn resolve_language(tag: Option<&str>, default: &str) -> String {
    match tag {
        Some(tag) if !tag.trim().is_empty() => normalize_language(tag),
        _ => normalize_language(default),
    }
}
