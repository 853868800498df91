//! mdtutor - render AI tutor chat messages in the terminal
//!
//! Prose is rendered with headings, lists and inline emphasis; fenced code
//! gets syntax highlighting and a copy-to-clipboard control.

mod clipboard;
mod config;
mod logging;
mod tui;

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use mdtutor_core::{parse, Role};

use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::logging::LogTarget;
use crate::tui::app::App;
use crate::tui::markdown::build_blocks;
use crate::tui::print::write_lines;
use crate::tui::themes::{Theme, ThemeMode};
use crate::tui::view::layout_message;

/// Width used for --print when it can't be detected
const FALLBACK_WIDTH: u16 = 80;

#[derive(Parser, Debug)]
#[command(name = "mdtutor")]
#[command(version, about = "Render tutor chat messages with highlighted, copyable code blocks")]
struct Args {
    /// Message file to render (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Who wrote the message; changes styling only
    #[arg(long, default_value_t = Role::Assistant)]
    role: Role,

    /// Color palette (overrides config)
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Maximum render width in columns (overrides config)
    #[arg(long)]
    width: Option<u16>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Language for fences without a tag (overrides config)
    #[arg(long)]
    default_language: Option<String>,

    /// Print the rendered message and exit
    #[arg(long, conflicts_with = "ast")]
    print: bool,

    /// Print the parsed elements as JSON and exit
    #[arg(long)]
    ast: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let interactive = !args.print && !args.ast;
    logging::init(if interactive {
        LogTarget::File
    } else {
        LogTarget::Stderr
    });

    let config = load_config(&args)?;
    let text = read_input(args.file.as_deref())?;
    let elements = parse(&text);
    tracing::info!(
        bytes = text.len(),
        elements = elements.len(),
        role = %args.role,
        "Parsed message"
    );

    if args.ast {
        let json = serde_json::to_string_pretty(&elements).context("Failed to serialize elements")?;
        println!("{}", json);
        return Ok(());
    }

    let blocks = build_blocks(&elements, args.role, &config.block_options());
    let theme = Theme::for_mode(config.theme);

    if args.print {
        let stdout = io::stdout();
        let styled = stdout.is_terminal();
        let width = config
            .wrap_width
            .or_else(|| styled.then(terminal_width).flatten())
            .unwrap_or(FALLBACK_WIDTH);
        let layout = layout_message(args.role, &blocks, &theme, width, None);
        write_lines(&mut stdout.lock(), &layout.lines, styled)
            .context("Failed to write output")?;
        return Ok(());
    }

    if !io::stdout().is_terminal() {
        bail!("The interactive viewer needs a terminal; use --print or --ast");
    }

    let mut app = App::new(
        args.role,
        blocks,
        theme,
        Box::new(SystemClipboard::new()),
        config.wrap_width,
    );
    tui::event_loop::run(&mut app)
}

/// Config file values with command-line overrides applied
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    if let Some(theme) = args.theme {
        config.theme = theme;
    }
    if let Some(language) = &args.default_language {
        config.default_language = language.clone();
    }
    if let Some(width) = args.width {
        config.wrap_width = Some(width);
    }

    Ok(config)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        bail!("No message given; pass a FILE or pipe text on stdin");
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("Failed to read message from stdin")?;
    Ok(text)
}

fn terminal_width() -> Option<u16> {
    crossterm::terminal::size().ok().map(|(width, _)| width)
}
