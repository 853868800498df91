//! mdtutor core - turns tutor chat text into structured markdown elements
//!
//! The pipeline is pure and synchronous: fence segmentation, then a line
//! scanning block parser, then an inline span tokenizer for every text run.
//! Nothing here touches the terminal, the clipboard or the filesystem.

pub mod markdown;
pub mod message;

pub use markdown::{
    normalize_language, parse, resolve_language, split_fences, InlineContent, ListItem,
    MarkdownElement, Segment, SegmentKind, DEFAULT_LANGUAGE,
};
pub use message::Role;
