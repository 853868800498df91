//! Terminal presentation: themes, blocks, rendering and the viewer

pub mod app;
pub mod blocks;
pub mod event_loop;
pub mod markdown;
pub mod print;
pub mod themes;
pub mod utils;
pub mod view;
