//! Rendering utilities shared by blocks and views

pub mod syntax;
pub mod text;
