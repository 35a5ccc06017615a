//! Markdown → plain-Unicode rendering.
//!
//! The recognized grammar is deliberately bounded: headings levels 1-2,
//! bold spans, ordered/unordered lists, blockquotes, thematic breaks,
//! links, and simple pipe tables. Anything else degrades to literal
//! passthrough; the renderer never fails on malformed input.
//!
//! The design separates pure parsing from rendering:
//!
//! - [`parse`]: line-oriented parse of the bounded grammar into [`Block`]
//!   nodes (built and discarded within a single render call);
//! - [`render`]: blocks + a [`crate::style::StyleConfig`] → one output
//!   string, invoking the font engine for `**bold**` spans.

mod parse;
mod render;

pub(crate) use parse::{Block, parse};
pub use render::convert_markdown_to_fb;
