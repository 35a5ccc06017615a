//! # unimark
//!
//! A deterministic Markdown → plain-Unicode formatter for platforms that
//! support no rich-text markup (social posts, chat messages, bios).
//!
//! ## Features
//!
//! - Bounded Markdown grammar: headings 1-2, bold spans, lists,
//!   blockquotes, thematic breaks, links, simple pipe tables
//! - Three decorator presets (`minimal`, `structured`, `social`)
//! - 19 Unicode font styles for standalone text styling
//! - Post-processing: zero-width-space paragraph preservation and
//!   optional CJK/Latin boundary spacing
//!
//! ## Quick Start
//!
//! ```
//! use unimark::{convert_markdown_to_fb, post_process, style_config};
//!
//! let config = style_config("structured").unwrap();
//! let rendered = convert_markdown_to_fb("# Title\n\nSome **bold** text.", config);
//! let text = post_process(&rendered, false);
//! assert!(text.contains("\u{3010}Title\u{3011}"));
//! ```
//!
//! ## Standalone font styling
//!
//! The font engine is usable on its own, independent of the Markdown
//! pipeline:
//!
//! ```
//! use unimark::{FontStyle, convert_to_unicode};
//!
//! assert_eq!(convert_to_unicode("abc", FontStyle::Bold), "𝐚𝐛𝐜");
//! ```
//!
//! Every stage is a pure function; identical inputs always produce
//! identical output, and no state is retained between calls.

pub mod error;
pub mod font;
pub mod markdown;
pub mod post;
pub mod style;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use font::{FontStyle, RichChar, convert_to_unicode, convert_to_unicode_rich, is_cjk};
pub use markdown::convert_markdown_to_fb;
pub use post::{insert_zwsp, pangu_spacing, post_process};
pub use style::{Heading, PRESET_NAMES, StyleConfig, style_config};
