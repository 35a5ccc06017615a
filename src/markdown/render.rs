//! Block + preset → plain-Unicode text.
//!
//! Pure string accumulation, no I/O. Inline handling runs in a fixed
//! order (inline code stripped, links expanded, bold spans substituted)
//! so identical input always yields identical output.

use crate::font::{FontStyle, convert_to_unicode};
use crate::markdown::{Block, parse};
use crate::style::StyleConfig;

/// Render a constrained Markdown document to plain Unicode text using the
/// given preset.
///
/// Blank lines are preserved one-for-one (the post-processor later makes
/// them survive paste targets; see [`crate::post::insert_zwsp`]). This
/// function never fails: unsupported or malformed constructs degrade to
/// literal passthrough.
///
/// # Examples
///
/// ```
/// use unimark::{convert_markdown_to_fb, style_config};
///
/// let config = style_config("structured").unwrap();
/// let out = convert_markdown_to_fb("# Title", config);
/// assert_eq!(out, "\u{3010}Title\u{3011}");
/// ```
pub fn convert_markdown_to_fb(markdown: &str, config: &StyleConfig) -> String {
    let mut lines: Vec<String> = Vec::new();

    for block in parse(markdown) {
        match block {
            Block::Heading { level, text } => {
                let text = render_inline(&text, config.bold_font_style);
                let decor = if level == 1 { &config.h1 } else { &config.h2 };
                lines.push(decor.apply(&text));
            }
            Block::Paragraph { text } => {
                lines.push(render_inline(&text, config.bold_font_style));
            }
            Block::ListItem { text } => {
                let text = render_inline(&text, config.bold_font_style);
                lines.push(format!("{} {}", config.list_marker, text));
            }
            Block::Blockquote { text } => {
                let text = render_inline(&text, config.bold_font_style);
                lines.push(format!("{}{}", config.blockquote_marker, text));
            }
            Block::ThematicBreak => lines.push(config.hr.to_string()),
            Block::Table { header, rows } => {
                render_table(&header, &rows, config, &mut lines);
            }
            Block::Blank => lines.push(String::new()),
        }
    }

    lines.join("\n")
}

/// Each row's first column becomes a list item; every further column gets
/// its own `"　{header}: {value}"` line (ideographic-space indent). Rows
/// with more cells than headers fall back to an empty column name.
fn render_table(
    header: &[String],
    rows: &[Vec<String>],
    config: &StyleConfig,
    lines: &mut Vec<String>,
) {
    for row in rows {
        let Some(first) = row.first() else {
            continue;
        };
        let first = render_inline(first, config.bold_font_style);
        lines.push(format!("{} {}", config.list_marker, first));
        for (index, cell) in row.iter().enumerate().skip(1) {
            let name = header.get(index).map(String::as_str).unwrap_or("");
            let value = render_inline(cell, config.bold_font_style);
            lines.push(format!("\u{3000}{name}: {value}"));
        }
    }
}

/// Inline pass over one block's text: strip inline-code backticks, expand
/// links, substitute bold spans.
fn render_inline(text: &str, bold_style: FontStyle) -> String {
    let stripped = strip_inline_code(text);
    let linked = expand_links(&stripped);
    convert_bold(&linked, bold_style)
}

/// Inline code is unsupported; drop the backticks and keep the contents.
fn strip_inline_code(text: &str) -> String {
    if !text.contains('`') {
        return text.to_string();
    }
    text.chars().filter(|&c| c != '`').collect()
}

/// Expand `[text](url)` (and `![alt](url)` images, degraded the same way)
/// to `text (url)`. Anything that does not complete the pattern stays
/// literal.
fn expand_links(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        // An image marker degrades to its link form.
        let literal_end = if rest[..open].ends_with('!') {
            open - 1
        } else {
            open
        };

        let Some((label, url, after)) = match_link(&rest[open..]) else {
            result.push_str(&rest[..open + 1]);
            rest = &rest[open + 1..];
            continue;
        };

        result.push_str(&rest[..literal_end]);
        result.push_str(label);
        result.push_str(" (");
        result.push_str(url);
        result.push(')');
        rest = after;
    }

    result.push_str(rest);
    result
}

/// Match `[label](url)` at the start of `s`; returns (label, url, rest).
fn match_link(s: &str) -> Option<(&str, &str, &str)> {
    let close = s.find(']')?;
    let label = &s[1..close];
    let after_close = &s[close + 1..];
    let inner = after_close.strip_prefix('(')?;
    let paren = inner.find(')')?;
    Some((label, &inner[..paren], &inner[paren + 1..]))
}

/// Replace each terminated `**span**` with its styled substitution. An
/// unterminated opener stays literal.
fn convert_bold(text: &str, style: FontStyle) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        result.push_str(&rest[..open]);
        result.push_str(&convert_to_unicode(&after_open[..close], style));
        rest = &after_open[close + 2..];
    }

    result.push_str(rest);
    result
}
