//! Line-oriented parse of the bounded Markdown grammar.

/// A block-level node. Built and discarded within a single render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    /// Ordered and unordered items collapse to one node; the original
    /// marker (and number) is discarded.
    ListItem { text: String },
    Blockquote { text: String },
    ThematicBreak,
    /// Pipe table: the header row supplies column names and is not
    /// rendered as a data row.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// One blank input line, preserved verbatim in the output.
    Blank,
}

/// Parse a Markdown document into blocks. Never fails: unrecognized
/// constructs become paragraphs.
pub fn parse(markdown: &str) -> Vec<Block> {
    let lines: Vec<&str> = markdown
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let mut blocks = Vec::new();
    let mut i = 0;
    let mut in_fence = false;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        // Fenced code blocks are unsupported: drop the fence lines and
        // pass the contents through as plain paragraphs.
        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            i += 1;
            continue;
        }
        if in_fence {
            if trimmed.is_empty() {
                blocks.push(Block::Blank);
            } else {
                blocks.push(Block::Paragraph {
                    text: line.to_string(),
                });
            }
            i += 1;
            continue;
        }

        if trimmed.is_empty() {
            blocks.push(Block::Blank);
        } else if let Some(rest) = line.strip_prefix("# ") {
            blocks.push(Block::Heading {
                level: 1,
                text: rest.to_string(),
            });
        } else if let Some(rest) = line.strip_prefix("## ") {
            blocks.push(Block::Heading {
                level: 2,
                text: rest.to_string(),
            });
        } else if is_thematic_break(trimmed) {
            blocks.push(Block::ThematicBreak);
        } else if trimmed.starts_with('|') {
            let start = i;
            while i < lines.len() && lines[i].trim().starts_with('|') {
                i += 1;
            }
            blocks.push(parse_table(&lines[start..i]));
            continue;
        } else if let Some(text) = list_item_text(line) {
            blocks.push(Block::ListItem { text });
        } else if let Some(rest) = trimmed.strip_prefix('>') {
            blocks.push(Block::Blockquote {
                text: rest.strip_prefix(' ').unwrap_or(rest).to_string(),
            });
        } else {
            blocks.push(Block::Paragraph {
                text: line.to_string(),
            });
        }
        i += 1;
    }

    blocks
}

/// A run of three or more hyphens alone on a line.
fn is_thematic_break(trimmed: &str) -> bool {
    trimmed.len() >= 3 && trimmed.chars().all(|c| c == '-')
}

/// Recognize `- `, `* `, `+ `, and `N. ` markers; the marker is discarded.
fn list_item_text(line: &str) -> Option<String> {
    let trimmed = line.trim_start();
    for marker in ["- ", "* ", "+ "] {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return Some(rest.to_string());
        }
    }
    // Ordered: digits followed by ". "
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0
        && let Some(rest) = trimmed[digits..].strip_prefix(". ")
    {
        return Some(rest.to_string());
    }
    None
}

/// Split a pipe-table row into trimmed cells.
fn split_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// A separator row is all `-` runs with optional `:` alignment colons.
fn is_separator_row(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells.iter().all(|cell| {
            !cell.is_empty()
                && cell.chars().all(|c| c == '-' || c == ':')
                && cell.contains('-')
        })
}

/// Parse consecutive `|`-prefixed lines. The first row is the header; an
/// alignment separator row is consumed; everything else is data. Rows
/// with mismatched column counts are kept as-is and resolved at render
/// time, never rejected.
fn parse_table(lines: &[&str]) -> Block {
    let mut rows: Vec<Vec<String>> = lines.iter().map(|line| split_row(line)).collect();
    let header = if rows.is_empty() {
        Vec::new()
    } else {
        rows.remove(0)
    };
    if rows.first().is_some_and(|row| is_separator_row(row)) {
        rows.remove(0);
    }
    Block::Table { header, rows }
}
