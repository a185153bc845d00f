use crate::inline::clean_inline;
use crate::ir::{Block, ListKind};
use regex::Regex;
use std::sync::LazyLock;

static RE_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#+)\s*(.*)$").unwrap());
static RE_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*_]{3,}$").unwrap());
static RE_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)([*+-]|\d+\.)\s+(.+)$").unwrap());
static RE_QUOTE_MARK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s*").unwrap());

// Separator rows never reach the block stream; leading/trailing pipes
// produce empty edge cells which are dropped.
fn parse_table_row(line: &str) -> Option<Block> {
    if line.contains("---") {
        return None;
    }
    let mut cells: Vec<String> = line.split('|').map(|c| c.trim().to_string()).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    Some(Block::TableRow {
        cells: cells.iter().map(|c| clean_inline(c)).collect(),
    })
}

pub fn parse(text: &str) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    let mut in_code = false;
    let mut code_buf: Vec<String> = Vec::new();

    for raw in text.split('\n') {
        let line = raw.trim_end();

        if line.starts_with("```") {
            if in_code {
                if !code_buf.is_empty() {
                    blocks.push(Block::Code {
                        lines: std::mem::take(&mut code_buf),
                    });
                }
                in_code = false;
            } else {
                in_code = true;
            }
            continue;
        }
        if in_code {
            code_buf.push(line.to_string());
            continue;
        }

        if line.trim().is_empty() {
            blocks.push(Block::Blank);
            continue;
        }

        if let Some(caps) = RE_HEADING.captures(line) {
            blocks.push(Block::Heading {
                level: caps[1].len(),
                text: clean_inline(caps[2].trim()),
            });
            continue;
        }

        if RE_RULE.is_match(line.trim()) {
            blocks.push(Block::Rule);
            continue;
        }

        if let Some(caps) = RE_LIST.captures(line) {
            let kind = if caps[2].ends_with('.') {
                ListKind::Numbered
            } else {
                ListKind::Bullet
            };
            blocks.push(Block::ListItem {
                kind,
                level: caps[1].len() / 2,
                text: clean_inline(&caps[3]),
            });
            continue;
        }

        if line.starts_with('>') {
            let text = RE_QUOTE_MARK.replace(line, "");
            blocks.push(Block::Blockquote {
                text: clean_inline(&text),
            });
            continue;
        }

        if line.contains('|') && line.trim_start().starts_with('|') {
            if let Some(row) = parse_table_row(line) {
                blocks.push(row);
            }
            continue;
        }

        blocks.push(Block::Paragraph {
            text: clean_inline(line),
        });
    }

    // Force-close an unterminated fence
    if in_code && !code_buf.is_empty() {
        blocks.push(Block::Code { lines: code_buf });
    }

    blocks
}
