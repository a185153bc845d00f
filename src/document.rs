use crate::inline::italic_wrapped;
use crate::ir::{Block, ListKind};
use crate::walk::{walk, Sink};
use serde::Serialize;

pub const BODY_FONT: &str = "Calibri";
pub const BODY_SIZE_PT: u32 = 11;
pub const CODE_FONT: &str = "Courier New";
pub const CODE_SIZE_PT: u32 = 9;
pub const CODE_COLOR: &str = "333333";
pub const QUOTE_COLOR: &str = "666666";
pub const TABLE_HEADER_FILL: &str = "D9E2F3";
pub const TABLE_STRIPE_FILL: &str = "F9F9F9";
pub const RULE_WIDTH: usize = 50;

/// The word-processor target has no native rule primitive; a rule is a
/// centered run of box-drawing dashes.
pub fn rule_text() -> String {
    "\u{2500}".repeat(RULE_WIDTH)
}

pub fn heading_size_pt(level: usize) -> u32 {
    match level {
        1 => 18,
        2 => 16,
        3 => 14,
        4 => 12,
        5 => 11,
        _ => 10,
    }
}

pub fn heading_space_before_pt(level: usize) -> u32 {
    if level == 1 {
        12
    } else {
        6
    }
}

/// Left indent for a nested list item, in inches. Top-level items keep the
/// style's own indentation.
pub fn list_indent_in(level: usize) -> f64 {
    if level == 0 {
        0.0
    } else {
        0.5 * (level + 1) as f64
    }
}

/// One styled element of the word-processor document tree. The stream is
/// ordered and consumable by a document writer; no file I/O happens here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocElement {
    Heading {
        level: usize,
        size_pt: u32,
        space_before_pt: u32,
        text: String,
    },
    Paragraph {
        text: String,
        bold: bool,
        italic: bool,
        centered: bool,
        size_pt: Option<u32>,
    },
    ListItem {
        numbered: bool,
        level: usize,
        text: String,
    },
    Blockquote {
        text: String,
    },
    Code {
        text: String,
    },
    Rule,
    Table {
        rows: Vec<Vec<String>>,
    },
}

impl DocElement {
    pub fn plain(text: impl Into<String>) -> DocElement {
        DocElement::Paragraph {
            text: text.into(),
            bold: false,
            italic: false,
            centered: false,
            size_pt: None,
        }
    }
}

struct DocRenderer {
    out: Vec<DocElement>,
}

impl Sink for DocRenderer {
    fn heading(&mut self, level: usize, text: &str) {
        self.out.push(DocElement::Heading {
            level: level.min(6),
            size_pt: heading_size_pt(level),
            space_before_pt: heading_space_before_pt(level),
            text: text.trim().to_string(),
        });
    }

    fn rule(&mut self) {
        self.out.push(DocElement::Rule);
    }

    fn paragraph(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        let (text, italic) = match italic_wrapped(trimmed) {
            Some(inner) => (inner.to_string(), true),
            None => (trimmed.to_string(), false),
        };
        self.out.push(DocElement::Paragraph {
            text,
            bold: false,
            italic,
            centered: false,
            size_pt: None,
        });
    }

    fn blockquote(&mut self, text: &str) {
        self.out.push(DocElement::Blockquote {
            text: text.trim().to_string(),
        });
    }

    fn code(&mut self, lines: &[String]) {
        self.out.push(DocElement::Code {
            text: lines.join("\n"),
        });
    }

    // Items carry their own style and indentation, so list containers have
    // no element of their own; the transitions still fence off table runs.
    fn list_open(&mut self, _kind: ListKind, _level: usize) {}

    fn list_item(&mut self, kind: ListKind, level: usize, text: &str) {
        self.out.push(DocElement::ListItem {
            numbered: kind == ListKind::Numbered,
            level,
            text: text.trim().to_string(),
        });
    }

    fn list_close(&mut self, _kind: ListKind, _level: usize) {}

    fn table(&mut self, rows: &[Vec<String>]) {
        if rows.is_empty() || rows[0].is_empty() {
            return;
        }
        self.out.push(DocElement::Table {
            rows: rows.to_vec(),
        });
    }
}

/// Renders the block stream as an ordered sequence of styled elements.
/// Mirrors the page renderer's run boundaries exactly; only the emitted
/// primitives differ.
pub fn render_document(blocks: &[Block]) -> Vec<DocElement> {
    let mut renderer = DocRenderer { out: Vec::new() };
    walk(blocks, &mut renderer);
    renderer.out
}
