use crate::ir::{Block, ListKind};

/// Receiver for the structural events of one rendering pass. The two output
/// back ends implement this; neither owns any container state.
pub trait Sink {
    fn heading(&mut self, level: usize, text: &str);
    fn rule(&mut self);
    fn paragraph(&mut self, text: &str);
    fn blockquote(&mut self, text: &str);
    fn code(&mut self, lines: &[String]);
    fn list_open(&mut self, kind: ListKind, level: usize);
    fn list_item(&mut self, kind: ListKind, level: usize, text: &str);
    fn list_close(&mut self, kind: ListKind, level: usize);
    fn table(&mut self, rows: &[Vec<String>]);
}

fn close_list<S: Sink>(open: &mut Option<(ListKind, usize)>, sink: &mut S) {
    if let Some((kind, level)) = open.take() {
        sink.list_close(kind, level);
    }
}

fn flush_table<S: Sink>(rows: &mut Vec<Vec<String>>, sink: &mut S) {
    if !rows.is_empty() {
        sink.table(rows);
        rows.clear();
    }
}

/// Drives a sink over the block stream. All container state (the open list,
/// the accumulated table run) lives here, so both back ends see identical
/// run boundaries. A list is closed by any non-list block; a table run is
/// closed by any non-row block, including a blank line.
pub fn walk<S: Sink>(blocks: &[Block], sink: &mut S) {
    let mut open_list: Option<(ListKind, usize)> = None;
    let mut table_rows: Vec<Vec<String>> = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                close_list(&mut open_list, sink);
                flush_table(&mut table_rows, sink);
                sink.heading(*level, text);
            }
            Block::Rule => {
                close_list(&mut open_list, sink);
                flush_table(&mut table_rows, sink);
                sink.rule();
            }
            Block::Paragraph { text } => {
                close_list(&mut open_list, sink);
                flush_table(&mut table_rows, sink);
                sink.paragraph(text);
            }
            Block::Blockquote { text } => {
                close_list(&mut open_list, sink);
                flush_table(&mut table_rows, sink);
                sink.blockquote(text);
            }
            Block::Code { lines } => {
                close_list(&mut open_list, sink);
                flush_table(&mut table_rows, sink);
                sink.code(lines);
            }
            Block::ListItem { kind, level, text } => {
                flush_table(&mut table_rows, sink);
                if open_list != Some((*kind, *level)) {
                    close_list(&mut open_list, sink);
                    sink.list_open(*kind, *level);
                    open_list = Some((*kind, *level));
                }
                sink.list_item(*kind, *level, text);
            }
            Block::TableRow { cells } => {
                close_list(&mut open_list, sink);
                table_rows.push(cells.clone());
            }
            Block::Blank => {
                flush_table(&mut table_rows, sink);
            }
        }
    }

    close_list(&mut open_list, sink);
    flush_table(&mut table_rows, sink);
}
