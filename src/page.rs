use crate::inline::italic_wrapped;
use crate::ir::{Block, ListKind};
use crate::walk::{walk, Sink};

pub fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

struct PageRenderer {
    out: Vec<String>,
}

impl Sink for PageRenderer {
    fn heading(&mut self, level: usize, text: &str) {
        let level = level.min(6);
        self.out
            .push(format!("<h{level}>{}</h{level}>", esc(text)));
    }

    fn rule(&mut self) {
        self.out.push("<hr>".to_string());
    }

    fn paragraph(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        match italic_wrapped(text) {
            Some(inner) => self.out.push(format!("<p><em>{}</em></p>", esc(inner))),
            None => self.out.push(format!("<p>{}</p>", esc(text))),
        }
    }

    fn blockquote(&mut self, text: &str) {
        self.out
            .push(format!("<blockquote><p>{}</p></blockquote>", esc(text)));
    }

    fn code(&mut self, lines: &[String]) {
        self.out
            .push(format!("<pre><code>{}</code></pre>", esc(&lines.join("\n"))));
    }

    fn list_open(&mut self, kind: ListKind, _level: usize) {
        self.out.push(
            match kind {
                ListKind::Bullet => "<ul>",
                ListKind::Numbered => "<ol>",
            }
            .to_string(),
        );
    }

    fn list_item(&mut self, _kind: ListKind, _level: usize, text: &str) {
        self.out.push(format!("<li>{}</li>", esc(text)));
    }

    fn list_close(&mut self, kind: ListKind, _level: usize) {
        self.out.push(
            match kind {
                ListKind::Bullet => "</ul>",
                ListKind::Numbered => "</ol>",
            }
            .to_string(),
        );
    }

    fn table(&mut self, rows: &[Vec<String>]) {
        if rows.is_empty() {
            return;
        }
        let mut html = String::from("<table><thead><tr>");
        for cell in &rows[0] {
            html.push_str("<th>");
            html.push_str(&esc(cell));
            html.push_str("</th>");
        }
        html.push_str("</tr></thead><tbody>");
        for row in &rows[1..] {
            html.push_str("<tr>");
            for cell in row {
                html.push_str("<td>");
                html.push_str(&esc(cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table>");
        self.out.push(html);
    }
}

/// Renders the block stream as one flat markup body. Page size, margins,
/// running header/footer and row striping come from the surrounding page
/// template, not from here.
pub fn render_page(blocks: &[Block]) -> String {
    let mut renderer = PageRenderer { out: Vec::new() };
    walk(blocks, &mut renderer);
    renderer.out.join("\n")
}
