use crate::config::Config;
use crate::document::{self, DocElement};
use crate::ir::Block;
use crate::page::{self, esc};
use chrono::{DateTime, Local};
use indexmap::IndexMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Document,
    Both,
}

impl OutputFormat {
    pub fn html(self) -> bool {
        matches!(self, OutputFormat::Html | OutputFormat::Both)
    }

    pub fn document(self) -> bool {
        matches!(self, OutputFormat::Document | OutputFormat::Both)
    }
}

/// Both rendered views of one department's document.
#[derive(Debug, Clone)]
pub struct DepartmentExport {
    pub department: String,
    pub html: String,
    pub document: Vec<DocElement>,
}

pub fn intro_footer(config: &Config, department: &str) -> (String, String) {
    let intro = config
        .intros
        .get(department)
        .cloned()
        .unwrap_or_else(|| match department {
            "HR" => {
                "This document contains HR-related information and guidelines for company personnel."
                    .to_string()
            }
            "Engineering" => {
                "This document outlines technical specifications and engineering guidelines."
                    .to_string()
            }
            _ => format!(
                "This document contains {}-related information for company personnel.",
                department.to_lowercase()
            ),
        });
    let footer = config
        .footers
        .get(department)
        .cloned()
        .unwrap_or_else(|| match department {
            "HR" => "For further questions, please contact the Human Resources department."
                .to_string(),
            "Engineering" => "For further questions, please contact the Engineering department."
                .to_string(),
            _ => format!(
                "For further questions, please contact the {} department.",
                department
            ),
        });
    (intro, footer)
}

// The framing sentences travel as ordinary paragraph blocks; underscore
// wrapping marks them for the renderers' whole-paragraph italic rule.
fn framed(blocks: &[Block], department: &str, intro: &str, footer: &str) -> Vec<Block> {
    let mut out = Vec::with_capacity(blocks.len() + 3);
    out.push(Block::Paragraph {
        text: format!("DEPARTMENT: {}", department.to_uppercase()),
    });
    out.push(Block::Paragraph {
        text: format!("_{}_", intro),
    });
    out.extend_from_slice(blocks);
    out.push(Block::Paragraph {
        text: format!("_{}_", footer),
    });
    out
}

fn page_shell(
    config: &Config,
    user_name: &str,
    department: &str,
    date_label: &str,
    body: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="UTF-8">
<title>{company} Document</title>
<style>
@page {{
    size: letter;
    margin: 1in;
    @frame footer {{
        -pdf-frame-content: footer-content;
        bottom: 0.5in;
        margin-left: 0.5in;
        margin-right: 0.5in;
        height: 1cm;
    }}
}}
body {{ font-family: {body_font}, sans-serif; font-size: {body_size}pt; line-height: 1.5; }}
.header {{ text-align: center; margin-bottom: 24px; }}
.company {{ font-size: 14pt; font-weight: bold; }}
.info {{ font-size: 10pt; margin: 6px 0; }}
.separator {{ text-align: center; margin: 18px 0; color: #ccc; }}
p {{ text-align: justify; margin-bottom: 1em; }}
b, strong {{ font-weight: bold; }}
i, em {{ font-style: italic; }}
ul, ol {{ padding-left: 20px; }}
li {{ margin-bottom: 0.5em; }}
h1, h2, h3 {{ font-weight: bold; page-break-after: avoid; }}
h1 {{ font-size: 16pt; }}
h2 {{ font-size: 14pt; }}
h3 {{ font-size: 12pt; }}
table {{ border-collapse: collapse; width: 100%; border: 1px solid #ccc; margin: 1em 0; }}
th, td {{ padding: 8px; border: 1px solid #ccc; text-align: left; }}
th {{ background-color: #{header_fill}; font-weight: bold; }}
tr:nth-child(even) {{ background-color: #{stripe_fill}; }}
blockquote {{ margin: 1em 0; padding: 0.5em 1em; border-left: 3px solid #ccc; background-color: #f9f9f9; }}
pre {{ background-color: #f5f5f5; padding: 1em; border-radius: 4px; overflow-x: auto; }}
code {{ font-family: '{code_font}', monospace; font-size: 10pt; }}
hr {{ border: none; border-top: 1px solid #ccc; margin: 2em 0; }}
#footer-content {{ text-align: center; font-size: 9pt; font-style: italic; }}
</style>
</head>
<body>
<div class="header">
<div class="company">{company}</div>
<div class="info">{department} | {user} | {date}</div>
</div>
<div class="separator">{separator}</div>
{body}
<div id="footer-content">Generated by AI Assistant | {company}</div>
</body>
</html>
"#,
        company = esc(&config.company_name),
        body_font = document::BODY_FONT,
        body_size = document::BODY_SIZE_PT,
        header_fill = document::TABLE_HEADER_FILL,
        stripe_fill = document::TABLE_STRIPE_FILL,
        code_font = document::CODE_FONT,
        department = esc(department),
        user = esc(user_name),
        date = date_label,
        separator = document::rule_text(),
        body = body,
    )
}

fn document_header(
    config: &Config,
    user_name: &str,
    department: &str,
    date_label: &str,
) -> Vec<DocElement> {
    vec![
        DocElement::Paragraph {
            text: config.company_name.clone(),
            bold: true,
            italic: false,
            centered: true,
            size_pt: Some(14),
        },
        DocElement::Paragraph {
            text: format!("{} | {} | {}", department, user_name, date_label),
            bold: false,
            italic: false,
            centered: true,
            size_pt: Some(10),
        },
        DocElement::Rule,
    ]
}

fn document_footer(config: &Config) -> Vec<DocElement> {
    vec![
        DocElement::Rule,
        DocElement::Paragraph {
            text: format!("Generated by AI Assistant | {}", config.company_name),
            bold: false,
            italic: true,
            centered: true,
            size_pt: Some(9),
        },
    ]
}

pub fn export_department(
    blocks: &[Block],
    config: &Config,
    user_name: &str,
    department: &str,
    now: &DateTime<Local>,
) -> DepartmentExport {
    let date_label = now.format("%B %d, %Y").to_string();
    let (intro, footer) = intro_footer(config, department);
    let framed = framed(blocks, department, &intro, &footer);

    let body = page::render_page(&framed);
    let html = page_shell(config, user_name, department, &date_label, &body);

    let mut doc = document_header(config, user_name, department, &date_label);
    doc.extend(document::render_document(&framed));
    doc.extend(document_footer(config));

    DepartmentExport {
        department: department.to_string(),
        html,
        document: doc,
    }
}

/// Renders every configured department, in configured order.
pub fn export_all(
    blocks: &[Block],
    config: &Config,
    user_name: &str,
    now: &DateTime<Local>,
) -> IndexMap<String, DepartmentExport> {
    config
        .departments
        .iter()
        .map(|d| {
            (
                d.clone(),
                export_department(blocks, config, user_name, d, now),
            )
        })
        .collect()
}

/// Writes the selected artifact files and returns their paths. This is the
/// only place in the crate that touches the filesystem.
pub fn write_exports(
    dir: &Path,
    exports: &IndexMap<String, DepartmentExport>,
    user_name: &str,
    now: &DateTime<Local>,
    format: OutputFormat,
) -> io::Result<Vec<PathBuf>> {
    let ts = now.format("%Y%m%d_%H%M%S").to_string();
    let mut written = Vec::new();

    for (department, export) in exports {
        if format.html() {
            let path = dir.join(format!("{} Project_{}_{}.html", department, user_name, ts));
            fs::write(&path, &export.html)?;
            written.push(path);
        }
        if format.document() {
            let path = dir.join(format!(
                "{} Project_{}_{}.document.json",
                department, user_name, ts
            ));
            let json = serde_json::to_string_pretty(&export.document)?;
            fs::write(&path, json)?;
            written.push(path);
        }
    }

    Ok(written)
}
