use chrono::Local;
use clap::Parser;
use mdexport::config::Config;
use mdexport::export::{self, OutputFormat};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "mdexport",
    about = "Export AI chat Markdown into PDF-ready HTML and word-processor documents"
)]
struct Cli {
    /// Input file(s), concatenated in order
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory (default: current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Name stamped into document headers and file names
    #[arg(short, long)]
    user: Option<String>,

    /// Company name override
    #[arg(long)]
    company: Option<String>,

    /// Export only the given department(s) instead of the configured list
    #[arg(short, long)]
    department: Vec<String>,

    /// Output format: html, document, both (default: both)
    #[arg(short, long)]
    format: Option<String>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text =
        fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["mdexport.config.json", "config/mdexport.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    // CLI overrides
    if let Some(company) = cli.company {
        config.company_name = company;
    }
    if !cli.department.is_empty() {
        config.departments = cli.department.clone();
    }

    let format = match cli.format.as_deref() {
        None | Some("both") => OutputFormat::Both,
        Some("html") => OutputFormat::Html,
        Some("document") => OutputFormat::Document,
        Some(other) => die(&format!("invalid format: {}", other)),
    };

    // Collect input text
    let mut all_text = String::new();
    for fp in &cli.inputs {
        if !all_text.is_empty() {
            all_text.push('\n');
        }
        let content = fs::read_to_string(fp)
            .unwrap_or_else(|e| die(&format!("cannot read {}: {}", fp.display(), e)));
        all_text.push_str(&content);
    }

    let blocks = mdexport::convert(&all_text);

    let user_name = cli.user.unwrap_or_else(|| "User".to_string());
    let now = Local::now();
    let exports = export::export_all(&blocks, &config, &user_name, &now);

    let out_dir = cli.output.unwrap_or_else(|| PathBuf::from("."));
    let written = export::write_exports(&out_dir, &exports, &user_name, &now, format)
        .unwrap_or_else(|e| die(&format!("{}", e)));

    eprintln!(
        "exported {} department(s) -> {} file(s) in {}",
        exports.len(),
        written.len(),
        out_dir.display()
    );
}
