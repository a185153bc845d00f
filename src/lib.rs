pub mod config;
pub mod document;
pub mod export;
pub mod inline;
pub mod ir;
pub mod page;
pub mod parse;
pub mod sanitize;
pub mod template;
pub mod walk;

use ir::Block;

/// Runs the cleaning pipeline on raw chat text: artifact removal, then
/// structural parsing into the neutral block stream both renderers consume.
pub fn convert(text: &str) -> Vec<Block> {
    parse::parse(&sanitize::sanitize(text))
}
