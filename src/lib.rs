//! # abidoc
//!
//! Renders smart-contract ABI metadata (events, functions, state variables,
//! and custom errors) from solc AST or JSON ABI output into documentation.

pub mod config;
pub mod parser;
pub mod renderer;

#[cfg(test)]
mod tests;

pub use config::*;
pub use parser::*;
pub use renderer::*;

/// Parses compiler JSON and renders every contract it contains.
///
/// `fallback_name` names the contract of a bare ABI array.
pub fn render_source(
    json: &str,
    fallback_name: Option<&str>,
    context: &RenderContext,
    format: OutputFormat,
) -> Result<String, ParseError> {
    let doc_set = parse_source(json, fallback_name)?;
    let tree = DocSetRenderer.render(&doc_set, context);
    Ok(render_tree(&tree, format)?)
}

pub fn parse_source(json: &str, fallback_name: Option<&str>) -> Result<DocSet, ParseError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let mut parser = AstParser::new(&value);
    if let Some(name) = fallback_name {
        parser = parser.with_fallback_name(name);
    }
    parser.parse()
}
