//! Rendering of Cucumber Expression ASTs
//!
//! Two output formats are supported (see [`OutputFormat`]):
//! - an indented tree, one node per line, for humans and snapshot tests
//! - pretty-printed JSON, for tooling

mod config;
mod tree;
mod writer;

pub use config::{OutputFormat, RenderConfig};
pub use tree::TreeRenderer;

use cukex_syntax::ast::Node;
use cukex_syntax::diagnostics::SyntaxError;
use cukex_syntax::parser;
use thiserror::Error;

/// Errors that occur while parsing and rendering an expression
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("failed to serialize AST: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render an AST as an indented tree
pub fn render_tree(node: &Node, config: &RenderConfig) -> String {
    TreeRenderer::new(config.clone()).render(node)
}

/// Render an AST as pretty-printed JSON
pub fn render_json(node: &Node) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(node)?)
}

/// Render an AST in the configured output format
pub fn render(node: &Node, config: &RenderConfig) -> Result<String, RenderError> {
    match config.output {
        OutputFormat::Tree => Ok(render_tree(node, config)),
        OutputFormat::Json => render_json(node),
    }
}

/// Parse an expression and render its AST
pub fn render_expression(expression: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let ast = parser::parse(expression)?;
    render(&ast, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_expression_tree() {
        let rendered = render_expression("{int}", &RenderConfig::default()).unwrap();
        assert_eq!(rendered, "Expression 0..5\n  Parameter 0..5\n    Text 1..4 \"int\"\n");
    }

    #[test]
    fn test_render_expression_json() {
        let config = RenderConfig::new().with_output(OutputFormat::Json);
        let rendered = render_expression("a", &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["type"], "EXPRESSION_NODE");
        assert_eq!(value["start"], 0);
        assert_eq!(value["end"], 1);
        assert_eq!(value["nodes"][0]["type"], "TEXT_NODE");
        assert_eq!(value["nodes"][0]["token"], "a");
        assert!(value.get("token").is_none());
    }

    #[test]
    fn test_render_expression_syntax_error() {
        let err = render_expression("(a", &RenderConfig::default()).unwrap_err();
        match err {
            RenderError::Syntax(e) => assert_eq!(e.span.start, 0),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }
}
