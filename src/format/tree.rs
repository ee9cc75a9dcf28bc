//! Tree rendering of expression ASTs
//!
//! Walks the AST and emits one line per node: the kind, optionally the span, and the literal text of leaves.

use cukex_syntax::ast::Node;

use super::config::RenderConfig;
use super::writer::TreeWriter;

/// Renderer that turns an AST into indented text
pub struct TreeRenderer {
    writer: TreeWriter,
}

impl TreeRenderer {
    /// Create a new renderer with the given config
    pub fn new(config: RenderConfig) -> Self {
        Self {
            writer: TreeWriter::new(config),
        }
    }

    /// Render a tree and return the text
    pub fn render(mut self, node: &Node) -> String {
        self.render_node(node);
        self.writer.finish()
    }

    fn render_node(&mut self, node: &Node) {
        let mut line = node.kind().to_string();
        if self.writer.config().show_spans {
            line.push(' ');
            line.push_str(&node.span().to_string());
        }
        if node.is_leaf() {
            line.push_str(&format!(" {:?}", node.text()));
        }
        self.writer.line(&line);

        self.writer.indent();
        for child in node.children() {
            self.render_node(child);
        }
        self.writer.dedent();
    }
}
