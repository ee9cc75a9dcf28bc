//! Rendering configuration for expression trees

/// Output format for a rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented, one node per line.
    #[default]
    Tree,
    /// Pretty-printed JSON (`{"type": "EXPRESSION_NODE", ...}`).
    Json,
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of spaces per nesting level (tree output only)
    pub indent_width: usize,
    /// Whether to print `start..end` after each node kind (tree output only)
    pub show_spans: bool,
    /// Output format
    pub output: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_spans: true,
            output: OutputFormat::Tree,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Show or hide node spans
    pub fn with_spans(mut self, show: bool) -> Self {
        self.show_spans = show;
        self
    }

    /// Set the output format
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.indent_width, 2);
        assert!(config.show_spans);
        assert_eq!(config.output, OutputFormat::Tree);
    }

    #[test]
    fn test_builder_methods() {
        let config = RenderConfig::new()
            .with_indent_width(4)
            .with_spans(false)
            .with_output(OutputFormat::Json);
        assert_eq!(config.indent_width, 4);
        assert!(!config.show_spans);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_with_indent_width_leaves_other_fields() {
        let config = RenderConfig::new().with_indent_width(8);
        assert!(config.show_spans);
        assert_eq!(config.output, OutputFormat::Tree);
    }
}
