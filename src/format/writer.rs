//! Output writer with indentation tracking

use super::config::RenderConfig;

/// Writer that tracks nesting depth and builds the rendered tree
pub struct TreeWriter {
    /// The output buffer
    output: String,
    /// Current nesting level
    indent_level: usize,
    /// Configuration
    config: RenderConfig,
}

impl TreeWriter {
    /// Create a new tree writer with the given config
    pub fn new(config: RenderConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
        }
    }

    /// Get the rendered output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase nesting level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease nesting level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write one indented line
    pub fn line(&mut self, s: &str) {
        let indent = " ".repeat(self.indent_level * self.config.indent_width);
        self.output.push_str(&indent);
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Get the configuration
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_writer() -> TreeWriter {
        TreeWriter::new(RenderConfig::default())
    }

    #[test]
    fn test_new_writer_empty_output() {
        assert_eq!(default_writer().finish(), "");
    }

    #[test]
    fn test_line_at_top_level() {
        let mut writer = default_writer();
        writer.line("Expression");
        assert_eq!(writer.finish(), "Expression\n");
    }

    #[test]
    fn test_indent_and_dedent() {
        let mut writer = TreeWriter::new(RenderConfig::new().with_indent_width(3));
        writer.line("a");
        writer.indent();
        writer.line("b");
        writer.indent();
        writer.line("c");
        writer.dedent();
        writer.dedent();
        writer.line("d");
        assert_eq!(writer.finish(), "a\n   b\n      c\nd\n");
    }

    #[test]
    fn test_dedent_at_zero_stays_zero() {
        let mut writer = default_writer();
        writer.dedent();
        writer.line("x");
        assert_eq!(writer.finish(), "x\n");
    }
}
