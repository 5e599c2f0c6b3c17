use std::fmt::Display;

/// Entry every generated `.gitignore` must contain.
pub const SENTINEL_LINE: &str = ".pre-commit-config.yaml";

/// Ordered lines of a template file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Splits on `\n` (and `\r\n`); a trailing newline does not yield an empty last line.
    pub fn parse(content: &str) -> Self {
        LineSequence {
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Appends the sentinel unless some line already equals it.
    /// Returns whether the sentinel was appended.
    pub fn ensure_sentinel(&mut self) -> bool {
        if self.contains(SENTINEL_LINE) {
            return false;
        }

        self.lines.push(SENTINEL_LINE.to_string());
        true
    }

    /// Content of the output file: lines joined by `\n` plus one trailing newline.
    pub fn render(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }
}

impl Display for LineSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
