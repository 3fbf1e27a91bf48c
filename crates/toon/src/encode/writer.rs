/// Accumulates output lines at a configurable indent width. The final
/// document joins lines with a single LF and no trailing newline.
pub struct LineWriter {
    lines: Vec<String>,
    indent_width: usize,
}

impl LineWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            lines: Vec::new(),
            indent_width,
        }
    }

    pub fn line(&mut self, depth: usize, content: &str) {
        let mut out = " ".repeat(depth * self.indent_width);
        out.push_str(content);
        self.lines.push(out);
    }

    pub fn into_string(self) -> String {
        self.lines.join("\n")
    }
}
