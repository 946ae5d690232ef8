//! Indentation-aware line builder for generated Java

const INDENT: &str = "    ";

#[derive(Debug, Default)]
pub struct SourceWriter {
    output: String,
    indent: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
    }

    /// Write one line at the current indentation
    pub fn line(&mut self, s: &str) {
        if !s.is_empty() {
            self.push_indent();
            self.output.push_str(s);
        }
        self.output.push('\n');
    }

    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Write a line and indent what follows
    pub fn open(&mut self, s: &str) {
        self.line(s);
        self.indent += 1;
    }

    /// Dedent and write a closing line
    pub fn close(&mut self, s: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.line(s);
    }

    /// `} else {` style continuation at the enclosing level
    pub fn reopen(&mut self, s: &str) {
        self.close(s);
        self.indent += 1;
    }

    pub fn lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) {
        for l in lines {
            self.line(l);
        }
    }

    pub fn finish(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_blocks() {
        let mut w = SourceWriter::new();
        w.open("class A {");
        w.open("void f() {");
        w.line("g();");
        w.reopen("} else {");
        w.line("h();");
        w.close("}");
        w.blank();
        w.close("}");
        assert_eq!(
            w.finish(),
            "class A {\n    void f() {\n        g();\n    } else {\n        h();\n    }\n\n}\n"
        );
    }

    #[test]
    fn test_empty_line_has_no_trailing_whitespace() {
        let mut w = SourceWriter::new();
        w.open("{");
        w.line("");
        w.close("}");
        assert_eq!(w.finish(), "{\n\n}\n");
    }

    #[test]
    fn test_close_never_underflows() {
        let mut w = SourceWriter::new();
        w.close("}");
        assert_eq!(w.finish(), "}\n");
    }
}
