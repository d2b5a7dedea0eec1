//! Indentation-aware text buffer for generated code.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates source lines at a tracked indentation level.
///
/// ```
/// use twin_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::java();
/// builder.apply_fragment(CodeFragment::braced(
///     "class Foo",
///     vec![CodeFragment::line("int x;")],
/// ));
///
/// assert_eq!(builder.build(), "class Foo {\n    int x;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// A builder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.level {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Render a node at the current indentation.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Comment(text) => {
                self.push_line(&format!("// {text}"));
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.nested(body);
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Indent(fragments) => self.nested(fragments),
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }

    fn nested(&mut self, fragments: Vec<CodeFragment>) {
        self.level += 1;
        for fragment in fragments {
            self.apply_fragment(fragment);
        }
        self.level -= 1;
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}
