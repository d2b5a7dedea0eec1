//! Code fragments and the [`Renderable`] trait, so AST nodes can be composed
//! without touching a [`CodeBuilder`](super::CodeBuilder) directly.

/// A piece of generated code, independent of indentation.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line (a newline is appended).
    Line(String),
    Blank,
    /// A header line, an indented body and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A `//` line comment.
    Comment(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: Option<String>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// A `header {` ... `}` block.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::block(format!("{} {{", header.into()), body, Some("}".to_string()))
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::Comment(s.into())
    }
}

/// Types that render to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}
