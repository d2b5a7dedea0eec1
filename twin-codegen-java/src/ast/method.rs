//! Java method and constructor builder.

use twin_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::Annotation;

/// A method parameter, optionally annotated (`@PathVariable String id`).
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub annotation: Option<Annotation>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            annotation: None,
        }
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    fn render(&self) -> String {
        match &self.annotation {
            Some(a) => format!("{} {} {}", a.render(), self.ty, self.name),
            None => format!("{} {}", self.ty, self.name),
        }
    }
}

/// Builder for Java methods and constructors.
///
/// A method without a body renders as an abstract declaration ending in `;`,
/// which is what interface members need.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    annotations: Vec<Annotation>,
    modifiers: Vec<&'static str>,
    returns: Option<String>,
    params: Vec<Param>,
    body: Option<Vec<CodeFragment>>,
}

impl Method {
    /// A `public void` method with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            modifiers: vec!["public"],
            returns: Some("void".to_string()),
            params: Vec::new(),
            body: Some(Vec::new()),
        }
    }

    /// A `public` constructor of `class`.
    pub fn constructor(class: impl Into<String>) -> Self {
        Self {
            returns: None,
            ..Self::new(class)
        }
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Shorthand for `@Override`.
    pub fn overrides(self) -> Self {
        self.annotation(Annotation::new("Override"))
    }

    pub fn static_(mut self) -> Self {
        self.modifiers.push("static");
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Drop the body; the method becomes a declaration.
    pub fn abstract_(mut self) -> Self {
        self.body = None;
        self.modifiers.retain(|m| *m != "public");
        self
    }

    /// Add a statement or any other single line to the body.
    pub fn line(self, line: impl Into<String>) -> Self {
        self.fragment(CodeFragment::line(line))
    }

    /// Add a fragment to the body.
    pub fn fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.get_or_insert_with(Vec::new).push(fragment);
        self
    }

    /// Add `header {` ... `}` to the body.
    pub fn control(self, header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        self.fragment(CodeFragment::braced(header, body))
    }

    fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");
        let mut parts: Vec<&str> = self.modifiers.clone();
        if let Some(returns) = &self.returns {
            parts.push(returns);
        }
        let head = parts.join(" ");
        if head.is_empty() {
            format!("{}({})", self.name, params)
        } else {
            format!("{} {}({})", head, self.name, params)
        }
    }

    /// Build the method as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<_> = self
            .annotations
            .iter()
            .map(|a| CodeFragment::line(a.render()))
            .collect();
        match &self.body {
            Some(body) => fragments.push(CodeFragment::braced(self.signature(), body.clone())),
            None => fragments.push(CodeFragment::line(format!("{};", self.signature()))),
        }
        fragments
    }
}
