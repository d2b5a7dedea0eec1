//! Java field builder.

use twin_codegen::builder::{CodeFragment, Renderable};

use super::Annotation;

/// A field declaration, e.g. `private final CustomerService service;`.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub annotations: Vec<Annotation>,
    pub modifiers: Vec<&'static str>,
}

impl Field {
    /// A `private` field.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            annotations: Vec::new(),
            modifiers: vec!["private"],
        }
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn final_(mut self) -> Self {
        self.modifiers.push("final");
        self
    }

    pub fn is_annotated(&self) -> bool {
        !self.annotations.is_empty()
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<_> = self
            .annotations
            .iter()
            .map(|a| CodeFragment::line(a.render()))
            .collect();
        fragments.push(CodeFragment::line(format!(
            "{} {} {};",
            self.modifiers.join(" "),
            self.ty,
            self.name
        )));
        fragments
    }
}
