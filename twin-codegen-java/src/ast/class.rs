//! Java class and interface builder.

use twin_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::{Annotation, Field, Method};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
}

#[derive(Debug, Clone)]
enum Member {
    Field(Field),
    Method(Method),
    Type(JavaClass),
}

/// Builder for a Java class or interface.
///
/// Members render in insertion order. Plain fields that follow each other
/// are kept together; every other member is separated by a blank line.
#[derive(Debug, Clone)]
pub struct JavaClass {
    name: String,
    kind: ClassKind,
    modifiers: Vec<&'static str>,
    annotations: Vec<Annotation>,
    extends: Option<String>,
    implements: Vec<String>,
    members: Vec<Member>,
}

impl JavaClass {
    /// A `public class`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Class,
            modifiers: vec!["public"],
            annotations: Vec::new(),
            extends: None,
            implements: Vec::new(),
            members: Vec::new(),
        }
    }

    /// A `public interface`.
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            kind: ClassKind::Interface,
            ..Self::new(name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn static_(mut self) -> Self {
        self.modifiers.push("static");
        self
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn extends(mut self, ty: impl Into<String>) -> Self {
        self.extends = Some(ty.into());
        self
    }

    /// Add an implemented interface; for an interface, a super-interface.
    pub fn implements(mut self, ty: impl Into<String>) -> Self {
        self.implements.push(ty.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.members.push(Member::Field(field));
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.members.extend(fields.into_iter().map(Member::Field));
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.members.push(Member::Method(method));
        self
    }

    /// Add a nested type.
    pub fn inner(mut self, class: JavaClass) -> Self {
        self.members.push(Member::Type(class));
        self
    }

    fn header(&self) -> String {
        let keyword = match self.kind {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
        };
        let mut header = format!("{} {} {}", self.modifiers.join(" "), keyword, self.name);
        let supertypes = self.implements.join(", ");
        match self.kind {
            ClassKind::Class => {
                if let Some(parent) = &self.extends {
                    header.push_str(&format!(" extends {parent}"));
                }
                if !self.implements.is_empty() {
                    header.push_str(&format!(" implements {supertypes}"));
                }
            }
            ClassKind::Interface => {
                if !self.implements.is_empty() {
                    header.push_str(&format!(" extends {supertypes}"));
                }
            }
        }
        header
    }

    fn body(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        let mut previous_plain_field = false;
        for (i, member) in self.members.iter().enumerate() {
            let plain_field = matches!(member, Member::Field(f) if !f.is_annotated());
            if i > 0 && !(plain_field && previous_plain_field) {
                body.push(CodeFragment::blank());
            }
            previous_plain_field = plain_field;
            match member {
                Member::Field(field) => body.extend(field.to_fragments()),
                Member::Method(method) => body.extend(method.to_fragments()),
                Member::Type(class) => body.extend(class.to_fragments()),
            }
        }
        body
    }

    /// Build the class as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for JavaClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<_> = self
            .annotations
            .iter()
            .map(|a| CodeFragment::line(a.render()))
            .collect();
        fragments.push(CodeFragment::braced(self.header(), self.body()));
        fragments
    }
}
