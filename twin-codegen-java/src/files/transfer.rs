use std::path::PathBuf;

use twin_codegen::builder::{CodeFragment, TypeMapper};
use twin_core::{GeneratedFile, capitalize};
use twin_model::{
    Assignment, CollectionKind, CollectionType, Expr, GeneratedClass, NullPolicy, TypeName,
};

use super::{known, source_path};
use crate::{
    Annotation, Field, JavaClass, JavaFile, JavaImports, JavaTypeMapper, Method, Param,
    ast::string_literal, getter_name,
};

/// The transfer class: Lombok getters and builder, one private field per
/// transfer field, and the `fromDomain` / `toDomain` conversions.
pub struct TransferFile<'a> {
    class: &'a GeneratedClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    FromDomain,
    ToDomain,
}

impl<'a> TransferFile<'a> {
    pub fn new(class: &'a GeneratedClass) -> Self {
        Self { class }
    }

    fn imports(&self) -> JavaImports {
        let mut imports = JavaImports::new(self.class.name.namespace());
        imports.declare(self.class.name.name());
        for name in [
            known::GETTER,
            known::BUILDER,
            known::JSON_IDENTITY_INFO,
            known::OBJECT_ID_GENERATORS,
        ] {
            imports.register(&TypeName::parse(name));
        }
        imports.register(&self.class.domain);
        for name in self.class.referenced_types() {
            imports.register(name);
        }
        if self.any_expr(|e| matches!(e, Expr::Each { .. })) {
            imports.register(&TypeName::parse(known::COLLECTORS));
        }
        if self.any_expr(|e| matches!(e, Expr::EachArray { .. })) {
            imports.register(&TypeName::parse(known::ARRAYS));
        }
        imports
    }

    fn any_expr(&self, predicate: impl Fn(&Expr) -> bool) -> bool {
        self.class
            .from_domain
            .iter()
            .chain(&self.class.to_domain)
            .any(|a| predicate(&a.expr))
    }

    fn class_decl(&self, imports: &JavaImports) -> JavaClass {
        let mapper = JavaTypeMapper::new(imports);
        let spell = |qualified: &str| imports.spell(&TypeName::parse(qualified));

        let identity = Annotation::new(spell(known::JSON_IDENTITY_INFO))
            .member(
                "generator",
                format!("{}.UUIDGenerator.class", spell(known::OBJECT_ID_GENERATORS)),
            )
            .member("property", string_literal("@id"));

        let fields = self
            .class
            .fields
            .iter()
            .map(|f| Field::new(&f.name, mapper.render_type(&f.ty)));

        let steps = Steps {
            class: self.class,
            imports,
        };

        JavaClass::new(self.class.name.name())
            .annotation(Annotation::new(spell(known::GETTER)))
            .annotation(Annotation::new(spell(known::BUILDER)))
            .annotation(identity)
            .fields(fields)
            .method(steps.from_domain())
            .method(steps.to_domain())
    }
}

impl GeneratedFile for TransferFile<'_> {
    fn path(&self) -> PathBuf {
        source_path(&self.class.name)
    }

    fn render(&self) -> String {
        let imports = self.imports();
        JavaFile::new(&imports)
            .add(self.class_decl(&imports))
            .render()
    }
}

/// Builds the two conversion methods from the class's assignments.
struct Steps<'a> {
    class: &'a GeneratedClass,
    imports: &'a JavaImports,
}

impl Steps<'_> {
    fn from_domain(&self) -> Method {
        let transfer = self.imports.spell(&self.class.name);
        let domain = self.imports.spell(&self.class.domain);
        Method::new("fromDomain")
            .static_()
            .returns(&transfer)
            .param(Param::new("domain", domain))
            .control("if (domain == null)", vec![CodeFragment::line("return null;")])
            .line(format!("return {transfer}.builder()"))
            .fragment(self.chain(&self.class.from_domain, Direction::FromDomain))
    }

    fn to_domain(&self) -> Method {
        let domain = self.imports.spell(&self.class.domain);
        Method::new("toDomain")
            .returns(&domain)
            .line(format!("return {domain}.builder()"))
            .fragment(self.chain(&self.class.to_domain, Direction::ToDomain))
    }

    /// `.field(expr)` lines plus `.build();`, indented as a continuation.
    fn chain(&self, assignments: &[Assignment], direction: Direction) -> CodeFragment {
        let mut lines: Vec<_> = assignments
            .iter()
            .map(|a| self.step(a, direction))
            .collect();
        lines.push(CodeFragment::line(".build();"));
        CodeFragment::indent(vec![CodeFragment::indent(lines)])
    }

    fn step(&self, assignment: &Assignment, direction: Direction) -> CodeFragment {
        let source = self.source(&assignment.field, direction);
        let value = match &assignment.expr {
            Expr::Read => source,
            Expr::Stringify => format!("{source} != null ? {source}.toString() : null"),
            Expr::Nested { transfer, .. } => match direction {
                Direction::FromDomain => format!(
                    "{source} != null ? {}.fromDomain({source}) : null",
                    self.imports.spell(transfer)
                ),
                Direction::ToDomain => format!("{source} != null ? {source}.toDomain() : null"),
            },
            Expr::Each {
                transfer,
                collection,
                on_null,
                ..
            } => {
                let collector = self.collector(collection);
                let otherwise = match on_null {
                    NullPolicy::Propagate => "null".to_string(),
                    NullPolicy::EmptyCollection => {
                        format!("new {}<>()", self.imports.spell(&collection.implementation))
                    }
                };
                format!(
                    "{source} != null ? {source}.stream().map({}).collect({collector}) : {otherwise}",
                    self.element_conversion(transfer, direction)
                )
            }
            Expr::EachArray { domain, transfer } => {
                let target = match direction {
                    Direction::FromDomain => transfer,
                    Direction::ToDomain => domain,
                };
                format!(
                    "{source} != null ? {}.stream({source}).map({}).toArray({}[]::new) : null",
                    self.spell(known::ARRAYS),
                    self.element_conversion(transfer, direction),
                    self.imports.spell(target)
                )
            }
            Expr::Unsupported { reason } => {
                return CodeFragment::comment(format!("{}: {}", assignment.field, reason));
            }
        };
        CodeFragment::line(format!(".{}({})", assignment.field, value))
    }

    /// The value read from the other side of the conversion.
    fn source(&self, field: &str, direction: Direction) -> String {
        match direction {
            Direction::FromDomain => {
                let getter = match self.class.field(field) {
                    Some(f) => getter_name(field, &f.ty),
                    None => format!("get{}", capitalize(field)),
                };
                format!("domain.{getter}()")
            }
            Direction::ToDomain => format!("this.{field}"),
        }
    }

    /// Per-element mapping; null elements stay null in both directions.
    fn element_conversion(&self, transfer: &TypeName, direction: Direction) -> String {
        match direction {
            Direction::FromDomain => format!("{}::fromDomain", self.imports.spell(transfer)),
            Direction::ToDomain => "item -> item != null ? item.toDomain() : null".to_string(),
        }
    }

    fn collector(&self, collection: &CollectionType) -> String {
        let collectors = self.spell(known::COLLECTORS);
        let implementation = self.imports.spell(&collection.implementation);
        match collection.kind {
            CollectionKind::List if collection.is_interface() => format!("{collectors}.toList()"),
            CollectionKind::Set if collection.is_interface() => format!("{collectors}.toSet()"),
            _ => format!("{collectors}.toCollection({implementation}::new)"),
        }
    }

    fn spell(&self, qualified: &str) -> String {
        self.imports.spell(&TypeName::parse(qualified))
    }
}
