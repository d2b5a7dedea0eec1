//! Classify phase - classifies every field and derives its conversions.

use twin_model::{DeclaredType, FieldPlan, TypeArg, TypeClassification, TypeName};

use super::missing;
use crate::{
    GenerationError,
    pipeline::{ClassContext, Diagnostic, Phase},
    transfer::Synthesizer,
};

pub struct ClassifyPhase;

impl Phase for ClassifyPhase {
    fn name(&self) -> &'static str {
        "classify"
    }

    fn description(&self) -> &'static str {
        "Classify field types and build conversion expressions"
    }

    fn run(&self, ctx: &mut ClassContext<'_>) -> Result<(), GenerationError> {
        let Some(loaded) = ctx.loaded.as_ref() else {
            return Err(missing(ctx, "the resolved class"));
        };
        let mut diagnostics = Vec::new();
        let synthesizer = Synthesizer::new(ctx.config);
        let plan = if ctx.renders_transfer {
            synthesizer.plan(loaded)?
        } else {
            let (plan, dropped) = synthesizer.plan_supported(loaded);
            for (field, shape) in dropped {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("field '{field}' is left out: {shape}"),
                    )
                    .at(ctx.location(&field)),
                );
            }
            plan
        };

        for field in &plan.fields {
            tracing::debug!(
                class = %ctx.class,
                field = %field.field,
                declared = %field.declared,
                classification = %field.classification,
                "classified field"
            );
            self.inspect(ctx, field, &mut diagnostics);
        }
        for diagnostic in diagnostics {
            if diagnostic.severity.is_warning() {
                tracing::warn!(
                    location = diagnostic.location.as_deref().unwrap_or_default(),
                    "{}",
                    diagnostic.message
                );
            }
            ctx.add_diagnostic(diagnostic);
        }

        ctx.plan = Some(plan);
        Ok(())
    }
}

impl ClassifyPhase {
    fn inspect(&self, ctx: &ClassContext<'_>, field: &FieldPlan, out: &mut Vec<Diagnostic>) {
        let at = ctx.location(&field.field);
        match &field.classification {
            TypeClassification::RawCollection {
                collection,
                ambiguity,
            } => out.push(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "element type of '{}' cannot be determined ({ambiguity}); copied as a raw '{}'",
                        field.declared.short(),
                        collection.container.name()
                    ),
                )
                .at(at),
            ),
            TypeClassification::ComplexSingle { ty } => {
                self.inspect_arguments(&field.declared, &at, out);
                self.inspect_reference(ctx, ty, &at, out);
            }
            TypeClassification::ComplexCollection { element, .. } => {
                if let Some(declared) = element_type(&field.declared) {
                    self.inspect_arguments(declared, &at, out);
                }
                self.inspect_reference(ctx, element, &at, out);
            }
            TypeClassification::Array { element } => {
                if let TypeClassification::ComplexSingle { ty } = element.as_ref() {
                    if let Some(declared) = element_type(&field.declared) {
                        self.inspect_arguments(declared, &at, out);
                    }
                    self.inspect_reference(ctx, ty, &at, out);
                }
            }
            _ => {}
        }
    }

    /// Transfer references are never parameterized.
    fn inspect_arguments(&self, declared: &DeclaredType, at: &str, out: &mut Vec<Diagnostic>) {
        if let DeclaredType::Class { args, .. } = declared
            && !args.is_empty()
        {
            out.push(
                Diagnostic::warning(
                    self.name(),
                    format!("type arguments of '{}' are ignored", declared.short()),
                )
                .at(at),
            );
        }
    }

    fn inspect_reference(
        &self,
        ctx: &ClassContext<'_>,
        domain: &TypeName,
        at: &str,
        out: &mut Vec<Diagnostic>,
    ) {
        let transfer = ctx.config.rewriter.transfer_name(domain, &ctx.config.suffix);
        if !ctx.config.rewriter.matches(domain.namespace()) {
            out.push(
                Diagnostic::info(
                    self.name(),
                    format!(
                        "'{domain}' is outside the domain namespace; '{transfer}' is expected in the default namespace"
                    ),
                )
                .at(at),
            );
        } else if !ctx.model.contains(domain) {
            out.push(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "'{domain}' is not declared in any model file; '{transfer}' must be provided separately"
                    ),
                )
                .at(at),
            );
        }
    }
}

/// Declared element of an array or a single-argument collection.
fn element_type(declared: &DeclaredType) -> Option<&DeclaredType> {
    match declared {
        DeclaredType::Array(element) => Some(element),
        DeclaredType::Class { args, .. } => match args.as_slice() {
            [TypeArg::Type(element)] => Some(element),
            _ => None,
        },
        DeclaredType::Primitive(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use twin_model::{ClassDef, ClassModel, FieldDef, parse_type};

    use super::*;
    use crate::{pipeline::phases::ResolvePhase, transfer::TransferConfig};

    struct Fixture {
        model: ClassModel,
        config: TransferConfig,
    }

    impl Fixture {
        fn new(fields: &[(&str, &str)]) -> Self {
            let model = ClassModel::builder()
                .class(ClassDef {
                    name: TypeName::parse("com.acme.domain.Order"),
                    extends: None,
                    fields: fields
                        .iter()
                        .map(|(name, ty)| FieldDef {
                            name: name.to_string(),
                            ty: parse_type(ty).unwrap(),
                        })
                        .collect(),
                })
                .class(ClassDef {
                    name: TypeName::parse("com.acme.domain.Line"),
                    extends: None,
                    fields: vec![],
                })
                .build();
            let config = TransferConfig::new("com.acme.domain", "com.acme.transfer", "Transfer");
            Self { model, config }
        }

        fn run(&self) -> Result<ClassContext<'_>, GenerationError> {
            self.run_with(true)
        }

        fn run_with(&self, renders_transfer: bool) -> Result<ClassContext<'_>, GenerationError> {
            let mut ctx = ClassContext::new(
                &self.model,
                &self.config,
                TypeName::parse("com.acme.domain.Order"),
                "",
            );
            ctx.renders_transfer = renders_transfer;
            ResolvePhase.run(&mut ctx)?;
            ClassifyPhase.run(&mut ctx)?;
            Ok(ctx)
        }
    }

    #[test]
    fn test_plan_in_field_order() {
        let fixture = Fixture::new(&[("lines", "List<Line>"), ("code", "String")]);
        let ctx = fixture.run().unwrap();
        let plan = ctx.plan.as_ref().unwrap();
        let names: Vec<_> = plan.fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, ["code", "lines"]);
        assert_eq!(ctx.warning_count(), 0);
    }

    #[test]
    fn test_wildcard_collection_warns() {
        let fixture = Fixture::new(&[("lines", "List<? extends Line>")]);
        let ctx = fixture.run().unwrap();
        let warning = ctx.warnings().next().unwrap();
        assert_eq!(warning.location.as_deref(), Some("Order.lines"));
        assert!(warning.message.contains("wildcard type argument"));
        assert!(warning.message.contains("raw 'List'"));
    }

    #[test]
    fn test_references_outside_model() {
        let fixture = Fixture::new(&[
            ("money", "org.vendor.Money"),
            ("ghost", "com.acme.domain.Ghost"),
            ("extra", "Map<String, Line>"),
        ]);
        let ctx = fixture.run().unwrap();
        let messages: Vec<String> = ctx.diagnostics.iter().map(|d| d.to_string()).collect();
        assert!(messages.iter().any(|m| m.starts_with("info: 'org.vendor.Money' is outside")));
        assert!(messages.iter().any(|m| m.contains("'com.acme.domain.Ghost' is not declared")));
        assert!(messages.iter().any(|m| m.contains("type arguments of 'Map<String, Line>'")));
    }

    #[test]
    fn test_element_type_arguments_warn() {
        let fixture = Fixture::new(&[
            ("pages", "List<Page<Line>>"),
            ("grid", "Cell<Line>[]"),
            ("lines", "List<Line>"),
        ]);
        let ctx = fixture.run().unwrap();
        let ignored: Vec<(&str, &str)> = ctx
            .warnings()
            .filter(|d| d.message.starts_with("type arguments of"))
            .map(|d| (d.location.as_deref().unwrap_or_default(), d.message.as_str()))
            .collect();
        assert_eq!(
            ignored,
            [
                ("Order.grid", "type arguments of 'Cell<Line>' are ignored"),
                ("Order.pages", "type arguments of 'Page<Line>' are ignored"),
            ]
        );
    }

    #[test]
    fn test_unsupported_shape_fails() {
        let fixture = Fixture::new(&[("ids", "Set<ArchbaseIdentifier>")]);
        let err = fixture.run().unwrap_err();
        assert_eq!(err.field(), Some("ids"));
    }

    #[test]
    fn test_unsupported_shape_is_left_out_without_transfer() {
        let fixture = Fixture::new(&[("ids", "Set<ArchbaseIdentifier>"), ("code", "String")]);
        let ctx = fixture.run_with(false).unwrap();
        let plan = ctx.plan.as_ref().unwrap();
        assert_eq!(plan.fields.len(), 1);
        assert_eq!(plan.fields[0].field, "code");
        let warning = ctx.warnings().next().unwrap();
        assert_eq!(warning.location.as_deref(), Some("Order.ids"));
        assert!(warning.message.starts_with("field 'ids' is left out"));
    }

    #[test]
    fn test_requires_resolved_class() {
        let model = ClassModel::default();
        let config = TransferConfig::new("a", "b", "Transfer");
        let mut ctx = ClassContext::new(&model, &config, TypeName::parse("a.X"), "");
        assert!(ClassifyPhase.run(&mut ctx).is_err());
    }
}
