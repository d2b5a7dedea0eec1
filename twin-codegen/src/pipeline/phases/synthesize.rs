//! Synthesize phase - assembles the transfer class descriptor.

use super::missing;
use crate::{
    GenerationError,
    pipeline::{ClassContext, Diagnostic, Phase},
    transfer::Synthesizer,
};

pub struct SynthesizePhase;

impl Phase for SynthesizePhase {
    fn name(&self) -> &'static str {
        "synthesize"
    }

    fn description(&self) -> &'static str {
        "Assemble the transfer class and its conversion routines"
    }

    fn run(&self, ctx: &mut ClassContext<'_>) -> Result<(), GenerationError> {
        let Some(plan) = ctx.plan.as_ref() else {
            return Err(missing(ctx, "the conversion plan"));
        };
        let name = ctx
            .config
            .transfer_class_name(&ctx.class, &ctx.package_suffix);
        let generated = Synthesizer::new(ctx.config)
            .strict_identifiers(ctx.config.strict_identifiers && ctx.renders_transfer)
            .synthesize(plan, name)?;

        let gaps: Vec<String> = if ctx.renders_transfer {
            generated
                .unsupported_reverse()
                .map(|a| a.field.clone())
                .collect()
        } else {
            Vec::new()
        };
        for field in gaps {
            tracing::warn!(class = %ctx.class, field = %field, "identifier field is not converted back");
            let diagnostic = Diagnostic::warning(
                self.name(),
                format!("identifier field '{field}' has no reverse conversion; toDomain leaves it unset"),
            )
            .at(ctx.location(&field));
            ctx.add_diagnostic(diagnostic);
        }

        tracing::info!(class = %ctx.class, transfer = %generated.name, "synthesized transfer class");
        ctx.generated = Some(generated);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use twin_model::{ClassDef, ClassModel, FieldDef, TypeName, parse_type};

    use super::*;
    use crate::{
        pipeline::phases::{ClassifyPhase, ResolvePhase},
        transfer::TransferConfig,
    };

    fn model() -> ClassModel {
        ClassModel::builder()
            .class(ClassDef {
                name: TypeName::parse("com.acme.domain.Account"),
                extends: None,
                fields: vec![
                    FieldDef {
                        name: "id".into(),
                        ty: parse_type("ArchbaseIdentifier").unwrap(),
                    },
                    FieldDef {
                        name: "active".into(),
                        ty: parse_type("boolean").unwrap(),
                    },
                ],
            })
            .build()
    }

    fn run(config: &TransferConfig) -> (Result<(), GenerationError>, Vec<Diagnostic>, bool) {
        let model = model();
        let mut ctx = ClassContext::new(
            &model,
            config,
            TypeName::parse("com.acme.domain.Account"),
            ".account",
        );
        let result = ResolvePhase
            .run(&mut ctx)
            .and_then(|_| ClassifyPhase.run(&mut ctx))
            .and_then(|_| SynthesizePhase.run(&mut ctx));
        (result, ctx.diagnostics, ctx.generated.is_some())
    }

    #[test]
    fn test_identifier_gap_is_a_warning() {
        let config = TransferConfig::new("com.acme.domain", "com.acme.transfer", "Transfer");
        let (result, diagnostics, generated) = run(&config);
        assert!(result.is_ok());
        assert!(generated);
        let warning = diagnostics.iter().find(|d| d.severity.is_warning()).unwrap();
        assert_eq!(warning.location.as_deref(), Some("Account.id"));
        assert_eq!(warning.phase, "synthesize");
    }

    #[test]
    fn test_identifier_gap_is_an_error_when_strict() {
        let mut config = TransferConfig::new("com.acme.domain", "com.acme.transfer", "Transfer");
        config.strict_identifiers = true;
        let (result, _, generated) = run(&config);
        assert!(matches!(
            result,
            Err(GenerationError::UnsupportedReverseConversion { .. })
        ));
        assert!(!generated);
    }
}
