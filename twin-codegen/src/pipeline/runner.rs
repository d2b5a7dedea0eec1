//! Pipeline orchestrator.

use super::{
    ClassContext, Phase,
    phases::{ClassifyPhase, ResolvePhase, SynthesizePhase},
};
use crate::GenerationError;

/// Runs the built-in phases (resolve, classify, synthesize) followed by any
/// added phases, stopping at the first failure.
///
/// ```ignore
/// let pipeline = Pipeline::new().phase(MyLintPhase);
/// pipeline.run(&mut ctx)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run every phase over `ctx`.
    ///
    /// Diagnostics recorded before a failure stay on the context.
    pub fn run(&self, ctx: &mut ClassContext<'_>) -> Result<(), GenerationError> {
        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(ResolvePhase),
            Box::new(ClassifyPhase),
            Box::new(SynthesizePhase),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), ctx)?;
        }
        Ok(())
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut ClassContext<'_>) -> Result<(), GenerationError> {
        tracing::debug!(
            phase = phase.name(),
            description = phase.description(),
            class = %ctx.class,
            "running phase"
        );
        phase.run(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use twin_model::{ClassDef, ClassModel, FieldDef, TypeName, parse_type};

    use super::*;
    use crate::transfer::TransferConfig;

    struct CountingPhase(Arc<AtomicUsize>);

    impl Phase for CountingPhase {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn description(&self) -> &'static str {
            "counts runs"
        }

        fn run(&self, ctx: &mut ClassContext<'_>) -> Result<(), GenerationError> {
            assert!(ctx.generated.is_some());
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn model() -> ClassModel {
        ClassModel::builder()
            .class(ClassDef {
                name: TypeName::parse("com.acme.domain.Customer"),
                extends: None,
                fields: vec![
                    FieldDef {
                        name: "name".into(),
                        ty: parse_type("String").unwrap(),
                    },
                    FieldDef {
                        name: "tags".into(),
                        ty: parse_type("List").unwrap(),
                    },
                ],
            })
            .build()
    }

    #[test]
    fn test_builtin_phases_then_custom() {
        let model = model();
        let config = TransferConfig::new("com.acme.domain", "com.acme.transfer", "Transfer");
        let mut ctx = ClassContext::new(
            &model,
            &config,
            TypeName::parse("com.acme.domain.Customer"),
            "",
        );
        let count = Arc::new(AtomicUsize::new(0));

        Pipeline::new()
            .phase(CountingPhase(count.clone()))
            .run(&mut ctx)
            .unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 1);
        let generated = ctx.generated.as_ref().unwrap();
        assert_eq!(generated.name.qualified(), "com.acme.transfer.CustomerTransfer");
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(
            ctx.warnings().next().unwrap().location.as_deref(),
            Some("Customer.tags")
        );
    }

    #[test]
    fn test_failure_stops_pipeline() {
        let model = model();
        let config = TransferConfig::new("com.acme.domain", "com.acme.transfer", "Transfer");
        let mut ctx = ClassContext::new(
            &model,
            &config,
            TypeName::parse("com.acme.domain.Missing"),
            "",
        );
        let count = Arc::new(AtomicUsize::new(0));

        let err = Pipeline::new()
            .phase(CountingPhase(count.clone()))
            .run(&mut ctx)
            .unwrap_err();

        assert!(matches!(err, GenerationError::UnresolvableClass { .. }));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(ctx.plan.is_none());
    }
}
