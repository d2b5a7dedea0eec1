//! State of one class moving through the pipeline.

use twin_model::{ClassModel, ConversionPlan, GeneratedClass, LoadedClass, TypeName};

use super::diagnostic::{Diagnostic, Severity};
use crate::transfer::TransferConfig;

/// Everything the phases know about the class being generated.
///
/// Each phase fills in its slot: `loaded` after resolve, `plan` after
/// classify, `generated` after synthesize.
#[derive(Debug)]
pub struct ClassContext<'a> {
    pub model: &'a ClassModel,
    pub config: &'a TransferConfig,
    /// Qualified domain class name.
    pub class: TypeName,
    /// Appended to the output namespace of the transfer class.
    pub package_suffix: String,
    /// Whether the transfer class itself is rendered. When it is not, fields
    /// without a conversion rule and unconvertible identifiers are tolerated.
    pub renders_transfer: bool,
    pub loaded: Option<LoadedClass>,
    pub plan: Option<ConversionPlan>,
    pub generated: Option<GeneratedClass>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> ClassContext<'a> {
    pub fn new(
        model: &'a ClassModel,
        config: &'a TransferConfig,
        class: TypeName,
        package_suffix: impl Into<String>,
    ) -> Self {
        Self {
            model,
            config,
            class,
            package_suffix: package_suffix.into(),
            renders_transfer: true,
            loaded: None,
            plan: None,
            generated: None,
            diagnostics: Vec::new(),
        }
    }

    /// `Simple.field`, the location format used by diagnostics.
    pub fn location(&self, field: &str) -> String {
        format!("{}.{}", self.class.name(), field)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_diagnostics() {
        let model = ClassModel::default();
        let config = TransferConfig::new("com.acme.domain", "com.acme.transfer", "Transfer");
        let mut ctx = ClassContext::new(
            &model,
            &config,
            TypeName::parse("com.acme.domain.Customer"),
            "",
        );
        assert!(ctx.loaded.is_none());
        assert!(ctx.diagnostics.is_empty());

        ctx.add_error("resolve", "missing");
        ctx.add_warning("classify", "raw list");
        ctx.add_warning("classify", "raw set");
        ctx.add_info("resolve", "3 fields");

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 2);
        assert_eq!(ctx.errors().count(), 1);
        assert_eq!(ctx.location("tags"), "Customer.tags");
    }
}
