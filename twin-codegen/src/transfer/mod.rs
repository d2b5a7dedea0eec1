//! From loaded domain classes to [`GeneratedClass`](twin_model::GeneratedClass)
//! descriptors.

mod expr;
mod rewrite;
mod synthesize;

pub use expr::ExpressionBuilder;
pub use rewrite::NamespaceRewriter;
pub use synthesize::Synthesizer;
use twin_manifest::GeneratorConfig;
use twin_model::TypeName;

use crate::classify::Classifier;

/// Per-run settings threaded through classification and synthesis.
#[derive(Debug, Clone)]
pub struct TransferConfig {
    pub rewriter: NamespaceRewriter,
    pub suffix: String,
    pub identifier_type: String,
    pub strict_identifiers: bool,
}

impl TransferConfig {
    pub fn new(
        domain_namespace: impl Into<String>,
        transfer_namespace: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            rewriter: NamespaceRewriter::new(domain_namespace, transfer_namespace),
            suffix: suffix.into(),
            identifier_type: "ArchbaseIdentifier".to_string(),
            strict_identifiers: false,
        }
    }

    pub fn from_generator(config: &GeneratorConfig) -> Self {
        Self {
            rewriter: NamespaceRewriter::new(
                config.domain_namespace.clone(),
                config.transfer_namespace.clone(),
            ),
            suffix: config.transfer_suffix.clone(),
            identifier_type: config.identifier_type.clone(),
            strict_identifiers: config.strict_identifiers,
        }
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.identifier_type.clone())
    }

    pub fn expressions(&self) -> ExpressionBuilder<'_> {
        ExpressionBuilder::new(&self.rewriter, &self.suffix)
    }

    /// Name of the transfer class generated for `domain`:
    /// `<transfer namespace><package suffix>.<Simple><suffix>`.
    pub fn transfer_class_name(&self, domain: &TypeName, package_suffix: &str) -> TypeName {
        TypeName::new(
            format!("{}{}", self.rewriter.target(), package_suffix),
            format!("{}{}", domain.name(), self.suffix),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_class_name_uses_package_suffix() {
        let config = TransferConfig::new("com.acme.domain", "com.acme.transfer", "Transfer");
        let name = config.transfer_class_name(
            &TypeName::parse("com.acme.domain.customer.Customer"),
            ".customer",
        );
        assert_eq!(name.qualified(), "com.acme.transfer.customer.CustomerTransfer");

        let flat = config.transfer_class_name(&TypeName::parse("com.acme.domain.Order"), "");
        assert_eq!(flat.qualified(), "com.acme.transfer.OrderTransfer");
    }
}
