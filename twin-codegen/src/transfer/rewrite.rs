use twin_model::TypeName;

/// Maps namespaces of the domain tree onto the transfer tree by literal
/// substring substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceRewriter {
    source: String,
    target: String,
}

impl NamespaceRewriter {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Whether `namespace` lies in the managed domain tree.
    pub fn matches(&self, namespace: &str) -> bool {
        !self.source.is_empty() && namespace.contains(&self.source)
    }

    /// Replace every occurrence of the source prefix. A namespace without
    /// it comes back unchanged.
    pub fn rewrite(&self, namespace: &str) -> String {
        if self.matches(namespace) {
            namespace.replace(&self.source, &self.target)
        } else {
            namespace.to_string()
        }
    }

    /// Transfer-side name of a referenced domain class. Classes outside the
    /// domain tree land in the default namespace.
    pub fn transfer_name(&self, domain: &TypeName, suffix: &str) -> TypeName {
        let name = format!("{}{}", domain.name(), suffix);
        if self.matches(domain.namespace()) {
            TypeName::new(self.rewrite(domain.namespace()), name)
        } else {
            TypeName::new("", name)
        }
    }
}
