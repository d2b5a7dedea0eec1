//! Manifest types and parsing for twin.toml files.

mod file;
mod layers;
mod parse;
mod validate;

use std::path::PathBuf;

pub use file::TwinToml;
pub use layers::{ArtifactKind, Layer, Layers};
use serde::Deserialize;
use toml::Spanned;
use twin_model::TypeName;
pub use validate::ParseContext;
pub(crate) use validate::inner_span;

/// Root manifest for twin.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub generator: GeneratorConfig,

    /// Layer packages; needed only when scaffolding is requested.
    #[serde(default)]
    pub layers: Option<Layers>,

    #[serde(default)]
    pub classes: Vec<ClassEntry>,
}

impl Manifest {
    /// Find the entry for a class by qualified or simple name.
    pub fn class(&self, name: &str) -> Option<&ClassEntry> {
        self.classes
            .iter()
            .find(|c| c.name() == name)
            .or_else(|| self.classes.iter().find(|c| c.type_name().name() == name))
    }

    /// Layer package (or class) for `layer`, if configured.
    pub fn layer(&self, layer: Layer) -> Option<&str> {
        self.layers.as_ref().and_then(|l| l.get(layer))
    }
}

/// The `[generator]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Namespace prefix of the domain tree.
    pub domain_namespace: String,

    /// Namespace prefix of the transfer tree.
    pub transfer_namespace: String,

    #[serde(default = "default_transfer_suffix")]
    pub transfer_suffix: String,

    /// Simple name of the identifier wrapper, compared case-insensitively.
    #[serde(default = "default_identifier_type")]
    pub identifier_type: String,

    /// Source root below the output directory.
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,

    /// Model files, relative to the manifest's directory.
    #[serde(default = "default_models")]
    pub models: Vec<PathBuf>,

    /// Fail a class instead of warning when an identifier field has no
    /// reverse conversion.
    #[serde(default)]
    pub strict_identifiers: bool,
}

fn default_transfer_suffix() -> String {
    "Transfer".to_string()
}

fn default_identifier_type() -> String {
    "ArchbaseIdentifier".to_string()
}

fn default_source_root() -> PathBuf {
    PathBuf::from("src/main/java")
}

fn default_models() -> Vec<PathBuf> {
    vec![PathBuf::from("model.toml")]
}

/// A `[[classes]]` entry: one domain class to generate for.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassEntry {
    name: Spanned<String>,

    /// Appended to every output namespace of this class.
    #[serde(default)]
    pub package_suffix: String,

    #[serde(default = "default_artifacts")]
    artifacts: Vec<Spanned<ArtifactKind>>,
}

fn default_artifacts() -> Vec<Spanned<ArtifactKind>> {
    vec![Spanned::new(0..0, ArtifactKind::Transfer)]
}

impl ClassEntry {
    /// Qualified domain class name as written.
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    pub fn type_name(&self) -> TypeName {
        TypeName::parse(self.name.get_ref())
    }

    /// Requested artifacts, deduplicated, in declaration order.
    pub fn artifacts(&self) -> Vec<ArtifactKind> {
        let mut out: Vec<ArtifactKind> = Vec::new();
        for kind in &self.artifacts {
            if !out.contains(kind.get_ref()) {
                out.push(*kind.get_ref());
            }
        }
        out
    }

    pub fn wants(&self, kind: ArtifactKind) -> bool {
        self.artifacts.iter().any(|a| *a.get_ref() == kind)
    }

    pub(crate) fn name_span(&self) -> std::ops::Range<usize> {
        self.name.span()
    }

    pub(crate) fn spanned_artifacts(&self) -> &[Spanned<ArtifactKind>] {
        &self.artifacts
    }

    /// Build an entry without source spans.
    pub fn new(name: &str, package_suffix: &str, artifacts: &[ArtifactKind]) -> Self {
        Self {
            name: Spanned::new(0..0, name.to_string()),
            package_suffix: package_suffix.to_string(),
            artifacts: artifacts.iter().map(|a| Spanned::new(0..0, *a)).collect(),
        }
    }
}
