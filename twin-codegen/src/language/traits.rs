use eyre::Result;
use twin_core::File;
use twin_manifest::{ArtifactKind, ClassEntry, Manifest};
use twin_model::GeneratedClass;

/// One synthesized class plus the configuration a renderer needs to name
/// and place its artifacts.
#[derive(Debug, Clone, Copy)]
pub struct ClassUnit<'a> {
    pub class: &'a GeneratedClass,
    pub entry: &'a ClassEntry,
    pub manifest: &'a Manifest,
}

/// A rendered file for one requested artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    /// Path relative to the output directory.
    pub file: File,
}

/// Renders synthesized classes as source files of one target language.
///
/// Renderers never classify; everything they need is on the
/// [`GeneratedClass`].
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java").
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java").
    fn file_extension(&self) -> &'static str;

    /// Render every artifact the class entry requests, in request order.
    fn render(&self, unit: &ClassUnit<'_>) -> Result<Vec<Artifact>>;
}
