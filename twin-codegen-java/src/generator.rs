//! Java code generator.

use eyre::{Result, WrapErr};
use twin_codegen::language::{Artifact, ClassUnit, LanguageCodegen};
use twin_core::{File, GeneratedFile};
use twin_manifest::ArtifactKind;

use crate::{
    ArtifactNames,
    files::{AdapterFile, ControllerFile, MapperFile, RepositoryFile, ServiceFile, TransferFile},
};

/// Renders Java sources below the configured source root.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaGenerator;

impl JavaGenerator {
    pub fn new() -> Self {
        Self
    }

    fn render_kind(&self, kind: ArtifactKind, unit: &ClassUnit<'_>) -> Result<File> {
        let names = ArtifactNames::new(unit);
        let file = match kind {
            ArtifactKind::Transfer => TransferFile::new(unit.class).to_file(),
            ArtifactKind::Repository => RepositoryFile::new(&names)?.to_file(),
            ArtifactKind::Mapper => MapperFile::new(&names)?.to_file(),
            ArtifactKind::Adapter => AdapterFile::new(&names)?.to_file(),
            ArtifactKind::Service => ServiceFile::new(&names)?.to_file(),
            ArtifactKind::Controller => ControllerFile::new(&names)?.to_file(),
        };
        Ok(file)
    }
}

impl LanguageCodegen for JavaGenerator {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn render(&self, unit: &ClassUnit<'_>) -> Result<Vec<Artifact>> {
        let source_root = &unit.manifest.generator.source_root;
        unit.entry
            .artifacts()
            .into_iter()
            .map(|kind| {
                let file = self
                    .render_kind(kind, unit)
                    .wrap_err_with(|| format!("cannot render the {kind} artifact"))?;
                tracing::debug!(
                    class = %unit.class.domain,
                    artifact = %kind,
                    path = %file.path().display(),
                    "rendered"
                );
                Ok(Artifact {
                    kind,
                    file: File::new(source_root.join(file.path()), file.content()),
                })
            })
            .collect()
    }
}
