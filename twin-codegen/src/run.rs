//! Run orchestrator: every selected class through the pipeline and the
//! renderer, with one outcome per class.
//!
//! Classes are processed in manifest order and never affect one another;
//! a failing class is reported and the run moves on.

use std::path::{Path, PathBuf};

use twin_core::WriteResult;
use twin_manifest::{ArtifactKind, ClassEntry, Manifest};
use twin_model::{ClassModel, ConversionPlan, GeneratedClass, TypeName};

use crate::{
    GenerationError,
    language::{Artifact, ClassUnit, LanguageCodegen},
    pipeline::{ClassContext, Diagnostic, Pipeline},
    transfer::TransferConfig,
};

/// What happened to one artifact file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    Written,
    /// The file already existed and was left untouched.
    Skipped,
    /// Rendered but not written (dry run).
    Rendered(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactOutcome {
    pub kind: ArtifactKind,
    /// Path relative to the output directory.
    pub path: PathBuf,
    pub status: ArtifactStatus,
}

/// A class that made it through the pipeline.
#[derive(Debug, Clone)]
pub struct ClassSuccess {
    pub plan: ConversionPlan,
    pub generated: GeneratedClass,
    /// Empty when the run does not render.
    pub artifacts: Vec<ArtifactOutcome>,
}

#[derive(Debug)]
pub struct ClassOutcome {
    pub class: TypeName,
    pub diagnostics: Vec<Diagnostic>,
    pub result: Result<ClassSuccess, GenerationError>,
}

impl ClassOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }
}

/// Outcomes of a run, in manifest order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub classes: Vec<ClassOutcome>,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        self.classes.iter().any(|c| !c.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&TypeName, &GenerationError)> {
        self.classes
            .iter()
            .filter_map(|c| c.result.as_ref().err().map(|e| (&c.class, e)))
    }

    pub fn artifacts(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.classes
            .iter()
            .filter_map(|c| c.result.as_ref().ok())
            .flat_map(|s| s.artifacts.iter())
    }

    pub fn written(&self) -> usize {
        self.artifacts()
            .filter(|a| a.status == ArtifactStatus::Written)
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.artifacts()
            .filter(|a| a.status == ArtifactStatus::Skipped)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.classes.iter().map(|c| c.warnings().count()).sum()
    }
}

#[derive(Debug, Clone, Copy)]
enum Mode<'p> {
    /// Stop after synthesis.
    Check,
    /// Render but keep the files in memory.
    Preview,
    /// Render, then write every file below the output directory.
    Write(&'p Path),
}

/// A configured generation run.
pub struct Run<'a> {
    manifest: &'a Manifest,
    model: &'a ClassModel,
    codegen: &'a dyn LanguageCodegen,
    config: TransferConfig,
    pipeline: Pipeline,
    only: Vec<String>,
}

impl<'a> Run<'a> {
    pub fn new(
        manifest: &'a Manifest,
        model: &'a ClassModel,
        codegen: &'a dyn LanguageCodegen,
    ) -> Self {
        Self {
            manifest,
            model,
            codegen,
            config: TransferConfig::from_generator(&manifest.generator),
            pipeline: Pipeline::new(),
            only: Vec::new(),
        }
    }

    /// Restrict the run to the named classes (qualified or simple names).
    pub fn only(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.only = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the per-class pipeline.
    pub fn pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Names given to [`Run::only`] that match no class entry.
    pub fn unmatched(&self) -> Vec<&str> {
        self.only
            .iter()
            .filter(|name| self.manifest.class(name).is_none())
            .map(String::as_str)
            .collect()
    }

    /// Class entries selected for this run, in manifest order.
    pub fn selected(&self) -> impl Iterator<Item = &'a ClassEntry> + '_ {
        self.manifest.classes.iter().filter(|entry| {
            self.only.is_empty()
                || self
                    .only
                    .iter()
                    .any(|name| entry.name() == name || entry.type_name().name() == name)
        })
    }

    /// Resolve, classify and synthesize every selected class.
    pub fn check(&self) -> RunReport {
        self.execute(Mode::Check)
    }

    /// Additionally render every requested artifact, without writing.
    pub fn preview(&self) -> RunReport {
        self.execute(Mode::Preview)
    }

    /// Render and write every requested artifact below `output`, skipping
    /// files that already exist.
    pub fn write(&self, output: &Path) -> RunReport {
        self.execute(Mode::Write(output))
    }

    fn execute(&self, mode: Mode<'_>) -> RunReport {
        let classes = self
            .selected()
            .map(|entry| self.class(entry, mode))
            .collect();
        RunReport { classes }
    }

    fn class(&self, entry: &ClassEntry, mode: Mode<'_>) -> ClassOutcome {
        let class = entry.type_name();
        let span = tracing::info_span!("class", class = %class);
        let _guard = span.enter();

        let mut ctx = ClassContext::new(self.model, &self.config, class.clone(), &entry.package_suffix);
        ctx.renders_transfer = entry.wants(ArtifactKind::Transfer);
        let result = self
            .pipeline
            .run(&mut ctx)
            .and_then(|()| self.finish(&mut ctx, entry, mode));

        match &result {
            Ok(success) => tracing::info!(
                artifacts = success.artifacts.len(),
                warnings = ctx.warning_count(),
                "class done"
            ),
            Err(err) => tracing::error!(error = %err, "class failed"),
        }

        ClassOutcome {
            class,
            diagnostics: ctx.diagnostics,
            result,
        }
    }

    fn finish(
        &self,
        ctx: &mut ClassContext<'_>,
        entry: &ClassEntry,
        mode: Mode<'_>,
    ) -> Result<ClassSuccess, GenerationError> {
        let (Some(plan), Some(generated)) = (ctx.plan.take(), ctx.generated.take()) else {
            return Err(GenerationError::synthesis(
                &ctx.class,
                None,
                "pipeline finished without a transfer class",
            ));
        };

        let artifacts = match mode {
            Mode::Check => Vec::new(),
            Mode::Preview => self
                .render(&generated, entry)?
                .into_iter()
                .map(|artifact| ArtifactOutcome {
                    kind: artifact.kind,
                    path: artifact.file.path().to_path_buf(),
                    status: ArtifactStatus::Rendered(artifact.file.content().to_string()),
                })
                .collect(),
            Mode::Write(output) => self.emit(&generated, self.render(&generated, entry)?, output)?,
        };

        Ok(ClassSuccess {
            plan,
            generated,
            artifacts,
        })
    }

    /// Render all artifacts of a class before any of them is written.
    fn render(
        &self,
        generated: &GeneratedClass,
        entry: &ClassEntry,
    ) -> Result<Vec<Artifact>, GenerationError> {
        let unit = ClassUnit {
            class: generated,
            entry,
            manifest: self.manifest,
        };
        tracing::debug!(language = self.codegen.language(), "rendering");
        self.codegen
            .render(&unit)
            .map_err(|err| GenerationError::Render {
                class: generated.domain.clone(),
                message: format!("{err:#}"),
            })
    }

    fn emit(
        &self,
        generated: &GeneratedClass,
        artifacts: Vec<Artifact>,
        output: &Path,
    ) -> Result<Vec<ArtifactOutcome>, GenerationError> {
        let mut outcomes = Vec::with_capacity(artifacts.len());
        let mut written = Vec::new();
        for artifact in artifacts {
            let path = artifact.file.path().to_path_buf();
            let status = match artifact.file.write(output) {
                Ok(WriteResult::Written) => {
                    written.push(artifact.file.target(output));
                    ArtifactStatus::Written
                }
                Ok(WriteResult::Skipped) => ArtifactStatus::Skipped,
                Err(source) => {
                    roll_back(&written);
                    return Err(GenerationError::Emit {
                        class: generated.domain.clone(),
                        path: artifact.file.target(output),
                        source,
                    });
                }
            };
            tracing::info!(
                kind = %artifact.kind,
                path = %path.display(),
                skipped = matches!(status, ArtifactStatus::Skipped),
                "artifact"
            );
            outcomes.push(ArtifactOutcome {
                kind: artifact.kind,
                path,
                status,
            });
        }
        Ok(outcomes)
    }
}

/// Removes files written earlier in a class's emit so a failed class leaves nothing behind.
fn roll_back(written: &[PathBuf]) {
    for target in written.iter().rev() {
        if let Err(err) = std::fs::remove_file(target) {
            tracing::warn!(path = %target.display(), error = %err, "could not remove partial output");
        }
    }
}
