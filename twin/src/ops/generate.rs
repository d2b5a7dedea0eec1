//! Generate operation: render and emit every selected class.

use std::path::{Path, PathBuf};

use twin_codegen::{
    language::LanguageCodegen,
    run::{ArtifactStatus, ClassOutcome, Run},
};
use twin_manifest::Manifest;
use twin_model::ClassModel;

use super::describe;
use crate::reports::{ClassFailure, ClassSummary, FileLine, GenerateReport, PreviewFile};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output: PathBuf,
    pub dry_run: bool,
    /// Restrict the run to these classes; empty means all.
    pub classes: Vec<String>,
}

/// Execute the generate operation.
pub fn generate(
    manifest: &Manifest,
    model: &ClassModel,
    codegen: &dyn LanguageCodegen,
    options: &GenerateOptions,
) -> GenerateReport {
    let run = Run::new(manifest, model, codegen).only(options.classes.iter().cloned());
    let unmatched = run.unmatched().into_iter().map(str::to_string).collect();

    let result = if options.dry_run {
        run.preview()
    } else {
        run.write(&options.output)
    };

    let mut preview = Vec::new();
    let classes = result
        .classes
        .iter()
        .map(|outcome| summarize(outcome, &options.output, &mut preview))
        .collect();

    GenerateReport {
        classes,
        unmatched,
        preview,
        dry_run: options.dry_run,
    }
}

fn summarize(outcome: &ClassOutcome, output: &Path, preview: &mut Vec<PreviewFile>) -> ClassSummary {
    let mut files = Vec::new();
    let failure = match &outcome.result {
        Ok(success) => {
            for artifact in &success.artifacts {
                let path = output.join(&artifact.path).display().to_string();
                match &artifact.status {
                    ArtifactStatus::Written => files.push(FileLine {
                        path,
                        written: true,
                    }),
                    ArtifactStatus::Skipped => files.push(FileLine {
                        path,
                        written: false,
                    }),
                    ArtifactStatus::Rendered(content) => preview.push(PreviewFile {
                        path,
                        content: content.clone(),
                    }),
                }
            }
            None
        }
        Err(err) => Some(ClassFailure::from_error(err)),
    };

    ClassSummary {
        class: outcome.class.to_string(),
        files,
        warnings: outcome.warnings().map(describe).collect(),
        failure,
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use twin_codegen_java::JavaGenerator;

    use super::*;
    use crate::ops::tests::fixtures;

    fn options(output: &Path, dry_run: bool) -> GenerateOptions {
        GenerateOptions {
            output: output.to_path_buf(),
            dry_run,
            classes: Vec::new(),
        }
    }

    #[test]
    fn test_write_then_keep() {
        let (manifest, model) = fixtures();
        let dir = TempDir::new().unwrap();

        let first = generate(&manifest, &model, &JavaGenerator, &options(dir.path(), false));
        assert_eq!(first.failed(), 1);
        let customer = &first.classes[0];
        assert!(customer.failure.is_none());
        assert_eq!(customer.files.len(), 1);
        assert!(customer.files[0].written);
        assert!(customer.files[0].path.ends_with("CustomerTransfer.java"));

        let second = generate(&manifest, &model, &JavaGenerator, &options(dir.path(), false));
        assert!(!second.classes[0].files[0].written);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (manifest, model) = fixtures();
        let dir = TempDir::new().unwrap();

        let report = generate(&manifest, &model, &JavaGenerator, &options(dir.path(), true));
        assert_eq!(report.preview.len(), 1);
        assert!(report.preview[0].content.contains("public class CustomerTransfer {"));
        assert!(report.classes[0].files.is_empty());
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_failed_class_detail() {
        let (manifest, model) = fixtures();
        let dir = TempDir::new().unwrap();

        let report = generate(&manifest, &model, &JavaGenerator, &options(dir.path(), true));
        let ghost = &report.classes[1];
        assert_eq!(ghost.class, "com.acme.domain.Ghost");
        let failure = ghost.failure.as_ref().unwrap();
        assert_eq!(failure.message, "cannot resolve class 'com.acme.domain.Ghost'");
        assert!(!failure.causes.is_empty());
    }

    #[test]
    fn test_unmatched_class_names() {
        let (manifest, model) = fixtures();
        let dir = TempDir::new().unwrap();
        let options = GenerateOptions {
            classes: vec!["Customer".into(), "Nobody".into()],
            ..options(dir.path(), true)
        };

        let report = generate(&manifest, &model, &JavaGenerator, &options);
        assert_eq!(report.unmatched, ["Nobody"]);
        assert_eq!(report.classes.len(), 1);
        assert_eq!(report.failed(), 0);
    }
}
