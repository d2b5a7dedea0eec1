//! Check operation: resolve, classify and synthesize without emitting.

use std::path::Path;

use twin_codegen::{language::LanguageCodegen, pipeline::Severity, run::Run};
use twin_manifest::Manifest;
use twin_model::ClassModel;

use super::describe;
use crate::reports::{CheckReport, ClassFailure};

/// Execute the check operation.
pub fn check(
    manifest: &Manifest,
    model: &ClassModel,
    codegen: &dyn LanguageCodegen,
    config_path: &Path,
) -> CheckReport {
    let result = Run::new(manifest, model, codegen).check();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for outcome in &result.classes {
        for diag in &outcome.diagnostics {
            let msg = format!("{}: {}", outcome.class, describe(diag));
            match diag.severity {
                // Errors surface through the class result.
                Severity::Error => {}
                Severity::Warning => warnings.push(msg),
                Severity::Info => infos.push(msg),
            }
        }
        if let Err(err) = &outcome.result {
            errors.push(ClassFailure::from_error(err));
        }
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        class_count: result.classes.len(),
        errors,
        warnings,
        infos,
    }
}

#[cfg(test)]
mod tests {
    use twin_codegen_java::JavaGenerator;

    use super::*;
    use crate::ops::tests::fixtures;

    #[test]
    fn test_check_reports_every_class() {
        let (manifest, model) = fixtures();
        let report = check(&manifest, &model, &JavaGenerator, Path::new("twin.toml"));

        assert_eq!(report.class_count, 2);
        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].message.contains("Ghost"));
        assert!(
            report
                .warnings
                .iter()
                .all(|w| w.starts_with("com.acme.domain.Customer: "))
        );
        assert!(!report.warnings.is_empty());
    }

    #[test]
    fn test_check_writes_nothing() {
        let (manifest, model) = fixtures();
        let dir = tempfile::tempdir().unwrap();
        let _ = check(&manifest, &model, &JavaGenerator, &dir.path().join("twin.toml"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
