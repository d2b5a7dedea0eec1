//! Generate command report data structures.

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// One entry per selected class, in manifest order.
    pub classes: Vec<ClassSummary>,
    /// `--class` names that match no configured class.
    pub unmatched: Vec<String>,
    /// Rendered files, filled on dry runs only.
    pub preview: Vec<PreviewFile>,
    pub dry_run: bool,
}

/// Outcome of one class.
#[derive(Debug)]
pub struct ClassSummary {
    pub class: String,
    pub files: Vec<FileLine>,
    pub warnings: Vec<String>,
    pub failure: Option<ClassFailure>,
}

/// An artifact path and whether it was written or kept.
#[derive(Debug)]
pub struct FileLine {
    pub path: String,
    pub written: bool,
}

/// Why a class failed, outermost message first.
#[derive(Debug, Clone)]
pub struct ClassFailure {
    pub message: String,
    pub causes: Vec<String>,
}

impl ClassFailure {
    /// Flatten an error and its source chain.
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(format!("caused by: {cause}"));
            source = cause.source();
        }
        Self {
            message: err.to_string(),
            causes,
        }
    }
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl GenerateReport {
    pub fn failed(&self) -> usize {
        self.classes.iter().filter(|c| c.failure.is_some()).count()
    }

    fn count_files(&self, written: bool) -> usize {
        self.classes
            .iter()
            .flat_map(|c| &c.files)
            .filter(|f| f.written == written)
            .count()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for name in &self.unmatched {
            out.warning(&format!("no class named '{name}' in the manifest"));
        }

        if self.dry_run {
            for file in &self.preview {
                out.divider(&file.path);
                out.preformatted(&file.content);
            }
        }

        for class in &self.classes {
            out.section(&class.class);
            for file in &class.files {
                if file.written {
                    out.added_item(&file.path);
                } else {
                    out.kept_item(&file.path);
                }
            }
            for warning in &class.warnings {
                out.warning(&format!("{}: {warning}", class.class));
            }
            if let Some(failure) = &class.failure {
                out.failure(&failure.message, &failure.causes);
            }
        }

        out.newline();
        if self.dry_run {
            out.divider("Summary");
            out.preformatted(&format!(
                "{} files would be generated, {} classes failed",
                self.preview.len(),
                self.failed()
            ));
        } else {
            out.preformatted(&format!(
                "{} written, {} skipped, {} classes failed",
                self.count_files(true),
                self.count_files(false),
                self.failed()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::Recorded;

    fn summary(failure: Option<ClassFailure>) -> ClassSummary {
        ClassSummary {
            class: "com.acme.Customer".into(),
            files: vec![
                FileLine {
                    path: "src/main/java/com/acme/CustomerTransfer.java".into(),
                    written: true,
                },
                FileLine {
                    path: "src/main/java/com/acme/CustomerService.java".into(),
                    written: false,
                },
            ],
            warnings: vec!["field 'tags': raw collection".into()],
            failure,
        }
    }

    #[test]
    fn test_written_and_skipped_markers() {
        let report = GenerateReport {
            classes: vec![summary(None)],
            ..Default::default()
        };
        let mut out = Recorded::default();
        report.render(&mut out);

        let text = out.text();
        assert!(text.contains("  + src/main/java/com/acme/CustomerTransfer.java"));
        assert!(text.contains("  = src/main/java/com/acme/CustomerService.java"));
        assert!(text.contains("warning: com.acme.Customer: field 'tags': raw collection"));
        assert!(text.ends_with("1 written, 1 skipped, 0 classes failed"));
    }

    #[test]
    fn test_failure_detail() {
        let failure = ClassFailure {
            message: "cannot resolve class 'com.acme.Customer'".into(),
            causes: vec!["caused by: unknown type".into()],
        };
        let report = GenerateReport {
            classes: vec![summary(Some(failure))],
            unmatched: vec!["Missing".into()],
            ..Default::default()
        };
        assert_eq!(report.failed(), 1);

        let mut out = Recorded::default();
        report.render(&mut out);
        let text = out.text();
        assert!(text.starts_with("warning: no class named 'Missing' in the manifest"));
        assert!(text.contains("error: cannot resolve class 'com.acme.Customer'\n  caused by: unknown type"));
    }

    #[test]
    fn test_failure_from_error_chain() {
        let inner = std::io::Error::other("disk full");
        let failure = ClassFailure::from_error(&WithSource(inner));
        assert_eq!(failure.message, "write failed");
        assert_eq!(failure.causes, vec!["caused by: disk full".to_string()]);
    }

    #[derive(Debug)]
    struct WithSource(std::io::Error);

    impl std::fmt::Display for WithSource {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("write failed")
        }
    }

    impl std::error::Error for WithSource {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }
}
