//! Check command report data structures.

use std::path::PathBuf;

use super::{
    generate::ClassFailure,
    output::{Output, Report},
};

/// Report data from checking the configuration and every class.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Number of classes that went through the pipeline.
    pub class_count: usize,
    /// Per-class failures.
    pub errors: Vec<ClassFailure>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no failed class).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.failure(&error.message, &error.causes);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            out.preformatted(&format!(
                "  {} class{} checked",
                self.class_count,
                if self.class_count == 1 { "" } else { "es" }
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::Recorded;

    fn report(errors: Vec<ClassFailure>) -> CheckReport {
        CheckReport {
            config_path: PathBuf::from("twin.toml"),
            class_count: 1,
            errors,
            warnings: vec!["Customer.tags: raw collection".into()],
            infos: Vec::new(),
        }
    }

    #[test]
    fn test_valid() {
        let mut out = Recorded::default();
        report(Vec::new()).render(&mut out);
        assert_eq!(
            out.0,
            [
                "warning: Customer.tags: raw collection",
                "",
                "✓ twin.toml is valid",
                "  1 class checked",
            ]
        );
    }

    #[test]
    fn test_invalid_omits_success_line() {
        let failure = ClassFailure {
            message: "no reverse conversion for identifier field 'id' of 'Customer'".into(),
            causes: Vec::new(),
        };
        let report = report(vec![failure]);
        assert!(!report.is_valid());

        let mut out = Recorded::default();
        report.render(&mut out);
        assert!(out.text().starts_with("error: no reverse conversion"));
        assert!(!out.text().contains("is valid"));
    }
}
