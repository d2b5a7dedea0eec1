//! Plan command report data structures.

use twin_model::GeneratedClass;

use super::{
    generate::ClassFailure,
    output::{Output, Report},
};

/// Per-field classification of the selected classes.
#[derive(Debug, Default)]
pub struct PlanReport {
    pub classes: Vec<PlanClass>,
    pub failures: Vec<ClassFailure>,
    /// Descriptors of the classes that synthesized, for `--json`.
    pub generated: Vec<GeneratedClass>,
}

impl PlanReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.generated)
    }
}

#[derive(Debug)]
pub struct PlanClass {
    pub domain: String,
    pub transfer: String,
    pub fields: Vec<PlanField>,
}

#[derive(Debug)]
pub struct PlanField {
    pub name: String,
    pub declared: String,
    pub classification: String,
    pub transfer_type: String,
    /// Set when the field has no conversion back to the domain type.
    pub no_reverse: Option<String>,
}

impl Report for PlanReport {
    fn render(&self, out: &mut dyn Output) {
        for class in &self.classes {
            out.section(&format!("{} -> {}", class.domain, class.transfer));
            for field in &class.fields {
                let mut line = format!(
                    "{} -> {} ({})",
                    field.declared, field.transfer_type, field.classification
                );
                if let Some(reason) = &field.no_reverse {
                    line.push_str(&format!(", no reverse: {reason}"));
                }
                out.key_value_indented(&field.name, &line);
            }
            out.newline();
        }

        for failure in &self.failures {
            out.failure(&failure.message, &failure.causes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::Recorded;

    #[test]
    fn test_field_lines() {
        let report = PlanReport {
            classes: vec![PlanClass {
                domain: "com.acme.domain.Customer".into(),
                transfer: "com.acme.transfer.CustomerTransfer".into(),
                fields: vec![
                    PlanField {
                        name: "id".into(),
                        declared: "ArchbaseIdentifier".into(),
                        classification: "identifier".into(),
                        transfer_type: "String".into(),
                        no_reverse: Some("identifier wrapper has no conversion".into()),
                    },
                    PlanField {
                        name: "age".into(),
                        declared: "int".into(),
                        classification: "primitive int".into(),
                        transfer_type: "int".into(),
                        no_reverse: None,
                    },
                ],
            }],
            ..Default::default()
        };

        let mut out = Recorded::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            [
                "com.acme.domain.Customer -> com.acme.transfer.CustomerTransfer:",
                "  id: ArchbaseIdentifier -> String (identifier), no reverse: identifier wrapper has no conversion",
                "  age: int -> int (primitive int)",
                "",
            ]
        );
    }
}
