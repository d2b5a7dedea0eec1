//! Plan operation: show how every field of the selected classes converts.

use twin_codegen::{language::LanguageCodegen, run::Run};
use twin_manifest::Manifest;
use twin_model::{ClassModel, Expr, GeneratedClass};

use crate::reports::{ClassFailure, PlanClass, PlanField, PlanReport};

/// Execute the plan operation.
pub fn plan(
    manifest: &Manifest,
    model: &ClassModel,
    codegen: &dyn LanguageCodegen,
    classes: &[String],
) -> PlanReport {
    let result = Run::new(manifest, model, codegen)
        .only(classes.iter().cloned())
        .check();

    let mut report = PlanReport::default();
    for outcome in result.classes {
        match outcome.result {
            Ok(success) => {
                report.classes.push(plan_class(&success.generated));
                report.generated.push(success.generated);
            }
            Err(err) => report.failures.push(ClassFailure::from_error(&err)),
        }
    }
    report
}

fn plan_class(class: &GeneratedClass) -> PlanClass {
    let fields = class
        .fields
        .iter()
        .map(|field| PlanField {
            name: field.name.clone(),
            declared: field.declared.to_string(),
            classification: field.classification.to_string(),
            transfer_type: field.ty.to_string(),
            no_reverse: class
                .unsupported_reverse()
                .find(|a| a.field == field.name)
                .and_then(|a| match &a.expr {
                    Expr::Unsupported { reason } => Some(reason.clone()),
                    _ => None,
                }),
        })
        .collect();

    PlanClass {
        domain: class.domain.to_string(),
        transfer: class.name.to_string(),
        fields,
    }
}
