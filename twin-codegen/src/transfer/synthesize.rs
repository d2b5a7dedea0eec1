//! Transfer Class Synthesizer.

use std::collections::HashMap;

use twin_model::{
    Assignment, ConversionPlan, GeneratedClass, LoadedClass, TransferField, TypeClassification,
    TypeName, UnsupportedShape,
};

use super::TransferConfig;
use crate::GenerationError;

/// Builds conversion plans and transfer class descriptors for one run.
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer<'a> {
    config: &'a TransferConfig,
    strict_identifiers: bool,
}

impl<'a> Synthesizer<'a> {
    pub fn new(config: &'a TransferConfig) -> Self {
        Self {
            config,
            strict_identifiers: config.strict_identifiers,
        }
    }

    /// Override `strict_identifiers` from the config.
    pub fn strict_identifiers(mut self, strict: bool) -> Self {
        self.strict_identifiers = strict;
        self
    }

    /// Classify every field of `class` and derive its conversions.
    ///
    /// Fails on the first field whose shape has no conversion rule.
    pub fn plan(&self, class: &LoadedClass) -> Result<ConversionPlan, GenerationError> {
        let classifier = self.config.classifier();
        let expressions = self.config.expressions();

        let fields = class
            .fields
            .iter()
            .map(|field| {
                let classification = classifier.classify(&field.declared);
                expressions
                    .plan_field(field, classification)
                    .map_err(|shape| {
                        GenerationError::synthesis(&class.name, Some(&field.name), shape.to_string())
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ConversionPlan {
            domain: class.name.clone(),
            fields,
        })
    }

    /// Like [`Synthesizer::plan`], but fields without a conversion rule are
    /// left out of the plan and returned next to it.
    pub fn plan_supported(
        &self,
        class: &LoadedClass,
    ) -> (ConversionPlan, Vec<(String, UnsupportedShape)>) {
        let classifier = self.config.classifier();
        let expressions = self.config.expressions();

        let mut fields = Vec::with_capacity(class.fields.len());
        let mut dropped = Vec::new();
        for field in &class.fields {
            match expressions.plan_field(field, classifier.classify(&field.declared)) {
                Ok(plan) => fields.push(plan),
                Err(shape) => dropped.push((field.name.clone(), shape)),
            }
        }

        let plan = ConversionPlan {
            domain: class.name.clone(),
            fields,
        };
        (plan, dropped)
    }

    /// Assemble the transfer class named `name` from a plan.
    pub fn synthesize(
        &self,
        plan: &ConversionPlan,
        name: TypeName,
    ) -> Result<GeneratedClass, GenerationError> {
        let domain = &plan.domain;
        if name == *domain {
            return Err(GenerationError::synthesis(
                domain,
                None,
                format!("transfer class name '{name}' equals the domain class name"),
            ));
        }

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (index, field) in plan.fields.iter().enumerate() {
            if let Some(first) = seen.insert(field.field.as_str(), index) {
                let first = &plan.fields[first];
                return Err(GenerationError::synthesis(
                    domain,
                    Some(&field.field),
                    format!(
                        "declared as both '{}' and '{}' along the inheritance chain",
                        first.declared.short(),
                        field.declared.short()
                    ),
                ));
            }
            if let TypeClassification::Unsupported { shape } = &field.classification {
                return Err(GenerationError::synthesis(
                    domain,
                    Some(&field.field),
                    shape.to_string(),
                ));
            }
            if self.strict_identifiers && !field.to_domain.is_supported() {
                return Err(GenerationError::UnsupportedReverseConversion {
                    class: domain.clone(),
                    field: field.field.clone(),
                });
            }
        }

        let fields = plan
            .fields
            .iter()
            .map(|f| TransferField {
                name: f.field.clone(),
                ty: f.transfer_type.clone(),
                declared: f.declared.clone(),
                classification: f.classification.clone(),
            })
            .collect();
        let from_domain = plan
            .fields
            .iter()
            .map(|f| Assignment {
                field: f.field.clone(),
                expr: f.to_transfer.clone(),
            })
            .collect();
        let to_domain = plan
            .fields
            .iter()
            .map(|f| Assignment {
                field: f.field.clone(),
                expr: f.to_domain.clone(),
            })
            .collect();

        Ok(GeneratedClass {
            name,
            domain: domain.clone(),
            fields,
            from_domain,
            to_domain,
        })
    }

    /// Plan and assemble in one step.
    pub fn synthesize_class(
        &self,
        class: &LoadedClass,
        package_suffix: &str,
    ) -> Result<GeneratedClass, GenerationError> {
        let plan = self.plan(class)?;
        let name = self.config.transfer_class_name(&class.name, package_suffix);
        self.synthesize(&plan, name)
    }
}

#[cfg(test)]
mod tests {
    use twin_model::{ClassDef, ClassModel, Expr, FieldDef, NullPolicy, parse_type};

    use super::*;

    fn field(name: &str, ty: &str) -> FieldDef {
        FieldDef {
            name: name.to_string(),
            ty: parse_type(ty).unwrap(),
        }
    }

    fn customer_model() -> ClassModel {
        ClassModel::builder()
            .class(ClassDef {
                name: TypeName::parse("com.acme.domain.customer.Customer"),
                extends: None,
                fields: vec![
                    field("id", "ArchbaseIdentifier"),
                    field("name", "String"),
                    field("age", "int"),
                    field("tags", "Set<String>"),
                    field("address", "Address"),
                    field("roles", "List<Role>"),
                ],
            })
            .class(ClassDef {
                name: TypeName::parse("com.acme.domain.customer.Address"),
                extends: None,
                fields: vec![field("city", "String")],
            })
            .class(ClassDef {
                name: TypeName::parse("com.acme.domain.customer.Role"),
                extends: None,
                fields: vec![field("code", "String")],
            })
            .build()
    }

    fn config() -> TransferConfig {
        TransferConfig::new("com.acme.domain", "com.acme.transfer", "Transfer")
    }

    fn load(model: &ClassModel, name: &str) -> LoadedClass {
        model.load(&TypeName::parse(name)).unwrap()
    }

    #[test]
    fn test_customer_transfer_fields() {
        let config = config();
        let model = customer_model();
        let class = Synthesizer::new(&config)
            .synthesize_class(&load(&model, "com.acme.domain.customer.Customer"), ".customer")
            .unwrap();

        assert_eq!(class.name.qualified(), "com.acme.transfer.customer.CustomerTransfer");
        let fields: Vec<(String, String)> = class
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.ty.to_string()))
            .collect();
        assert_eq!(
            fields,
            vec![
                ("address".into(), "com.acme.transfer.customer.AddressTransfer".into()),
                ("age".into(), "int".into()),
                ("id".into(), "java.lang.String".into()),
                ("name".into(), "java.lang.String".into()),
                ("roles".into(), "java.util.List<com.acme.transfer.customer.RoleTransfer>".into()),
                ("tags".into(), "java.util.Set<java.lang.String>".into()),
            ]
        );

        let roles = class.to_domain.iter().find(|a| a.field == "roles").unwrap();
        assert!(matches!(
            roles.expr,
            Expr::Each {
                on_null: NullPolicy::EmptyCollection,
                ..
            }
        ));
        assert_eq!(class.unsupported_reverse().count(), 1);
    }

    #[test]
    fn test_strict_identifiers_fail_the_class() {
        let mut config = config();
        config.strict_identifiers = true;
        let model = customer_model();
        let err = Synthesizer::new(&config)
            .synthesize_class(&load(&model, "com.acme.domain.customer.Customer"), "")
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::UnsupportedReverseConversion { ref field, .. } if field == "id"
        ));
    }

    #[test]
    fn test_strict_identifiers_can_be_relaxed() {
        let mut config = config();
        config.strict_identifiers = true;
        let model = customer_model();
        let class = Synthesizer::new(&config)
            .strict_identifiers(false)
            .synthesize_class(&load(&model, "com.acme.domain.customer.Customer"), "")
            .unwrap();
        assert_eq!(class.unsupported_reverse().count(), 1);
    }

    #[test]
    fn test_plan_supported_sets_aside_unconvertible_fields() {
        let model = ClassModel::builder()
            .class(ClassDef {
                name: TypeName::parse("com.acme.domain.Matrix"),
                extends: None,
                fields: vec![field("rows", "List<List<String>>"), field("title", "String")],
            })
            .build();
        let config = config();
        let (plan, dropped) =
            Synthesizer::new(&config).plan_supported(&load(&model, "com.acme.domain.Matrix"));
        let names: Vec<_> = plan.fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, ["title"]);
        assert_eq!(dropped, [("rows".to_string(), UnsupportedShape::NestedContainer)]);
    }

    #[test]
    fn test_unsupported_element_names_field() {
        let model = ClassModel::builder()
            .class(ClassDef {
                name: TypeName::parse("com.acme.domain.Matrix"),
                extends: None,
                fields: vec![field("rows", "List<List<String>>")],
            })
            .build();
        let config = config();
        let err = Synthesizer::new(&config)
            .synthesize_class(&load(&model, "com.acme.domain.Matrix"), "")
            .unwrap_err();
        assert_eq!(err.field(), Some("rows"));
        assert!(err.to_string().contains("nested collection"));
    }

    #[test]
    fn test_redeclared_field_is_rejected() {
        let model = ClassModel::builder()
            .class(ClassDef {
                name: TypeName::parse("com.acme.domain.Base"),
                extends: None,
                fields: vec![field("code", "String")],
            })
            .class(ClassDef {
                name: TypeName::parse("com.acme.domain.Child"),
                extends: Some("Base".into()),
                fields: vec![field("code", "Long")],
            })
            .build();
        let config = config();
        let err = Synthesizer::new(&config)
            .synthesize_class(&load(&model, "com.acme.domain.Child"), "")
            .unwrap_err();
        assert_eq!(err.field(), Some("code"));
    }

    #[test]
    fn test_name_clash_is_rejected() {
        let config = TransferConfig::new("com.acme.domain", "com.acme.domain", "");
        let model = customer_model();
        let err = Synthesizer::new(&config)
            .synthesize_class(&load(&model, "com.acme.domain.customer.Address"), ".customer")
            .unwrap_err();
        assert!(err.to_string().contains("equals the domain class name"));
    }
}
