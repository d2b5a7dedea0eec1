//! Resolve phase - loads the class and its inherited fields.

use crate::{
    GenerationError,
    pipeline::{ClassContext, Phase},
};

pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Load the domain class and flatten its inherited fields"
    }

    fn run(&self, ctx: &mut ClassContext<'_>) -> Result<(), GenerationError> {
        let loaded = ctx
            .model
            .load(&ctx.class)
            .map_err(|source| GenerationError::UnresolvableClass {
                class: ctx.class.clone(),
                source,
            })?;

        let inherited = loaded.fields.iter().filter(|f| f.inherited).count();
        tracing::debug!(
            class = %ctx.class,
            fields = loaded.fields.len(),
            inherited,
            "resolved class"
        );
        if loaded.fields.is_empty() {
            ctx.add_warning(self.name(), format!("'{}' declares no fields", ctx.class.name()));
        } else {
            ctx.add_info(
                self.name(),
                format!("{} fields, {} inherited", loaded.fields.len(), inherited),
            );
        }

        ctx.loaded = Some(loaded);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use twin_model::{ClassDef, ClassModel, FieldDef, ModelError, TypeName, parse_type};

    use super::*;
    use crate::transfer::TransferConfig;

    #[test]
    fn test_resolve_records_field_counts() {
        let model = ClassModel::builder()
            .class(ClassDef {
                name: TypeName::parse("com.acme.domain.Base"),
                extends: None,
                fields: vec![FieldDef {
                    name: "id".into(),
                    ty: parse_type("Long").unwrap(),
                }],
            })
            .class(ClassDef {
                name: TypeName::parse("com.acme.domain.Order"),
                extends: Some("Base".into()),
                fields: vec![FieldDef {
                    name: "total".into(),
                    ty: parse_type("BigDecimal").unwrap(),
                }],
            })
            .build();
        let config = TransferConfig::new("com.acme.domain", "com.acme.transfer", "Transfer");
        let mut ctx =
            ClassContext::new(&model, &config, TypeName::parse("com.acme.domain.Order"), "");

        ResolvePhase.run(&mut ctx).unwrap();
        assert_eq!(ctx.loaded.as_ref().unwrap().fields.len(), 2);
        assert_eq!(ctx.diagnostics[0].message, "2 fields, 1 inherited");
    }

    #[test]
    fn test_unknown_class_is_unresolvable() {
        let model = ClassModel::default();
        let config = TransferConfig::new("com.acme.domain", "com.acme.transfer", "Transfer");
        let class = TypeName::parse("com.acme.domain.Ghost");
        let mut ctx = ClassContext::new(&model, &config, class.clone(), "");

        match ResolvePhase.run(&mut ctx) {
            Err(GenerationError::UnresolvableClass { source, .. }) => {
                assert_eq!(source, ModelError::UnknownClass(class));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
