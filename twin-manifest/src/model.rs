//! Model files: the domain classes and enums a generation run reads.
//!
//! ```toml
//! [[classes]]
//! name = "com.acme.domain.customer.Customer"
//! extends = "com.acme.domain.shared.Entity"
//! fields = [
//!   { name = "name", type = "String" },
//!   { name = "roles", type = "List<Role>" },
//! ]
//!
//! [[enums]]
//! name = "com.acme.domain.customer.Status"
//! ```

use std::{
    collections::HashMap,
    ops::Range,
    path::{Path, PathBuf},
    str::FromStr,
};

use miette::SourceSpan;
use serde::Deserialize;
use toml::Spanned;
use twin_model::{ClassDef, ClassModel, FieldDef, TypeName, parse_type};

use crate::{Error, ParseContext, Result, error::SourceContext, manifest::inner_span};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawModel {
    #[serde(default)]
    classes: Vec<RawClass>,
    #[serde(default)]
    enums: Vec<RawEnum>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClass {
    name: Spanned<String>,
    #[serde(default)]
    extends: Option<Spanned<String>>,
    #[serde(default)]
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    name: Spanned<String>,
    #[serde(rename = "type")]
    ty: Spanned<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEnum {
    name: Spanned<String>,
}

/// The validated contents of one model file.
#[derive(Debug, Clone, Default)]
pub struct ModelFile {
    pub classes: Vec<ClassDef>,
    pub enums: Vec<TypeName>,
}

impl FromStr for ModelFile {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "model.toml")
    }
}

impl ModelFile {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let raw: RawModel = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
        convert(raw, &ParseContext::new(content, filename))
    }

    /// Every declared type name, classes first.
    pub fn declared(&self) -> impl Iterator<Item = &TypeName> {
        self.classes.iter().map(|c| &c.name).chain(&self.enums)
    }

    /// Resolve this file on its own into a class model.
    pub fn into_model(self) -> ClassModel {
        let builder = self.classes.into_iter().fold(ClassModel::builder(), |b, c| b.class(c));
        self.enums
            .into_iter()
            .fold(builder, |b, e| b.enumeration(e))
            .build()
    }
}

fn convert(raw: RawModel, ctx: &ParseContext<'_>) -> Result<ModelFile> {
    let mut seen: HashMap<String, Range<usize>> = HashMap::new();
    let mut declare = |name: &Spanned<String>, kind: &str| -> Result<TypeName> {
        ctx.validate_dotted(name.get_ref(), &format!("{kind} name"), Some(name.span()))?;
        if !name.get_ref().contains('.') {
            return Err(ctx.source_context().validation_error_at(
                format!("{kind} name '{}' must be fully qualified", name.get_ref()),
                inner_span(&name.span()),
            ));
        }
        if let Some(first) = seen.insert(name.get_ref().clone(), name.span()) {
            return Err(ctx.source_context().duplicate_error(
                "type",
                name.get_ref(),
                inner_span(&first),
                inner_span(&name.span()),
            ));
        }
        Ok(TypeName::parse(name.get_ref()))
    };

    let mut file = ModelFile::default();
    for class in &raw.classes {
        let name = declare(&class.name, "class")?;
        let class_ctx = ctx.push(class.name.get_ref());

        if let Some(extends) = &class.extends {
            class_ctx.validate_dotted(extends.get_ref(), "superclass", Some(extends.span()))?;
        }

        let mut field_spans: HashMap<&str, Range<usize>> = HashMap::new();
        let mut fields = Vec::with_capacity(class.fields.len());
        for field in &class.fields {
            let field_name = field.name.get_ref();
            class_ctx.validate_identifier(field_name, "field name", Some(field.name.span()))?;
            if let Some(first) = field_spans.insert(field_name, field.name.span()) {
                return Err(ctx.source_context().duplicate_error(
                    format!("field in '{}'", class.name.get_ref()),
                    field_name,
                    inner_span(&first),
                    inner_span(&field.name.span()),
                ));
            }

            let ty = parse_type(field.ty.get_ref()).map_err(|e| {
                let value = inner_span(&field.ty.span());
                let offset = (value.offset() + e.offset).min(value.offset() + value.len());
                ctx.source_context().invalid_type_error(
                    field.ty.get_ref(),
                    e.message,
                    Some(SourceSpan::from((offset, 1))),
                )
            })?;
            fields.push(FieldDef {
                name: field_name.clone(),
                ty,
            });
        }

        file.classes.push(ClassDef {
            name,
            extends: class.extends.as_ref().map(|e| e.get_ref().clone()),
            fields,
        });
    }

    for enumeration in &raw.enums {
        file.enums.push(declare(&enumeration.name, "enum")?);
    }

    Ok(file)
}

/// Parse model files and combine them into one class model.
///
/// A type may be declared in only one file.
pub fn load_models<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<ClassModel> {
    let mut origin: HashMap<TypeName, PathBuf> = HashMap::new();
    let mut builder = ClassModel::builder();

    for path in paths {
        let path = path.as_ref();
        let file = ModelFile::from_file(path)?;
        tracing::debug!(
            path = %path.display(),
            classes = file.classes.len(),
            enums = file.enums.len(),
            "loaded model file"
        );

        for name in file.declared() {
            if let Some(first) = origin.insert(name.clone(), path.to_path_buf()) {
                return Err(Box::new(Error::DuplicateType {
                    name: name.to_string(),
                    first: first.display().to_string(),
                    second: path.display().to_string(),
                }));
            }
        }

        builder = file.classes.into_iter().fold(builder, |b, c| b.class(c));
        builder = file.enums.into_iter().fold(builder, |b, e| b.enumeration(e));
    }

    Ok(builder.build())
}
