//! Class model and intermediate representation types for the twin generator.
//!
//! This crate provides the language-neutral description of domain classes
//! and the transfer-side IR produced from them. Nothing in here reads files
//! or renders source text.
//!
//! # Architecture
//!
//! ```text
//! model.toml → twin-manifest (parsing) → ClassModel → twin-codegen → GeneratedClass → renderer
//! ```
//!
//! - [`ClassModel`] resolves classes by name and exposes their full,
//!   name-sorted field set including inherited fields.
//! - [`DeclaredType`] is the resolved declared type of a field.
//! - [`TypeClassification`], [`ConversionPlan`] and [`GeneratedClass`] are
//!   the outputs of classification and synthesis.

mod catalog;
mod classification;
mod model;
mod name;
mod syntax;
mod transfer;
mod types;

pub use catalog::{
    CollectionKind, CollectionType, collection_type, is_boxed_or_string, is_known_simple,
    resolve_alias,
};
pub use classification::{Ambiguity, TypeClassification, UnsupportedShape};
pub use model::{
    ClassDef, ClassModel, ClassModelBuilder, FieldDef, FieldDescriptor, LoadedClass, ModelError,
};
pub use name::TypeName;
pub use syntax::{ArgExpr, Bound, TypeExpr, TypeParseError, parse_type};
pub use transfer::{
    Assignment, ConversionPlan, Expr, FieldPlan, GeneratedClass, NullPolicy, TransferField,
    TransferType,
};
pub use types::{DeclaredType, Primitive, TypeArg, TypeKind, WildcardBound};
