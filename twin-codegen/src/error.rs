use std::path::PathBuf;

use thiserror::Error;
use twin_model::{ModelError, TypeName};

/// Why generation failed for one class.
///
/// A failure never aborts the run; it is reported in that class's outcome.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("cannot resolve class '{class}'")]
    UnresolvableClass {
        class: TypeName,
        #[source]
        source: ModelError,
    },

    #[error("no reverse conversion for identifier field '{field}' of '{class}'")]
    UnsupportedReverseConversion { class: TypeName, field: String },

    #[error("cannot synthesize '{class}'{}: {reason}", at_field(.field))]
    SynthesisFailure {
        class: TypeName,
        field: Option<String>,
        reason: String,
    },

    #[error("failed to render '{class}': {message}")]
    Render { class: TypeName, message: String },

    #[error("failed to write '{}' for '{class}'", .path.display())]
    Emit {
        class: TypeName,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerationError {
    pub(crate) fn synthesis(
        class: &TypeName,
        field: Option<&str>,
        reason: impl Into<String>,
    ) -> Self {
        Self::SynthesisFailure {
            class: class.clone(),
            field: field.map(str::to_string),
            reason: reason.into(),
        }
    }

    /// The class the failure belongs to.
    pub fn class(&self) -> &TypeName {
        match self {
            Self::UnresolvableClass { class, .. }
            | Self::UnsupportedReverseConversion { class, .. }
            | Self::SynthesisFailure { class, .. }
            | Self::Render { class, .. }
            | Self::Emit { class, .. } => class,
        }
    }

    /// The field the failure points at, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::UnsupportedReverseConversion { field, .. } => Some(field),
            Self::SynthesisFailure { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

fn at_field(field: &Option<String>) -> String {
    match field {
        Some(field) => format!(" (field '{field}')"),
        None => String::new(),
    }
}
