use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest and model parsing (boxed to keep it small on
/// the stack).
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename of the file being parsed.
///
/// Error factories live here so call sites only pass what differs.
///
/// ```ignore
/// let ctx = SourceContext::new(content, "twin.toml");
/// return Err(ctx.validation_error_at("namespace cannot be empty", span));
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error with a span.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }

    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    pub fn invalid_type_error(
        &self,
        ty: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidType {
            src: self.named_source(),
            span,
            ty: ty.into(),
            reason: reason.into(),
        })
    }

    pub fn duplicate_error(
        &self,
        kind: impl Into<String>,
        name: impl Into<String>,
        first_span: impl Into<SourceSpan>,
        second_span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Duplicate {
            src: self.named_source(),
            first_span: first_span.into(),
            second_span: second_span.into(),
            kind: kind.into(),
            name: name.into(),
        })
    }

    pub fn missing_layer_error(
        &self,
        artifact: impl Into<String>,
        layer: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MissingLayer {
            src: self.named_source(),
            span,
            artifact: artifact.into(),
            layer: layer.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(twin::io_error),
        help("pass the configuration with '--config <path>' or create a twin.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", .src.name())]
    #[diagnostic(code(twin::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(twin::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a Java reserved keyword")]
    #[diagnostic(
        code(twin::reserved_keyword),
        help("rename the {context} '{name}' to something else")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} '{name}'")]
    #[diagnostic(
        code(twin::invalid_identifier),
        help(
            "{reason}. Use only letters, digits, underscores and '$', not starting with a digit."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("invalid type expression '{ty}'")]
    #[diagnostic(
        code(twin::invalid_type),
        help("types look like 'int', 'String', 'byte[]' or 'java.util.List<com.acme.Role>'")
    )]
    InvalidType {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: Option<SourceSpan>,
        ty: String,
        reason: String,
    },

    #[error("duplicate {kind} '{name}'")]
    #[diagnostic(
        code(twin::duplicate),
        help("remove one of the declarations or rename it")
    )]
    Duplicate {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        kind: String,
        name: String,
    },

    #[error("artifact '{artifact}' needs the '{layer}' layer package")]
    #[diagnostic(
        code(twin::missing_layer),
        help("add '{layer} = \"<package>\"' under [layers]")
    )]
    MissingLayer {
        #[source_code]
        src: NamedSource<String>,
        #[label("requested here")]
        span: Option<SourceSpan>,
        artifact: String,
        layer: String,
    },

    #[error("type '{name}' is declared in both '{first}' and '{second}'")]
    #[diagnostic(
        code(twin::duplicate_type),
        help("each class or enum may be declared in only one model file")
    )]
    DuplicateType {
        name: String,
        first: String,
        second: String,
    },
}
