//! Validation context and Java naming rules.

use std::{ops::Range, sync::Arc};

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the shared source plus the current path through the document so
/// nested errors can say where they happened.
///
/// ```ignore
/// let ctx = ParseContext::new(src, "model.toml");
/// let class_ctx = ctx.push("Customer");
/// class_ctx.validate_identifier("name", "field name", None)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe `kind` relative to the current path, e.g. `field name in 'Customer'`.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a quoted string value in the source.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), value)
    }

    /// Validate a single Java identifier.
    ///
    /// `span` is the span of the enclosing string value when known; the
    /// source is searched otherwise.
    pub fn validate_identifier(
        &self,
        name: &str,
        kind: &str,
        span: Option<Range<usize>>,
    ) -> Result<()> {
        let span = span
            .map(|s| inner_span(&s))
            .or_else(|| self.find_span(name));

        if is_java_keyword(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for(kind), span));
        }
        if let Some(reason) = identifier_error(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span,
            ));
        }
        Ok(())
    }

    /// Validate a dotted name such as a package or a qualified class name.
    pub fn validate_dotted(
        &self,
        name: &str,
        kind: &str,
        span: Option<Range<usize>>,
    ) -> Result<()> {
        let span = span
            .map(|s| inner_span(&s))
            .or_else(|| self.find_span(name));
        let invalid = |reason: &str| {
            self.source
                .invalid_identifier_error(name, self.context_for(kind), reason, span)
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        for segment in name.split('.') {
            if segment.is_empty() {
                return Err(invalid("name cannot contain empty segments"));
            }
            if is_java_keyword(segment) {
                return Err(invalid(&format!("segment '{segment}' is a Java reserved keyword")));
            }
            if let Some(reason) = identifier_error(segment) {
                return Err(invalid(&format!("segment '{segment}': {reason}")));
            }
        }
        Ok(())
    }
}

/// Java reserved words, including the literals and contextual keywords
/// that cannot name a field.
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while",
    // Literals
    "true", "false", "null",
    // Contextual
    "_", "var", "yield", "record",
];

pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Returns the reason `name` is not a Java identifier, if it is not one.
pub(crate) fn identifier_error(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_digit() => return Some("name cannot start with a digit"),
        Some(c) if !is_identifier_char(c) => {
            return Some("name must start with a letter, underscore or '$'");
        }
        Some(_) => {}
    }
    if chars.any(|c| !is_identifier_char(c)) {
        return Some("name must contain only letters, digits, underscores and '$'");
    }
    None
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Span of a string value's contents, dropping its quotes.
pub(crate) fn inner_span(span: &Range<usize>) -> SourceSpan {
    if span.end >= span.start + 2 {
        SourceSpan::from((span.start + 1)..(span.end - 1))
    } else {
        SourceSpan::from(span.clone())
    }
}

/// Find a quoted occurrence of `value` and return the span of its contents.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert!(identifier_error("name").is_none());
        assert!(identifier_error("_private").is_none());
        assert!(identifier_error("$proxy").is_none());
        assert!(identifier_error("dataNascimento").is_none());
        assert_eq!(identifier_error(""), Some("name cannot be empty"));
        assert_eq!(identifier_error("1st"), Some("name cannot start with a digit"));
        assert!(identifier_error("first-name").is_some());
        assert!(identifier_error("a.b").is_some());
    }

    #[test]
    fn test_keywords() {
        assert!(is_java_keyword("class"));
        assert!(is_java_keyword("null"));
        assert!(!is_java_keyword("klass"));
        assert!(!is_java_keyword("String"));
    }

    #[test]
    fn test_find_value_span() {
        let src = "[generator]\ndomain_namespace = \"com.acme\"\n";
        let span = find_value_span(src, "com.acme").unwrap();
        assert_eq!(span.offset(), 32);
        assert_eq!(span.len(), 8);
        assert!(find_value_span(src, "org.acme").is_none());
    }

    #[test]
    fn test_context_for() {
        let ctx = ParseContext::new("", "model.toml");
        assert_eq!(ctx.context_for("field name"), "field name");
        let nested = ctx.push("com.acme.Customer");
        assert_eq!(
            nested.context_for("field name"),
            "field name in 'com.acme.Customer'"
        );
    }

    #[test]
    fn test_validate_identifier_keyword() {
        let ctx = ParseContext::new("fields = [{ name = \"class\" }]", "model.toml");
        let err = ctx.validate_identifier("class", "field name", None).unwrap_err();
        assert!(err.to_string().contains("reserved keyword"));
    }

    #[test]
    fn test_validate_dotted() {
        let ctx = ParseContext::new("", "twin.toml");
        assert!(ctx.validate_dotted("com.acme.domain", "namespace", None).is_ok());
        assert!(ctx.validate_dotted("", "namespace", None).is_err());
        assert!(ctx.validate_dotted("com..acme", "namespace", None).is_err());
        assert!(ctx.validate_dotted("com.new.acme", "namespace", None).is_err());
    }
}
