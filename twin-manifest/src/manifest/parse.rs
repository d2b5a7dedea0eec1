//! Manifest parsing from files and strings.

use std::{collections::HashMap, ops::Range, path::Path, str::FromStr};

use super::{Manifest, inner_span, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "twin.toml")
    }
}

impl Manifest {
    /// Parse a twin.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a twin.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    let generator = &manifest.generator;
    let gen_ctx = ctx.push("generator");

    gen_ctx.validate_dotted(&generator.domain_namespace, "domain namespace", None)?;
    gen_ctx.validate_dotted(&generator.transfer_namespace, "transfer namespace", None)?;
    gen_ctx.validate_identifier(&generator.identifier_type, "identifier type", None)?;
    validate_suffix(&gen_ctx, &generator.transfer_suffix)?;
    if generator.models.is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("at least one model file must be listed in [generator].models"));
    }

    if let Some(layers) = &manifest.layers {
        let layers_ctx = ctx.push("layers");
        for (layer, value) in layers.entries() {
            layers_ctx.validate_dotted(value, &format!("{} package", layer.key()), None)?;
        }
    }

    let mut seen: HashMap<&str, Range<usize>> = HashMap::new();
    for entry in &manifest.classes {
        let class_ctx = ctx.push(entry.name());
        let name_span = entry.name_span();

        class_ctx.validate_dotted(entry.name(), "class name", Some(name_span.clone()))?;
        if !entry.name().contains('.') {
            return Err(ctx.source_context().validation_error_at(
                format!("class name '{}' must be fully qualified", entry.name()),
                inner_span(&name_span),
            ));
        }
        if let Some(first) = seen.insert(entry.name(), name_span.clone()) {
            return Err(ctx.source_context().duplicate_error(
                "class entry",
                entry.name(),
                inner_span(&first),
                inner_span(&name_span),
            ));
        }

        if !entry.package_suffix.is_empty() {
            match entry.package_suffix.strip_prefix('.') {
                Some(rest) => class_ctx.validate_dotted(rest, "package suffix", None)?,
                None => {
                    return Err(ctx.source_context().validation_error_at(
                        format!(
                            "package suffix '{}' must start with '.'",
                            entry.package_suffix
                        ),
                        class_ctx
                            .find_span(&entry.package_suffix)
                            .unwrap_or_else(|| inner_span(&name_span)),
                    ));
                }
            }
        }

        for artifact in entry.spanned_artifacts() {
            let kind = *artifact.get_ref();
            for layer in kind.required_layers() {
                if manifest.layer(*layer).is_none() {
                    return Err(ctx.source_context().missing_layer_error(
                        kind.as_str(),
                        layer.key(),
                        Some(inner_span(&artifact.span())),
                    ));
                }
            }
        }
    }
    Ok(())
}

fn validate_suffix(ctx: &ParseContext<'_>, suffix: &str) -> Result<()> {
    let valid = !suffix.is_empty()
        && suffix
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if valid {
        Ok(())
    } else {
        Err(ctx.source_context().invalid_identifier_error(
            suffix,
            ctx.context_for("transfer suffix"),
            "the suffix is appended to class names and must be a non-empty identifier fragment",
            ctx.find_span(suffix),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::ArtifactKind;

    const MINIMAL: &str = r#"
[generator]
domain_namespace = "com.acme.domain"
transfer_namespace = "com.acme.transfer"

[[classes]]
name = "com.acme.domain.customer.Customer"
"#;

    const FULL: &str = r#"
[generator]
domain_namespace = "com.acme.domain"
transfer_namespace = "com.acme.transfer"
transfer_suffix = "Dto"
identifier_type = "EntityId"
source_root = "generated"
models = ["models/customer.toml", "models/shared.toml"]
strict_identifiers = true

[layers]
persistence = "com.acme.infra.persistence"
repository = "com.acme.infra.repository"
mapper = "com.acme.infra.mapper"
adapter = "com.acme.infra.adapter"
service = "com.acme.application"
controller = "com.acme.api"
security_adapter = "com.acme.security.SecurityAdapter"

[[classes]]
name = "com.acme.domain.customer.Customer"
package_suffix = ".customer"
artifacts = ["transfer", "repository", "mapper", "adapter", "service", "controller"]
"#;

    #[test]
    fn test_defaults() {
        let manifest: Manifest = MINIMAL.parse().unwrap();
        let generator = &manifest.generator;
        assert_eq!(generator.transfer_suffix, "Transfer");
        assert_eq!(generator.identifier_type, "ArchbaseIdentifier");
        assert_eq!(generator.source_root, PathBuf::from("src/main/java"));
        assert_eq!(generator.models, vec![PathBuf::from("model.toml")]);
        assert!(!generator.strict_identifiers);
        assert!(manifest.layers.is_none());

        let entry = &manifest.classes[0];
        assert_eq!(entry.package_suffix, "");
        assert_eq!(entry.artifacts(), vec![ArtifactKind::Transfer]);
        assert_eq!(entry.type_name().name(), "Customer");
    }

    #[test]
    fn test_full_manifest() {
        let manifest: Manifest = FULL.parse().unwrap();
        assert_eq!(manifest.generator.transfer_suffix, "Dto");
        assert!(manifest.generator.strict_identifiers);
        assert_eq!(manifest.generator.models.len(), 2);

        let entry = manifest.class("Customer").unwrap();
        assert_eq!(entry.artifacts().len(), 6);
        assert!(entry.wants(ArtifactKind::Controller));
        assert_eq!(
            manifest.layer(crate::Layer::SecurityAdapter),
            Some("com.acme.security.SecurityAdapter")
        );
    }

    #[test]
    fn test_missing_layer() {
        let src = MINIMAL.replace(
            "name = \"com.acme.domain.customer.Customer\"",
            "name = \"com.acme.domain.customer.Customer\"\nartifacts = [\"transfer\", \"mapper\"]",
        );
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::MissingLayer {
                ref artifact,
                ref layer,
                span,
                ..
            } => {
                assert_eq!(artifact, "mapper");
                assert_eq!(layer, "mapper");
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "mapper");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_service_needs_security_adapter() {
        let src = FULL.replace(
            "security_adapter = \"com.acme.security.SecurityAdapter\"\n",
            "",
        );
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("'security_adapter'"));
    }

    #[test]
    fn test_duplicate_class() {
        let src = format!("{MINIMAL}\n[[classes]]\nname = \"com.acme.domain.customer.Customer\"\n");
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Duplicate { .. }));
    }

    #[test]
    fn test_invalid_namespace() {
        let src = MINIMAL.replace("com.acme.transfer", "com.acme..transfer");
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("transfer namespace"));
    }

    #[test]
    fn test_unqualified_class() {
        let src = MINIMAL.replace("com.acme.domain.customer.Customer", "Customer");
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("must be fully qualified"));
    }

    #[test]
    fn test_package_suffix_needs_dot() {
        let src = format!("{MINIMAL}package_suffix = \"customer\"\n");
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("must start with '.'"));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let src = format!("{MINIMAL}generate_dto = true\n");
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_suffix() {
        let src = MINIMAL.replace(
            "transfer_namespace = \"com.acme.transfer\"",
            "transfer_namespace = \"com.acme.transfer\"\ntransfer_suffix = \"-Dto\"",
        );
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }
}
