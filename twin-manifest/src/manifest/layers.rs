//! Artifact kinds and the layer packages scaffolding is written into.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An artifact generated for a domain class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// The transfer class with its conversion routines.
    Transfer,
    /// JPA repository interface.
    Repository,
    /// Domain/persistence entity mapper.
    Mapper,
    /// Persistence adapter.
    Adapter,
    /// Application service.
    Service,
    /// REST controller.
    Controller,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 6] = [
        Self::Transfer,
        Self::Repository,
        Self::Mapper,
        Self::Adapter,
        Self::Service,
        Self::Controller,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transfer => "transfer",
            Self::Repository => "repository",
            Self::Mapper => "mapper",
            Self::Adapter => "adapter",
            Self::Service => "service",
            Self::Controller => "controller",
        }
    }

    /// Layer packages the rendered artifact refers to.
    pub fn required_layers(&self) -> &'static [Layer] {
        match self {
            Self::Transfer => &[],
            Self::Repository => &[Layer::Repository, Layer::Persistence],
            Self::Mapper => &[Layer::Mapper, Layer::Persistence],
            Self::Adapter => &[
                Layer::Adapter,
                Layer::Repository,
                Layer::Mapper,
                Layer::Persistence,
            ],
            Self::Service => &[Layer::Service, Layer::Adapter, Layer::SecurityAdapter],
            Self::Controller => &[Layer::Controller, Layer::Service],
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key of the `[layers]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Persistence,
    Repository,
    Mapper,
    Adapter,
    Service,
    Controller,
    SecurityAdapter,
}

impl Layer {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Persistence => "persistence",
            Self::Repository => "repository",
            Self::Mapper => "mapper",
            Self::Adapter => "adapter",
            Self::Service => "service",
            Self::Controller => "controller",
            Self::SecurityAdapter => "security_adapter",
        }
    }
}

/// Packages of the surrounding layers.
///
/// Every entry is a package except `security_adapter`, which is the
/// qualified name of the class supplying the logged-in user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layers {
    pub persistence: Option<String>,
    pub repository: Option<String>,
    pub mapper: Option<String>,
    pub adapter: Option<String>,
    pub service: Option<String>,
    pub controller: Option<String>,
    pub security_adapter: Option<String>,
}

impl Layers {
    pub fn get(&self, layer: Layer) -> Option<&str> {
        let value = match layer {
            Layer::Persistence => &self.persistence,
            Layer::Repository => &self.repository,
            Layer::Mapper => &self.mapper,
            Layer::Adapter => &self.adapter,
            Layer::Service => &self.service,
            Layer::Controller => &self.controller,
            Layer::SecurityAdapter => &self.security_adapter,
        };
        value.as_deref()
    }

    /// Configured entries as `(layer, value)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (Layer, &str)> {
        [
            Layer::Persistence,
            Layer::Repository,
            Layer::Mapper,
            Layer::Adapter,
            Layer::Service,
            Layer::Controller,
            Layer::SecurityAdapter,
        ]
        .into_iter()
        .filter_map(|layer| self.get(layer).map(|value| (layer, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_layers() {
        assert!(ArtifactKind::Transfer.required_layers().is_empty());
        assert!(
            ArtifactKind::Service
                .required_layers()
                .contains(&Layer::SecurityAdapter)
        );
        assert!(
            ArtifactKind::Controller
                .required_layers()
                .contains(&Layer::Service)
        );
    }

    #[test]
    fn test_layers_entries() {
        let layers = Layers {
            mapper: Some("com.acme.mapper".into()),
            security_adapter: Some("com.acme.Security".into()),
            ..Default::default()
        };
        let keys: Vec<_> = layers.entries().map(|(l, _)| l.key()).collect();
        assert_eq!(keys, vec!["mapper", "security_adapter"]);
        assert_eq!(layers.get(Layer::Persistence), None);
    }
}
