//! Configuration and model file parsing for the twin generator.
//!
//! `twin.toml` names the namespaces, layer packages and domain classes of a
//! generation run; model files declare the domain classes themselves. Both
//! are validated up front and every error carries a labelled source span.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod model;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    ArtifactKind, ClassEntry, GeneratorConfig, Layer, Layers, Manifest, ParseContext, TwinToml,
};
pub use model::{ModelFile, load_models};
