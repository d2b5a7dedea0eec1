//! The renderer seam.
//!
//! - [`LanguageCodegen`] - implemented once per target language
//! - [`ClassUnit`] - what a renderer gets for one class
//! - [`Artifact`] - a rendered file tagged with its artifact kind

mod traits;

pub use traits::{Artifact, ClassUnit, LanguageCodegen};
