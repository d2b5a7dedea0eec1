//! Transfer class synthesis for the twin generator.
//!
//! This crate turns domain classes from a [`twin_model::ClassModel`] into
//! language-neutral [`twin_model::GeneratedClass`] descriptors and drives
//! a [`language::LanguageCodegen`] implementation to render and emit them.
//!
//! # Module Organization
//!
//! - [`classify`] - Type Classifier
//! - [`transfer`] - Namespace Rewriter, Conversion Expression Builder and
//!   Transfer Class Synthesizer
//! - [`pipeline`] - Per-class phases (resolve, classify, synthesize) with
//!   diagnostics
//! - [`run`] - Orchestrates every configured class and reports per-class
//!   outcomes
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Import collection
//! - [`language`] - The renderer seam

pub mod builder;
pub mod classify;
mod error;
pub mod generation;
pub mod language;
pub mod pipeline;
pub mod run;
pub mod transfer;

pub use error::GenerationError;
