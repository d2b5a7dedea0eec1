//! Core utilities and types for the twin generator.
//!
//! This crate provides the emission sink shared by every renderer and a
//! handful of naming helpers.

mod file;
mod utils;

// File operations
pub use file::{File, GeneratedFile, WriteResult};
// String utilities
pub use utils::{capitalize, package_path, uncapitalize};
